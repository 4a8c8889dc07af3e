//! Job file and command-line row parsing.

mod job;
mod row;

pub use job::{parse_job_file, parse_jobs, Job};
pub use row::{parse_measure, parse_row};
