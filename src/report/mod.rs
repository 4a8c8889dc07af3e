//! Human-readable quote output.

mod format;
mod text;

pub use format::{dim, fixed2, money};
pub use text::*;
