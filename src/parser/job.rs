//! JSON job files: one quote, or a list of them, per file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::calculator::{CanvasRollInput, DecalInput, PrintInput, TintRollInput, TintUseInput};
use crate::error::{QuoteError, Result};
use crate::model::{Orientation, PieceRow};

/// A complete quote request for one material category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Job {
    TintBase {
        #[serde(default)]
        roll: TintRollInput,
    },
    TintUse {
        #[serde(default)]
        roll: TintRollInput,
        #[serde(default)]
        run: TintUseInput,
    },
    TintWindows {
        #[serde(default)]
        roll: TintRollInput,
        #[serde(default)]
        windows: Vec<PieceRow>,
    },
    Printing(PrintInput),
    Canvas {
        #[serde(default)]
        roll: CanvasRollInput,
        #[serde(default)]
        orientation: Orientation,
        #[serde(default)]
        banners: Vec<PieceRow>,
    },
    Decals(DecalInput),
}

/// Parse job text: a single job object or an array of jobs.
pub fn parse_jobs(text: &str) -> Result<Vec<Job>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let jobs = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<Job>>(value)?,
        serde_json::Value::Object(_) => vec![serde_json::from_value::<Job>(value)?],
        other => {
            return Err(QuoteError::ParseError {
                message: format!("expected a job object or array, got {}", other),
            })
        }
    };
    debug!(count = jobs.len(), "parsed jobs");
    Ok(jobs)
}

/// Read and parse a job file.
pub fn parse_job_file(path: &Path) -> Result<Vec<Job>> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    parse_jobs(&text)
}
