//! signshop-quote - Material cost quoting for a print and sign shop.
//!
//! Four material categories share one pricing model: a roll of known width,
//! length and price yields a cost per ft², and pieces cut from it consume
//! roll length according to how many full-width panels they need.
//!
//! # Example
//!
//! ```
//! use signshop_quote::{tint_roll, tint_windows_quote, PieceRow};
//!
//! let roll = tint_roll(60.0, 350.0);
//! let quote = tint_windows_quote(&roll, &[PieceRow::inches("Storefront", 72.0, 48.0, 1)]).unwrap();
//! assert_eq!(quote.usage.total_linear_in, 96.0);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prefs;
pub mod report;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use calculator::{
    canvas_quote, decal_quote, print_quote, tint_base_summary, tint_roll, tint_use_quote,
    tint_windows_quote, CanvasQuote, CanvasRollInput, DecalInput, DecalQuote, PrintInput,
    PrintQuote, PrintType, Quote, RollChoice, TintRollInput, TintUseInput,
};
pub use config::{area_ft2_from_inches, to_feet, to_inches, Unit};
pub use error::{QuoteError, Result};
pub use model::{
    CutPiece, MaterialSource, Orientation, PanelizationResult, PieceRow, QuoteLineItem, Roll,
    RollLength,
};
pub use parser::{parse_job_file, parse_jobs, parse_row, Job};
pub use prefs::{JsonFileStore, MemoryStore, PreferenceStore};
pub use report::{money, render};
pub use transform::{aggregate, panelize, PanelizedUsage, RollMaterial, UsageSummary};
pub use validation::{validate_job, validate_quote, ValidationResult};

/// Compute the quote for one job.
///
/// Advisory conditions (unpriced roll, unknown print type, unknown roll
/// selection) are returned as errors; see [`QuoteError::is_advisory`].
pub fn run_job(job: &Job) -> Result<Quote> {
    let quote = match job {
        Job::TintBase { roll } => Quote::TintBase(tint_base_summary(&roll.to_roll())),
        Job::TintUse { roll, run } => Quote::TintUse(tint_use_quote(&roll.to_roll(), run)?),
        Job::TintWindows { roll, windows } => {
            Quote::TintWindows(tint_windows_quote(&roll.to_roll(), windows)?)
        }
        Job::Printing(input) => Quote::Printing(print_quote(input)?),
        Job::Canvas {
            roll,
            orientation,
            banners,
        } => Quote::Canvas(canvas_quote(&roll.to_roll(), *orientation, banners)?),
        Job::Decals(input) => Quote::Decals(decal_quote(input)?),
    };

    let validation = validate_quote(&quote);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    Ok(quote)
}
