//! Per-category quote calculators.

mod canvas;
mod decals;
mod printing;
mod tint;

pub use canvas::*;
pub use decals::*;
pub use printing::*;
pub use tint::*;

use serde::Serialize;

/// Any computed quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Quote {
    TintBase(TintBaseSummary),
    TintUse(TintUseQuote),
    TintWindows(TintWindowsQuote),
    Printing(PrintQuote),
    Canvas(CanvasQuote),
    Decals(DecalQuote),
}

impl Quote {
    /// Amount charged for material (and shipping, for decals).
    pub fn total(&self) -> f64 {
        match self {
            Quote::TintBase(_) => 0.0,
            Quote::TintUse(q) => q.cost,
            Quote::TintWindows(q) => q.cost,
            Quote::Printing(q) => q.cost,
            Quote::Canvas(q) => q.cost,
            Quote::Decals(q) => q.total,
        }
    }
}
