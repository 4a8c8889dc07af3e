//! Commercial window tint: per-use and per-window-list material cost.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{
    sanitize, Unit, BASE_TINT_LENGTH_FT, DEFAULT_TINT_ROLL_PRICE, DEFAULT_TINT_ROLL_WIDTH_IN,
    DEFAULT_TINT_USE_LENGTH, DEFAULT_TINT_USE_WIDTH_IN, DEFAULT_WINDOW_HEIGHT_IN,
    DEFAULT_WINDOW_WIDTH_IN, INCHES_PER_FOOT,
};
use crate::error::Result;
use crate::model::{CutPiece, Orientation, PieceRow, Roll, RollLength};
use crate::transform::{aggregate, RollMaterial, UsageSummary};

/// Material label used in advisories.
pub const TINT: &str = "tint";

/// Tint roll as entered. Length is fixed at 100 ft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TintRollInput {
    #[serde(default)]
    pub width_in: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl TintRollInput {
    pub fn to_roll(&self) -> Roll {
        tint_roll(
            sanitize::length(self.width_in, DEFAULT_TINT_ROLL_WIDTH_IN),
            sanitize::price(self.price, DEFAULT_TINT_ROLL_PRICE),
        )
    }
}

/// A tint roll of the standard 100 ft length.
pub fn tint_roll(width_in: f64, price: f64) -> Roll {
    Roll::new(width_in, RollLength::Feet(BASE_TINT_LENGTH_FT), price)
}

/// Base roll figures shown before any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TintBaseSummary {
    pub roll: Roll,
    pub area_ft2: f64,
    pub cost_per_ft2: f64,
}

pub fn tint_base_summary(roll: &Roll) -> TintBaseSummary {
    TintBaseSummary {
        roll: *roll,
        area_ft2: roll.area_ft2(),
        cost_per_ft2: roll.cost_per_ft2(),
    }
}

/// A straight run of tint: width across, some length along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TintUseInput {
    #[serde(default)]
    pub width_in: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub qty: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TintUseQuote {
    pub roll: Roll,
    pub width_in: f64,
    pub length: f64,
    pub unit: Unit,
    pub length_ft: f64,
    pub qty: u32,
    pub area_ft2: f64,
    pub cost_per_ft2: f64,
    pub cost: f64,
}

/// Cost of a direct-use run. No panelization: area = (w/12) × length × qty.
pub fn tint_use_quote(roll: &Roll, input: &TintUseInput) -> Result<TintUseQuote> {
    let cost_per_ft2 = roll.require_priced(TINT)?;

    let width_in = sanitize::length(input.width_in, DEFAULT_TINT_USE_WIDTH_IN);
    let length = sanitize::length(input.length, DEFAULT_TINT_USE_LENGTH);
    let length_ft = input.unit.to_feet(length);
    let qty = sanitize::qty(input.qty);

    let area_ft2 = (width_in / INCHES_PER_FOOT) * length_ft * qty as f64;
    let cost = area_ft2 * cost_per_ft2;
    info!(area_ft2, cost, "tint use quote");

    Ok(TintUseQuote {
        roll: *roll,
        width_in,
        length,
        unit: input.unit,
        length_ft,
        qty,
        area_ft2,
        cost_per_ft2,
        cost,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TintWindowsQuote {
    pub roll: Roll,
    pub cost_per_ft2: f64,
    pub usage: UsageSummary,
    pub cost: f64,
}

/// The row used when the window list is empty.
pub fn default_window() -> PieceRow {
    PieceRow::inches("Window", DEFAULT_WINDOW_WIDTH_IN, DEFAULT_WINDOW_HEIGHT_IN, 1)
}

/// Cost of tinting a list of windows. Height always runs along the roll.
pub fn tint_windows_quote(roll: &Roll, rows: &[PieceRow]) -> Result<TintWindowsQuote> {
    let cost_per_ft2 = roll.require_priced(TINT)?;

    let pieces: Vec<CutPiece> = if rows.is_empty() {
        vec![default_window().to_piece(0.0, 0.0)]
    } else {
        rows.iter().map(|r| r.to_piece(0.0, 0.0)).collect()
    };

    let usage = aggregate(&pieces, roll.width_in, &Orientation::HeightAlongRoll, "Window");
    let cost = usage.material_area_ft2 * cost_per_ft2;
    info!(
        windows = usage.lines.len(),
        material_area_ft2 = usage.material_area_ft2,
        cost,
        "tint windows quote"
    );

    Ok(TintWindowsQuote {
        roll: *roll,
        cost_per_ft2,
        usage,
        cost,
    })
}
