//! Canvas banners cut from a roll, with orientation choice.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{sanitize, DEFAULT_CANVAS_ROLL_LENGTH_FT, DEFAULT_CANVAS_ROLL_WIDTH_IN, EPS};
use crate::error::Result;
use crate::model::{CutPiece, Orientation, PieceRow, Roll, RollLength};
use crate::transform::{aggregate, RollMaterial, UsageSummary};

/// Material label used in advisories.
pub const CANVAS: &str = "canvas";

/// Canvas roll as entered. There is no default price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasRollInput {
    #[serde(default)]
    pub width_in: Option<f64>,
    #[serde(default)]
    pub length_ft: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl CanvasRollInput {
    pub fn to_roll(&self) -> Roll {
        Roll::new(
            sanitize::length(self.width_in, DEFAULT_CANVAS_ROLL_WIDTH_IN),
            RollLength::Feet(sanitize::length(self.length_ft, DEFAULT_CANVAS_ROLL_LENGTH_FT)),
            sanitize::price(self.price, 0.0),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasQuote {
    pub roll: Roll,
    pub orientation: Orientation,
    pub cost_per_ft2: f64,
    pub usage: UsageSummary,
    pub cost: f64,
    /// The job needs more length than one roll holds.
    pub exceeds_roll: bool,
}

/// Cost of a list of banners. Billed by full roll width over the consumed run.
pub fn canvas_quote(roll: &Roll, orientation: Orientation, rows: &[PieceRow]) -> Result<CanvasQuote> {
    let cost_per_ft2 = roll.require_priced(CANVAS)?;

    let pieces: Vec<CutPiece> = rows.iter().map(|r| r.to_piece(0.0, 0.0)).collect();
    let usage = aggregate(&pieces, roll.width_in, &orientation, "Banner");
    let cost = usage.material_area_ft2 * cost_per_ft2;

    let exceeds_roll = usage.total_linear_ft > roll.length_ft() + EPS;
    if exceeds_roll {
        warn!(
            needed_ft = usage.total_linear_ft,
            roll_ft = roll.length_ft(),
            "canvas job is longer than the roll"
        );
    }
    info!(
        banners = usage.lines.len(),
        %orientation,
        material_area_ft2 = usage.material_area_ft2,
        cost,
        "canvas quote"
    );

    Ok(CanvasQuote {
        roll: *roll,
        orientation,
        cost_per_ft2,
        usage,
        cost,
        exceeds_roll,
    })
}
