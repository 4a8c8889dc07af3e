//! Totals over a list of pieces sharing one roll.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{INCHES_PER_FOOT, SQ_IN_PER_SQ_FT};
use crate::model::{CutPiece, QuoteLineItem};
use crate::transform::PanelizedUsage;

/// Aggregated roll consumption for a list of pieces.
///
/// Totals are summed from unrounded row values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub lines: Vec<QuoteLineItem>,
    pub roll_width_in: f64,
    pub total_linear_in: f64,
    pub total_linear_ft: f64,
    /// Billed area: roll width over the total run.
    pub material_area_ft2: f64,
    /// Nominal area of all pieces, informational.
    pub piece_area_ft2: f64,
}

/// Panelize every piece and sum the runs.
///
/// Rows with an empty description are labelled `"{label} N"` (1-based).
pub fn aggregate<P: PanelizedUsage + ?Sized>(
    pieces: &[CutPiece],
    roll_width_in: f64,
    policy: &P,
    label: &str,
) -> UsageSummary {
    let mut lines = Vec::with_capacity(pieces.len());
    let mut total_linear_in = 0.0;
    let mut piece_area_ft2 = 0.0;

    for (idx, piece) in pieces.iter().enumerate() {
        let usage = policy.panelize(piece, roll_width_in);
        let qty = piece.qty as f64;
        let linear_in = usage.linear_in * qty;
        let area = usage.piece_area_ft2 * qty;

        total_linear_in += linear_in;
        piece_area_ft2 += area;

        lines.push(QuoteLineItem {
            description: piece.label_or(|| format!("{} {}", label, idx + 1)),
            width_in: piece.width_in,
            height_in: piece.height_in,
            qty: piece.qty,
            panels: usage.panels,
            rotated: usage.rotated,
            linear_in,
            piece_area_ft2: area,
        });
    }

    let material_area_ft2 = (roll_width_in * total_linear_in) / SQ_IN_PER_SQ_FT;
    debug!(
        rows = lines.len(),
        total_linear_in, material_area_ft2, piece_area_ft2, "aggregated roll usage"
    );

    UsageSummary {
        lines,
        roll_width_in,
        total_linear_in,
        total_linear_ft: total_linear_in / INCHES_PER_FOOT,
        material_area_ft2,
        piece_area_ft2,
    }
}
