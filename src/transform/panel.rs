//! Panel splitting for pieces wider than the roll.

use crate::model::{CutPiece, Orientation, PanelizationResult};

/// Maps a piece onto a roll of given width.
pub trait PanelizedUsage {
    /// Usage for a single piece (quantity is not applied).
    fn panelize(&self, piece: &CutPiece, roll_width_in: f64) -> PanelizationResult;
}

/// Number of full-width strips needed to cover `across_in`.
pub fn panels_needed(across_in: f64, roll_width_in: f64) -> u32 {
    let panels = (across_in / roll_width_in).ceil();
    if panels.is_finite() && panels >= 1.0 {
        panels as u32
    } else {
        1
    }
}

/// Height along the roll, panels split the width.
fn height_along(piece: &CutPiece, roll_width_in: f64) -> PanelizationResult {
    let panels = panels_needed(piece.width_in, roll_width_in);
    PanelizationResult {
        panels,
        linear_in: piece.height_in * panels as f64,
        rotated: false,
        piece_area_ft2: piece.area_ft2(),
    }
}

/// Width along the roll, panels split the height.
fn width_along(piece: &CutPiece, roll_width_in: f64) -> PanelizationResult {
    let panels = panels_needed(piece.height_in, roll_width_in);
    PanelizationResult {
        panels,
        linear_in: piece.width_in * panels as f64,
        rotated: true,
        piece_area_ft2: piece.area_ft2(),
    }
}

impl PanelizedUsage for Orientation {
    fn panelize(&self, piece: &CutPiece, roll_width_in: f64) -> PanelizationResult {
        match self {
            Orientation::HeightAlongRoll => height_along(piece, roll_width_in),
            Orientation::WidthAlongRoll => width_along(piece, roll_width_in),
            Orientation::Auto => {
                let upright = height_along(piece, roll_width_in);
                let rotated = width_along(piece, roll_width_in);
                // Equal runs keep the piece upright.
                if rotated.linear_in < upright.linear_in {
                    rotated
                } else {
                    upright
                }
            }
        }
    }
}

/// Convenience wrapper over [`PanelizedUsage::panelize`].
pub fn panelize(piece: &CutPiece, roll_width_in: f64, orientation: Orientation) -> PanelizationResult {
    orientation.panelize(piece, roll_width_in)
}
