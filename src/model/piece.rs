//! Cut piece definition: one requested rectangle and how many of it.

use serde::{Deserialize, Serialize};

use crate::config::{area_ft2_from_inches, sanitize, Unit, MIN_DIMENSION};

/// A rectangular piece to be cut from roll material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPiece {
    /// Free-form label (e.g. "Door").
    #[serde(default)]
    pub description: String,
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Number of identical pieces.
    #[serde(default = "default_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

impl CutPiece {
    /// Create a piece measured in inches. Dimensions clamp to 0.01, qty to 1.
    pub fn new(description: impl Into<String>, width_in: f64, height_in: f64, qty: u32) -> Self {
        Self {
            description: description.into(),
            width_in: sanitize::length(Some(width_in), MIN_DIMENSION),
            height_in: sanitize::length(Some(height_in), MIN_DIMENSION),
            qty: qty.max(1),
        }
    }

    /// Create a piece from dimensions given in arbitrary units.
    pub fn from_measure(
        description: impl Into<String>,
        width: f64,
        width_unit: Unit,
        height: f64,
        height_unit: Unit,
        qty: u32,
    ) -> Self {
        let width = sanitize::length(Some(width), MIN_DIMENSION);
        let height = sanitize::length(Some(height), MIN_DIMENSION);
        Self::new(
            description,
            width_unit.to_inches(width),
            height_unit.to_inches(height),
            qty,
        )
    }

    /// Nominal area of one piece in ft².
    pub fn area_ft2(&self) -> f64 {
        area_ft2_from_inches(self.width_in, self.height_in)
    }

    /// Nominal area of all pieces in ft².
    pub fn total_area_ft2(&self) -> f64 {
        self.area_ft2() * self.qty as f64
    }

    /// Label, or `fallback` when empty.
    pub fn label_or(&self, fallback: impl FnOnce() -> String) -> String {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            fallback()
        } else {
            trimmed.to_string()
        }
    }
}

/// A piece as entered: any field may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieceRow {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub width_unit: Unit,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub height_unit: Unit,
    #[serde(default)]
    pub qty: Option<f64>,
}

impl PieceRow {
    /// Row measured in inches on both sides.
    pub fn inches(description: impl Into<String>, width: f64, height: f64, qty: u32) -> Self {
        Self {
            description: description.into(),
            width: Some(width),
            height: Some(height),
            qty: Some(qty as f64),
            ..Default::default()
        }
    }

    /// Coerce into a piece, substituting defaults (in row units) for missing values.
    pub fn to_piece(&self, default_width: f64, default_height: f64) -> CutPiece {
        CutPiece::from_measure(
            self.description.clone(),
            sanitize::length(self.width, default_width),
            self.width_unit,
            sanitize::length(self.height, default_height),
            self.height_unit,
            sanitize::qty(self.qty),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let piece = CutPiece::new("", -1.0, 0.0, 0);
        assert_eq!(piece.width_in, MIN_DIMENSION);
        assert_eq!(piece.height_in, MIN_DIMENSION);
        assert_eq!(piece.qty, 1);
    }

    #[test]
    fn test_from_measure_feet() {
        let piece = CutPiece::from_measure("Banner", 6.0, Unit::Feet, 36.0, Unit::Inches, 2);
        assert_eq!(piece.width_in, 72.0);
        assert_eq!(piece.height_in, 36.0);
        assert_eq!(piece.total_area_ft2(), 36.0);
    }

    #[test]
    fn test_row_defaults() {
        let row = PieceRow {
            height: Some(f64::NAN),
            qty: Some(2.7),
            ..Default::default()
        };
        let piece = row.to_piece(60.0, 48.0);
        assert_eq!(piece.width_in, 60.0);
        assert_eq!(piece.height_in, 48.0);
        assert_eq!(piece.qty, 2);
    }

    #[test]
    fn test_label_fallback() {
        let piece = CutPiece::new("  ", 1.0, 1.0, 1);
        assert_eq!(piece.label_or(|| "Window 3".to_string()), "Window 3");
        let piece = CutPiece::new(" Door ", 1.0, 1.0, 1);
        assert_eq!(piece.label_or(|| "x".to_string()), "Door");
    }
}
