//! Material usage records: orientation policy, panelization and line items.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::SQ_IN_PER_SQ_FT;
use crate::error::QuoteError;

/// Which piece dimension runs along the roll's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Try both, keep the shorter run. Ties keep height along the roll.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// Height runs along the roll; panels split the width.
    #[serde(rename = "hAlongRoll")]
    HeightAlongRoll,
    /// Width runs along the roll; panels split the height.
    #[serde(rename = "wAlongRoll")]
    WidthAlongRoll,
}

impl FromStr for Orientation {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Orientation::Auto),
            "halongroll" | "h-along-roll" | "height" => Ok(Orientation::HeightAlongRoll),
            "walongroll" | "w-along-roll" | "width" => Ok(Orientation::WidthAlongRoll),
            other => Err(QuoteError::InvalidValue {
                field: "orientation".to_string(),
                expected: "auto, hAlongRoll or wAlongRoll".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Auto => write!(f, "auto"),
            Orientation::HeightAlongRoll => write!(f, "hAlongRoll"),
            Orientation::WidthAlongRoll => write!(f, "wAlongRoll"),
        }
    }
}

/// How one piece maps onto a roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelizationResult {
    /// Full-width strips needed side by side.
    pub panels: u32,
    /// Roll length unrolled for one piece, in inches.
    pub linear_in: f64,
    /// Width runs along the roll instead of height.
    pub rotated: bool,
    /// Nominal area of one piece in ft².
    pub piece_area_ft2: f64,
}

impl PanelizationResult {
    /// Area billed for one piece: the full roll width over the consumed run.
    pub fn billed_area_ft2(&self, roll_width_in: f64) -> f64 {
        (roll_width_in * self.linear_in) / SQ_IN_PER_SQ_FT
    }
}

/// One row of an itemized quote, with quantity already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub description: String,
    pub width_in: f64,
    pub height_in: f64,
    pub qty: u32,
    /// Panels per piece.
    pub panels: u32,
    pub rotated: bool,
    /// Roll length consumed by the whole row, in inches.
    pub linear_in: f64,
    /// Nominal area of the whole row, in ft².
    pub piece_area_ft2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_parse() {
        assert_eq!("auto".parse::<Orientation>().unwrap(), Orientation::Auto);
        assert_eq!(
            "hAlongRoll".parse::<Orientation>().unwrap(),
            Orientation::HeightAlongRoll
        );
        assert_eq!(
            "w-along-roll".parse::<Orientation>().unwrap(),
            Orientation::WidthAlongRoll
        );
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_orientation_serde_names() {
        let json = serde_json::to_string(&Orientation::WidthAlongRoll).unwrap();
        assert_eq!(json, "\"wAlongRoll\"");
        let back: Orientation = serde_json::from_str("\"hAlongRoll\"").unwrap();
        assert_eq!(back, Orientation::HeightAlongRoll);
    }

    #[test]
    fn test_billed_area() {
        let usage = PanelizationResult {
            panels: 2,
            linear_in: 96.0,
            rotated: false,
            piece_area_ft2: 24.0,
        };
        assert_eq!(usage.billed_area_ft2(60.0), 40.0);
    }
}
