//! Configuration constants, category defaults and input coercion helpers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QuoteError;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Smallest accepted width or length. Keeps every division finite.
pub const MIN_DIMENSION: f64 = 0.01;

/// Smallest accepted quantity.
pub const MIN_QTY: u32 = 1;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches per square foot.
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Feet per yard.
pub const FEET_PER_YARD: f64 = 3.0;

/// Tint rolls are always quoted against a 100 ft roll.
pub const BASE_TINT_LENGTH_FT: f64 = 100.0;

/// Default tint roll width in inches.
pub const DEFAULT_TINT_ROLL_WIDTH_IN: f64 = 60.0;

/// Default tint roll price in USD.
pub const DEFAULT_TINT_ROLL_PRICE: f64 = 350.0;

/// Default per-use tint width in inches.
pub const DEFAULT_TINT_USE_WIDTH_IN: f64 = 60.0;

/// Default per-use tint length (in the chosen unit).
pub const DEFAULT_TINT_USE_LENGTH: f64 = 48.0;

/// Default window row width in inches.
pub const DEFAULT_WINDOW_WIDTH_IN: f64 = 60.0;

/// Default window row height in inches.
pub const DEFAULT_WINDOW_HEIGHT_IN: f64 = 48.0;

/// Default canvas roll width in inches.
pub const DEFAULT_CANVAS_ROLL_WIDTH_IN: f64 = 54.0;

/// Default canvas roll length in feet.
pub const DEFAULT_CANVAS_ROLL_LENGTH_FT: f64 = 100.0;

/// Default preferences file, relative to the working directory.
pub const DEFAULT_PREFS_FILE: &str = ".quote-prefs.json";

/// Unit of linear measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    #[serde(alias = "in", alias = "inch")]
    Inches,
    #[serde(alias = "ft", alias = "foot")]
    Feet,
}

impl Unit {
    /// Convert a length in this unit to feet.
    pub fn to_feet(&self, length: f64) -> f64 {
        match self {
            Unit::Inches => length / INCHES_PER_FOOT,
            Unit::Feet => length,
        }
    }

    /// Convert a length in this unit to inches.
    pub fn to_inches(&self, length: f64) -> f64 {
        match self {
            Unit::Inches => length,
            Unit::Feet => length * INCHES_PER_FOOT,
        }
    }

    /// Short suffix used in reports.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Feet => "ft",
        }
    }
}

impl FromStr for Unit {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Ok(Unit::Inches),
            "ft" | "foot" | "feet" | "'" => Ok(Unit::Feet),
            other => Err(QuoteError::InvalidValue {
                field: "unit".to_string(),
                expected: "in or ft".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Convert `length` expressed in `unit` to feet.
#[inline]
pub fn to_feet(length: f64, unit: Unit) -> f64 {
    unit.to_feet(length)
}

/// Convert `length` expressed in `unit` to inches.
#[inline]
pub fn to_inches(length: f64, unit: Unit) -> f64 {
    unit.to_inches(length)
}

/// Area in ft² of a rectangle measured in inches.
#[inline]
pub fn area_ft2_from_inches(width_in: f64, height_in: f64) -> f64 {
    (width_in * height_in) / SQ_IN_PER_SQ_FT
}

/// Input coercion. Malformed numbers are tolerated, never rejected.
pub mod sanitize {
    use super::{MIN_DIMENSION, MIN_QTY};

    /// Use `value` when present and finite, otherwise `fallback`.
    #[inline]
    pub fn safe_num(value: Option<f64>, fallback: f64) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            _ => fallback,
        }
    }

    /// Raise `value` to at least `min`.
    #[inline]
    pub fn clamp_min(value: f64, min: f64) -> f64 {
        value.max(min)
    }

    /// Coerce a width or length: default when missing, then clamp to 0.01.
    #[inline]
    pub fn length(value: Option<f64>, fallback: f64) -> f64 {
        clamp_min(safe_num(value, fallback), MIN_DIMENSION)
    }

    /// Coerce a price: default when missing, never negative.
    #[inline]
    pub fn price(value: Option<f64>, fallback: f64) -> f64 {
        clamp_min(safe_num(value, fallback), 0.0)
    }

    /// Coerce a quantity: floor, then clamp to 1.
    #[inline]
    pub fn qty(value: Option<f64>) -> u32 {
        let v = safe_num(value, MIN_QTY as f64).floor();
        if v < MIN_QTY as f64 {
            MIN_QTY
        } else if v > u32::MAX as f64 {
            u32::MAX
        } else {
            v as u32
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(to_feet(24.0, Unit::Inches), 2.0);
        assert_eq!(to_feet(3.5, Unit::Feet), 3.5);
        assert_eq!(to_inches(2.0, Unit::Feet), 24.0);
        assert_eq!(to_inches(7.0, Unit::Inches), 7.0);
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Inches);
        assert_eq!(" Feet ".parse::<Unit>().unwrap(), Unit::Feet);
        assert_eq!("'".parse::<Unit>().unwrap(), Unit::Feet);
        assert!("cm".parse::<Unit>().is_err());
    }

    #[test]
    fn test_area_from_inches() {
        assert!(float_cmp::approx_eq(area_ft2_from_inches(60.0, 48.0), 20.0));
    }

    #[test]
    fn test_safe_num_fallbacks() {
        assert_eq!(sanitize::safe_num(None, 60.0), 60.0);
        assert_eq!(sanitize::safe_num(Some(f64::NAN), 60.0), 60.0);
        assert_eq!(sanitize::safe_num(Some(f64::INFINITY), 1.0), 1.0);
        assert_eq!(sanitize::safe_num(Some(-3.0), 1.0), -3.0);
    }

    #[test]
    fn test_length_clamped() {
        assert_eq!(sanitize::length(Some(0.0), 60.0), MIN_DIMENSION);
        assert_eq!(sanitize::length(Some(-5.0), 60.0), MIN_DIMENSION);
        assert_eq!(sanitize::length(None, 60.0), 60.0);
    }

    #[test]
    fn test_qty_clamped() {
        assert_eq!(sanitize::qty(None), 1);
        assert_eq!(sanitize::qty(Some(0.0)), 1);
        assert_eq!(sanitize::qty(Some(-4.0)), 1);
        assert_eq!(sanitize::qty(Some(3.9)), 3);
        assert_eq!(sanitize::qty(Some(f64::NAN)), 1);
    }

    #[test]
    fn test_price_never_negative() {
        assert_eq!(sanitize::price(Some(-10.0), 350.0), 0.0);
        assert_eq!(sanitize::price(None, 350.0), 350.0);
    }
}
