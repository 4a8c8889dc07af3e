//! Printed media at a flat rate per ft².

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use crate::config::{sanitize, Unit, MIN_DIMENSION};
use crate::error::{QuoteError, Result};

/// Printing stock, each with a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintType {
    VinylBasic,
    VinylBasicLam,
    Microperf,
    Lona,
    Wrap,
}

impl PrintType {
    /// Every stock, in display order.
    pub const ALL: [PrintType; 5] = [
        PrintType::VinylBasic,
        PrintType::VinylBasicLam,
        PrintType::Microperf,
        PrintType::Lona,
        PrintType::Wrap,
    ];

    /// Rate in USD per ft².
    pub fn rate(&self) -> f64 {
        match self {
            PrintType::VinylBasic => 2.50,
            PrintType::VinylBasicLam => 3.50,
            PrintType::Microperf => 3.80,
            PrintType::Lona => 3.80,
            PrintType::Wrap => 7.00,
        }
    }

    /// Selection key.
    pub fn key(&self) -> &'static str {
        match self {
            PrintType::VinylBasic => "vinyl_basic",
            PrintType::VinylBasicLam => "vinyl_basic_lam",
            PrintType::Microperf => "microperf",
            PrintType::Lona => "lona",
            PrintType::Wrap => "wrap",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrintType::VinylBasic => "Basic vinyl",
            PrintType::VinylBasicLam => "Basic vinyl + laminate",
            PrintType::Microperf => "Microperforated vinyl",
            PrintType::Lona => "Banner (lona)",
            PrintType::Wrap => "Vehicle wrap",
        }
    }

    /// Resolve a selection key. Unknown or empty keys are an advisory error.
    pub fn lookup(key: &str) -> Result<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| QuoteError::UnknownPrintType {
                key: key.to_string(),
            })
    }
}

impl FromStr for PrintType {
    type Err = QuoteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Print job as entered. The type is kept as a raw key until calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintInput {
    #[serde(default)]
    pub print_type: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub qty: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintQuote {
    pub print_type: PrintType,
    pub rate: f64,
    pub width: f64,
    pub length: f64,
    pub unit: Unit,
    pub width_ft: f64,
    pub length_ft: f64,
    pub qty: u32,
    pub area_one_ft2: f64,
    pub area_total_ft2: f64,
    pub cost: f64,
}

/// cost = width(ft) × length(ft) × qty × rate.
pub fn print_quote(input: &PrintInput) -> Result<PrintQuote> {
    let print_type = PrintType::lookup(&input.print_type)?;
    let rate = print_type.rate();

    let width = sanitize::length(input.width, MIN_DIMENSION);
    let length = sanitize::length(input.length, MIN_DIMENSION);
    let qty = sanitize::qty(input.qty);

    let width_ft = input.unit.to_feet(width);
    let length_ft = input.unit.to_feet(length);
    let area_one_ft2 = width_ft * length_ft;
    let area_total_ft2 = area_one_ft2 * qty as f64;
    let cost = area_total_ft2 * rate;
    info!(print_type = print_type.key(), area_total_ft2, cost, "print quote");

    Ok(PrintQuote {
        print_type,
        rate,
        width,
        length,
        unit: input.unit,
        width_ft,
        length_ft,
        qty,
        area_one_ft2,
        area_total_ft2,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_lookup() {
        assert_eq!(PrintType::lookup("wrap").unwrap(), PrintType::Wrap);
        assert_eq!(PrintType::lookup("vinyl_basic_lam").unwrap().rate(), 3.50);
        assert!(matches!(
            PrintType::lookup(""),
            Err(QuoteError::UnknownPrintType { .. })
        ));
        assert!(PrintType::lookup("canvas").is_err());
    }

    #[test]
    fn test_every_key_round_trips() {
        for t in PrintType::ALL {
            assert_eq!(t.key().parse::<PrintType>().unwrap(), t);
        }
    }

    #[test]
    fn test_print_quote_inches() {
        let input = PrintInput {
            print_type: "vinyl_basic".to_string(),
            width: Some(24.0),
            length: Some(36.0),
            unit: Unit::Inches,
            qty: Some(3.0),
        };
        let quote = print_quote(&input).unwrap();
        assert_eq!(quote.area_one_ft2, 6.0);
        assert_eq!(quote.area_total_ft2, 18.0);
        assert_eq!(quote.cost, 45.0);
    }

    #[test]
    fn test_print_quote_feet() {
        let input = PrintInput {
            print_type: "wrap".to_string(),
            width: Some(10.0),
            length: Some(5.0),
            unit: Unit::Feet,
            qty: None,
        };
        let quote = print_quote(&input).unwrap();
        assert_eq!(quote.qty, 1);
        assert!(approx_eq(quote.cost, 350.0));
    }

    #[test]
    fn test_unselected_type_is_error() {
        let input = PrintInput {
            width: Some(10.0),
            length: Some(10.0),
            ..Default::default()
        };
        let err = print_quote(&input).unwrap_err();
        assert!(err.is_advisory());
    }

    #[test]
    fn test_missing_dimensions_clamp() {
        let input = PrintInput {
            print_type: "lona".to_string(),
            ..Default::default()
        };
        let quote = print_quote(&input).unwrap();
        assert_eq!(quote.width, MIN_DIMENSION);
        assert!(quote.cost > 0.0);
    }
}
