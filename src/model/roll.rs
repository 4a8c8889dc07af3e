//! Roll geometry and pricing records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{sanitize, FEET_PER_YARD, MIN_DIMENSION};
use crate::error::{QuoteError, Result};

/// Length of a roll as sold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollLength {
    Feet(f64),
    Yards(f64),
}

impl RollLength {
    /// Length in feet (yards × 3).
    pub fn feet(&self) -> f64 {
        match *self {
            RollLength::Feet(ft) => ft,
            RollLength::Yards(yd) => yd * FEET_PER_YARD,
        }
    }

    fn clamped(self) -> Self {
        match self {
            RollLength::Feet(ft) => RollLength::Feet(sanitize::length(Some(ft), MIN_DIMENSION)),
            RollLength::Yards(yd) => RollLength::Yards(sanitize::length(Some(yd), MIN_DIMENSION)),
        }
    }
}

impl std::fmt::Display for RollLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollLength::Feet(ft) => write!(f, "{}ft", ft),
            RollLength::Yards(yd) => write!(f, "{}yd", yd),
        }
    }
}

/// A roll of material: width across, length along, and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    /// Usable width in inches.
    pub width_in: f64,
    /// Length as sold.
    pub length: RollLength,
    /// Roll price in USD.
    pub price: f64,
}

impl Roll {
    /// Create a roll. Width and length are clamped to 0.01, price to 0.
    pub fn new(width_in: f64, length: RollLength, price: f64) -> Self {
        Self {
            width_in: sanitize::length(Some(width_in), MIN_DIMENSION),
            length: length.clamped(),
            price: sanitize::price(Some(price), 0.0),
        }
    }

    /// Roll length in feet.
    pub fn length_ft(&self) -> f64 {
        self.length.feet()
    }
}

/// One entry of a fixed roll catalog (e.g. vinyl sold as 24"×50yd).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollSize {
    /// Selection key, also used in preference keys.
    pub id: &'static str,
    /// Width in inches.
    pub width_in: f64,
    /// Length as sold.
    pub length: RollLength,
}

impl RollSize {
    /// Build a priced roll from this size.
    pub fn with_price(&self, price: f64) -> Roll {
        Roll::new(self.width_in, self.length, price)
    }
}

/// Face vinyl rolls stocked by the shop.
pub const VINYL_ROLLS: &[RollSize] = &[
    RollSize { id: "24x10yd", width_in: 24.0, length: RollLength::Yards(10.0) },
    RollSize { id: "24x50yd", width_in: 24.0, length: RollLength::Yards(50.0) },
    RollSize { id: "30x50yd", width_in: 30.0, length: RollLength::Yards(50.0) },
    RollSize { id: "48x50yd", width_in: 48.0, length: RollLength::Yards(50.0) },
    RollSize { id: "54x50yd", width_in: 54.0, length: RollLength::Yards(50.0) },
];

/// Transfer tape rolls stocked by the shop.
pub const TAPE_ROLLS: &[RollSize] = &[
    RollSize { id: "24x100yd", width_in: 24.0, length: RollLength::Yards(100.0) },
    RollSize { id: "48x100yd", width_in: 48.0, length: RollLength::Yards(100.0) },
    RollSize { id: "54x100yd", width_in: 54.0, length: RollLength::Yards(100.0) },
];

/// Look up a roll size by id in a catalog.
pub fn find_roll<'a>(catalog: &'a [RollSize], material: &str, id: &str) -> Result<&'a RollSize> {
    let key = id.trim();
    catalog
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(key))
        .ok_or_else(|| QuoteError::UnknownRoll {
            material: material.to_string(),
            id: key.to_string(),
        })
}

/// Where a roll comes from. Buying a roll brings a shipping charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSource {
    /// Already on hand.
    #[default]
    Home,
    /// To be purchased.
    Buy,
}

impl MaterialSource {
    /// Key fragment used for preference lookups.
    pub fn key(&self) -> &'static str {
        match self {
            MaterialSource::Home => "home",
            MaterialSource::Buy => "buy",
        }
    }
}

impl FromStr for MaterialSource {
    type Err = QuoteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "on-hand" | "stock" => Ok(MaterialSource::Home),
            "buy" | "purchase" => Ok(MaterialSource::Buy),
            other => Err(QuoteError::InvalidValue {
                field: "source".to_string(),
                expected: "home or buy".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MaterialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
