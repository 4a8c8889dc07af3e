//! Cost per square foot of roll-fed material.

use tracing::debug;

use crate::config::INCHES_PER_FOOT;
use crate::error::{QuoteError, Result};
use crate::model::Roll;

/// Anything sold as a roll of known geometry and price.
///
/// Tint, canvas, vinyl and transfer tape all price the same way; only the
/// geometry differs.
pub trait RollMaterial {
    /// Usable width in inches.
    fn roll_width_in(&self) -> f64;

    /// Length in feet.
    fn roll_length_ft(&self) -> f64;

    /// Price of the whole roll in USD.
    fn roll_price(&self) -> f64;

    /// Total roll area in ft².
    fn area_ft2(&self) -> f64 {
        (self.roll_width_in() / INCHES_PER_FOOT) * self.roll_length_ft()
    }

    /// Price per ft². Zero when the area is not positive.
    fn cost_per_ft2(&self) -> f64 {
        let area = self.area_ft2();
        if area > 0.0 && area.is_finite() {
            self.roll_price() / area
        } else {
            0.0
        }
    }

    /// Cost per ft², or an advisory error when the roll is not priced yet.
    fn require_priced(&self, material: &str) -> Result<f64> {
        let cpp = self.cost_per_ft2();
        debug!(material, area_ft2 = self.area_ft2(), cpp, "roll cost per ft²");
        if cpp > 0.0 && cpp.is_finite() {
            Ok(cpp)
        } else {
            Err(QuoteError::RollNotPriced {
                material: material.to_string(),
                cost_per_ft2: cpp,
            })
        }
    }
}

impl RollMaterial for Roll {
    fn roll_width_in(&self) -> f64 {
        self.width_in
    }

    fn roll_length_ft(&self) -> f64 {
        self.length_ft()
    }

    fn roll_price(&self) -> f64 {
        self.price
    }
}
