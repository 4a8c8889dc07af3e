//! Vinyl decals: face vinyl plus transfer tape, with optional shipping.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{sanitize, MIN_DIMENSION};
use crate::error::Result;
use crate::model::{
    find_roll, MaterialSource, PieceRow, Roll, RollSize, TAPE_ROLLS, VINYL_ROLLS,
};
use crate::transform::RollMaterial;

pub const VINYL: &str = "vinyl";
pub const TAPE: &str = "tape";

/// One roll selection: catalog id, price, and where it comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollChoice {
    pub roll_id: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub source: MaterialSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecalInput {
    pub piece: PieceRow,
    pub vinyl: RollChoice,
    pub tape: RollChoice,
    #[serde(default)]
    pub shipping_fee: Option<f64>,
}

/// Cost share of one of the two materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub roll_id: String,
    pub roll: Roll,
    pub source: MaterialSource,
    pub cost_per_ft2: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecalQuote {
    pub width_in: f64,
    pub height_in: f64,
    pub qty: u32,
    pub area_ft2: f64,
    pub vinyl: MaterialLine,
    pub tape: MaterialLine,
    pub material_cost: f64,
    pub shipping_fee: f64,
    pub shipping_applied: bool,
    pub total: f64,
}

fn material_line(
    material: &str,
    catalog: &[RollSize],
    choice: &RollChoice,
    area_ft2: f64,
) -> Result<MaterialLine> {
    let size = find_roll(catalog, material, &choice.roll_id)?;
    let roll = size.with_price(sanitize::price(choice.price, 0.0));
    let cost_per_ft2 = roll.require_priced(material)?;
    Ok(MaterialLine {
        roll_id: size.id.to_string(),
        roll,
        source: choice.source,
        cost_per_ft2,
        cost: area_ft2 * cost_per_ft2,
    })
}

/// Material cost = area × (vinyl cpp + tape cpp). Shipping is a single flat
/// fee, added once when either roll has to be bought.
pub fn decal_quote(input: &DecalInput) -> Result<DecalQuote> {
    let piece = input.piece.to_piece(MIN_DIMENSION, MIN_DIMENSION);
    let area_ft2 = piece.total_area_ft2();

    let vinyl = material_line(VINYL, VINYL_ROLLS, &input.vinyl, area_ft2)?;
    let tape = material_line(TAPE, TAPE_ROLLS, &input.tape, area_ft2)?;
    let material_cost = area_ft2 * (vinyl.cost_per_ft2 + tape.cost_per_ft2);

    let shipping_fee = sanitize::price(input.shipping_fee, 0.0);
    let shipping_applied = shipping_fee > 0.0
        && (vinyl.source == MaterialSource::Buy || tape.source == MaterialSource::Buy);
    let total = if shipping_applied {
        material_cost + shipping_fee
    } else {
        material_cost
    };
    info!(area_ft2, material_cost, shipping_applied, total, "decal quote");

    Ok(DecalQuote {
        width_in: piece.width_in,
        height_in: piece.height_in,
        qty: piece.qty,
        area_ft2,
        vinyl,
        tape,
        material_cost,
        shipping_fee,
        shipping_applied,
        total,
    })
}
