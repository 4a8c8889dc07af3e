//! Compact piece syntax for the command line: `[desc:]W[unit]xH[unit][:qty]`.
//!
//! Examples: `60x48`, `Door:36x80:2`, `Banner:6ftx30in`, `72"x48":3`.
//!
//! With two fields the second decides: dimensions make the first a
//! description, anything else is a quantity.

use crate::config::Unit;
use crate::error::{QuoteError, Result};
use crate::model::PieceRow;

fn invalid(value: &str, expected: &str) -> QuoteError {
    QuoteError::InvalidValue {
        field: "piece".to_string(),
        expected: expected.to_string(),
        value: value.to_string(),
    }
}

/// Parse one measurement such as `36`, `36in`, `3ft`, `36"` or `3'`.
pub fn parse_measure(s: &str, default_unit: Unit) -> Result<(f64, Unit)> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(s.len());
    let (number, suffix) = s.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| invalid(s, "a number with optional in/ft suffix"))?;
    let unit = if suffix.trim().is_empty() {
        default_unit
    } else {
        suffix.parse()?
    };
    Ok((value, unit))
}

fn parse_dims(s: &str, default_unit: Unit) -> Result<(f64, Unit, f64, Unit)> {
    let mut parts = s.split(['x', 'X', '×']);
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid(s, "WIDTHxHEIGHT"));
    };
    let (width, width_unit) = parse_measure(w, default_unit)?;
    let (height, height_unit) = parse_measure(h, default_unit)?;
    Ok((width, width_unit, height, height_unit))
}

fn parse_qty(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| invalid(s, "a quantity"))
}

/// Parse a piece row. Bare numbers use `default_unit`.
pub fn parse_row(s: &str, default_unit: Unit) -> Result<PieceRow> {
    let parts: Vec<&str> = s.split(':').collect();

    let (description, dims, qty) = match parts.as_slice() {
        [dims] => ("", *dims, None),
        [first, second] => {
            if parse_dims(second, default_unit).is_ok() {
                (*first, *second, None)
            } else {
                ("", *first, Some(*second))
            }
        }
        [desc, dims, qty] => (*desc, *dims, Some(*qty)),
        _ => return Err(invalid(s, "[desc:]WIDTHxHEIGHT[:qty]")),
    };

    let (width, width_unit, height, height_unit) = parse_dims(dims, default_unit)?;
    let qty = qty.map(parse_qty).transpose()?;

    Ok(PieceRow {
        description: description.trim().to_string(),
        width: Some(width),
        width_unit,
        height: Some(height),
        height_unit,
        qty,
    })
}
