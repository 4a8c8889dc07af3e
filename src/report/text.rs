//! Itemized plain-text breakdowns of computed quotes.

use std::fmt::Write;

use super::format::{dim, fixed2, money};
use crate::calculator::{
    CanvasQuote, DecalQuote, MaterialLine, PrintQuote, Quote, TintBaseSummary, TintUseQuote,
    TintWindowsQuote,
};
use crate::config::{Unit, BASE_TINT_LENGTH_FT};
use crate::model::{Roll, RollLength};
use crate::transform::UsageSummary;

/// Render any quote.
pub fn render(quote: &Quote) -> String {
    match quote {
        Quote::TintBase(q) => render_tint_base(q),
        Quote::TintUse(q) => render_tint_use(q),
        Quote::TintWindows(q) => render_tint_windows(q),
        Quote::Printing(q) => render_print(q),
        Quote::Canvas(q) => render_canvas(q),
        Quote::Decals(q) => render_decals(q),
    }
}

pub fn render_tint_base(q: &TintBaseSummary) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Base area: {} ft² (width × {}ft)",
        fixed2(q.area_ft2),
        BASE_TINT_LENGTH_FT
    )
    .unwrap();
    writeln!(out, "Cost/ft²: {}/ft²", money(q.cost_per_ft2)).unwrap();
    out
}

fn write_tint_roll(out: &mut String, roll: &Roll, cost_per_ft2: f64) {
    writeln!(
        out,
        "Roll: width {}\" · fixed length {}ft · price {}",
        dim(roll.width_in),
        BASE_TINT_LENGTH_FT,
        money(roll.price)
    )
    .unwrap();
    writeln!(out, "Cost/ft²: {}/ft²", money(cost_per_ft2)).unwrap();
    writeln!(out).unwrap();
}

pub fn render_tint_use(q: &TintUseQuote) -> String {
    let mut out = String::new();
    write_tint_roll(&mut out, &q.roll, q.cost_per_ft2);

    let shown_len = match q.unit {
        Unit::Inches => format!("{}\" = {} ft", dim(q.length), fixed2(q.length_ft)),
        Unit::Feet => format!("{} ft", dim(q.length)),
    };
    writeln!(
        out,
        "Use: width {}\" · length {} · qty {}",
        dim(q.width_in),
        shown_len,
        q.qty
    )
    .unwrap();
    writeln!(out, "Area: {} ft²", fixed2(q.area_ft2)).unwrap();
    writeln!(out, "Material cost: {}", money(q.cost)).unwrap();
    out
}

fn write_usage(out: &mut String, usage: &UsageSummary, piece_label: &str) {
    for line in &usage.lines {
        let rotated = if line.rotated { " (rotated)" } else { "" };
        writeln!(
            out,
            "• {}: {}\"×{}\" · Qty {} · Panels {}{} ⇒ Length {} in",
            line.description,
            dim(line.width_in),
            dim(line.height_in),
            line.qty,
            line.panels,
            rotated,
            fixed2(line.linear_in)
        )
        .unwrap();
    }
    writeln!(out).unwrap();
    writeln!(
        out,
        "Total length: {} in ({} ft)",
        fixed2(usage.total_linear_in),
        fixed2(usage.total_linear_ft)
    )
    .unwrap();
    writeln!(out, "Material area: {} ft²", fixed2(usage.material_area_ft2)).unwrap();
    writeln!(out, "{} area: {} ft²", piece_label, fixed2(usage.piece_area_ft2)).unwrap();
}

pub fn render_tint_windows(q: &TintWindowsQuote) -> String {
    let mut out = String::new();
    write_tint_roll(&mut out, &q.roll, q.cost_per_ft2);
    write_usage(&mut out, &q.usage, "Window");
    writeln!(out, "Material cost: {}", money(q.cost)).unwrap();
    out
}

pub fn render_print(q: &PrintQuote) -> String {
    let mut out = String::new();
    writeln!(out, "Type: {}", q.print_type.label()).unwrap();
    writeln!(
        out,
        "Size: {} × {} ({}) · Qty {}",
        dim(q.width),
        dim(q.length),
        q.unit,
        q.qty
    )
    .unwrap();
    writeln!(
        out,
        "Converted: {} ft × {} ft",
        fixed2(q.width_ft),
        fixed2(q.length_ft)
    )
    .unwrap();
    writeln!(out, "Rate: {}/ft²", money(q.rate)).unwrap();
    writeln!(
        out,
        "Area: {} ft² each, {} ft² total",
        fixed2(q.area_one_ft2),
        fixed2(q.area_total_ft2)
    )
    .unwrap();
    writeln!(out, "Total cost: {}", money(q.cost)).unwrap();
    out
}

pub fn render_canvas(q: &CanvasQuote) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Roll: width {}\" · length {}ft · price {}",
        dim(q.roll.width_in),
        dim(q.roll.length_ft()),
        money(q.roll.price)
    )
    .unwrap();
    writeln!(out, "Cost/ft²: {}/ft²", money(q.cost_per_ft2)).unwrap();
    writeln!(out, "Orientation: {}", q.orientation).unwrap();
    writeln!(out).unwrap();
    write_usage(&mut out, &q.usage, "Banner");
    writeln!(out, "Material cost: {}", money(q.cost)).unwrap();
    if q.exceeds_roll {
        writeln!(
            out,
            "Note: needs {} ft, the roll holds {} ft",
            fixed2(q.usage.total_linear_ft),
            dim(q.roll.length_ft())
        )
        .unwrap();
    }
    out
}

fn roll_size(roll: &Roll) -> String {
    match roll.length {
        RollLength::Feet(ft) => format!("{}\"×{}ft", dim(roll.width_in), dim(ft)),
        RollLength::Yards(yd) => format!("{}\"×{}yd", dim(roll.width_in), dim(yd)),
    }
}

fn write_material(out: &mut String, name: &str, line: &MaterialLine) {
    writeln!(
        out,
        "{} {} ({}) · price {} · {}/ft² ⇒ {}",
        name,
        roll_size(&line.roll),
        line.source,
        money(line.roll.price),
        money(line.cost_per_ft2),
        money(line.cost)
    )
    .unwrap();
}

pub fn render_decals(q: &DecalQuote) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Decal: {}\"×{}\" · Qty {} · Area {} ft²",
        dim(q.width_in),
        dim(q.height_in),
        q.qty,
        fixed2(q.area_ft2)
    )
    .unwrap();
    write_material(&mut out, "Vinyl", &q.vinyl);
    write_material(&mut out, "Tape", &q.tape);
    writeln!(out).unwrap();
    writeln!(out, "Material cost: {}", money(q.material_cost)).unwrap();
    if q.shipping_applied {
        writeln!(out, "Shipping: {}", money(q.shipping_fee)).unwrap();
    }
    writeln!(out, "Total: {}", money(q.total)).unwrap();
    out
}
