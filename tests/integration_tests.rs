//! Integration tests for the quoting pipeline.
//!
//! Worked examples are checked end to end: job text in, quote and rendered
//! breakdown out.

use pretty_assertions::assert_eq;
use signshop_quote::config::float_cmp::approx_eq;
use signshop_quote::{
    aggregate, decal_quote, panelize, parse_job_file, parse_jobs, parse_row, print_quote, render,
    run_job, tint_roll, tint_windows_quote, CutPiece, DecalInput, Job, JsonFileStore,
    MaterialSource, Orientation, PieceRow, PreferenceStore, PrintInput, Quote, QuoteError,
    RollChoice, RollLength, RollMaterial, Roll, Unit, validate_job,
};
use std::io::Write;

// ==================== Roll pricing ====================

#[test]
fn test_cost_per_ft2_formula() {
    for (width, length, price) in [(60.0, 100.0, 350.0), (24.0, 150.0, 99.0), (54.0, 30.0, 0.0)] {
        let roll = Roll::new(width, RollLength::Feet(length), price);
        let expected = price / ((width / 12.0) * length);
        assert_eq!(roll.cost_per_ft2(), expected);
    }
}

#[test]
fn test_tint_reference_roll() {
    let roll = tint_roll(60.0, 350.0);
    assert_eq!(roll.area_ft2(), 500.0);
    assert!(approx_eq(roll.cost_per_ft2(), 0.70));
}

// ==================== Panelization ====================

#[test]
fn test_panel_boundary() {
    let exact = panelize(&CutPiece::new("", 60.0, 48.0, 1), 60.0, Orientation::HeightAlongRoll);
    let over = panelize(&CutPiece::new("", 60.01, 48.0, 1), 60.0, Orientation::HeightAlongRoll);
    assert_eq!(exact.panels, 1);
    assert_eq!(over.panels, 2);
}

#[test]
fn test_window_examples() {
    let roll = tint_roll(60.0, 350.0);

    let quote = tint_windows_quote(&roll, &[PieceRow::inches("A", 60.0, 48.0, 1)]).unwrap();
    assert_eq!(quote.usage.lines[0].panels, 1);
    assert_eq!(quote.usage.total_linear_in, 48.0);
    assert_eq!(quote.usage.material_area_ft2, 20.0);
    assert!(approx_eq(quote.cost, 14.0));

    let quote = tint_windows_quote(&roll, &[PieceRow::inches("B", 72.0, 48.0, 1)]).unwrap();
    assert_eq!(quote.usage.lines[0].panels, 2);
    assert_eq!(quote.usage.total_linear_in, 96.0);
    assert_eq!(quote.usage.material_area_ft2, 40.0);
}

#[test]
fn test_canvas_auto_tie() {
    let upright = panelize(&CutPiece::new("", 80.0, 40.0, 1), 54.0, Orientation::HeightAlongRoll);
    let rotated = panelize(&CutPiece::new("", 80.0, 40.0, 1), 54.0, Orientation::WidthAlongRoll);
    let auto = panelize(&CutPiece::new("", 80.0, 40.0, 1), 54.0, Orientation::Auto);

    assert_eq!(upright.linear_in, 80.0);
    assert_eq!(rotated.linear_in, 80.0);
    assert_eq!(auto, upright);
}

#[test]
fn test_aggregate_matches_row_sum() {
    let pieces = vec![
        CutPiece::new("A", 12.5, 33.3, 3),
        CutPiece::new("B", 61.0, 17.1, 2),
        CutPiece::new("C", 130.0, 9.9, 7),
    ];
    let summary = aggregate(&pieces, 60.0, &Orientation::HeightAlongRoll, "Window");

    let mut expected = 0.0;
    for p in &pieces {
        let panels = (p.width_in / 60.0).ceil();
        expected += p.height_in * panels * p.qty as f64;
    }
    assert_eq!(summary.total_linear_in, expected);
    assert_eq!(summary.material_area_ft2, 60.0 * expected / 144.0);
}

// ==================== Printing and decals ====================

#[test]
fn test_print_requires_type() {
    let err = print_quote(&PrintInput::default()).unwrap_err();
    assert!(matches!(err, QuoteError::UnknownPrintType { .. }));
    assert!(err.is_advisory());
}

#[test]
fn test_decal_shipping_rule() {
    let mut input = DecalInput {
        piece: parse_row("Logo:24x12:3", Unit::Inches).unwrap(),
        vinyl: RollChoice {
            roll_id: "24x50yd".to_string(),
            price: Some(150.0),
            source: MaterialSource::Home,
        },
        tape: RollChoice {
            roll_id: "24x100yd".to_string(),
            price: Some(60.0),
            source: MaterialSource::Home,
        },
        shipping_fee: Some(20.0),
    };
    let home = decal_quote(&input).unwrap();
    assert!(!home.shipping_applied);
    assert!(approx_eq(home.total, 3.6));

    input.tape.source = MaterialSource::Buy;
    let bought = decal_quote(&input).unwrap();
    assert!(bought.shipping_applied);
    assert!(approx_eq(bought.total, 23.6));
}

// ==================== Jobs ====================

#[test]
fn test_job_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{ "category": "tint_windows",
               "roll": {{ "width_in": 60, "price": 350 }},
               "windows": [
                 {{ "description": "Door", "width": 60, "height": 48 }},
                 {{ "width": 72, "height": 48, "qty": 2 }}
               ] }},
            {{ "category": "printing", "print_type": "vinyl_basic",
               "width": 24, "length": 36, "qty": 3 }}
        ]"#
    )
    .unwrap();

    let jobs = parse_job_file(file.path()).unwrap();
    assert_eq!(jobs.len(), 2);

    let Quote::TintWindows(tint) = run_job(&jobs[0]).unwrap() else {
        panic!("expected a tint windows quote");
    };
    // 48 + 48 x 2 panels x 2
    assert_eq!(tint.usage.total_linear_in, 240.0);
    assert_eq!(tint.usage.lines[1].description, "Window 2");
    assert!(approx_eq(tint.cost, 70.0));

    let printing = run_job(&jobs[1]).unwrap();
    assert_eq!(printing.total(), 45.0);
}

#[test]
fn test_run_job_is_idempotent() {
    let jobs = parse_jobs(
        r#"{ "category": "canvas", "orientation": "auto",
             "roll": { "width_in": 54, "length_ft": 100, "price": 225 },
             "banners": [ { "width": 110, "height": 50, "qty": 2 }, { "width": 3.3, "width_unit": "feet", "height": 17 } ] }"#,
    )
    .unwrap();
    let a = run_job(&jobs[0]).unwrap();
    let b = run_job(&jobs[0]).unwrap();
    assert_eq!(a.total().to_bits(), b.total().to_bits());
    assert_eq!(a, b);
}

#[test]
fn test_unpriced_canvas_is_advisory() {
    let jobs = parse_jobs(r#"{ "category": "canvas", "banners": [ { "width": 10, "height": 10 } ] }"#)
        .unwrap();
    let err = run_job(&jobs[0]).unwrap_err();
    assert!(err.is_advisory());
    assert_eq!(err.code_value(), 100);
}

#[test]
fn test_unknown_decal_roll_is_advisory() {
    let jobs = parse_jobs(
        r#"{ "category": "decals",
             "piece": { "width": 12, "height": 12, "qty": 2 },
             "vinyl": { "roll_id": "36x50yd", "price": 150 },
             "tape": { "roll_id": "24x100yd", "price": 90 } }"#,
    )
    .unwrap();

    let validation = validate_job(&jobs[0]);
    assert!(!validation.passed);
    assert_eq!(validation.errors, vec!["Unknown vinyl roll '36x50yd'"]);

    let err = run_job(&jobs[0]).unwrap_err();
    assert!(err.is_advisory());
    assert_eq!(err.code_value(), 201);
}

#[test]
fn test_window_report() {
    let job = Job::TintWindows {
        roll: signshop_quote::TintRollInput::default(),
        windows: vec![
            PieceRow::inches("Door", 60.0, 48.0, 1),
            PieceRow::inches("Storefront", 72.0, 48.0, 1),
        ],
    };
    let text = render(&run_job(&job).unwrap());
    insta::assert_snapshot!(text.trim_end(), @r###"
    Roll: width 60" · fixed length 100ft · price $350.00
    Cost/ft²: $0.70/ft²

    • Door: 60"×48" · Qty 1 · Panels 1 ⇒ Length 48.00 in
    • Storefront: 72"×48" · Qty 1 · Panels 2 ⇒ Length 96.00 in

    Total length: 144.00 in (12.00 ft)
    Material area: 60.00 ft²
    Window area: 44.00 ft²
    Material cost: $42.00
    "###);
}

// ==================== Preferences ====================

#[test]
fn test_prefs_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut store = JsonFileStore::open(&path);
    store.set("tint.rollPrice", 350.0);
    store.set("tint.rollPrice", 365.0);
    store.save().unwrap();

    let mut reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.remember("tint.rollPrice", None), Some(365.0));
}
