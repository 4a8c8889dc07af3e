//! Advisory checks on quote inputs and results.
//!
//! Nothing here blocks a calculation that can run: malformed numbers are
//! coerced by the calculators, and only reported here.

use crate::calculator::{PrintInput, PrintType, Quote, RollChoice, CANVAS, TAPE, TINT, VINYL};
use crate::config::{sanitize, EPS, MIN_DIMENSION};
use crate::model::{find_roll, PieceRow, Roll, RollSize, TAPE_ROLLS, VINYL_ROLLS};
use crate::parser::Job;
use crate::transform::{RollMaterial, UsageSummary};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Describe how a length input will be coerced, if at all.
fn check_length(value: Option<f64>) -> Option<&'static str> {
    match value {
        None => Some("missing"),
        Some(v) if !v.is_finite() => Some("not a number"),
        Some(v) if v < MIN_DIMENSION => Some("below the 0.01 minimum"),
        Some(_) => None,
    }
}

/// Check one measured row.
pub fn validate_row(row: &PieceRow, label: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Some(problem) = check_length(row.width) {
        result.add_warning(format!("{}: width is {}, using default", label, problem));
    }
    if let Some(problem) = check_length(row.height) {
        result.add_warning(format!("{}: height is {}, using default", label, problem));
    }
    match row.qty {
        Some(q) if q.is_finite() && q >= 1.0 && q.fract() != 0.0 => {
            result.add_warning(format!("{}: quantity {} rounded down to {}", label, q, q.floor()));
        }
        Some(q) if !q.is_finite() || q < 1.0 => {
            result.add_warning(format!("{}: quantity {} raised to 1", label, q));
        }
        _ => {}
    }

    result
}

/// Check a list of rows. Rows are numbered from 1.
pub fn validate_rows(rows: &[PieceRow], label: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for (idx, row) in rows.iter().enumerate() {
        let name = if row.description.trim().is_empty() {
            format!("{} {}", label, idx + 1)
        } else {
            row.description.trim().to_string()
        };
        result.merge(validate_row(row, &name));
    }
    result
}

/// A roll must have a positive cost per ft² before anything can be quoted.
pub fn validate_roll(roll: &Roll, material: &str) -> ValidationResult {
    let cpp = roll.cost_per_ft2();
    if cpp > 0.0 && cpp.is_finite() {
        ValidationResult::ok()
    } else {
        ValidationResult::error(format!(
            "Check the width and price of the {} roll",
            material
        ))
    }
}

/// A print job needs a known stock type.
pub fn validate_print(input: &PrintInput) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if PrintType::lookup(&input.print_type).is_err() {
        result.add_error("Select a printing type");
    }

    let row = PieceRow {
        width: input.width,
        height: input.length,
        qty: input.qty,
        ..Default::default()
    };
    result.merge(validate_row(&row, "Print"));

    result
}

fn check_usage(usage: &UsageSummary, result: &mut ValidationResult) {
    for line in &usage.lines {
        if line.panels > 1 {
            result.add_warning(format!(
                "{}: needs {} panels on a {}\" roll (seamed)",
                line.description, line.panels, usage.roll_width_in
            ));
        }
    }
}

fn validate_choice(choice: &RollChoice, catalog: &[RollSize], material: &str) -> ValidationResult {
    match find_roll(catalog, material, &choice.roll_id) {
        Ok(size) => validate_roll(&size.with_price(sanitize::price(choice.price, 0.0)), material),
        Err(e) => ValidationResult::error(e.to_string()),
    }
}

/// Everything that can be checked before a job runs. A failed result means
/// the job cannot be quoted as entered.
pub fn validate_job(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();

    match job {
        Job::TintBase { .. } => {}
        Job::TintUse { roll, .. } => result.merge(validate_roll(&roll.to_roll(), TINT)),
        Job::TintWindows { roll, windows } => {
            result.merge(validate_roll(&roll.to_roll(), TINT));
            result.merge(validate_rows(windows, "Window"));
        }
        Job::Printing(input) => result.merge(validate_print(input)),
        Job::Canvas { roll, banners, .. } => {
            result.merge(validate_roll(&roll.to_roll(), CANVAS));
            result.merge(validate_rows(banners, "Banner"));
        }
        Job::Decals(input) => {
            result.merge(validate_row(&input.piece, "Decal"));
            result.merge(validate_choice(&input.vinyl, VINYL_ROLLS, VINYL));
            result.merge(validate_choice(&input.tape, TAPE_ROLLS, TAPE));
        }
    }

    result
}

/// Observations about a finished quote: seamed pieces, rolls run short.
pub fn validate_quote(quote: &Quote) -> ValidationResult {
    let mut result = ValidationResult::ok();

    match quote {
        Quote::TintWindows(q) => {
            check_usage(&q.usage, &mut result);
            if q.usage.total_linear_ft > q.roll.length_ft() + EPS {
                result.add_warning(format!(
                    "Windows need {:.2} ft of tint, more than one {} ft roll",
                    q.usage.total_linear_ft,
                    q.roll.length_ft()
                ));
            }
        }
        Quote::Canvas(q) => {
            check_usage(&q.usage, &mut result);
            if q.usage.lines.is_empty() {
                result.add_warning("No banners to quote");
            }
            if q.exceeds_roll {
                result.add_warning(format!(
                    "Banners need {:.2} ft of canvas, more than the {} ft roll",
                    q.usage.total_linear_ft,
                    q.roll.length_ft()
                ));
            }
        }
        Quote::Decals(q) => {
            let vinyl_ft2 = q.vinyl.roll.area_ft2();
            if q.area_ft2 > vinyl_ft2 {
                result.add_warning(format!(
                    "Decals cover {:.2} ft², more than one {} vinyl roll ({:.2} ft²)",
                    q.area_ft2, q.vinyl.roll_id, vinyl_ft2
                ));
            }
        }
        Quote::TintBase(_) | Quote::TintUse(_) | Quote::Printing(_) => {}
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{
        canvas_quote, tint_roll, tint_windows_quote, CanvasRollInput, DecalInput, TintRollInput,
        TintUseInput,
    };
    use crate::model::{MaterialSource, Orientation};

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== input checks ====================

    #[test]
    fn test_rows_report_coercions() {
        let rows = vec![
            PieceRow::inches("Door", 36.0, 80.0, 1),
            PieceRow {
                width: Some(f64::NAN),
                height: Some(-2.0),
                qty: Some(0.0),
                ..Default::default()
            },
        ];
        let result = validate_rows(&rows, "Window");
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings.iter().all(|w| w.starts_with("Window 2")));
    }

    #[test]
    fn test_fractional_qty_warns() {
        let row = PieceRow {
            qty: Some(2.5),
            ..PieceRow::inches("A", 1.0, 1.0, 1)
        };
        let result = validate_row(&row, "A");
        assert_eq!(result.warnings, vec!["A: quantity 2.5 rounded down to 2"]);
    }

    #[test]
    fn test_unpriced_roll_fails() {
        assert!(!validate_roll(&tint_roll(60.0, 0.0), "tint").passed);
        assert!(validate_roll(&tint_roll(60.0, 350.0), "tint").passed);
    }

    #[test]
    fn test_print_requires_type() {
        let result = validate_print(&PrintInput {
            width: Some(10.0),
            length: Some(10.0),
            ..Default::default()
        });
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Select a printing type"]);
    }

    fn decal_job(vinyl_roll: &str) -> Job {
        Job::Decals(DecalInput {
            piece: PieceRow::inches("Logo", 12.0, 12.0, 4),
            vinyl: RollChoice {
                roll_id: vinyl_roll.to_string(),
                price: Some(120.0),
                source: MaterialSource::Home,
            },
            tape: RollChoice {
                roll_id: "24x100yd".to_string(),
                price: Some(90.0),
                source: MaterialSource::Home,
            },
            shipping_fee: None,
        })
    }

    #[test]
    fn test_job_print_type_reported_once() {
        let job = Job::Printing(PrintInput {
            width: Some(10.0),
            length: Some(10.0),
            qty: Some(1.0),
            ..Default::default()
        });
        let result = validate_job(&job);
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Select a printing type"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_job_unknown_decal_roll() {
        assert!(validate_job(&decal_job("24x50yd")).passed);

        let result = validate_job(&decal_job("99x1yd"));
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Unknown vinyl roll '99x1yd'"]);
    }

    #[test]
    fn test_job_unpriced_rolls() {
        let canvas = Job::Canvas {
            roll: CanvasRollInput::default(),
            orientation: Orientation::Auto,
            banners: vec![PieceRow::inches("Sale", 80.0, 40.0, 1)],
        };
        let result = validate_job(&canvas);
        assert_eq!(result.errors, vec!["Check the width and price of the canvas roll"]);

        let tint = Job::TintUse {
            roll: TintRollInput {
                width_in: Some(60.0),
                price: Some(0.0),
            },
            run: TintUseInput::default(),
        };
        assert!(!validate_job(&tint).passed);

        // The base summary shows a zero cost rather than refusing.
        let base = Job::TintBase {
            roll: TintRollInput {
                width_in: Some(60.0),
                price: Some(0.0),
            },
        };
        assert!(validate_job(&base).passed);
    }

    // ==================== quote checks ====================

    #[test]
    fn test_seamed_window_warns() {
        let quote = tint_windows_quote(
            &tint_roll(60.0, 350.0),
            &[PieceRow::inches("Storefront", 72.0, 48.0, 1)],
        )
        .unwrap();
        let result = validate_quote(&Quote::TintWindows(quote));
        assert!(result.passed);
        assert_eq!(
            result.warnings,
            vec!["Storefront: needs 2 panels on a 60\" roll (seamed)"]
        );
    }

    #[test]
    fn test_canvas_overflow_warns() {
        let roll = CanvasRollInput {
            length_ft: Some(10.0),
            price: Some(100.0),
            ..Default::default()
        }
        .to_roll();
        let rows = vec![PieceRow::inches("Long", 40.0, 240.0, 1)];
        let quote = canvas_quote(&roll, Orientation::HeightAlongRoll, &rows).unwrap();
        let result = validate_quote(&Quote::Canvas(quote));
        assert!(result.warnings.iter().any(|w| w.contains("more than the 10 ft roll")));
    }
}
