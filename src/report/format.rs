//! Presentation-time number formatting. Nothing upstream rounds.

/// Format as US dollars with thousands separators, e.g. `$1,234.56`.
///
/// Non-finite amounts render as `$0.00`.
pub fn money(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, rem)
}

/// Two decimal places.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Up to two decimals, trailing zeros dropped: `60`, `60.5`, `33.33`.
pub fn dim(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
