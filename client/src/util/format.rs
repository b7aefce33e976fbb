//! Display formatting for dashboard figures and chat attachments.
//!
//! All helpers return owned strings and render missing or non-finite values
//! as [`MISSING`] so tables never show `NaN` or blank cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder shown for absent values.
pub const MISSING: &str = "—";

/// Format a monetary amount as whole dollars with thousands separators.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_owned();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded.abs() as u64;
    format!("{sign}${}", group_thousands(whole))
}

/// Format an optional count, grouping thousands.
pub fn format_count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), group_thousands)
}

/// Format a 0-100 rate with one decimal place.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1}%"),
        _ => MISSING.to_owned(),
    }
}

/// Format a day count, dropping the fraction when it is whole.
pub fn format_days(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let unit = if (v - 1.0).abs() < f64::EPSILON { "day" } else { "days" };
            if v.fract().abs() < f64::EPSILON {
                format!("{v:.0} {unit}")
            } else {
                format!("{v:.1} {unit}")
            }
        }
        _ => MISSING.to_owned(),
    }
}

/// Pretty-print structured data attached to an assistant reply.
pub fn format_attached_data(data: &serde_json::Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
