//! Formatting helpers for presenting stats.

/// Shown in place of a value that cannot be computed.
pub const PLACEHOLDER: &str = "--";

/// Integer with thousands separators, e.g. `12,345`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    format!("{}%", format_number(value, 1))
}

pub fn format_yards(value: Option<f64>) -> String {
    format!("{} yds", format_number(value, 1))
}
