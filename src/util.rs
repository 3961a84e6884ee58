// Utility helpers for parsing and basic statistics.
//
// This module centralizes all the "dirty" CSV/number handling so the
// rest of the code can assume clean, typed values.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in spreadsheet exports.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(',', "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Room nights arrive as integers, but spreadsheet exports often write
/// them as `3.0`. Integral floats are accepted, fractional ones are not.
pub fn parse_i64_safe(s: Option<&str>) -> Option<i64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.replace(',', "");
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = parse_f64_safe(Some(s.as_str()))?;
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Trim a text cell and collapse blank values to `None`.
pub fn clean_text(s: Option<String>) -> Option<String> {
    let s = s?;
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

pub fn average(v: &[f64]) -> f64 {
    // Standard arithmetic mean; returns 0 for an empty slice to avoid NaNs.
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Plain ratio with the same zero guard as [`pct`].
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Round to a fixed number of decimals for tabular output.
pub fn round_to(n: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (n * f).round() / f
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimal places plus locale-aware thousands separators
    // (e.g., `1,234,567.89`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Used for counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_with_separators() {
        assert_eq!(parse_f64_safe(Some(" 1,234.50 ")), Some(1234.5));
        assert_eq!(parse_f64_safe(Some("AED 10")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn parses_integral_floats_as_nights() {
        assert_eq!(parse_i64_safe(Some("12")), Some(12));
        assert_eq!(parse_i64_safe(Some("3.0")), Some(3));
        assert_eq!(parse_i64_safe(Some("1,200")), Some(1200));
        assert_eq!(parse_i64_safe(Some("2.5")), None);
        assert_eq!(parse_i64_safe(Some("n/a")), None);
    }

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(clean_text(Some("  ".to_string())), None);
        assert_eq!(clean_text(Some(" TOBBWI ".to_string())), Some("TOBBWI".to_string()));
        assert_eq!(clean_text(None), None);
    }

    #[test]
    fn guarded_ratios() {
        assert_eq!(pct(5.0, 0.0), 0.0);
        assert_eq!(pct(50.0, 200.0), 25.0);
        assert_eq!(ratio(1.0, 0.0), 0.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-36000.0, 0), "-36,000");
        assert_eq!(format_number(0.0, 1), "0.0");
        assert_eq!(format_int(9855), "9,855");
        assert_eq!(round_to(9.7549, 2), 9.75);
    }
}
