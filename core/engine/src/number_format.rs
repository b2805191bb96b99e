//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for KPI cards and chart labels.
//! CONTEXT: Converts raw measure totals to display strings. Presentation
//! layers call these; the aggregation code never formats.

/// How a KPI value should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Plain number with thousands separators.
    Number { decimal_places: u8 },
    /// Currency symbol before the number, minus sign before the symbol.
    Currency { decimal_places: u8 },
}

/// Format a number according to the specified format.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Number { decimal_places } => format_decimal(value, decimal_places),
        NumberFormat::Currency { decimal_places } => format_currency(value, decimal_places, "$"),
    }
}

/// Format a number with specified decimal places and thousands separators.
pub fn format_decimal(value: f64, decimal_places: u8) -> String {
    let rounded = round_to(value, decimal_places);
    let body = add_thousands_separator(&format!(
        "{:.prec$}",
        rounded.abs(),
        prec = decimal_places as usize
    ));

    if rounded < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a number as currency, e.g. `$12,345` or `-$1,234`.
pub fn format_currency(value: f64, decimal_places: u8, symbol: &str) -> String {
    let rounded = round_to(value, decimal_places);
    let body = add_thousands_separator(&format!(
        "{:.prec$}",
        rounded.abs(),
        prec = decimal_places as usize
    ));

    if rounded < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Rounds half away from zero and folds `-0.0` into `0.0`.
fn round_to(value: f64, decimal_places: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimal_places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Add thousands separators to an unsigned numeric string.
fn add_thousands_separator(s: &str) -> String {
    let mut parts = s.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("");
    let decimal_part = parts.next();

    let digits: Vec<char> = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 + 4);

    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.567, 2), "1,234.57");
        assert_eq!(format_decimal(1000000.0, 0), "1,000,000");
        assert_eq!(format_decimal(999.0, 0), "999");
        assert_eq!(format_decimal(-4321.0, 0), "-4,321");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56, 0, "$"), "$1,235");
        assert_eq!(format_currency(-1234.0, 0, "$"), "-$1,234");
        assert_eq!(format_currency(0.0, 0, "$"), "$0");
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        assert_eq!(format_currency(-0.4, 0, "$"), "$0");
        assert_eq!(format_decimal(-0.2, 0), "0");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(format_number(f64::NAN, NumberFormat::Number { decimal_places: 0 }), "0");
    }
}
