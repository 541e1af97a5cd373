//! Display formatting for conversion values

/// Shown in place of a value when there is no valid tempo
pub const PLACEHOLDER: &str = "--";

/// Fixed-point, two decimals.
/// std float formatting is correctly rounded from the exact binary value,
/// with exact ties going to the even digit, on every platform.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format an optional value, falling back to the placeholder
pub fn format_or_placeholder(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_value(500.0), "500.00");
        assert_eq!(format_value(1000.0 / 750.0), "1.33");
        assert_eq!(format_value(60000.0 / 90.0 * 4.0), "2666.67");
        assert_eq!(format_value(0.375), "0.38");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(format_or_placeholder(None), "--");
        assert_eq!(format_or_placeholder(Some(4.0)), "4.00");
    }
}
