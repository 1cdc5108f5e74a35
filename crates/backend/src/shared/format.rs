/// Fixed two-decimal rendering of a money value.
///
/// Aggregations keep full precision; rounding happens only here.
///
/// # Examples
/// ```
/// use backend::shared::format::fixed2;
/// assert_eq!(fixed2(1500.0), "1500.00");
/// assert_eq!(fixed2(333.3333), "333.33");
/// ```
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Convert rupees to lakhs (1 lakh = 100,000)
pub fn to_lakhs(value: f64) -> f64 {
    value / 100_000.0
}

/// Format an integer with thousands separators
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2() {
        assert_eq!(fixed2(0.0), "0.00");
        assert_eq!(fixed2(500.0), "500.00");
        assert_eq!(fixed2(1234.565_1), "1234.57");
    }

    #[test]
    fn test_to_lakhs() {
        assert_eq!(to_lakhs(250_000.0), 2.5);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }
}
