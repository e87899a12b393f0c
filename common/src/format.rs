//! Display formatting for table metrics.
//!
//! Danish-style grouping: dot as thousands separator, comma as decimal
//! separator. Every formatter falls back to "0" instead of failing so a bad
//! value never takes the table down.

/// Format an integer metric with thousands separators, e.g. 1234567 -> "1.234.567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format a rank position with one decimal, e.g. 3.25 -> "3,3". Whole
/// positions drop the decimal part. Non-finite input renders as "0".
pub fn format_position(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}").replace('.', ",")
    }
}

/// Format a signed delta with an explicit sign, e.g. 4 -> "+4", -2 -> "-2".
pub fn format_delta(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let body = format_position(value.abs());
    if value > 0.0 {
        format!("+{body}")
    } else if value < 0.0 {
        format!("-{body}")
    } else {
        "0".to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }

    #[test]
    fn positions_use_comma_decimals() {
        assert_eq!(format_position(3.0), "3");
        assert_eq!(format_position(3.25), "3,3");
        assert_eq!(format_position(f64::NAN), "0");
    }

    #[test]
    fn deltas_are_signed() {
        assert_eq!(format_delta(4.0), "+4");
        assert_eq!(format_delta(-2.5), "-2,5");
        assert_eq!(format_delta(0.0), "0");
        assert_eq!(format_delta(f64::INFINITY), "0");
    }
}
