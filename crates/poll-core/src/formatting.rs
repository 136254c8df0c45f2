/// Format a polling value as a percentage string with a fixed number of
/// decimal places.
///
/// Values are already on the 0-100 scale, so a stored `57.0` renders as
/// `"57.0%"` with no rescaling.
///
/// # Examples
///
/// ```
/// use poll_core::formatting::format_percent;
///
/// assert_eq!(format_percent(57.0, 1), "57.0%");
/// assert_eq!(format_percent(49.34, 2), "49.34%");
/// assert_eq!(format_percent(0.0, 2), "0.00%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}

/// Format a percentage change with an explicit leading sign.
///
/// Positive values gain a `+` prefix; negative values keep their `-`.
///
/// # Examples
///
/// ```
/// use poll_core::formatting::format_signed_percent;
///
/// assert_eq!(format_signed_percent(1.53, 2), "+1.53%");
/// assert_eq!(format_signed_percent(-0.4, 2), "-0.40%");
/// assert_eq!(format_signed_percent(0.0, 2), "+0.00%");
/// ```
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    format!("{:+.prec$}%", value, prec = decimals)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_percent ───────────────────────────────────────────────────────

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(57.0, 1), "57.0%");
        assert_eq!(format_percent(48.25, 1), "48.2%");
    }

    #[test]
    fn test_format_percent_two_decimals() {
        assert_eq!(format_percent(49.34, 2), "49.34%");
        assert_eq!(format_percent(46.04, 2), "46.04%");
    }

    #[test]
    fn test_format_percent_zero() {
        assert_eq!(format_percent(0.0, 2), "0.00%");
    }

    #[test]
    fn test_format_percent_pads_missing_decimals() {
        assert_eq!(format_percent(50.0, 2), "50.00%");
        assert_eq!(format_percent(50.5, 2), "50.50%");
    }

    #[test]
    fn test_format_percent_no_rescaling() {
        // Stored values are 0-100 already; 0.57 means a 0.57% result.
        assert_eq!(format_percent(0.57, 1), "0.6%");
    }

    // ── format_signed_percent ────────────────────────────────────────────────

    #[test]
    fn test_format_signed_percent_positive() {
        assert_eq!(format_signed_percent(1.53, 2), "+1.53%");
        assert_eq!(format_signed_percent(2.07, 2), "+2.07%");
    }

    #[test]
    fn test_format_signed_percent_negative() {
        assert_eq!(format_signed_percent(-0.4, 2), "-0.40%");
        assert_eq!(format_signed_percent(-3.125, 2), "-3.12%");
    }

    #[test]
    fn test_format_signed_percent_zero_gets_plus() {
        assert_eq!(format_signed_percent(0.0, 2), "+0.00%");
    }
}
