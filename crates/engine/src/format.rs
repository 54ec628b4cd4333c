/// Renders `amount` with zero fractional digits.
///
/// Rounds to the nearest integer, halves away from zero (`2.5` → `"3"`,
/// `-2.5` → `"-3"`). A negative amount that rounds to zero keeps its sign
/// (`-0.3` → `"-0"`), while negative zero itself renders as `"0"`.
///
/// ```rust
/// use engine::format_whole;
///
/// assert_eq!(format_whole(12.7), "13");
/// assert_eq!(format_whole(-4.2), "-4");
/// ```
#[must_use]
pub fn format_whole(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    if magnitude.is_infinite() {
        return format!("{sign}Infinity");
    }

    // `{:.0}` alone rounds half to even, so round first.
    format!("{sign}{:.0}", magnitude.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(format_whole(0.0), "0");
        assert_eq!(format_whole(12.7), "13");
        assert_eq!(format_whole(12.2), "12");
        assert_eq!(format_whole(-4.2), "-4");
        assert_eq!(format_whole(-4.7), "-5");
        assert_eq!(format_whole(1_000_000.4), "1000000");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_whole(0.5), "1");
        assert_eq!(format_whole(2.5), "3");
        assert_eq!(format_whole(-2.5), "-3");
    }

    #[test]
    fn signed_zero() {
        assert_eq!(format_whole(-0.0), "0");
        assert_eq!(format_whole(-0.3), "-0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_whole(f64::NAN), "NaN");
        assert_eq!(format_whole(f64::INFINITY), "Infinity");
        assert_eq!(format_whole(f64::NEG_INFINITY), "-Infinity");
    }
}
