//! Fixed-point formatting of scaled integers.
//!
//! Oracle prices arrive as an integer plus the count of its digits that are
//! fractional. Formatting is a positional re-slicing of the decimal digits:
//! no rounding, no stripping of trailing zeros, no intermediate float.

use crate::error::FormatError;
use crate::value_objects::{DecimalCount, DisplayValue, RawAmount};
use std::iter;

/// Renders `raw / 10^decimals` exactly.
///
/// The digits are left-padded with zeros until there is at least one integer
/// digit, then a point is inserted `decimals` places from the right. With zero
/// decimals the digits are returned unchanged.
pub fn format_units(raw: &RawAmount, decimals: DecimalCount) -> DisplayValue {
    let digits = raw.digits();
    let scale = decimals.as_usize();
    if scale == 0 {
        return DisplayValue::new(digits.to_string());
    }

    let mut out = String::with_capacity(digits.len().max(scale + 1) + 1);
    if digits.len() <= scale {
        out.push_str("0.");
        out.extend(iter::repeat_n('0', scale - digits.len()));
        out.push_str(digits);
    } else {
        let (int, frac) = digits.split_at(digits.len() - scale);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    }
    DisplayValue::new(out)
}

/// Validating entry point for untyped input: `raw` as decimal digits and a
/// possibly negative `decimals`.
pub fn format_str(raw: &str, decimals: i64) -> Result<DisplayValue, FormatError> {
    let raw: RawAmount = raw.parse()?;
    let decimals = DecimalCount::try_from(decimals)?;
    Ok(format_units(&raw, decimals))
}

/// Inverse of [`format_units`]: scales a decimal string back to an integer.
///
/// The fractional part may be shorter than `decimals` (it is right-padded) but
/// never longer; excess precision is rejected rather than truncated.
pub fn parse_units(value: &str, decimals: DecimalCount) -> Result<RawAmount, FormatError> {
    let (int, frac) = split_decimal(value)?;
    let scale = decimals.as_usize();
    if frac.len() > scale {
        return Err(FormatError::InvalidRawAmount(format!(
            "{value:?} has {} fractional digits, at most {scale} allowed",
            frac.len()
        )));
    }

    let mut digits = String::with_capacity(int.len() + scale);
    digits.push_str(int);
    digits.push_str(frac);
    digits.extend(iter::repeat_n('0', scale - frac.len()));
    digits.parse()
}

/// Lossy conversion of a decimal string to `f64`.
///
/// Values with more significant digits than an `f64` mantissa holds are
/// rounded to the nearest representable number. Use the string form when the
/// exact value matters.
pub fn to_approximate_number(value: &str) -> Result<f64, FormatError> {
    split_decimal(value)?;
    value
        .parse::<f64>()
        .map_err(|e| FormatError::InvalidRawAmount(format!("{value:?}: {e}")))
}

/// Splits `"12.34"` into `("12", "34")` after checking it is unsigned digits
/// with at most one point and at least one digit.
fn split_decimal(value: &str) -> Result<(&str, &str), FormatError> {
    if value.starts_with('-') {
        return Err(FormatError::InvalidRawAmount(format!(
            "negative value {value:?}"
        )));
    }
    let (int, frac) = value.split_once('.').unwrap_or((value, ""));
    if int.is_empty() && frac.is_empty() {
        return Err(FormatError::InvalidRawAmount(format!(
            "no digits in {value:?}"
        )));
    }
    if let Some(bad) = int.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(FormatError::InvalidRawAmount(format!(
            "unexpected character {bad:?} in {value:?}"
        )));
    }
    Ok((int, frac))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use proptest::prelude::*;

    fn fmt(raw: u128, decimals: u8) -> String {
        format_units(&RawAmount::from(raw), DecimalCount::new(decimals)).into_string()
    }

    #[test]
    fn test_format_inserts_point() {
        assert_eq!(fmt(123456, 4), "12.3456");
        assert_eq!(fmt(500, 2), "5.00");
        assert_eq!(fmt(5, 2), "0.05");
        assert_eq!(fmt(12, 2), "0.12");
        assert_eq!(fmt(123, 2), "1.23");
    }

    #[test]
    fn test_format_zero_decimals_is_identity() {
        assert_eq!(fmt(0, 0), "0");
        assert_eq!(fmt(7, 0), "7");
        assert_eq!(fmt(u128::MAX, 0), u128::MAX.to_string());
    }

    #[test]
    fn test_format_zero_amount() {
        assert_eq!(fmt(0, 1), "0.0");
        assert_eq!(fmt(0, 3), "0.000");
    }

    #[test]
    fn test_format_beyond_u64() {
        let raw: RawAmount = "100000000000000000000".parse().unwrap();
        let value = format_units(&raw, DecimalCount::new(18));
        assert_eq!(value.as_str(), "100.000000000000000000");

        let max = RawAmount::from(U256::MAX);
        let value = format_units(&max, DecimalCount::new(18));
        assert_eq!(
            value.as_str(),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn test_format_str_errors() {
        assert_eq!(format_str("123456", 4).unwrap().as_str(), "12.3456");
        assert!(matches!(
            format_str("-1", 2),
            Err(FormatError::InvalidRawAmount(_))
        ));
        assert!(matches!(
            format_str("1e5", 2),
            Err(FormatError::InvalidRawAmount(_))
        ));
        assert!(matches!(
            format_str("100", -1),
            Err(FormatError::InvalidDecimalCount(_))
        ));
    }

    #[test]
    fn test_format_str_bounds_decimal_count() {
        let widest = format_str("1", 255).unwrap();
        assert_eq!(widest.fractional_part().map(str::len), Some(255));
        assert!(widest.as_str().ends_with('1'));
        for huge in [256, i64::from(u32::MAX), i64::MAX] {
            assert!(matches!(
                format_str("1", huge),
                Err(FormatError::InvalidDecimalCount(_))
            ));
        }
    }

    #[test]
    fn test_format_signed_inputs() {
        assert!(matches!(
            RawAmount::try_from(-1i64),
            Err(FormatError::InvalidRawAmount(_))
        ));
        assert!(matches!(
            DecimalCount::try_from(-1i64),
            Err(FormatError::InvalidDecimalCount(_))
        ));
    }

    #[test]
    fn test_parse_units() {
        let d2 = DecimalCount::new(2);
        assert_eq!(parse_units("5.00", d2).unwrap().digits(), "500");
        assert_eq!(parse_units("5.5", d2).unwrap().digits(), "550");
        assert_eq!(parse_units("5", d2).unwrap().digits(), "500");
        assert_eq!(parse_units("5.", d2).unwrap().digits(), "500");
        assert_eq!(parse_units(".05", d2).unwrap().digits(), "5");
        assert_eq!(parse_units("0.00", d2).unwrap(), RawAmount::zero());
        assert_eq!(parse_units("1", DecimalCount::MAX).unwrap().digits().len(), 256);
    }

    #[test]
    fn test_parse_units_rejects() {
        let d2 = DecimalCount::new(2);
        for bad in ["", ".", "-1.00", "1.2.3", "1,00", "abc", "1.234"] {
            assert!(
                matches!(parse_units(bad, d2), Err(FormatError::InvalidRawAmount(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_units("1.5", DecimalCount::ZERO).is_err());
    }

    #[test]
    fn test_to_approximate_number() {
        assert_eq!(to_approximate_number("12.3456").unwrap(), 12.3456);
        assert_eq!(to_approximate_number("5.00").unwrap(), 5.0);
        assert!(to_approximate_number("-5").is_err());
        assert!(to_approximate_number("inf").is_err());
        assert!(to_approximate_number("1e3").is_err());
    }

    proptest! {
        #[test]
        fn prop_zero_decimals_is_decimal_string(raw in any::<u128>()) {
            prop_assert_eq!(fmt(raw, 0), raw.to_string());
        }

        #[test]
        fn prop_zero_amount_has_d_zeros(d in 1u8..200) {
            let expected = format!("0.{}", "0".repeat(d as usize));
            prop_assert_eq!(fmt(0, d), expected);
        }

        #[test]
        fn prop_parse_inverts_format(digits in "[0-9]{1,120}", d in 0u8..150) {
            let raw: RawAmount = digits.parse().unwrap();
            let decimals = DecimalCount::new(d);
            let shown = format_units(&raw, decimals);
            prop_assert_eq!(parse_units(shown.as_str(), decimals).unwrap(), raw);
        }

        #[test]
        fn prop_format_preserves_digits(digits in "[1-9][0-9]{0,80}", d in 0u8..100) {
            let raw: RawAmount = digits.parse().unwrap();
            let shown = format_units(&raw, DecimalCount::new(d));
            let frac = shown.fractional_part().unwrap_or("");
            prop_assert_eq!(frac.len(), d as usize);
            let joined = format!("{}{}", shown.integer_part(), frac);
            prop_assert_eq!(joined.trim_start_matches('0'), digits.as_str());
        }
    }
}
