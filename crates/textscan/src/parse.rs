//! Number parsing over plain string slices, without format strings or
//! leftovers.

use core::str::FromStr;

use crate::scanner::integer::{Integer, fold};
use crate::{DEFAULT_LOCALE, Locale, ScanError};

/// Parses an integer in `base` from the start of `s`.
///
/// Returns the value and the number of bytes consumed. The text must start
/// with a digit or `-`: leading whitespace, `+` and radix prefixes such as
/// `0x` are not accepted (`"0x1f"` parses as `0` and stops at `x`).
///
/// # Errors
/// [`ScanError::InvalidFormatString`] if `base` is outside `2..=36`,
/// [`ScanError::InvalidScannedValue`] if `s` does not start with a number or
/// the number does not fit in `T`.
///
/// ```
/// use textscan::parse_integer;
///
/// assert_eq!(parse_integer::<u16>("ff rest", 16), Ok((255, 2)));
/// assert!(parse_integer::<i32>(" 1", 10).is_err());
/// ```
pub fn parse_integer<T: Integer>(s: &str, base: u32) -> Result<(T, usize), ScanError> {
    if !(2..=36).contains(&base) {
        return Err(ScanError::InvalidFormatString);
    }
    let locale = &DEFAULT_LOCALE;
    let sign_len = usize::from(s.starts_with('-'));
    let digits = s[sign_len..]
        .find(|c| !locale.is_digit(c, base, false))
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return Err(ScanError::InvalidScannedValue);
    }
    let len = sign_len + digits;
    let value = fold(s[..len].chars(), base, locale, false)?;
    Ok((value, len))
}

/// Parses a float from the start of `s`: optional sign, digits, at most one
/// `.`. No exponent, no leading whitespace.
///
/// # Errors
/// [`ScanError::InvalidScannedValue`] if `s` does not start with a number.
///
/// ```
/// use textscan::parse_float;
///
/// assert_eq!(parse_float::<f64>("-1.25;"), Ok((-1.25, 5)));
/// ```
pub fn parse_float<F: FromStr>(s: &str) -> Result<(F, usize), ScanError> {
    let len = crate::scanner::float::token_len(s, &DEFAULT_LOCALE, '.', false);
    let value = crate::scanner::float::convert(&s[..len])?;
    Ok((value, len))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 10)]
    #[case("+1", 10)]
    #[case(" 1", 10)]
    #[case("-", 10)]
    #[case("z", 10)]
    fn rejected_integers(#[case] s: &str, #[case] base: u32) {
        assert_eq!(parse_integer::<i64>(s, base), Err(ScanError::InvalidScannedValue));
    }

    #[test]
    fn bad_base() {
        assert_eq!(parse_integer::<i64>("1", 1), Err(ScanError::InvalidFormatString));
        assert_eq!(parse_integer::<i64>("1", 37), Err(ScanError::InvalidFormatString));
    }

    #[test]
    fn prefix_is_not_interpreted() {
        assert_eq!(parse_integer::<u32>("0x1f", 16), Ok((0, 1)));
        assert_eq!(parse_integer::<u32>("zz", 36), Ok((1295, 2)));
    }

    #[test]
    fn overflow_and_extremes() {
        assert_eq!(parse_integer::<i8>("-128", 10), Ok((-128, 4)));
        assert_eq!(parse_integer::<i8>("128", 10), Err(ScanError::InvalidScannedValue));
        assert_eq!(parse_integer::<u8>("-1", 10), Err(ScanError::InvalidScannedValue));
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float::<f32>("3.5e2"), Ok((3.5, 3)));
        assert_eq!(parse_float::<f64>(".5"), Ok((0.5, 2)));
        assert!(parse_float::<f64>("x").is_err());
        assert!(parse_float::<f64>(" 1").is_err());
    }
}
