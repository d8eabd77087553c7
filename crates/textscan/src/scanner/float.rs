use core::str::FromStr;

use smallvec::SmallVec;

use super::{ScanContext, parse_flags};
use crate::{Cursor, Locale, ScanError};

/// Longest float token the scanner accepts.
const MAX_FLOAT_LEN: usize = 64;

/// `{}` or `{:l}`: optional sign, digits, at most one decimal point.
///
/// With `l` the decimal point and digits come from the caller's locale;
/// otherwise the point is `.`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatScanner {
    localized: bool,
}

impl FloatScanner {
    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        parse_flags(spec, "l", |_| {
            self.localized = true;
            Ok(())
        })
    }

    pub(crate) fn scan<C: Cursor + ?Sized, F: FromStr>(
        &self,
        ctx: &mut ScanContext<'_, C>,
    ) -> Result<F, ScanError> {
        let locale = ctx.locale(self.localized);
        let point = locale.decimal_point();

        if let Some(rest) = ctx.cursor.as_contiguous() {
            let len = token_len(rest, locale, point, self.localized);
            let token = &rest[..len];
            let value = if point == '.' && token.is_ascii() {
                convert(token)?
            } else {
                let mut buf: SmallVec<[u8; MAX_FLOAT_LEN]> = SmallVec::new();
                for ch in token.chars() {
                    buf.push(normalize(ch, locale, point, self.localized));
                }
                convert_bytes(&buf)?
            };
            ctx.cursor.advance_bytes(len);
            return Ok(value);
        }

        let mut buf: SmallVec<[u8; MAX_FLOAT_LEN]> = SmallVec::new();
        let mut seen_point = false;
        while buf.len() < MAX_FLOAT_LEN {
            let ch = match ctx.cursor.read_char() {
                Ok(ch) => ch,
                Err(e) if e.is_eof() && !buf.is_empty() => break,
                Err(e) => return Err(e),
            };
            let accept = (buf.is_empty() && matches!(ch, '+' | '-'))
                || (ch == point && !seen_point)
                || locale.is_digit(ch, 10, self.localized);
            if !accept {
                ctx.cursor.putback(ch);
                break;
            }
            seen_point |= ch == point;
            buf.push(normalize(ch, locale, point, self.localized));
        }
        convert_bytes(&buf)
    }
}

/// Byte length of the float token at the start of `s`.
pub(crate) fn token_len(s: &str, locale: &dyn Locale, point: char, localized: bool) -> usize {
    let mut seen_point = false;
    for (n, (i, ch)) in s.char_indices().enumerate() {
        let accept = n < MAX_FLOAT_LEN
            && ((n == 0 && matches!(ch, '+' | '-'))
                || (ch == point && !seen_point)
                || locale.is_digit(ch, 10, localized));
        if !accept {
            return i;
        }
        seen_point |= ch == point;
    }
    s.len()
}

fn normalize(ch: char, locale: &dyn Locale, point: char, localized: bool) -> u8 {
    if ch == point {
        return b'.';
    }
    match locale.digit_value(ch, 10, localized) {
        #[allow(clippy::cast_possible_truncation)]
        Some(d) => b'0' + d as u8,
        None => u8::try_from(ch).unwrap_or(b'?'),
    }
}

fn convert_bytes<F: FromStr>(bytes: &[u8]) -> Result<F, ScanError> {
    let text = core::str::from_utf8(bytes).map_err(|_| ScanError::InvalidScannedValue)?;
    convert(text)
}

/// A token needs at least one digit; everything else is left to the
/// standard parser.
pub(crate) fn convert<F: FromStr>(token: &str) -> Result<F, ScanError> {
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ScanError::InvalidScannedValue);
    }
    token.parse().map_err(|_| ScanError::InvalidScannedValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CustomLocale, DEFAULT_LOCALE};

    #[test]
    fn token_stops_at_second_point() {
        assert_eq!(token_len("1.5.2", &DEFAULT_LOCALE, '.', false), 3);
        assert_eq!(token_len("-0.25x", &DEFAULT_LOCALE, '.', false), 5);
        assert_eq!(token_len("e5", &DEFAULT_LOCALE, '.', false), 0);
    }

    #[test]
    fn localized_point_is_normalized() {
        let fi = CustomLocale::default().with_decimal_point(',');
        assert_eq!(normalize(',', &fi, ',', true), b'.');
        assert_eq!(normalize('7', &fi, ',', true), b'7');
    }

    #[test]
    fn convert_needs_a_digit() {
        assert_eq!(convert::<f64>("."), Err(ScanError::InvalidScannedValue));
        assert_eq!(convert::<f64>("-"), Err(ScanError::InvalidScannedValue));
        assert_eq!(convert::<f64>("2."), Ok(2.0));
    }

    #[test]
    fn spec_flags() {
        assert!(FloatScanner::default().parse("l").is_ok());
        assert_eq!(FloatScanner::default().parse("x"), Err(ScanError::InvalidFormatString));
        assert_eq!(FloatScanner::default().parse("ll"), Err(ScanError::InvalidFormatString));
    }
}
