use smallvec::SmallVec;

use super::{ScanContext, parse_flags};
use crate::{Cursor, Locale, ScanError};

/// Primitive integers the engine can scan into.
///
/// Values are accumulated in `i128` and narrowed at the end, so the trait
/// only has to describe the target's range.
pub trait Integer: Copy + TryFrom<i128> {
    /// Whether a leading `-` is acceptable.
    const SIGNED: bool;
    /// `Self::MIN` widened.
    const MIN_WIDE: i128;
    /// `Self::MAX` widened.
    const MAX_WIDE: i128;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Integer for $t {
            const SIGNED: bool = <$t>::MIN != 0;
            #[allow(clippy::cast_lossless)]
            const MIN_WIDE: i128 = <$t>::MIN as i128;
            #[allow(clippy::cast_lossless)]
            const MAX_WIDE: i128 = <$t>::MAX as i128;
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Number of base-`radix` digits in the widest magnitude `T` can hold.
pub(crate) fn max_digits<T: Integer>(radix: u32) -> usize {
    let mut magnitude = T::MAX_WIDE.unsigned_abs().max(T::MIN_WIDE.unsigned_abs());
    let mut digits = 0;
    while magnitude > 0 {
        magnitude /= u128::from(radix);
        digits += 1;
    }
    digits.max(1)
}

/// `{}`/`{:d}` decimal, `{:x}` hex, `{:o}` octal, `{:b}` binary; `'` accepts
/// the locale's thousands separator between digits, `l` takes digits and
/// separator from the caller's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerScanner {
    radix: u32,
    grouping: bool,
    localized: bool,
}

impl Default for IntegerScanner {
    fn default() -> Self {
        Self {
            radix: 10,
            grouping: false,
            localized: false,
        }
    }
}

impl IntegerScanner {
    /// Base the digits are read in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        let mut radix = None;
        parse_flags(spec, "dxob'l", |ch| {
            match ch {
                '\'' => self.grouping = true,
                'l' => self.localized = true,
                _ if radix.is_some() => return Err(ScanError::InvalidFormatString),
                'x' => radix = Some(16),
                'o' => radix = Some(8),
                'b' => radix = Some(2),
                _ => radix = Some(10),
            }
            Ok(())
        })?;
        self.radix = radix.unwrap_or(10);
        Ok(())
    }

    /// Reads one integer token and narrows it to `T`.
    ///
    /// The token is an optional sign followed by digits; its terminator is
    /// peeked, never consumed. A token with more digits than `T` can hold is
    /// rejected without reading further.
    pub(crate) fn scan<C: Cursor + ?Sized, T: Integer>(
        &self,
        ctx: &mut ScanContext<'_, C>,
    ) -> Result<T, ScanError> {
        let locale = ctx.locale(self.localized);
        let separator = self.grouping.then(|| locale.thousands_separator());
        let cap = max_digits::<T>(self.radix) + 1;

        if let Some(rest) = ctx.cursor.as_contiguous() {
            let len = self.token_len(rest, locale, separator, cap)?;
            let value = fold(
                rest[..len].chars().filter(|&c| Some(c) != separator),
                self.radix,
                locale,
                self.localized,
            )?;
            ctx.cursor.advance_bytes(len);
            return Ok(value);
        }

        let mut buf: SmallVec<[char; 66]> = SmallVec::new();
        let mut seen_digit = false;
        loop {
            let ch = match ctx.cursor.peek_char() {
                Ok(ch) => ch,
                Err(e) if e.is_eof() => break,
                Err(e) => return Err(e),
            };
            let sign = buf.is_empty() && matches!(ch, '+' | '-');
            let digit = !sign && locale.is_digit(ch, self.radix, self.localized);
            if digit && buf.len() == cap {
                return Err(ScanError::InvalidScannedValue);
            }
            if sign || digit {
                seen_digit |= digit;
                buf.push(ctx.cursor.read_char()?);
                continue;
            }
            if Some(ch) == separator && seen_digit {
                ctx.cursor.read_char()?;
                match ctx.cursor.peek_char() {
                    Ok(next) if locale.is_digit(next, self.radix, self.localized) => continue,
                    Ok(_) => {}
                    Err(e) if e.is_eof() => {}
                    Err(e) => return Err(e),
                }
                ctx.cursor.putback(ch);
            }
            break;
        }
        fold(buf.into_iter(), self.radix, locale, self.localized)
    }

    /// Byte length of the integer token at the start of `rest`, separators
    /// included.
    fn token_len(
        &self,
        rest: &str,
        locale: &dyn Locale,
        separator: Option<char>,
        cap: usize,
    ) -> Result<usize, ScanError> {
        let mut stored = 0;
        let mut seen_digit = false;
        let mut chars = rest.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            if stored == 0 && matches!(ch, '+' | '-') {
                stored += 1;
            } else if locale.is_digit(ch, self.radix, self.localized) {
                if stored == cap {
                    return Err(ScanError::InvalidScannedValue);
                }
                stored += 1;
                seen_digit = true;
            } else if Some(ch) == separator && seen_digit {
                match chars.peek() {
                    Some(&(_, next)) if locale.is_digit(next, self.radix, self.localized) => {}
                    _ => return Ok(i),
                }
            } else {
                return Ok(i);
            }
        }
        Ok(rest.len())
    }
}

/// Folds a sign and digits into `T`.
///
/// Digits are subtracted from a negative accumulator so the most negative
/// value of a signed type is reachable, and the result is negated at the end
/// unless a `-` was read.
pub(crate) fn fold<T: Integer>(
    chars: impl Iterator<Item = char>,
    radix: u32,
    locale: &dyn Locale,
    localized: bool,
) -> Result<T, ScanError> {
    let mut chars = chars.peekable();
    let negative = match chars.peek() {
        Some('-') if !T::SIGNED => return Err(ScanError::InvalidScannedValue),
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut acc: i128 = 0;
    let mut digits = 0usize;
    for ch in chars {
        let digit = locale
            .digit_value(ch, radix, localized)
            .ok_or(ScanError::InvalidScannedValue)?;
        acc = acc
            .checked_mul(i128::from(radix))
            .and_then(|a| a.checked_sub(i128::from(digit)))
            .ok_or(ScanError::InvalidScannedValue)?;
        digits += 1;
    }
    if digits == 0 {
        return Err(ScanError::InvalidScannedValue);
    }
    if !negative {
        acc = acc.checked_neg().ok_or(ScanError::InvalidScannedValue)?;
    }
    T::try_from(acc).map_err(|_| ScanError::InvalidScannedValue)
}
