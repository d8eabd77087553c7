//! Per-type value scanners.
//!
//! A field is scanned in two phases. First the format specifier between `:`
//! and `}` is parsed into a scanner's configuration, then the configured
//! scanner reads one value through a [`ScanContext`]. The set of scanners is
//! closed and chosen by the destination's type, see [`ValueScanner::for_arg`].

mod boolean;
mod character;
pub(crate) mod float;
pub(crate) mod integer;
mod string;

pub use boolean::BoolScanner;
pub use character::CharScanner;
pub use float::FloatScanner;
pub use integer::{Integer, IntegerScanner};
pub use string::{SpanScanner, StringScanner};

use crate::{Arg, Cursor, DEFAULT_LOCALE, Locale, ScanError};

/// The cursor plus the locale a scanning call runs under.
pub struct ScanContext<'c, C: ?Sized> {
    pub(crate) cursor: &'c mut C,
    locale: &'c dyn Locale,
}

impl<'c, C: Cursor + ?Sized> ScanContext<'c, C> {
    /// Pairs a cursor with the caller's locale.
    pub fn new(cursor: &'c mut C, locale: &'c dyn Locale) -> Self {
        Self { cursor, locale }
    }

    /// The locale a field answers its questions from: the caller's locale
    /// when the field asked for it with `l`, the default one otherwise.
    pub fn locale(&self, localized: bool) -> &'c dyn Locale {
        if localized { self.locale } else { &DEFAULT_LOCALE }
    }

    /// Direct access to the cursor.
    pub fn cursor(&mut self) -> &mut C {
        self.cursor
    }

    /// Consumes whitespace as classified by the caller's locale. Running out
    /// of input is not an error here.
    ///
    /// # Errors
    /// Source failures other than the end tags.
    pub fn skip_whitespace(&mut self) -> Result<(), ScanError> {
        let locale = self.locale;
        if let Some(rest) = self.cursor.as_contiguous() {
            let skipped = rest.len() - rest.trim_start_matches(|c| locale.is_space(c)).len();
            self.cursor.advance_bytes(skipped);
            return Ok(());
        }
        loop {
            match self.cursor.peek_char() {
                Ok(ch) if locale.is_space(ch) => {
                    self.cursor.read_char()?;
                }
                Ok(_) => return Ok(()),
                Err(e) if e.is_eof() => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Whether `ch` is whitespace for the caller's locale.
    pub fn is_space(&self, ch: char) -> bool {
        self.locale.is_space(ch)
    }
}

/// One configured scanner per supported destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueScanner {
    /// A single code point.
    Char(CharScanner),
    /// `0`/`1` or a named literal.
    Bool(BoolScanner),
    /// Every primitive integer width.
    Integer(IntegerScanner),
    /// `f32` and `f64`.
    Float(FloatScanner),
    /// A whitespace-delimited word into a `String`.
    Str(StringScanner),
    /// A whitespace-delimited word into a caller-sized `[char]`.
    Span(SpanScanner),
}

impl ValueScanner {
    /// The default-configured scanner for `arg`'s type.
    pub fn for_arg(arg: &Arg<'_>) -> Self {
        match arg {
            Arg::Char(_) => Self::Char(CharScanner),
            Arg::Bool(_) => Self::Bool(BoolScanner::default()),
            Arg::F32(_) | Arg::F64(_) => Self::Float(FloatScanner::default()),
            Arg::String(_) => Self::Str(StringScanner),
            Arg::Span(_) => Self::Span(SpanScanner),
            _ => Self::Integer(IntegerScanner::default()),
        }
    }

    /// Applies the text between `:` and `}`.
    ///
    /// # Errors
    /// [`ScanError::InvalidFormatString`] for flags the type does not
    /// accept, and for repeated flags.
    pub fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        match self {
            Self::Char(s) => s.parse(spec),
            Self::Bool(s) => s.parse(spec),
            Self::Integer(s) => s.parse(spec),
            Self::Float(s) => s.parse(spec),
            Self::Str(s) => s.parse(spec),
            Self::Span(s) => s.parse(spec),
        }
    }

    /// Every scanner except `Char` starts by skipping whitespace.
    pub fn skips_leading_whitespace(&self) -> bool {
        !matches!(self, Self::Char(_))
    }

    /// Reads one value into `arg`. Leading whitespace is the caller's job.
    ///
    /// # Errors
    /// [`ScanError::InvalidScannedValue`] when the input does not hold a
    /// value of the destination's type, the end tag when input runs out
    /// first, and [`ScanError::InvalidFormatString`] when `arg` is not the
    /// type this scanner was built for.
    pub fn scan<C: Cursor + ?Sized>(
        &self,
        ctx: &mut ScanContext<'_, C>,
        arg: &mut Arg<'_>,
    ) -> Result<(), ScanError> {
        macro_rules! int {
            ($s:expr, $dst:expr) => {{
                **$dst = $s.scan(ctx)?;
                Ok(())
            }};
        }
        match (self, arg) {
            (Self::Char(s), Arg::Char(dst)) => {
                **dst = s.scan(ctx)?;
                Ok(())
            }
            (Self::Bool(s), Arg::Bool(dst)) => {
                **dst = s.scan(ctx)?;
                Ok(())
            }
            (Self::Integer(s), Arg::I8(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::I16(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::I32(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::I64(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::Isize(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::U8(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::U16(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::U32(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::U64(dst)) => int!(s, dst),
            (Self::Integer(s), Arg::Usize(dst)) => int!(s, dst),
            (Self::Float(s), Arg::F32(dst)) => {
                **dst = s.scan(ctx)?;
                Ok(())
            }
            (Self::Float(s), Arg::F64(dst)) => {
                **dst = s.scan(ctx)?;
                Ok(())
            }
            (Self::Str(s), Arg::String(dst)) => s.scan(ctx, dst),
            (Self::Span(s), Arg::Span(dst)) => s.scan(ctx, dst),
            _ => Err(ScanError::InvalidFormatString),
        }
    }
}

/// Rejects a specifier character that is repeated or not in `allowed`.
/// Each accepted character is reported to `on_flag` once.
pub(crate) fn parse_flags(
    spec: &str,
    allowed: &str,
    mut on_flag: impl FnMut(char) -> Result<(), ScanError>,
) -> Result<(), ScanError> {
    for (i, ch) in spec.char_indices() {
        if !allowed.contains(ch) || spec[..i].contains(ch) {
            return Err(ScanError::InvalidFormatString);
        }
        on_flag(ch)?;
    }
    Ok(())
}
