//! Locale facade.
//!
//! The engine never touches platform locale data. It asks a [`Locale`] a
//! handful of narrow questions, and every question takes or implies whether
//! the field opted into localized behaviour (`l` in the specifier). Fields
//! that did not opt in are answered from [`DefaultLocale`] so a scan reads
//! the same way whatever locale the caller passed.

use alloc::borrow::Cow;

/// Culture-specific character classification used by the scanners.
pub trait Locale {
    /// Whitespace test used for skipping and token termination.
    fn is_space(&self, ch: char) -> bool {
        ch.is_ascii_whitespace()
    }

    /// Whether `ch` is a digit in `radix` (2..=36).
    fn is_digit(&self, ch: char, radix: u32, localized: bool) -> bool {
        self.digit_value(ch, radix, localized).is_some()
    }

    /// Numeric value of `ch` in `radix`, if it is a digit.
    fn digit_value(&self, ch: char, radix: u32, localized: bool) -> Option<u32> {
        let _ = localized;
        ch.to_digit(radix)
    }

    /// Digit-grouping character, skipped by grouped integer fields.
    fn thousands_separator(&self) -> char {
        ','
    }

    /// Character separating the integer and fractional parts.
    fn decimal_point(&self) -> char {
        '.'
    }

    /// Literal naming `true`.
    fn true_literal(&self) -> &str {
        "true"
    }

    /// Literal naming `false`.
    fn false_literal(&self) -> &str {
        "false"
    }
}

/// Culture-invariant locale: ASCII digits and whitespace, `,` grouping, `.`
/// decimal point, `true`/`false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLocale;

impl Locale for DefaultLocale {}

/// The process-wide invariant locale.
pub static DEFAULT_LOCALE: DefaultLocale = DefaultLocale;

/// A locale assembled from explicit settings.
///
/// # Examples
///
/// ```rust
/// use textscan::{CustomLocale, Locale};
///
/// let fi = CustomLocale::default()
///     .with_thousands_separator(' ')
///     .with_decimal_point(',')
///     .with_literals("tosi", "epätosi");
/// assert_eq!(fi.decimal_point(), ',');
/// assert_eq!(fi.false_literal(), "epätosi");
/// ```
///
/// # Default
///
/// Identical to [`DefaultLocale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLocale {
    /// Digit-grouping character.
    pub thousands_separator: char,
    /// Decimal point.
    pub decimal_point: char,
    /// Literal naming `true`.
    pub true_literal: Cow<'static, str>,
    /// Literal naming `false`.
    pub false_literal: Cow<'static, str>,
    /// Treat every Unicode `White_Space` character as whitespace instead of
    /// ASCII whitespace only.
    pub unicode_whitespace: bool,
}

impl Default for CustomLocale {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            decimal_point: '.',
            true_literal: Cow::Borrowed("true"),
            false_literal: Cow::Borrowed("false"),
            unicode_whitespace: false,
        }
    }
}

impl CustomLocale {
    /// Sets the grouping character.
    #[must_use]
    pub fn with_thousands_separator(mut self, sep: char) -> Self {
        self.thousands_separator = sep;
        self
    }

    /// Sets the decimal point.
    #[must_use]
    pub fn with_decimal_point(mut self, point: char) -> Self {
        self.decimal_point = point;
        self
    }

    /// Sets the boolean literals.
    #[must_use]
    pub fn with_literals(
        mut self,
        truename: impl Into<Cow<'static, str>>,
        falsename: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.true_literal = truename.into();
        self.false_literal = falsename.into();
        self
    }

    /// Recognises all Unicode whitespace.
    #[must_use]
    pub fn with_unicode_whitespace(mut self, enabled: bool) -> Self {
        self.unicode_whitespace = enabled;
        self
    }
}

impl Locale for CustomLocale {
    fn is_space(&self, ch: char) -> bool {
        if self.unicode_whitespace {
            ch.is_whitespace()
        } else {
            ch.is_ascii_whitespace()
        }
    }

    fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    fn decimal_point(&self) -> char {
        self.decimal_point
    }

    fn true_literal(&self) -> &str {
        &self.true_literal
    }

    fn false_literal(&self) -> &str {
        &self.false_literal
    }
}
