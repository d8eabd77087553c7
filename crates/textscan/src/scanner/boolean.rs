use super::{ScanContext, parse_flags};
use crate::literal_matcher::{LiteralMatcher, Step};
use crate::{Cursor, ScanError};

/// `{}` or `{:l}`: `0`, `1`, or the locale's named literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolScanner {
    localized: bool,
}

impl BoolScanner {
    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        parse_flags(spec, "l", |_| {
            self.localized = true;
            Ok(())
        })
    }

    pub(crate) fn scan<C: Cursor + ?Sized>(
        &self,
        ctx: &mut ScanContext<'_, C>,
    ) -> Result<bool, ScanError> {
        match ctx.cursor.read_char()? {
            '0' => return Ok(false),
            '1' => return Ok(true),
            other => ctx.cursor.putback(other),
        }

        let locale = ctx.locale(self.localized);
        let mut matcher = LiteralMatcher::new(locale.true_literal(), locale.false_literal());
        while matcher.is_viable() {
            let ch = match ctx.cursor.read_char() {
                Ok(ch) => ch,
                Err(e) if e.is_eof() => break,
                Err(e) => return Err(e),
            };
            match matcher.step(ch) {
                Step::Done(value) => return Ok(value),
                Step::Reject => break,
                Step::NeedMore => {}
            }
        }
        Err(ScanError::InvalidScannedValue)
    }
}
