use super::{ScanContext, parse_flags};
use crate::{Cursor, ScanError};

/// `{}`: exactly one code point, whitespace included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharScanner;

impl CharScanner {
    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        parse_flags(spec, "", |_| Ok(()))
    }

    pub(crate) fn scan<C: Cursor + ?Sized>(
        &self,
        ctx: &mut ScanContext<'_, C>,
    ) -> Result<char, ScanError> {
        ctx.cursor.read_char()
    }
}
