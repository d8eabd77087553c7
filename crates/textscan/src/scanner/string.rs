use alloc::string::String;

use super::{ScanContext, parse_flags};
use crate::{Cursor, ScanError};

/// `{}`: a whitespace-delimited word, replacing the destination's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringScanner;

impl StringScanner {
    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        parse_flags(spec, "", |_| Ok(()))
    }

    pub(crate) fn scan<C: Cursor + ?Sized>(
        &self,
        ctx: &mut ScanContext<'_, C>,
        dst: &mut String,
    ) -> Result<(), ScanError> {
        if let Some(rest) = ctx.cursor.as_contiguous() {
            let len = rest.find(|c| ctx.is_space(c)).unwrap_or(rest.len());
            if len == 0 {
                return Err(ScanError::InvalidScannedValue);
            }
            dst.clear();
            dst.push_str(&rest[..len]);
            ctx.cursor.advance_bytes(len);
            return Ok(());
        }

        let mut word = String::new();
        loop {
            match ctx.cursor.peek_char() {
                Ok(ch) if !ctx.is_space(ch) => word.push(ctx.cursor.read_char()?),
                Ok(_) => break,
                Err(e) if e.is_eof() && !word.is_empty() => break,
                Err(e) => return Err(e),
            }
        }
        if word.is_empty() {
            return Err(ScanError::InvalidScannedValue);
        }
        *dst = word;
        Ok(())
    }
}

/// `{}` into `&mut [char]`: up to `len` non-whitespace code points. Slots
/// past the word are reset to `'\0'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanScanner;

impl SpanScanner {
    pub(crate) fn parse(&mut self, spec: &str) -> Result<(), ScanError> {
        parse_flags(spec, "", |_| Ok(()))
    }

    pub(crate) fn scan<C: Cursor + ?Sized>(
        &self,
        ctx: &mut ScanContext<'_, C>,
        dst: &mut [char],
    ) -> Result<(), ScanError> {
        if dst.is_empty() {
            return Err(ScanError::InvalidScannedValue);
        }
        let mut filled = 0;
        while filled < dst.len() {
            match ctx.cursor.peek_char() {
                Ok(ch) if !ctx.is_space(ch) => {
                    dst[filled] = ctx.cursor.read_char()?;
                    filled += 1;
                }
                Ok(_) => break,
                Err(e) if e.is_eof() && filled > 0 => break,
                Err(e) => return Err(e),
            }
        }
        if filled == 0 {
            return Err(ScanError::InvalidScannedValue);
        }
        dst[filled..].fill('\0');
        Ok(())
    }
}
