//! Lazy tokenizer for scan format strings.
//!
//! `{}`, `{N}`, `{:spec}` and `{N:spec}` are replacement fields; `{{` and
//! `}}` stand for literal braces. Everything else is literal text, yielded
//! as borrowed runs of the format string.

use crate::ScanError;

/// One replacement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'f> {
    /// Explicit argument index, if the field named one.
    pub index: Option<usize>,
    /// Text between `:` and `}`; empty when there was no `:`.
    pub spec: &'f str,
}

/// A piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'f> {
    /// Literal text to match against the input.
    Literal(&'f str),
    /// A replacement field.
    Field(Field<'f>),
}

/// Iterator over the pieces of a format string.
#[derive(Debug, Clone)]
pub struct FormatParser<'f> {
    rest: &'f str,
}

impl<'f> FormatParser<'f> {
    /// Starts at the beginning of `format`.
    pub fn new(format: &'f str) -> Self {
        Self { rest: format }
    }

    fn field(&mut self) -> Result<Field<'f>, ScanError> {
        // `self.rest` starts just past the opening brace.
        let close = self
            .rest
            .find(['{', '}'])
            .filter(|&i| self.rest.as_bytes()[i] == b'}')
            .ok_or(ScanError::InvalidFormatString)?;
        let body = &self.rest[..close];
        self.rest = &self.rest[close + 1..];

        let (index, spec) = match body.split_once(':') {
            Some((index, spec)) => (index, spec),
            None => (body, ""),
        };
        let index = if index.is_empty() {
            None
        } else if index.bytes().all(|b| b.is_ascii_digit()) {
            Some(index.parse().map_err(|_| ScanError::InvalidFormatString)?)
        } else {
            return Err(ScanError::InvalidFormatString);
        };
        Ok(Field { index, spec })
    }
}

impl<'f> Iterator for FormatParser<'f> {
    type Item = Result<Piece<'f>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(brace) = self.rest.find(['{', '}']) else {
            let text = self.rest;
            self.rest = "";
            return Some(Ok(Piece::Literal(text)));
        };
        if brace > 0 {
            let text = &self.rest[..brace];
            self.rest = &self.rest[brace..];
            return Some(Ok(Piece::Literal(text)));
        }

        let open = self.rest.as_bytes()[0];
        if self.rest.as_bytes().get(1) == Some(&open) {
            let text = &self.rest[..1];
            self.rest = &self.rest[2..];
            return Some(Ok(Piece::Literal(text)));
        }
        if open == b'}' {
            self.rest = "";
            return Some(Err(ScanError::InvalidFormatString));
        }
        self.rest = &self.rest[1..];
        let field = self.field();
        if field.is_err() {
            self.rest = "";
        }
        Some(field.map(Piece::Field))
    }
}
