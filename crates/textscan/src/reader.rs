//! Byte streams decoded as UTF-8.
//!
//! Bytes are pulled from the reader one at a time as characters are decoded,
//! so nothing past the last character the engine looked at is consumed from
//! the underlying buffer. Characters the engine hands back stay in a small
//! queue in front of the reader.

use std::collections::VecDeque;
use std::io::BufRead;
use std::string::String;

use crate::cursor::{BufferedCursor, CharSource};
use crate::input::{InputCategory, ScanInput};
use crate::{ErasedRange, Leftover, ScanError};

/// Decodes one character from `reader`.
///
/// # Errors
/// [`ScanError::EndOfStream`] at end of input, [`ScanError::InvalidEncoding`]
/// for malformed or truncated UTF-8, [`ScanError::Io`] if the reader fails.
pub(crate) fn decode_char(reader: &mut impl BufRead) -> Result<char, ScanError> {
    let Some(first) = read_byte(reader)? else {
        return Err(ScanError::EndOfStream);
    };
    let width = match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return Err(ScanError::InvalidEncoding),
    };
    let mut bytes = [first, 0, 0, 0];
    for slot in &mut bytes[1..width] {
        *slot = read_byte(reader)?.ok_or(ScanError::InvalidEncoding)?;
    }
    match bstr::decode_utf8(&bytes[..width]) {
        (Some(ch), n) if n == width => Ok(ch),
        _ => Err(ScanError::InvalidEncoding),
    }
}

fn read_byte(reader: &mut impl BufRead) -> Result<Option<u8>, ScanError> {
    let available = reader.fill_buf()?;
    let Some(&byte) = available.first() else {
        return Ok(None);
    };
    reader.consume(1);
    Ok(Some(byte))
}

/// A [`CharSource`] over any buffered byte reader: files, sockets, or
/// in-memory byte buffers.
///
/// ```
/// use textscan::{Arg, ReaderSource, scan};
///
/// let (mut a, mut b) = (0u16, String::new());
/// let result = scan(
///     ReaderSource::new("80 http\n".as_bytes()),
///     "{} {}",
///     &mut [Arg::from(&mut a), Arg::from(&mut b)],
/// );
/// assert!(result.is_ok());
/// assert_eq!((a, b.as_str()), (80, "http"));
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `reader`; nothing is read until the first scan.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Releases the reader together with the characters decoded from it but
    /// not consumed.
    pub fn into_parts(self) -> (R, String) {
        (self.reader, self.pending.into_iter().collect())
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<char, ScanError> {
        if let Some(ch) = self.pending.pop_front() {
            return Ok(ch);
        }
        decode_char(&mut self.reader)
    }

    fn unread(&mut self, ch: char) {
        self.pending.push_front(ch);
    }
}

/// Yields characters until end of stream. A decoding or read error also
/// ends the iteration.
impl<R: BufRead> Iterator for ReaderSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.next_char().ok()
    }
}

impl<'a, R: BufRead + 'a> ScanInput<'a> for ReaderSource<R> {
    const CATEGORY: InputCategory = InputCategory::Stream;
    type Original = ErasedRange<'a>;
    type Cursor = BufferedCursor<ReaderSource<R>>;

    fn prepare(self) -> Self::Cursor {
        BufferedCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        Leftover::Erased(ErasedRange::new(cursor.into_source()))
    }
}
