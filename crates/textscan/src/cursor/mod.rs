//! Cursor: the backtracking read interface every scanner drives.
//!
//! Two implementations cover every input category:
//! - [`StrCursor`] walks contiguous UTF‑8 storage (`&str`, `&String`,
//!   `String`). Putback and rollback are position moves, and the unread tail
//!   is exposed through [`Cursor::as_contiguous`] so scanners can identify a
//!   whole token by slicing instead of copying it character by character.
//! - [`BufferedCursor`] reads one `char` at a time from a [`CharSource`]
//!   (erased ranges, standard input). Characters read since the active
//!   checkpoint are retained so a rollback can hand them back to the front of
//!   the source; nothing else is buffered.
//!
//! Invariants
//! - The position never leaves `[begin, end]`.
//! - `putback` only undoes the single most recently read code point. Anything
//!   wider must go through `set_checkpoint`/`rollback`. Violations are engine
//!   bugs and panic.
//! - At most one checkpoint is live at a time.

use alloc::vec::Vec;

use crate::ScanError;

/// Position-tracking, backtracking-capable read interface over a source.
pub trait Cursor {
    /// Consumes and returns the next character.
    ///
    /// # Errors
    /// The source's end tag when exhausted, or a source failure.
    fn read_char(&mut self) -> Result<char, ScanError>;

    /// Returns the next character without consuming it.
    ///
    /// # Errors
    /// Same as [`Cursor::read_char`].
    fn peek_char(&mut self) -> Result<char, ScanError>;

    /// Undoes the read of `ch`, which must be the character returned by the
    /// immediately preceding [`Cursor::read_char`].
    ///
    /// # Panics
    /// If `ch` is not that character, or if it was already put back.
    fn putback(&mut self, ch: char);

    /// Saves the current position, replacing any previous checkpoint.
    fn set_checkpoint(&mut self);

    /// Restores the position saved by [`Cursor::set_checkpoint`]. The
    /// checkpoint stays live.
    ///
    /// # Panics
    /// If no checkpoint is set.
    fn rollback(&mut self);

    /// Commits everything read since the checkpoint and discards it.
    fn advance_past_checkpoint(&mut self);

    /// Number of characters consumed since the cursor was created.
    fn position(&self) -> usize;

    /// The unread input as one slice, when the source is contiguous.
    fn as_contiguous(&self) -> Option<&str> {
        None
    }

    /// Skips `n` bytes of the slice returned by [`Cursor::as_contiguous`].
    /// `n` must fall on a character boundary.
    ///
    /// # Panics
    /// On cursors that are not contiguous.
    fn advance_bytes(&mut self, n: usize) {
        let _ = n;
        panic!("advance_bytes on a non-contiguous cursor");
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    #[inline]
    fn read_char(&mut self) -> Result<char, ScanError> {
        (**self).read_char()
    }
    #[inline]
    fn peek_char(&mut self) -> Result<char, ScanError> {
        (**self).peek_char()
    }
    #[inline]
    fn putback(&mut self, ch: char) {
        (**self).putback(ch);
    }
    fn set_checkpoint(&mut self) {
        (**self).set_checkpoint();
    }
    fn rollback(&mut self) {
        (**self).rollback();
    }
    fn advance_past_checkpoint(&mut self) {
        (**self).advance_past_checkpoint();
    }
    fn position(&self) -> usize {
        (**self).position()
    }
    fn as_contiguous(&self) -> Option<&str> {
        (**self).as_contiguous()
    }
    fn advance_bytes(&mut self, n: usize) {
        (**self).advance_bytes(n);
    }
}

// ------------------------------------------------------------------------------------------------
// Contiguous storage
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mark {
    byte: usize,
    chars: usize,
}

/// Cursor over contiguous UTF‑8 storage.
///
/// `S` is whatever owns or borrows the text: `&str` for views, `String` when
/// the input was handed over by value. The cursor hands `S` back through
/// [`StrCursor::into_parts`] so the result constructor can keep the caller's
/// buffer alive without copying it.
#[derive(Debug, Clone)]
pub struct StrCursor<S> {
    src: S,
    at: Mark,
    checkpoint: Option<Mark>,
    last: Option<char>,
}

impl<S: AsRef<str>> StrCursor<S> {
    /// Wraps `src` with the position at its first byte.
    pub fn new(src: S) -> Self {
        Self {
            src,
            at: Mark { byte: 0, chars: 0 },
            checkpoint: None,
            last: None,
        }
    }

    /// Byte offset of the first unread character.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.at.byte
    }

    /// Unread tail of the storage.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.src.as_ref()[self.at.byte..]
    }

    /// Releases the storage and the byte offset of the first unread
    /// character.
    pub fn into_parts(self) -> (S, usize) {
        (self.src, self.at.byte)
    }
}

impl<S: AsRef<str>> Cursor for StrCursor<S> {
    #[inline]
    fn read_char(&mut self) -> Result<char, ScanError> {
        let ch = self.rest().chars().next().ok_or(ScanError::EndOfRange)?;
        self.at.byte += ch.len_utf8();
        self.at.chars += 1;
        self.last = Some(ch);
        Ok(ch)
    }

    #[inline]
    fn peek_char(&mut self) -> Result<char, ScanError> {
        self.rest().chars().next().ok_or(ScanError::EndOfRange)
    }

    fn putback(&mut self, ch: char) {
        assert_eq!(
            self.last.take(),
            Some(ch),
            "putback beyond the one-character lookahead"
        );
        self.at.byte -= ch.len_utf8();
        self.at.chars -= 1;
    }

    fn set_checkpoint(&mut self) {
        self.checkpoint = Some(self.at);
    }

    fn rollback(&mut self) {
        let Some(mark) = self.checkpoint else {
            panic!("rollback without a checkpoint");
        };
        self.at = mark;
        self.last = None;
    }

    fn advance_past_checkpoint(&mut self) {
        self.checkpoint = None;
    }

    fn position(&self) -> usize {
        self.at.chars
    }

    fn as_contiguous(&self) -> Option<&str> {
        Some(self.rest())
    }

    fn advance_bytes(&mut self, n: usize) {
        let skipped = &self.rest()[..n];
        self.at.chars += skipped.chars().count();
        self.at.byte += n;
        self.last = None;
    }
}

/// Cursor over a borrowed slice of characters.
///
/// Like [`StrCursor`] it only moves an index, so the leftover is a subslice
/// of the caller's own slice.
#[derive(Debug, Clone)]
pub struct CharSliceCursor<'a> {
    src: &'a [char],
    at: usize,
    checkpoint: Option<usize>,
    last: Option<char>,
}

impl<'a> CharSliceCursor<'a> {
    /// Wraps `src` with the position at its first character.
    pub fn new(src: &'a [char]) -> Self {
        Self {
            src,
            at: 0,
            checkpoint: None,
            last: None,
        }
    }

    /// Unread tail of the slice.
    pub fn rest(&self) -> &'a [char] {
        &self.src[self.at..]
    }
}

impl Cursor for CharSliceCursor<'_> {
    fn read_char(&mut self) -> Result<char, ScanError> {
        let ch = self.peek_char()?;
        self.at += 1;
        self.last = Some(ch);
        Ok(ch)
    }

    fn peek_char(&mut self) -> Result<char, ScanError> {
        self.src.get(self.at).copied().ok_or(ScanError::EndOfRange)
    }

    fn putback(&mut self, ch: char) {
        assert_eq!(
            self.last.take(),
            Some(ch),
            "putback beyond the one-character lookahead"
        );
        self.at -= 1;
    }

    fn set_checkpoint(&mut self) {
        self.checkpoint = Some(self.at);
    }

    fn rollback(&mut self) {
        let Some(at) = self.checkpoint else {
            panic!("rollback without a checkpoint");
        };
        self.at = at;
        self.last = None;
    }

    fn advance_past_checkpoint(&mut self) {
        self.checkpoint = None;
    }

    fn position(&self) -> usize {
        self.at
    }
}

// ------------------------------------------------------------------------------------------------
// Character-at-a-time sources
// ------------------------------------------------------------------------------------------------

/// A producer of characters that can take characters back at its front.
///
/// This is the only capability the engine needs from a non-contiguous
/// source. [`BufferedCursor`] layers putback and checkpoints on top.
pub trait CharSource {
    /// Produces the next character.
    ///
    /// # Errors
    /// The source's end tag when exhausted, or a source failure.
    fn next_char(&mut self) -> Result<char, ScanError>;

    /// Pushes `ch` back so the next [`CharSource::next_char`] returns it.
    fn unread(&mut self, ch: char);
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<char, ScanError> {
        (**self).next_char()
    }
    fn unread(&mut self, ch: char) {
        (**self).unread(ch);
    }
}

/// Cursor over a [`CharSource`] with bounded putback and one checkpoint.
#[derive(Debug)]
pub struct BufferedCursor<S> {
    source: S,
    /// Characters consumed since the live checkpoint, oldest first.
    history: Option<Vec<char>>,
    last: Option<char>,
    consumed: usize,
}

impl<S: CharSource> BufferedCursor<S> {
    /// Wraps `source` with nothing consumed.
    pub fn new(source: S) -> Self {
        Self {
            source,
            history: None,
            last: None,
            consumed: 0,
        }
    }

    /// Releases the source. Every character that was peeked, put back, or
    /// rolled back is already at the source's front.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: CharSource> Cursor for BufferedCursor<S> {
    fn read_char(&mut self) -> Result<char, ScanError> {
        let ch = self.source.next_char()?;
        if let Some(history) = &mut self.history {
            history.push(ch);
        }
        self.last = Some(ch);
        self.consumed += 1;
        Ok(ch)
    }

    fn peek_char(&mut self) -> Result<char, ScanError> {
        let ch = self.source.next_char()?;
        self.source.unread(ch);
        Ok(ch)
    }

    fn putback(&mut self, ch: char) {
        assert_eq!(
            self.last.take(),
            Some(ch),
            "putback beyond the one-character lookahead"
        );
        if let Some(history) = &mut self.history {
            history.pop();
        }
        self.source.unread(ch);
        self.consumed -= 1;
    }

    fn set_checkpoint(&mut self) {
        match &mut self.history {
            Some(history) => history.clear(),
            None => self.history = Some(Vec::new()),
        }
    }

    fn rollback(&mut self) {
        let Some(history) = &mut self.history else {
            panic!("rollback without a checkpoint");
        };
        self.consumed -= history.len();
        for ch in history.drain(..).rev() {
            self.source.unread(ch);
        }
        self.last = None;
    }

    fn advance_past_checkpoint(&mut self) {
        self.history = None;
    }

    fn position(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests;
