//! Type-erased character ranges.
//!
//! Any character sequence that is neither contiguous text nor already erased
//! is moved (or borrowed) into an [`ErasedRange`]. The range owns a boxed
//! iterator plus a small front queue: the queue holds characters that were
//! pulled from the iterator but handed back by a cursor (peek, putback,
//! rollback). The front queue always precedes the iterator, so the first
//! unread character is reachable from the range's own start by forward
//! iteration.

use alloc::{boxed::Box, collections::VecDeque};
use core::fmt;

use crate::{ScanError, cursor::CharSource};

/// A character sequence whose concrete type has been forgotten.
pub struct ErasedRange<'a> {
    iter: Box<dyn Iterator<Item = char> + 'a>,
    front: VecDeque<char>,
}

impl<'a> ErasedRange<'a> {
    /// Erases `chars`.
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'a,
    {
        Self {
            iter: Box::new(chars.into_iter()),
            front: VecDeque::new(),
        }
    }

    /// Whether the range has no characters left. Pulls at most one
    /// character from the underlying iterator.
    pub fn is_empty(&mut self) -> bool {
        if !self.front.is_empty() {
            return false;
        }
        match self.iter.next() {
            Some(ch) => {
                self.front.push_back(ch);
                false
            }
            None => true,
        }
    }
}

impl Iterator for ErasedRange<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.front.pop_front().or_else(|| self.iter.next())
    }
}

impl CharSource for ErasedRange<'_> {
    #[inline]
    fn next_char(&mut self) -> Result<char, ScanError> {
        self.next().ok_or(ScanError::EndOfRange)
    }

    #[inline]
    fn unread(&mut self, ch: char) {
        self.front.push_front(ch);
    }
}

impl fmt::Debug for ErasedRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedRange")
            .field("front", &self.front)
            .finish_non_exhaustive()
    }
}
