//! Scan results and the leftover input they carry.

use alloc::collections::{LinkedList, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::input::StoragePolicy;
use crate::{ErasedRange, ScanError, ScanInput};

/// The unconsumed part of a scanned input.
///
/// Which variant a call produces is fixed by the input's
/// [`InputCategory`](crate::InputCategory): borrowed text stays borrowed, an
/// owned `String` keeps its buffer, and everything else is type-erased.
#[derive(Debug)]
pub enum Leftover<'a> {
    /// A subslice of borrowed input.
    View(&'a str),
    /// A subslice of a borrowed character slice or array.
    CharView(&'a [char]),
    /// The caller's `String`, moved in, with the unread part starting at
    /// byte `begin`.
    Owned {
        /// The original buffer.
        buf: String,
        /// Byte offset of the first unread character.
        begin: usize,
    },
    /// The remaining characters of a non-contiguous input.
    Erased(ErasedRange<'a>),
}

impl<'a> Leftover<'a> {
    /// The storage policy this leftover was produced under.
    pub fn policy(&self) -> StoragePolicy {
        match self {
            Self::View(_) | Self::CharView(_) => StoragePolicy::View,
            Self::Owned { .. } => StoragePolicy::OwnedString,
            Self::Erased(_) => StoragePolicy::Erased,
        }
    }

    /// The unread text, when it is stored contiguously.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::View(s) => Some(s),
            Self::Owned { buf, begin } => Some(&buf[*begin..]),
            Self::CharView(_) | Self::Erased(_) => None,
        }
    }

    /// The unread characters, when the input was a character slice.
    pub fn as_chars(&self) -> Option<&'a [char]> {
        match self {
            Self::CharView(chars) => Some(*chars),
            _ => None,
        }
    }

    /// Whether nothing is left. An erased leftover may have to pull one
    /// character from its source to answer, which it keeps.
    pub fn is_empty(&mut self) -> bool {
        match self {
            Self::View(s) => s.is_empty(),
            Self::CharView(chars) => chars.is_empty(),
            Self::Owned { buf, begin } => buf.len() == *begin,
            Self::Erased(r) => r.is_empty(),
        }
    }

    /// Copies the unread characters into a new `String`, draining an erased
    /// leftover.
    pub fn to_text(&mut self) -> String {
        match self {
            Self::View(s) => String::from(*s),
            Self::CharView(chars) => chars.iter().collect(),
            Self::Owned { buf, begin } => String::from(&buf[*begin..]),
            Self::Erased(r) => r.collect(),
        }
    }

    /// Converts any leftover into an erased range, ready to be scanned again.
    pub fn into_erased(self) -> ErasedRange<'a> {
        match self {
            Self::View(s) => ErasedRange::new(s.chars()),
            Self::CharView(chars) => ErasedRange::new(chars.iter().copied()),
            Self::Owned { buf, begin } => ErasedRange::new(buf[begin..].chars().collect::<Vec<_>>()),
            Self::Erased(r) => r,
        }
    }
}

/// Input types that can be rebuilt from the leftover of a scan over them.
pub trait Reconstruct<'a>: Sized {
    /// Rebuilds `Self` from `leftover`, or `None` if this leftover's storage
    /// cannot be expressed as `Self`.
    fn reconstruct(leftover: Leftover<'a>) -> Option<Self>;
}

impl<'a> Reconstruct<'a> for &'a str {
    fn reconstruct(leftover: Leftover<'a>) -> Option<Self> {
        match leftover {
            Leftover::View(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> Reconstruct<'a> for &'a [char] {
    fn reconstruct(leftover: Leftover<'a>) -> Option<Self> {
        leftover.as_chars()
    }
}

impl<'a> Reconstruct<'a> for String {
    fn reconstruct(mut leftover: Leftover<'a>) -> Option<Self> {
        Some(match leftover {
            Leftover::Owned { mut buf, begin } => {
                buf.drain(..begin);
                buf
            }
            _ => leftover.to_text(),
        })
    }
}

impl<'a> Reconstruct<'a> for ErasedRange<'a> {
    fn reconstruct(leftover: Leftover<'a>) -> Option<Self> {
        Some(leftover.into_erased())
    }
}

macro_rules! impl_reconstruct_collect {
    ($($t:ty),*) => {$(
        impl<'a> Reconstruct<'a> for $t {
            fn reconstruct(leftover: Leftover<'a>) -> Option<Self> {
                Some(leftover.into_erased().collect())
            }
        }
    )*};
}

impl_reconstruct_collect!(Vec<char>, VecDeque<char>, LinkedList<char>);

/// Outcome of a scanning call plus the input it did not consume.
///
/// `R` is the caller's original input type, `T` the scanned value for calls
/// that return one.
#[must_use]
#[derive(Debug)]
pub struct ScanResult<'a, R, T = ()> {
    outcome: Result<T, ScanError>,
    leftover: Leftover<'a>,
    original: PhantomData<fn() -> R>,
}

impl<'a, R, T> ScanResult<'a, R, T> {
    /// Whether the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The error, if the call failed.
    pub fn error(&self) -> Option<ScanError> {
        self.outcome.as_ref().err().copied()
    }

    /// The outcome as a plain `Result`.
    ///
    /// # Errors
    /// The scanning error, if any.
    pub fn value(&self) -> Result<&T, ScanError> {
        self.outcome.as_ref().map_err(|e| *e)
    }

    /// Consumes the result, keeping only the outcome.
    ///
    /// # Errors
    /// The scanning error, if any.
    pub fn into_value(self) -> Result<T, ScanError> {
        self.outcome
    }

    /// The unconsumed input.
    pub fn leftover(&self) -> &Leftover<'a> {
        &self.leftover
    }

    /// Consumes the result, keeping only the unconsumed input.
    pub fn into_leftover(self) -> Leftover<'a> {
        self.leftover
    }

    /// Splits the result into outcome and leftover.
    pub fn into_parts(self) -> (Result<T, ScanError>, Leftover<'a>) {
        (self.outcome, self.leftover)
    }

    /// The unconsumed input as text, for contiguous leftovers.
    pub fn range_as_str(&self) -> Option<&str> {
        self.leftover.as_str()
    }

    /// The unconsumed input as characters, for character-slice leftovers.
    pub fn range_as_chars(&self) -> Option<&'a [char]> {
        self.leftover.as_chars()
    }

    /// The unconsumed input copied into a `String`. Drains an erased
    /// leftover.
    pub fn range_as_string(&mut self) -> String {
        self.leftover.to_text()
    }

    /// Whether all input was consumed.
    pub fn is_empty(&mut self) -> bool {
        self.leftover.is_empty()
    }

    /// Rebuilds a value of the original input type from the leftover.
    pub fn reconstruct(self) -> Option<R>
    where
        R: Reconstruct<'a>,
    {
        R::reconstruct(self.leftover)
    }
}

/// Packs an outcome with the leftover of `I`'s cursor.
pub(crate) fn wrap_result<'a, I: ScanInput<'a>, T>(
    outcome: Result<T, ScanError>,
    cursor: I::Cursor,
) -> ScanResult<'a, I::Original, T> {
    let leftover = I::into_leftover(cursor);
    debug_assert_eq!(
        leftover.policy(),
        I::CATEGORY.policy(),
        "leftover storage disagrees with the input category"
    );
    ScanResult {
        outcome,
        leftover,
        original: PhantomData,
    }
}
