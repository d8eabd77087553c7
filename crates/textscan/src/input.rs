//! Classification of scannable inputs.
//!
//! Every input type belongs to one [`InputCategory`], and the category alone
//! decides how the unconsumed part is handed back. The table is a `const fn`
//! so it can be checked at compile time.

use alloc::collections::{LinkedList, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use crate::cursor::{BufferedCursor, CharSliceCursor, StrCursor};
use crate::{Cursor, ErasedRange, Leftover};

/// What kind of input a scanning call was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCategory {
    /// A `String` moved into the call.
    OwnedString,
    /// A borrowed `&String`.
    StringRef,
    /// A borrowed `&str`, string literals included.
    StrView,
    /// A borrowed `&[char]`.
    CharView,
    /// A borrowed fixed-size `&[char; N]`.
    FixedArray,
    /// An [`ErasedRange`] moved into the call.
    ErasedOwned,
    /// An [`ErasedRange`] scanned in place through `&mut`.
    ErasedRef,
    /// A byte stream decoded as UTF-8, such as a file or a socket.
    Stream,
    /// Any other sequence of characters.
    Other,
}

/// How a leftover is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoragePolicy {
    /// A subslice of the caller's text.
    View,
    /// The caller's own `String` plus an offset.
    OwnedString,
    /// A type-erased character range.
    Erased,
}

impl InputCategory {
    /// The storage policy for this category.
    pub const fn policy(self) -> StoragePolicy {
        match self {
            Self::OwnedString => StoragePolicy::OwnedString,
            Self::StringRef | Self::StrView | Self::CharView | Self::FixedArray => {
                StoragePolicy::View
            }
            Self::ErasedOwned | Self::ErasedRef | Self::Stream | Self::Other => {
                StoragePolicy::Erased
            }
        }
    }
}

const _: () = {
    assert!(matches!(InputCategory::StringRef.policy(), StoragePolicy::View));
    assert!(matches!(InputCategory::CharView.policy(), StoragePolicy::View));
    assert!(matches!(InputCategory::FixedArray.policy(), StoragePolicy::View));
    assert!(matches!(InputCategory::OwnedString.policy(), StoragePolicy::OwnedString));
    assert!(matches!(InputCategory::ErasedRef.policy(), StoragePolicy::Erased));
    assert!(matches!(InputCategory::Stream.policy(), StoragePolicy::Erased));
    assert!(matches!(InputCategory::Other.policy(), StoragePolicy::Erased));
};

/// An input the engine can scan.
///
/// The input is turned into a cursor for the duration of the call, then the
/// cursor is turned into the [`Leftover`] the category prescribes.
pub trait ScanInput<'a>: Sized {
    /// Fixed category of this input type.
    const CATEGORY: InputCategory;
    /// The type the leftover can be rebuilt into.
    type Original;
    /// Cursor driven while scanning.
    type Cursor: Cursor;

    /// Starts reading.
    fn prepare(self) -> Self::Cursor;

    /// Packages what the cursor has not consumed.
    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a>;
}

impl<'a> ScanInput<'a> for &'a str {
    const CATEGORY: InputCategory = InputCategory::StrView;
    type Original = &'a str;
    type Cursor = StrCursor<&'a str>;

    fn prepare(self) -> Self::Cursor {
        StrCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        let (src, at) = cursor.into_parts();
        Leftover::View(&src[at..])
    }
}

impl<'a> ScanInput<'a> for &'a String {
    const CATEGORY: InputCategory = InputCategory::StringRef;
    type Original = String;
    type Cursor = StrCursor<&'a str>;

    fn prepare(self) -> Self::Cursor {
        StrCursor::new(self.as_str())
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        let (src, at) = cursor.into_parts();
        Leftover::View(&src[at..])
    }
}

impl<'a> ScanInput<'a> for String {
    const CATEGORY: InputCategory = InputCategory::OwnedString;
    type Original = String;
    type Cursor = StrCursor<String>;

    fn prepare(self) -> Self::Cursor {
        StrCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        let (buf, begin) = cursor.into_parts();
        Leftover::Owned { buf, begin }
    }
}

impl<'a> ScanInput<'a> for ErasedRange<'a> {
    const CATEGORY: InputCategory = InputCategory::ErasedOwned;
    type Original = ErasedRange<'a>;
    type Cursor = BufferedCursor<ErasedRange<'a>>;

    fn prepare(self) -> Self::Cursor {
        BufferedCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        Leftover::Erased(cursor.into_source())
    }
}

impl<'a, 'b: 'a> ScanInput<'a> for &'a mut ErasedRange<'b> {
    const CATEGORY: InputCategory = InputCategory::ErasedRef;
    type Original = ErasedRange<'a>;
    type Cursor = BufferedCursor<&'a mut ErasedRange<'b>>;

    fn prepare(self) -> Self::Cursor {
        BufferedCursor::new(self)
    }

    /// Characters handed back during the scan are already at the front of
    /// the caller's range, so the leftover just borrows it.
    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        Leftover::Erased(ErasedRange::new(cursor.into_source()))
    }
}

macro_rules! impl_char_container {
    ($($container:ident),*) => {$(
        impl<'a> ScanInput<'a> for $container<char> {
            const CATEGORY: InputCategory = InputCategory::Other;
            type Original = $container<char>;
            type Cursor = BufferedCursor<ErasedRange<'a>>;

            fn prepare(self) -> Self::Cursor {
                BufferedCursor::new(ErasedRange::new(self))
            }

            fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
                Leftover::Erased(cursor.into_source())
            }
        }

        impl<'a> ScanInput<'a> for &'a $container<char> {
            const CATEGORY: InputCategory = InputCategory::Other;
            type Original = $container<char>;
            type Cursor = BufferedCursor<ErasedRange<'a>>;

            fn prepare(self) -> Self::Cursor {
                BufferedCursor::new(ErasedRange::new(self.iter().copied()))
            }

            fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
                Leftover::Erased(cursor.into_source())
            }
        }
    )*};
}

impl_char_container!(Vec, VecDeque, LinkedList);

impl<'a> ScanInput<'a> for &'a [char] {
    const CATEGORY: InputCategory = InputCategory::CharView;
    type Original = &'a [char];
    type Cursor = CharSliceCursor<'a>;

    fn prepare(self) -> Self::Cursor {
        CharSliceCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        Leftover::CharView(cursor.rest())
    }
}

/// The leftover of a fixed-size array is a subslice of it, so it rebuilds
/// into `&[char]` rather than into an array.
impl<'a, const N: usize> ScanInput<'a> for &'a [char; N] {
    const CATEGORY: InputCategory = InputCategory::FixedArray;
    type Original = &'a [char];
    type Cursor = CharSliceCursor<'a>;

    fn prepare(self) -> Self::Cursor {
        CharSliceCursor::new(self)
    }

    fn into_leftover(cursor: Self::Cursor) -> Leftover<'a> {
        Leftover::CharView(cursor.rest())
    }
}
