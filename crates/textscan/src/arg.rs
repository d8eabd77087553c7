//! Type-erased scan destinations.
//!
//! A format string is checked against a slice of [`Arg`]s, one per mutable
//! destination. The set of destination types is closed; anything that can be
//! scanned implements [`Scan`] and converts into an `Arg` with `From`.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// A mutable reference to one scan destination.
#[derive(Debug)]
#[non_exhaustive]
pub enum Arg<'v> {
    /// One code point.
    Char(&'v mut char),
    /// `0`/`1` or a named literal.
    Bool(&'v mut bool),
    /// `i8`.
    I8(&'v mut i8),
    /// `i16`.
    I16(&'v mut i16),
    /// `i32`.
    I32(&'v mut i32),
    /// `i64`.
    I64(&'v mut i64),
    /// `isize`.
    Isize(&'v mut isize),
    /// `u8`.
    U8(&'v mut u8),
    /// `u16`.
    U16(&'v mut u16),
    /// `u32`.
    U32(&'v mut u32),
    /// `u64`.
    U64(&'v mut u64),
    /// `usize`.
    Usize(&'v mut usize),
    /// `f32`.
    F32(&'v mut f32),
    /// `f64`.
    F64(&'v mut f64),
    /// A whitespace-delimited word.
    String(&'v mut String),
    /// A whitespace-delimited word, at most as long as the slice.
    Span(&'v mut [char]),
}

/// Types with a default-configured scanner and a "nothing scanned yet"
/// value.
pub trait Scan: Default {
    /// Borrows `self` as a destination.
    fn as_arg(&mut self) -> Arg<'_>;
}

macro_rules! impl_scan {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl Scan for $t {
            #[inline]
            fn as_arg(&mut self) -> Arg<'_> {
                Arg::$variant(self)
            }
        }
    )*};
}

impl_scan! {
    char => Char,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl<'v, T: Scan> From<&'v mut T> for Arg<'v> {
    #[inline]
    fn from(value: &'v mut T) -> Self {
        value.as_arg()
    }
}

impl<'v> From<&'v mut [char]> for Arg<'v> {
    #[inline]
    fn from(value: &'v mut [char]) -> Self {
        Arg::Span(value)
    }
}

impl<'v, const N: usize> From<&'v mut [char; N]> for Arg<'v> {
    #[inline]
    fn from(value: &'v mut [char; N]) -> Self {
        Arg::Span(value)
    }
}

/// A destination whose value is scanned and thrown away.
///
/// ```
/// use textscan::{Discard, scan};
///
/// let mut year = 0u32;
/// let result = scan!("2024-05", "{}-{}", year, Discard::<u8>::default());
/// assert!(result.is_ok());
/// assert_eq!(year, 2024);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Discard<T>(T);

impl<T: Scan> Scan for Discard<T> {
    fn as_arg(&mut self) -> Arg<'_> {
        self.0.as_arg()
    }
}

/// Shorthand for `Discard::<T>::default()`.
#[must_use]
pub fn discard<T: Scan>() -> Discard<T> {
    Discard::default()
}

/// A container [`scan_list`](crate::scan_list) can append to.
pub trait ListContainer {
    /// Element type.
    type Item: Scan;

    /// Appends one scanned element.
    fn push_item(&mut self, item: Self::Item);

    /// Elements currently held.
    fn item_count(&self) -> usize;

    /// The count at which scanning stops.
    fn capacity_limit(&self) -> usize {
        usize::MAX
    }
}

impl<T: Scan> ListContainer for Vec<T> {
    type Item = T;

    fn push_item(&mut self, item: T) {
        self.push(item);
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: Scan> ListContainer for VecDeque<T> {
    type Item = T;

    fn push_item(&mut self, item: T) {
        self.push_back(item);
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

/// A fixed-size, caller-owned buffer used as a list container.
///
/// Elements are written from the front; the list is full when the slice is.
///
/// ```
/// use textscan::{SpanList, scan_list};
///
/// let mut storage = [0i32; 2];
/// let mut list = SpanList::new(&mut storage);
/// let result = scan_list("1 2 3", &mut list, None);
/// assert!(result.is_ok());
/// assert_eq!(list.as_slice(), &[1, 2]);
/// assert_eq!(result.range_as_str(), Some(" 3"));
/// ```
#[derive(Debug)]
pub struct SpanList<'s, T> {
    span: &'s mut [T],
    len: usize,
}

impl<'s, T> SpanList<'s, T> {
    /// An empty list over `span`.
    pub fn new(span: &'s mut [T]) -> Self {
        Self { span, len: 0 }
    }

    /// The elements written so far.
    pub fn as_slice(&self) -> &[T] {
        &self.span[..self.len]
    }

    /// Number of elements written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Scan> ListContainer for SpanList<'_, T> {
    type Item = T;

    fn push_item(&mut self, item: T) {
        if let Some(slot) = self.span.get_mut(self.len) {
            *slot = item;
            self.len += 1;
        }
    }

    fn item_count(&self) -> usize {
        self.len
    }

    fn capacity_limit(&self) -> usize {
        self.span.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        let mut a = 0u16;
        let mut b = String::new();
        let mut c = ['x'; 3];
        assert!(matches!(Arg::from(&mut a), Arg::U16(_)));
        assert!(matches!(Arg::from(&mut b), Arg::String(_)));
        assert!(matches!(Arg::from(&mut c), Arg::Span(s) if s.len() == 3));
    }

    #[test]
    fn discard_forwards_to_the_inner_type() {
        let mut d = discard::<f64>();
        assert!(matches!(d.as_arg(), Arg::F64(_)));
    }

    #[test]
    fn span_list_stops_at_the_slice_length() {
        let mut storage = [0u8; 2];
        let mut list = SpanList::new(&mut storage);
        list.push_item(1);
        list.push_item(2);
        list.push_item(3);
        assert_eq!(list.as_slice(), &[1, 2]);
        assert_eq!(list.item_count(), list.capacity_limit());
    }
}
