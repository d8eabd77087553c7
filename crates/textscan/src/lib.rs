//! Type-safe text scanning, the inverse of formatted printing.
//!
//! A format string such as `"{} {:x}"` is matched against an input, and each
//! replacement field writes one value into a caller-supplied destination.
//! Every call returns a [`ScanResult`] that carries the outcome together with
//! the part of the input that was not consumed; borrowed text comes back as a
//! subslice, an owned `String` comes back with its buffer intact, and other
//! character sequences come back type-erased.
//!
//! ```
//! use textscan::scan;
//!
//! let (mut name, mut age) = (String::new(), 0u32);
//! let result = scan!("alice 31 extra", "{} {}", name, age);
//! assert!(result.is_ok());
//! assert_eq!((name.as_str(), age), ("alice", 31));
//! assert_eq!(result.range_as_str(), Some(" extra"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod api;
mod arg;
mod cursor;
mod erased;
mod error;
mod format;
mod input;
mod literal_matcher;
mod locale;
mod parse;
#[cfg(feature = "std")]
mod reader;
mod result;
mod scanner;
#[cfg(feature = "std")]
mod stdin;
mod vscan;


pub use api::{
    getline, getline_until, ignore_until, ignore_until_n, scan, scan_default, scan_list,
    scan_list_until, scan_localized, scan_value,
};
pub use arg::{Arg, Discard, ListContainer, Scan, SpanList, discard};
pub use cursor::{BufferedCursor, CharSliceCursor, CharSource, Cursor, StrCursor};
pub use erased::ErasedRange;
pub use error::ScanError;
pub use format::{Field, FormatParser, Piece};
pub use input::{InputCategory, ScanInput, StoragePolicy};
pub use locale::{CustomLocale, DEFAULT_LOCALE, DefaultLocale, Locale};
pub use parse::{parse_float, parse_integer};
#[cfg(feature = "std")]
pub use reader::ReaderSource;
pub use result::{Leftover, Reconstruct, ScanResult};
pub use scanner::{
    BoolScanner, CharScanner, FloatScanner, Integer, IntegerScanner, ScanContext, SpanScanner,
    StringScanner, ValueScanner,
};
#[cfg(feature = "std")]
pub use stdin::{StdinSource, init_stdin, input, prompt, shutdown_stdin, with_stdin};
pub use vscan::{vscan, vscan_default};

/// Scans `input` against `format`, one destination per trailing argument.
///
/// Each argument is a place expression; the macro borrows it mutably.
///
/// ```
/// use textscan::scan;
///
/// let (mut x, mut y) = (0i32, 0.0f64);
/// let result = scan!("(3, 4.5)", "({}, {})", x, y);
/// assert!(result.is_ok());
/// assert_eq!((x, y), (3, 4.5));
/// ```
#[macro_export]
macro_rules! scan {
    ($input:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::scan($input, $format, &mut [$($crate::Arg::from(&mut $arg)),*])
    };
}

/// Scans one whitespace-separated value per argument.
///
/// ```
/// use textscan::scan_default;
///
/// let (mut a, mut b) = (0u8, 'x');
/// assert!(scan_default!("7 z", a, b).is_ok());
/// assert_eq!((a, b), (7, 'z'));
/// ```
#[macro_export]
macro_rules! scan_default {
    ($input:expr $(, $arg:expr)* $(,)?) => {
        $crate::scan_default($input, &mut [$($crate::Arg::from(&mut $arg)),*])
    };
}

/// [`scan!`] with an explicit locale as the first argument.
///
/// ```
/// use textscan::{CustomLocale, scan_localized};
///
/// let fi = CustomLocale::default().with_decimal_point(',');
/// let mut v = 0.0f64;
/// assert!(scan_localized!(&fi, "100,2", "{:l}", v).is_ok());
/// assert_eq!(v, 100.2);
/// ```
#[macro_export]
macro_rules! scan_localized {
    ($locale:expr, $input:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::scan_localized($locale, $input, $format, &mut [$($crate::Arg::from(&mut $arg)),*])
    };
}

/// Scans standard input against a format string.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! input {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::input($format, &mut [$($crate::Arg::from(&mut $arg)),*])
    };
}

/// Prints a prompt, then scans standard input against a format string.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! prompt {
    ($prompt:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::prompt($prompt, $format, &mut [$($crate::Arg::from(&mut $arg)),*])
    };
}
