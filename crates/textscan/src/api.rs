//! Public scanning entry points.
//!
//! Each function turns its input into a cursor, runs, and hands back a
//! [`ScanResult`] holding the outcome and whatever the call did not consume.

use alloc::string::String;

use tracing::debug;

use crate::arg::ListContainer;
use crate::result::wrap_result;
use crate::scanner::ScanContext;
use crate::vscan::{scan_one, vscan, vscan_default};
use crate::{Arg, Cursor, DEFAULT_LOCALE, Locale, Scan, ScanError, ScanInput, ScanResult};

/// Scans `input` according to `format`, writing into `args`.
///
/// On failure the leftover starts right after the last literal or field
/// that matched, and the arguments scanned up to that point keep their
/// values.
///
/// ```
/// use textscan::{Arg, scan};
///
/// let (mut a, mut b) = (0i32, String::new());
/// let result = scan("42 foo", "{} {}", &mut [Arg::from(&mut a), Arg::from(&mut b)]);
/// assert!(result.is_ok());
/// assert_eq!((a, b.as_str()), (42, "foo"));
/// ```
pub fn scan<'a, I: ScanInput<'a>>(
    input: I,
    format: &str,
    args: &mut [Arg<'_>],
) -> ScanResult<'a, I::Original> {
    scan_localized(&DEFAULT_LOCALE, input, format, args)
}

/// [`scan`] under a caller-supplied locale. Only fields carrying the `l`
/// flag read digits, separators, the decimal point and boolean names from
/// it.
pub fn scan_localized<'a, I: ScanInput<'a>>(
    locale: &dyn Locale,
    input: I,
    format: &str,
    args: &mut [Arg<'_>],
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = vscan(&mut cursor, locale, format, args);
    wrap_result::<I, _>(outcome, cursor)
}

/// Scans one whitespace-separated value per argument, as if the format were
/// `"{} {} ..."`.
pub fn scan_default<'a, I: ScanInput<'a>>(
    input: I,
    args: &mut [Arg<'_>],
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = vscan_default(&mut cursor, &DEFAULT_LOCALE, args);
    wrap_result::<I, _>(outcome, cursor)
}

/// Scans a single value of type `T` and returns it in the result.
///
/// ```
/// use textscan::scan_value;
///
/// let result = scan_value::<f64, _>("  2.5 rest");
/// assert_eq!(result.value(), Ok(&2.5));
/// assert_eq!(result.range_as_str(), Some(" rest"));
/// ```
pub fn scan_value<'a, T: Scan, I: ScanInput<'a>>(input: I) -> ScanResult<'a, I::Original, T> {
    let mut cursor = input.prepare();
    let mut value = T::default();
    let outcome = {
        let mut ctx = ScanContext::new(&mut cursor, &DEFAULT_LOCALE);
        scan_one(&mut ctx, &mut value.as_arg())
    };
    wrap_result::<I, _>(outcome.map(|()| value), cursor)
}

/// Runs `body` under a checkpoint that covers the whole call.
fn atomically<C: Cursor, T>(
    cursor: &mut C,
    body: impl FnOnce(&mut C) -> Result<T, ScanError>,
) -> Result<T, ScanError> {
    cursor.set_checkpoint();
    let outcome = body(cursor);
    if outcome.is_err() {
        cursor.rollback();
    }
    cursor.advance_past_checkpoint();
    outcome
}

/// Reads up to the next `'\n'` into `line`. See [`getline_until`].
pub fn getline<'a, I: ScanInput<'a>>(input: I, line: &mut String) -> ScanResult<'a, I::Original> {
    getline_until(input, line, '\n')
}

/// Reads up to `delim` into `line`, consuming but not storing the delimiter.
///
/// Without a delimiter the rest of the input becomes the line. On empty
/// input nothing is consumed, `line` is left alone and the error is the
/// input's end tag.
///
/// ```
/// use textscan::getline_until;
///
/// let mut line = String::new();
/// let result = getline_until("a;b", &mut line, ';');
/// assert_eq!(line, "a");
/// assert_eq!(result.range_as_str(), Some("b"));
/// ```
pub fn getline_until<'a, I: ScanInput<'a>>(
    input: I,
    line: &mut String,
    delim: char,
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = atomically(&mut cursor, |cursor| read_line(cursor, line, delim));
    wrap_result::<I, _>(outcome, cursor)
}

fn read_line<C: Cursor>(cursor: &mut C, line: &mut String, delim: char) -> Result<(), ScanError> {
    if let Some(rest) = cursor.as_contiguous() {
        if rest.is_empty() {
            return Err(ScanError::EndOfRange);
        }
        let (text, consumed) = match rest.find(delim) {
            Some(i) => (&rest[..i], i + delim.len_utf8()),
            None => (rest, rest.len()),
        };
        line.clear();
        line.push_str(text);
        cursor.advance_bytes(consumed);
        return Ok(());
    }

    let mut text = String::new();
    let mut ch = cursor.read_char()?;
    loop {
        if ch == delim {
            break;
        }
        text.push(ch);
        ch = match cursor.read_char() {
            Ok(ch) => ch,
            Err(e) if e.is_eof() => break,
            Err(e) => return Err(e),
        };
    }
    *line = text;
    Ok(())
}

/// Skips input up to and including the first `delim`. Running out of input
/// after at least one character is not an error.
pub fn ignore_until<'a, I: ScanInput<'a>>(input: I, delim: char) -> ScanResult<'a, I::Original> {
    ignore_until_n(input, usize::MAX, delim)
}

/// Like [`ignore_until`], but consumes at most `n` characters, the
/// delimiter included.
///
/// ```
/// use textscan::ignore_until_n;
///
/// let result = ignore_until_n("abcdef", 3, 'z');
/// assert_eq!(result.range_as_str(), Some("def"));
/// ```
pub fn ignore_until_n<'a, I: ScanInput<'a>>(
    input: I,
    n: usize,
    delim: char,
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = atomically(&mut cursor, |cursor| skip_until(cursor, n, delim));
    wrap_result::<I, _>(outcome, cursor)
}

fn skip_until<C: Cursor>(cursor: &mut C, n: usize, delim: char) -> Result<(), ScanError> {
    if n == 0 {
        return Ok(());
    }
    if let Some(rest) = cursor.as_contiguous() {
        if rest.is_empty() {
            return Err(ScanError::EndOfRange);
        }
        let mut consumed = rest.len();
        for (count, (i, ch)) in rest.char_indices().enumerate() {
            if count == n {
                consumed = i;
                break;
            }
            if ch == delim {
                consumed = i + ch.len_utf8();
                break;
            }
        }
        cursor.advance_bytes(consumed);
        return Ok(());
    }

    if cursor.read_char()? == delim {
        return Ok(());
    }
    for _ in 1..n {
        match cursor.read_char() {
            Ok(ch) if ch == delim => break,
            Ok(_) => {}
            Err(e) if e.is_eof() => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Scans whitespace-separated values into `list` until input runs out, the
/// list is full, a value fails to scan, or, when `separator` is given, the
/// next character after a value is not the separator.
///
/// Running out of input or room is not an error. The separator is consumed
/// only when another value follows it.
///
/// ```
/// use textscan::scan_list;
///
/// let mut values = Vec::<i32>::new();
/// let result = scan_list("1,2,3 x", &mut values, Some(','));
/// assert!(result.is_ok());
/// assert_eq!(values, [1, 2, 3]);
/// assert_eq!(result.range_as_str(), Some(" x"));
/// ```
pub fn scan_list<'a, I: ScanInput<'a>, L: ListContainer>(
    input: I,
    list: &mut L,
    separator: Option<char>,
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = list_loop(&mut cursor, list, separator, None);
    wrap_result::<I, _>(outcome, cursor)
}

/// Like [`scan_list`], but also stops after consuming `until`. Whitespace
/// and at most one `separator` may appear between values.
///
/// ```
/// use textscan::scan_list_until;
///
/// let mut values = Vec::<i32>::new();
/// let result = scan_list_until("123 456\n789", &mut values, '\n', None);
/// assert_eq!(values, [123, 456]);
/// assert_eq!(result.range_as_str(), Some("789"));
/// ```
pub fn scan_list_until<'a, I: ScanInput<'a>, L: ListContainer>(
    input: I,
    list: &mut L,
    until: char,
    separator: Option<char>,
) -> ScanResult<'a, I::Original> {
    let mut cursor = input.prepare();
    let outcome = list_loop(&mut cursor, list, separator, Some(until));
    wrap_result::<I, _>(outcome, cursor)
}

fn list_loop<C: Cursor, L: ListContainer>(
    cursor: &mut C,
    list: &mut L,
    separator: Option<char>,
    until: Option<char>,
) -> Result<(), ScanError> {
    let mut ctx = ScanContext::new(cursor, &DEFAULT_LOCALE);
    while list.item_count() < list.capacity_limit() {
        let mut item = L::Item::default();
        match scan_one(&mut ctx, &mut item.as_arg()) {
            Ok(()) => list.push_item(item),
            Err(e) if e.is_eof() => {
                debug!(items = list.item_count(), "list ended with the input");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        let more = match until {
            Some(until) => next_element_until(&mut ctx, until, separator)?,
            None => next_element(&mut ctx, separator)?,
        };
        if !more {
            break;
        }
    }
    debug!(items = list.item_count(), "list ended");
    Ok(())
}

/// After a value: the separator, if any, must come next. It is only
/// consumed when something follows it.
fn next_element<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    separator: Option<char>,
) -> Result<bool, ScanError> {
    let Some(sep) = separator else {
        return Ok(true);
    };
    match ctx.cursor.peek_char() {
        Ok(ch) if ch == sep => {
            ctx.cursor.read_char()?;
            match ctx.cursor.peek_char() {
                Ok(_) => Ok(true),
                Err(e) if e.is_eof() => {
                    ctx.cursor.putback(ch);
                    Ok(false)
                }
                Err(e) => Err(e),
            }
        }
        Ok(_) => Ok(false),
        Err(e) if e.is_eof() => Ok(false),
        Err(e) => Err(e),
    }
}

/// After a value: skip whitespace and at most one separator; `until` ends
/// the list and is consumed.
fn next_element_until<C: Cursor + ?Sized>(
    ctx: &mut ScanContext<'_, C>,
    until: char,
    separator: Option<char>,
) -> Result<bool, ScanError> {
    let mut seen_separator = false;
    loop {
        let ch = match ctx.cursor.peek_char() {
            Ok(ch) => ch,
            Err(e) if e.is_eof() => return Ok(false),
            Err(e) => return Err(e),
        };
        if ch == until {
            ctx.cursor.read_char()?;
            return Ok(false);
        }
        if ctx.is_space(ch) {
            ctx.cursor.read_char()?;
        } else if Some(ch) == separator && !seen_separator {
            ctx.cursor.read_char()?;
            seen_separator = true;
        } else {
            return Ok(true);
        }
    }
}
