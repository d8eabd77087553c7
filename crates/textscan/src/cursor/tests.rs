use alloc::string::String;

use super::*;
use crate::ErasedRange;

fn erased(s: &str) -> BufferedCursor<ErasedRange<'_>> {
    BufferedCursor::new(ErasedRange::new(s.chars()))
}

#[test]
fn str_cursor_reads_multibyte_and_puts_back_whole_code_point() {
    let mut c = StrCursor::new("ÅΩx");
    assert_eq!(c.read_char(), Ok('Å'));
    assert_eq!(c.read_char(), Ok('Ω'));
    assert_eq!(c.byte_offset(), 4);
    c.putback('Ω');
    assert_eq!(c.byte_offset(), 2);
    assert_eq!(c.position(), 1);
    assert_eq!(c.rest(), "Ωx");
}

#[test]
fn str_cursor_end_of_range() {
    let mut c = StrCursor::new("");
    assert_eq!(c.peek_char(), Err(ScanError::EndOfRange));
    assert_eq!(c.read_char(), Err(ScanError::EndOfRange));
}

#[test]
#[should_panic(expected = "putback beyond")]
fn str_cursor_second_putback_panics() {
    let mut c = StrCursor::new("ab");
    c.read_char().unwrap();
    let b = c.read_char().unwrap();
    c.putback(b);
    c.putback('a');
}

#[test]
#[should_panic(expected = "rollback without a checkpoint")]
fn rollback_without_checkpoint_panics() {
    let mut c = StrCursor::new("ab");
    c.read_char().unwrap();
    c.rollback();
}

#[test]
fn str_cursor_rollback_restores_checkpoint() {
    let mut c = StrCursor::new("hello world");
    c.set_checkpoint();
    for _ in 0..5 {
        c.read_char().unwrap();
    }
    c.rollback();
    assert_eq!(c.rest(), "hello world");
    assert_eq!(c.position(), 0);
}

#[test]
fn str_cursor_advance_bytes_counts_chars() {
    let mut c = StrCursor::new("äbc d");
    let token_len = c.as_contiguous().unwrap().find(' ').unwrap();
    c.advance_bytes(token_len);
    assert_eq!(c.position(), 3);
    assert_eq!(c.rest(), " d");
}

#[test]
fn buffered_cursor_rollback_returns_history_in_order() {
    let mut c = erased("abcdef");
    c.read_char().unwrap();
    c.set_checkpoint();
    c.read_char().unwrap();
    c.read_char().unwrap();
    c.read_char().unwrap();
    assert_eq!(c.position(), 4);
    c.rollback();
    assert_eq!(c.position(), 1);
    assert_eq!(c.into_source().collect::<String>(), "bcdef");
}

#[test]
fn buffered_cursor_peek_does_not_consume() {
    let mut c = erased("xy");
    assert_eq!(c.peek_char(), Ok('x'));
    assert_eq!(c.peek_char(), Ok('x'));
    assert_eq!(c.read_char(), Ok('x'));
    assert_eq!(c.position(), 1);
}

#[test]
fn buffered_cursor_putback_then_rollback() {
    let mut c = erased("123 ");
    c.set_checkpoint();
    let one = c.read_char().unwrap();
    let two = c.read_char().unwrap();
    c.putback(two);
    assert_eq!(one, '1');
    c.rollback();
    assert_eq!(c.into_source().collect::<String>(), "123 ");
}

#[test]
fn committed_reads_survive_later_rollbacks() {
    let mut c = erased("ab");
    c.set_checkpoint();
    c.read_char().unwrap();
    c.advance_past_checkpoint();
    c.set_checkpoint();
    c.read_char().unwrap();
    c.rollback();
    assert_eq!(c.into_source().collect::<String>(), "b");
}

#[test]
fn buffered_cursor_is_not_contiguous() {
    let c = erased("ab");
    assert!(c.as_contiguous().is_none());
}

#[test]
fn char_slice_cursor_moves_an_index_over_the_slice() {
    let chars = ['x', 'é', '7'];
    let mut c = CharSliceCursor::new(&chars);
    c.set_checkpoint();
    assert_eq!(c.read_char(), Ok('x'));
    assert_eq!(c.peek_char(), Ok('é'));
    let e = c.read_char().unwrap();
    c.putback(e);
    assert_eq!(c.position(), 1);
    c.rollback();
    assert_eq!(c.rest(), &chars[..]);
    assert!(c.as_contiguous().is_none());

    c.advance_past_checkpoint();
    for _ in 0..3 {
        c.read_char().unwrap();
    }
    assert_eq!(c.read_char(), Err(ScanError::EndOfRange));
    assert!(core::ptr::eq(c.rest(), &chars[3..]));
}
