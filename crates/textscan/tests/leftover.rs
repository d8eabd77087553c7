#![allow(missing_docs)]

use std::collections::{LinkedList, VecDeque};

use textscan::{
    ErasedRange, InputCategory, Leftover, ReaderSource, ScanInput, StoragePolicy, scan,
    scan_value,
};

fn category<'a, I: ScanInput<'a>>(_: &I) -> InputCategory {
    I::CATEGORY
}

#[test]
fn categories_and_their_storage() {
    let owned = String::from("x");
    assert_eq!(category(&"x"), InputCategory::StrView);
    assert_eq!(category(&&owned), InputCategory::StringRef);
    assert_eq!(category(&owned), InputCategory::OwnedString);
    assert_eq!(category(&ErasedRange::new("x".chars())), InputCategory::ErasedOwned);
    assert_eq!(category(&vec!['x']), InputCategory::Other);
    assert_eq!(category(&&['x'][..]), InputCategory::CharView);
    assert_eq!(category(&&['x', 'y']), InputCategory::FixedArray);
    let mut range = ErasedRange::new("x".chars());
    assert_eq!(category(&&mut range), InputCategory::ErasedRef);
    assert_eq!(category(&ReaderSource::new(&b"x"[..])), InputCategory::Stream);

    assert_eq!(InputCategory::StrView.policy(), StoragePolicy::View);
    assert_eq!(InputCategory::StringRef.policy(), StoragePolicy::View);
    assert_eq!(InputCategory::CharView.policy(), StoragePolicy::View);
    assert_eq!(InputCategory::FixedArray.policy(), StoragePolicy::View);
    assert_eq!(InputCategory::OwnedString.policy(), StoragePolicy::OwnedString);
    assert_eq!(InputCategory::ErasedOwned.policy(), StoragePolicy::Erased);
    assert_eq!(InputCategory::ErasedRef.policy(), StoragePolicy::Erased);
    assert_eq!(InputCategory::Stream.policy(), StoragePolicy::Erased);
    assert_eq!(InputCategory::Other.policy(), StoragePolicy::Erased);
}

#[test]
fn str_view_leftover_borrows_the_input() {
    let text = String::from("12 tail");
    let mut n = 0u8;
    let leftover = scan!(text.as_str(), "{}", n).into_leftover();
    let Leftover::View(rest) = leftover else {
        panic!("expected a view");
    };
    assert_eq!(rest, " tail");
    // Same allocation, no copy.
    assert_eq!(rest.as_ptr(), text[2..].as_ptr());
}

#[test]
fn char_slice_leftover_borrows_the_input() {
    let chars = ['1', '2', ' ', 'z'];
    let mut n = 0u8;
    let result = scan!(&chars[..], "{}", n);
    assert_eq!(n, 12);
    assert_eq!(result.leftover().policy(), StoragePolicy::View);
    let rest = result.range_as_chars().unwrap();
    assert!(std::ptr::eq(rest, &chars[2..]));
    assert_eq!(result.range_as_str(), None);
    assert!(std::ptr::eq(result.reconstruct().unwrap(), &chars[2..]));
}

#[test]
fn fixed_array_leftover_is_a_subslice() {
    let chars = ['4', '2', '!'];
    let mut n = 0u8;
    let result = scan!(&chars, "{}", n);
    assert_eq!(n, 42);
    assert_eq!(result.leftover().policy(), StoragePolicy::View);
    assert_eq!(result.range_as_chars(), Some(&['!'][..]));
    assert!(std::ptr::eq(result.reconstruct().unwrap(), &chars[2..]));
}

#[test]
fn borrowed_erased_range_is_advanced_in_place() {
    let mut range = ErasedRange::new("1 2 rest".chars());
    let (mut a, mut b) = (0u8, 0u8);
    let first = scan!(&mut range, "{}", a);
    assert!(first.is_ok());
    assert_eq!(first.leftover().policy(), StoragePolicy::Erased);
    drop(first);
    // The peeked space went back into the caller's range.
    assert!(scan!(&mut range, " {}", b).is_ok());
    assert_eq!((a, b), (1, 2));
    assert_eq!(range.collect::<String>(), " rest");
}

#[test]
fn string_ref_leftover_is_a_view_that_reconstructs_to_string() {
    let text = String::from("7 more");
    let result = scan_value::<u8, _>(&text);
    assert_eq!(result.leftover().policy(), StoragePolicy::View);
    assert_eq!(result.reconstruct(), Some(String::from(" more")));
}

#[test]
fn owned_string_keeps_its_buffer() {
    let text = String::from("abc def");
    let ptr = text.as_ptr();
    let mut word = String::new();
    let result = scan!(text, "{}", word);
    assert_eq!(word, "abc");
    match result.leftover() {
        Leftover::Owned { buf, begin } => {
            assert_eq!(buf.as_ptr(), ptr);
            assert_eq!(*begin, 3);
        }
        other => panic!("expected owned storage, got {other:?}"),
    }
    assert_eq!(result.reconstruct().as_deref(), Some(" def"));
}

#[test]
fn erased_input_gives_back_an_erased_range() {
    let mut n = 0i32;
    let result = scan!(ErasedRange::new("5 6".chars()), "{}", n);
    assert_eq!(n, 5);
    assert_eq!(result.range_as_str(), None);
    let rest: String = result.reconstruct().unwrap().collect();
    assert_eq!(rest, " 6");
}

#[test]
fn containers_are_rebuilt_from_an_erased_leftover() {
    let mut n = 0i32;
    let result = scan!(vec!['1', '2', ' ', 'z'], "{}", n);
    assert_eq!(n, 12);
    assert_eq!(result.leftover().policy(), StoragePolicy::Erased);
    assert_eq!(result.reconstruct(), Some(vec![' ', 'z']));

    let result = scan!("3x".chars().collect::<VecDeque<_>>(), "{}", n);
    assert_eq!(result.reconstruct(), Some(VecDeque::from(['x'])));

    let result = scan!("4".chars().collect::<LinkedList<_>>(), "{}", n);
    assert_eq!(result.reconstruct(), Some(LinkedList::new()));
    assert_eq!(n, 4);
}

#[test]
fn leftover_can_be_scanned_again() {
    let (mut a, mut b) = (0u8, 0u8);
    let first = scan!(vec!['1', ' ', '2'], "{}", a);
    let second = scan!(first.into_leftover().into_erased(), "{}", b);
    assert!(second.is_ok());
    assert_eq!((a, b), (1, 2));
}

#[test]
fn emptiness_is_reported_for_every_storage() {
    let mut n = 0u8;
    assert!(scan!("9", "{}", n).is_empty());
    assert!(scan!(String::from("9"), "{}", n).is_empty());
    assert!(scan!(vec!['9'], "{}", n).is_empty());
    assert!(!scan!(vec!['9', ' '], "{}", n).is_empty());
}
