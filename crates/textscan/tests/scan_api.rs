#![allow(missing_docs)]

use std::collections::{LinkedList, VecDeque};

use rstest::rstest;
use textscan::{
    Arg, CustomLocale, ErasedRange, ScanError, SpanList, discard, getline, ignore_until,
    parse_float, parse_integer, scan, scan_default, scan_list, scan_list_until, scan_localized,
    scan_value,
};

#[rstest]
#[timeout(std::time::Duration::from_secs(1))]
#[case("123", 123)]
#[case("  -17 ", -17)]
#[case("+0", 0)]
#[case("2147483647", i32::MAX)]
#[case("-2147483648", i32::MIN)]
fn integers_from_text(#[case] input: &str, #[case] expected: i32) {
    let mut v = 0i32;
    let result = scan!(input, "{}", v);
    assert!(result.is_ok(), "{input:?}: {:?}", result.error());
    assert_eq!(v, expected);
}

#[rstest]
#[case("{:x}", "7fffffff", 0x7fff_ffff)]
#[case("{:o}", "17", 15)]
#[case("{:b}", "-101", -5)]
#[case("{:d}", "0099", 99)]
fn radix_specifiers(#[case] format: &str, #[case] input: &str, #[case] expected: i64) {
    let mut v = 0i64;
    assert!(scan!(input, format, v).is_ok());
    assert_eq!(v, expected);
}

#[test]
fn every_integer_width_is_a_destination() {
    let (mut a, mut b, mut c, mut d, mut e) = (0i8, 0i16, 0i32, 0i64, 0isize);
    let (mut f, mut g, mut h, mut i, mut j) = (0u8, 0u16, 0u32, 0u64, 0usize);
    let result = scan!(
        "-1 -2 -3 -4 -5 6 7 8 9 10",
        "{} {} {} {} {} {} {} {} {} {}",
        a, b, c, d, e, f, g, h, i, j,
    );
    assert!(result.is_ok());
    assert_eq!((a, b, c, d, e), (-1, -2, -3, -4, -5));
    assert_eq!((f, g, h, i, j), (6, 7, 8, 9, 10));
}

#[test]
fn overflow_is_an_invalid_value_not_a_wrap() {
    let mut v = 0u8;
    let result = scan!("256", "{}", v);
    assert_eq!(result.error(), Some(ScanError::InvalidScannedValue));
    assert_eq!(v, 0);
    assert_eq!(result.range_as_str(), Some("256"));
}

#[test]
fn all_input_kinds_scan_the_same() {
    fn check<'a, I: textscan::ScanInput<'a>>(input: I) {
        let (mut word, mut n) = (String::new(), 0u32);
        let mut result = scan!(input, "{} : {}", word, n);
        assert!(result.is_ok(), "{:?}", result.error());
        assert_eq!((word.as_str(), n), ("key", 42));
        assert_eq!(result.range_as_string(), " rest");
    }
    let text = "key : 42 rest";
    check(text);
    check(&String::from(text));
    check(String::from(text));
    check(ErasedRange::new(text.chars()));
    check(text.chars().collect::<Vec<_>>());
    check(text.chars().collect::<VecDeque<_>>());
    check(text.chars().collect::<LinkedList<_>>());
    check(&text.chars().collect::<Vec<_>>());
}

#[test]
fn booleans_and_chars() {
    let (mut t, mut f, mut c) = (false, true, ' ');
    assert!(scan!("1 false#", "{} {}{}", t, f, c).is_ok());
    assert_eq!((t, f, c), (true, false, '#'));
}

#[test]
fn locale_only_applies_to_flagged_fields() {
    let de = CustomLocale::default()
        .with_thousands_separator('.')
        .with_decimal_point(',')
        .with_literals("wahr", "falsch");
    let (mut plain, mut localized, mut flag) = (0.0f64, 0.0f64, false);
    let result = scan_localized!(&de, "1.5 2,5 wahr", "{} {:l} {:l}", plain, localized, flag);
    assert!(result.is_ok(), "{:?}", result.error());
    assert_eq!((plain, localized, flag), (1.5, 2.5, true));

    let mut grouped = 0u32;
    assert!(scan_localized!(&de, "4.294.967.295", "{:'l}", grouped).is_ok());
    assert_eq!(grouped, u32::MAX);
}

#[test]
fn char_span_destination() {
    let mut code = ['-'; 4];
    let mut rest = 0u8;
    assert!(scan!("AB 7", "{} {}", code, rest).is_ok());
    assert_eq!(code, ['A', 'B', '\0', '\0']);
    assert_eq!(rest, 7);
}

#[test]
fn discard_skips_a_value_of_the_given_type() {
    let mut last = 0.0f32;
    assert!(scan!("1 two 3.5", "{} {} {}", discard::<i32>(), discard::<String>(), last).is_ok());
    assert_eq!(last, 3.5);
}

#[test]
fn scan_value_and_default() {
    assert_eq!(scan_value::<bool, _>("true").into_value(), Ok(true));
    assert_eq!(scan_value::<char, _>(" x").into_value(), Ok(' '));

    let (mut a, mut b) = (0u8, String::new());
    assert!(scan_default!("9 nine", a, b).is_ok());
    assert_eq!((a, b.as_str()), (9, "nine"));
}

#[test]
fn args_built_by_hand() {
    let mut n = 0i32;
    let mut s = String::new();
    let mut args = [Arg::from(&mut n), Arg::from(&mut s)];
    let result = scan("5 five", "{} {}", &mut args);
    assert!(result.is_ok());
    drop(args);
    assert_eq!((n, s.as_str()), (5, "five"));
}

#[test]
fn lines_and_skipping() {
    let text = "header line\n1 2 3\ntrailer";
    let mut line = String::new();
    let after_header = getline(text, &mut line).into_leftover();
    assert_eq!(line, "header line");

    let mut numbers = Vec::<u8>::new();
    let after_numbers = scan_list_until(
        after_header.as_str().unwrap_or_default(),
        &mut numbers,
        '\n',
        None,
    );
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(after_numbers.range_as_str(), Some("trailer"));

    assert_eq!(ignore_until(text, '\n').range_as_str(), Some("1 2 3\ntrailer"));
}

#[test]
fn lists_into_fixed_storage() {
    let mut storage = [0.0f64; 4];
    let mut list = SpanList::new(&mut storage);
    let result = scan_list("0.5, 1.5, 2.5", &mut list, Some(','));
    assert!(result.is_ok());
    assert_eq!(list.as_slice(), &[0.5, 1.5, 2.5]);
}

#[test]
fn standalone_number_parsing() {
    assert_eq!(parse_integer::<i32>("-42;", 10), Ok((-42, 3)));
    assert_eq!(parse_integer::<u8>("11111111", 2), Ok((255, 8)));
    assert_eq!(parse_integer::<u8>("100000000", 2), Err(ScanError::InvalidScannedValue));
    assert_eq!(parse_float::<f64>("6.02 x"), Ok((6.02, 4)));
}
