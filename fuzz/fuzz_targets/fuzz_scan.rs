#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use textscan::{Arg, CustomLocale, ErasedRange, scan, scan_list, scan_localized};

const HEADER: usize = 1;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Format fragments the mutator stitches together so that the interesting
/// paths (specifiers, escapes, literals) are reached quickly.
static FORMAT_TABLE: &[&str] = &[
    "{}", "{0}", "{1}", "{2}", "{:x}", "{:o}", "{:b}", "{:d}", "{:'}", "{:l}", "{:'l}", "{{",
    "}}", " ", ",", ";", "{", "}", "{:q}",
];

/// Input fragments: numbers in several shapes, words, and separators.
static INPUT_TABLE: &[&str] = &[
    "0", "-1", "+7", "255", "2147483648", "-9223372036854775808", "1,000", "3.25", "1,5",
    "true", "false", "x", "\u{e9}", " ", "\t", "\n", ",", ";", "ff", "101",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Builds `flags | format \0 input` from the tables, or defers to libFuzzer.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed % 4 == 0 {
        let mut out = Vec::with_capacity(max_size);
        out.push(with_rng(|rng| rng.next_u32() as u8));
        with_rng(|rng| {
            for _ in 0..rng.random_range(1..6) {
                out.extend_from_slice(FORMAT_TABLE[rng.random_range(0..FORMAT_TABLE.len())].as_bytes());
            }
            out.push(0);
            for _ in 0..rng.random_range(0..10) {
                out.extend_from_slice(INPUT_TABLE[rng.random_range(0..INPUT_TABLE.len())].as_bytes());
            }
        });
        let len = out.len().min(max_size);
        data[..len].copy_from_slice(&out[..len]);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Destinations for one scan; which three the format may address.
#[derive(Debug, Default, Arbitrary)]
struct Slots {
    int: i32,
    unsigned: u8,
    float: f64,
    word: String,
    flag: bool,
}

fn run(data: &[u8]) {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest).into_owned();
    let (format, input) = text.split_once('\0').unwrap_or((text.as_str(), ""));

    let mut slots = Slots::arbitrary(&mut Unstructured::new(rest)).unwrap_or_default();
    let mut contiguous = {
        let mut args = args_for(flags, &mut slots);
        if flags & 0x20 != 0 {
            let fi = CustomLocale::default()
                .with_thousands_separator(' ')
                .with_decimal_point(',');
            scan_localized(&fi, input, format, &mut args)
        } else {
            scan(input, format, &mut args)
        }
    };

    // The same call over a character-at-a-time source must agree exactly.
    let mut erased_slots = Slots::default();
    let mut erased = {
        let mut args = args_for(flags, &mut erased_slots);
        if flags & 0x20 != 0 {
            let fi = CustomLocale::default()
                .with_thousands_separator(' ')
                .with_decimal_point(',');
            scan_localized(&fi, ErasedRange::new(input.chars()), format, &mut args)
        } else {
            scan(ErasedRange::new(input.chars()), format, &mut args)
        }
    };
    assert_eq!(contiguous.error(), erased.error());
    assert_eq!(contiguous.range_as_string(), erased.range_as_string());

    let mut list = Vec::<i64>::new();
    let _ = scan_list(input, &mut list, (flags & 0x40 != 0).then_some(','));
}

fn args_for(flags: u8, slots: &mut Slots) -> Vec<Arg<'_>> {
    let Slots {
        int,
        unsigned,
        float,
        word,
        flag,
    } = slots;
    let mut all = vec![
        Arg::from(int),
        Arg::from(unsigned),
        Arg::from(float),
        Arg::from(word),
        Arg::from(flag),
    ];
    let start = usize::from(flags & 0x3) % all.len();
    all.rotate_left(start);
    all.truncate(1 + usize::from((flags >> 2) & 0x3));
    all
}

fuzz_target!(|data: &[u8]| run(data));
