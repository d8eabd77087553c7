//! Benchmark – integer and float scanning over contiguous and erased input
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textscan::{ErasedRange, scan_list};

/// `count` whitespace-separated integers with a deterministic spread of
/// widths and signs.
fn make_integers(count: usize) -> String {
    let mut s = String::with_capacity(count * 8);
    let mut x: i64 = 0x2545_f491;
    for i in 0..count {
        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let v = (x >> 33) % 10_000_000 * if i % 3 == 0 { -1 } else { 1 };
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&v.to_string());
    }
    s
}

fn make_floats(count: usize) -> String {
    (0..count)
        .map(|i| format!("{}.{:03}", i * 7, i % 1000))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bench_scan_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_list");
    group.measurement_time(Duration::from_secs(5));

    for &count in &[100usize, 10_000] {
        let ints = make_integers(count);
        group.bench_with_input(BenchmarkId::new("i64/str", count), &ints, |b, text| {
            b.iter(|| {
                let mut out = Vec::<i64>::with_capacity(count);
                let result = scan_list(black_box(text.as_str()), &mut out, None);
                assert!(result.is_ok());
                out.len()
            });
        });
        group.bench_with_input(BenchmarkId::new("i64/erased", count), &ints, |b, text| {
            b.iter(|| {
                let mut out = Vec::<i64>::with_capacity(count);
                let result = scan_list(ErasedRange::new(black_box(text).chars()), &mut out, None);
                assert!(result.is_ok());
                out.len()
            });
        });

        let floats = make_floats(count);
        group.bench_with_input(BenchmarkId::new("f64/str", count), &floats, |b, text| {
            b.iter(|| {
                let mut out = Vec::<f64>::with_capacity(count);
                let result = scan_list(black_box(text.as_str()), &mut out, Some(','));
                assert!(result.is_ok());
                out.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan_list);
criterion_main!(benches);
