//! Benchmarks for the color conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use colorconv::{
    hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_gray_average, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Low, medium and high HSL/HSV inputs.
const TRIPLES: [(&str, (f64, f64, f64)); 3] = [
    ("low", (0.0, 0.0, 0.0)),
    ("medium", (180.0, 0.5, 0.5)),
    ("high", (360.0, 1.0, 1.0)),
];

/// Black, mid gray and white.
const LEVELS: [u8; 3] = [0, 128, 255];

fn bench_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_rgb");

    for (name, triple) in TRIPLES {
        group.bench_with_input(BenchmarkId::new("hsl", name), &triple, |b, &(h, s, l)| {
            b.iter(|| hsl_to_rgb(black_box(h), black_box(s), black_box(l)))
        });

        group.bench_with_input(BenchmarkId::new("hsv", name), &triple, |b, &(h, s, v)| {
            b.iter(|| hsv_to_rgb(black_box(h), black_box(s), black_box(v)))
        });
    }

    group.finish();
}

fn bench_from_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_rgb");

    for level in LEVELS {
        group.bench_with_input(BenchmarkId::new("hsl", level), &level, |b, &x| {
            b.iter(|| rgb_to_hsl(black_box(x), black_box(x), black_box(x)))
        });

        group.bench_with_input(BenchmarkId::new("hsv", level), &level, |b, &x| {
            b.iter(|| rgb_to_hsv(black_box(x), black_box(x), black_box(x)))
        });

        group.bench_with_input(BenchmarkId::new("gray_average", level), &level, |b, &x| {
            b.iter(|| rgb_to_gray_average(black_box(x), black_box(x), black_box(x)))
        });
    }

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    group.bench_function("encode", |b| {
        b.iter(|| rgb_to_hex(black_box(255), black_box(0), black_box(128)))
    });

    for input in ["#ff0080", "0xff0080", "0xffxxff"] {
        group.bench_with_input(BenchmarkId::new("decode", input), input, |b, s| {
            b.iter(|| hex_to_rgb(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_rgb, bench_from_rgb, bench_hex);
criterion_main!(benches);
