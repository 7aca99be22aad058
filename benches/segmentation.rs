//! Performance benchmarks for compound segmentation
//!
//! Run with: cargo bench --bench segmentation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glyphseg::{segment, CompoundIndex, GlyphId};
use std::hint::black_box;

/// Deterministic pseudo-random glyph stream over a fixed alphabet
fn generate_glyphs(len: usize, alphabet: u32) -> Vec<GlyphId> {
    let mut state = 0x2545f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            state % alphabet
        })
        .collect()
}

/// Dictionary of short compounds drawn from the same alphabet
fn generate_dictionary(entries: usize, alphabet: u32) -> Vec<Vec<GlyphId>> {
    (0..entries)
        .map(|i| {
            let len = 2 + (i % 3);
            let base = (i as u32 * 7) % alphabet;
            (0..len).map(|j| (base + j as u32) % alphabet).collect()
        })
        .collect()
}

/// Benchmark segmentation over increasing input sizes
fn bench_input_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_sizes");

    let index = CompoundIndex::build(generate_dictionary(256, 64)).unwrap();

    for size in [1_000, 10_000, 100_000] {
        let glyphs = generate_glyphs(size, 64);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &glyphs, |b, glyphs| {
            b.iter(|| segment(black_box(glyphs), &index));
        });
    }

    group.finish();
}

/// Benchmark lookup cost against growing dictionaries
///
/// Per-position work should track the longest matching compound, not
/// the number of entries.
fn bench_dictionary_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_sizes");

    let glyphs = generate_glyphs(10_000, 64);

    for entries in [16, 256, 4_096] {
        let index = CompoundIndex::build(generate_dictionary(entries, 64)).unwrap();

        group.throughput(Throughput::Elements(glyphs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entries),
            &index,
            |b, index| {
                b.iter(|| segment(black_box(&glyphs), index));
            },
        );
    }

    group.finish();
}

/// Benchmark index construction
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for entries in [256, 4_096] {
        let dictionary = generate_dictionary(entries, 64);

        group.bench_with_input(
            BenchmarkId::new("build", entries),
            &dictionary,
            |b, dictionary| {
                b.iter(|| CompoundIndex::build(black_box(dictionary)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_input_sizes,
    bench_dictionary_sizes,
    bench_index_build
);
criterion_main!(benches);
