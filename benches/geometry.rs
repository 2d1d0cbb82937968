//! Layout engine benchmarks.
//!
//! Measures packing, single-bubble evaluation and a full field recompute at
//! several item counts.
//!
//! Run with: cargo bench --bench geometry

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexbubble::geometry::{pack, size_and_offset};
use hexbubble::model::{BubbleOptions, GridPosition, LayoutConfig};
use hexbubble::state::BubbleField;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<Vec<usize>>(),
                |items| pack(black_box(items), 6),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_size_and_offset(c: &mut Criterion) {
    let plain = LayoutConfig::default();
    let compact = LayoutConfig {
        compact: true,
        gravitation: 2.0,
        ..LayoutConfig::default()
    };

    let mut group = c.benchmark_group("size_and_offset");
    for (name, config) in [("plain", plain), ("compact", compact)] {
        // Inner, fringe corner and beyond
        for (row, col) in [(1, 2), (0, 0), (8, 5)] {
            let position = GridPosition::new(row, col);
            group.bench_function(format!("{name}/{row}_{col}"), |b| {
                b.iter(|| {
                    size_and_offset(
                        black_box(position),
                        black_box(6),
                        black_box(110.0),
                        black_box(370.0),
                        &config,
                    )
                });
            });
        }
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for size in SIZES {
        let field = BubbleField::new((0..size).collect::<Vec<usize>>(), BubbleOptions::default())
            .expect("default options are valid");

        group.bench_with_input(BenchmarkId::new("dirty", size), &field, |b, field| {
            b.iter_batched(
                || field.clone(),
                |mut field| {
                    field.scroll_by(black_box(1.0), black_box(1.0));
                    field.recompute().len()
                },
                BatchSize::LargeInput,
            );
        });

        let mut cached = field.clone();
        cached.recompute();
        group.bench_with_input(BenchmarkId::new("cached", size), &size, |b, _| {
            b.iter(|| cached.recompute().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_size_and_offset, bench_recompute);
criterion_main!(benches);
