//! Criterion micro-benchmarks for torus topology and sweeps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use relax_field::Field;
use relax_space::Torus;
use relax_test_utils::{reference_sweep, shuffled_sweep};

/// Benchmark: neighbour_indices() on all 16K cells of a 128×128 torus.
fn bench_neighbour_indices_16k(c: &mut Criterion) {
    let t = Torus::new(128).unwrap();

    c.bench_function("neighbour_indices_torus_16k", |b| {
        b.iter(|| {
            for i in 0..t.cell_count() {
                black_box(t.neighbour_indices(i));
            }
        });
    });
}

/// Benchmark: row-major vs shuffled reference sweeps over 128×128.
fn bench_sweep_order(c: &mut Criterion) {
    let field = Field::classified(Torus::new(128).unwrap());

    c.bench_function("sweep_row_major_16k", |b| {
        b.iter(|| black_box(reference_sweep(&field)));
    });
    c.bench_function("sweep_shuffled_16k", |b| {
        b.iter(|| black_box(shuffled_sweep(&field, 7)));
    });
}

criterion_group!(benches, bench_neighbour_indices_16k, bench_sweep_order);
criterion_main!(benches);
