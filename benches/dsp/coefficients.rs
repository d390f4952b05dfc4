//! Benchmarks for cutoff/resonance to coefficient conversion.

use std::hint::black_box;

use criterion::Criterion;
use ssm2044::dsp::coefficients::{solve, CoefficientSolver};

pub fn bench_coefficients(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/coefficients");
    let sr = 48_000.0;
    let sr_inv = 1.0 / sr;

    // tan() plus clamping
    group.bench_function("solve", |b| {
        b.iter(|| solve(black_box(1234.5), black_box(1.5), sr, sr_inv))
    });

    // Same inputs every call: bit comparison only
    let mut solver = CoefficientSolver::new();
    group.bench_function("cached_hit", |b| {
        b.iter(|| solver.solve(black_box(1234.5), black_box(1.5), sr, sr_inv))
    });

    // Cutoff changes every call, like audio-rate modulation
    let mut solver = CoefficientSolver::new();
    let mut cutoff = 100.0;
    group.bench_function("cached_miss", |b| {
        b.iter(|| {
            cutoff = if cutoff > 10_000.0 { 100.0 } else { cutoff + 1.0 };
            solver.solve(black_box(cutoff), black_box(1.5), sr, sr_inv)
        })
    });

    group.finish();
}
