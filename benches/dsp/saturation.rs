//! Benchmarks for soft saturation and denormal flushing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ssm2044::dsp::saturation::{denormal_fix_buffer, soft_saturation_buffer};

use crate::BLOCK_SIZES;

pub fn bench_saturation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/saturation");

    for &size in BLOCK_SIZES {
        let input: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 4.0 - 2.0)
            .collect();
        let mut buffer = input.clone();

        // tanh per sample
        group.bench_with_input(BenchmarkId::new("tanh_drive", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                soft_saturation_buffer(black_box(&mut buffer), black_box(1.5));
            })
        });

        // Compare and branch per sample
        group.bench_with_input(BenchmarkId::new("denormal_fix", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                denormal_fix_buffer(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
