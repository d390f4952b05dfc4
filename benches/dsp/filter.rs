//! Benchmarks for the SSM2044 filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ssm2044::dsp::Ssm2044;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp
        let input: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 2.0 - 1.0)
            .collect();

        // Held parameters: coefficients come from the cache
        let mut filter = Ssm2044::new(48_000.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("static", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), 1000.0, 0.5, 1.0);
            })
        });

        // Cutoff changes every sample
        let mut filter = Ssm2044::new(48_000.0);
        let cutoff: Vec<f64> = (0..size)
            .map(|i| 1000.0 + 800.0 * (i as f64 * 0.05).sin())
            .collect();
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("modulated", size), &size, |b, _| {
            b.iter(|| {
                for ((out, &x), &fc) in buffer.iter_mut().zip(&input).zip(&cutoff) {
                    *out = filter.process(black_box(x), fc, 0.5, 1.0);
                }
            })
        });

        // Latched feedback at full resonance
        let mut filter = Ssm2044::new(48_000.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("max_resonance", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), 1000.0, 4.0, 1.0);
            })
        });
    }

    group.finish();
}
