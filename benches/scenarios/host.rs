//! Benchmarks for the host perform loop.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ssm2044::{
    host::{SignalInlets, Ssm2044Processor},
    FilterConfig,
};

use crate::BLOCK_SIZES;

pub fn bench_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/host");
    let config = FilterConfig::default().with_sample_rate(48_000.0);

    for &size in BLOCK_SIZES {
        let audio: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 2.0 - 1.0)
            .collect();
        let mut out = vec![0.0f64; size];

        // Every parameter held
        let mut processor = Ssm2044Processor::new(&config);
        group.bench_with_input(BenchmarkId::new("held", size), &size, |b, _| {
            b.iter(|| {
                processor.perform(black_box(&audio), SignalInlets::default(), &mut out);
            })
        });

        // Every parameter connected to a signal
        let cutoff: Vec<f64> = (0..size).map(|i| 500.0 + i as f64 * 10.0).collect();
        let resonance = vec![1.5; size];
        let gain = vec![1.2; size];
        let mut processor = Ssm2044Processor::new(&config);
        group.bench_with_input(BenchmarkId::new("signals", size), &size, |b, _| {
            b.iter(|| {
                let signals = SignalInlets {
                    cutoff: Some(cutoff.as_slice()),
                    resonance: Some(resonance.as_slice()),
                    gain: Some(gain.as_slice()),
                };
                processor.perform(black_box(&audio), signals, &mut out);
            })
        });
    }

    group.finish();
}
