//! Benchmarks for the test/modulation oscillators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ssm2044::dsp::oscillator::{Oscillator, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        for (name, waveform) in [
            ("sine", Waveform::Sine),
            ("sawtooth", Waveform::Saw),
            ("square", Waveform::Square),
            ("triangle", Waveform::Triangle),
        ] {
            let mut osc = Oscillator::new(waveform);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| osc.render(black_box(&mut buffer), 110.0, 48_000.0))
            });
        }
    }

    group.finish();
}
