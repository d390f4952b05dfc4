//! Benchmarks for the SSM2044 filter and its building blocks.
//!
//! Run with: cargo bench
//!
//! The filter re-derives its coefficients every sample, so the interesting
//! comparison is static parameters (cache hit) against audio-rate cutoff
//! modulation (tan() on every sample).
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Coefficients, saturation, cascade and full filter
//!   - scenarios/*  Host perform loop and the demo patch

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_coefficients,
    dsp::bench_saturation,
    dsp::bench_filter,
    dsp::bench_oscillator,
    scenarios::bench_host,
    scenarios::bench_patch,
);
criterion_main!(benches);
