//! Benchmarks for low-level DSP primitives.

mod coefficients;
mod filter;
mod oscillator;
mod saturation;

pub use coefficients::bench_coefficients;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
pub use saturation::bench_saturation;
