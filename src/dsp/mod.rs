//! Low-level DSP primitives for the SSM2044 emulation.
//!
//! Everything here is allocation-free and realtime-safe. The filter core is
//! split the way the signal flows: the coefficient solver feeds the cascade,
//! and the cascade leans on the saturation and denormal helpers. `Ssm2044`
//! ties them into one filter instance.

/// ZDF four-pole cascade and its persistent state.
pub mod cascade;
/// Cutoff/resonance to integrator and feedback gain.
pub mod coefficients;
/// Test and modulation oscillators.
pub mod oscillator;
/// Soft saturation and denormal flushing.
pub mod saturation;
/// Complete filter instance (state + solver + sample rate).
pub mod ssm2044;

pub use cascade::FilterState;
pub use coefficients::Coefficients;
pub use ssm2044::Ssm2044;
