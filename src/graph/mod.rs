//! Composable building blocks around the SSM2044 filter.
//!
//! Graph nodes wrap the DSP primitives with block rendering, resets and
//! per-sample parameter modulation. The `extensions` module adds the fluent
//! `.through()` and `.modulate()` helpers.

/// Fluent combinators (`.through()`, `.modulate()`).
pub mod extensions;
/// SSM2044 filter node.
pub mod filter;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;
/// Serial chaining of two nodes (source into effect).
pub mod through;
