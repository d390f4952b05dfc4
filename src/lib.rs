//! SSM2044-style four-pole low-pass filter.
//!
//! - [`dsp`]: coefficient solver, ZDF cascade and saturation helpers
//! - [`host`]: inlet/outlet style processor with held and signal parameters
//! - [`graph`]: composable nodes for patches and the demo player
//! - [`config`]: validated filter settings

pub mod config;
pub mod dsp;
pub mod graph; // Composable audio graph nodes
pub mod host; // Inlets, control messages and the perform loop

pub use config::{ConfigError, FilterConfig};
pub use dsp::{Coefficients, FilterState, Ssm2044};
pub use host::perform::Ssm2044Processor;

pub const MAX_BLOCK_SIZE: usize = 2048;
