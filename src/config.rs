//! Filter configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;
pub const DEFAULT_CUTOFF_HZ: f64 = 1_000.0;
pub const DEFAULT_RESONANCE: f64 = 0.5;
pub const DEFAULT_GAIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Initial operating point of a filter instance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    pub sample_rate: f64,
    pub cutoff: f64,
    pub resonance: f64,
    pub gain: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            cutoff: DEFAULT_CUTOFF_HZ,
            resonance: DEFAULT_RESONANCE,
            gain: DEFAULT_GAIN,
        }
    }
}

impl FilterConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_resonance(mut self, resonance: f64) -> Self {
        self.resonance = resonance;
        self
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Reject values the DSP core treats as caller misuse.
    ///
    /// Out-of-range parameters are fine here, they get clamped downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            warn!(sample_rate = self.sample_rate, "rejecting filter config");
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }

        for (name, value) in [
            ("cutoff", self.cutoff),
            ("resonance", self.resonance),
            ("gain", self.gain),
        ] {
            if !value.is_finite() {
                warn!(name, value, "rejecting filter config");
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        Ok(())
    }
}
