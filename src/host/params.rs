use crate::config::{FilterConfig, DEFAULT_CUTOFF_HZ, DEFAULT_GAIN, DEFAULT_RESONANCE};

/*
| inlet | carries                       | range        |
| ----- | ----------------------------- | ------------ |
| 0     | audio input                   | unclamped    |
| 1     | cutoff (signal or number)     | 20..20000 Hz |
| 2     | resonance (signal or number)  | 0..4         |
| 3     | input gain (signal or number) | 0..4         |
*/

/// Inclusive parameter range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into the range. Never panics, a NaN passes through.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const CUTOFF_RANGE: ParamRange = ParamRange::new(20.0, 20_000.0);
/// The loop sustains itself above 0.25.
pub const RESONANCE_RANGE: ParamRange = ParamRange::new(0.0, 4.0);
pub const GAIN_RANGE: ParamRange = ParamRange::new(0.0, 4.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inlet {
    Audio,
    Cutoff,
    Resonance,
    Gain,
}

impl Inlet {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Inlet::Audio),
            1 => Some(Inlet::Cutoff),
            2 => Some(Inlet::Resonance),
            3 => Some(Inlet::Gain),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Inlet::Audio => 0,
            Inlet::Cutoff => 1,
            Inlet::Resonance => 2,
            Inlet::Gain => 3,
        }
    }

    /// Range for parameter inlets, `None` for the audio inlet.
    pub fn range(self) -> Option<ParamRange> {
        match self {
            Inlet::Audio => None,
            Inlet::Cutoff => Some(CUTOFF_RANGE),
            Inlet::Resonance => Some(RESONANCE_RANGE),
            Inlet::Gain => Some(GAIN_RANGE),
        }
    }
}

/// Values used when a parameter inlet has no signal connected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldParams {
    pub cutoff: f64,
    pub resonance: f64,
    pub gain: f64,
}

impl Default for HeldParams {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF_HZ,
            resonance: DEFAULT_RESONANCE,
            gain: DEFAULT_GAIN,
        }
    }
}

impl HeldParams {
    /// Build from positional creation arguments: cutoff, resonance, gain.
    ///
    /// Missing arguments keep their defaults, extra ones are ignored.
    pub fn from_creation_args(args: &[f64]) -> Self {
        let mut params = Self::default();
        for (index, &value) in args.iter().take(3).enumerate() {
            if let Some(inlet) = Inlet::from_index(index + 1) {
                params.set_float(inlet, value);
            }
        }
        params
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            cutoff: CUTOFF_RANGE.clamp(config.cutoff),
            resonance: RESONANCE_RANGE.clamp(config.resonance),
            gain: GAIN_RANGE.clamp(config.gain),
        }
    }

    /// Store a number received on a parameter inlet, clamped to its range.
    ///
    /// Numbers sent to the audio inlet are ignored.
    pub fn set_float(&mut self, inlet: Inlet, value: f64) {
        let Some(range) = inlet.range() else {
            return;
        };
        let clamped = range.clamp(value);
        match inlet {
            Inlet::Cutoff => self.cutoff = clamped,
            Inlet::Resonance => self.resonance = clamped,
            Inlet::Gain => self.gain = clamped,
            Inlet::Audio => {}
        }
    }

    pub fn set_int(&mut self, inlet: Inlet, value: i64) {
        self.set_float(inlet, value as f64);
    }

    pub fn get(&self, inlet: Inlet) -> Option<f64> {
        match inlet {
            Inlet::Audio => None,
            Inlet::Cutoff => Some(self.cutoff),
            Inlet::Resonance => Some(self.resonance),
            Inlet::Gain => Some(self.gain),
        }
    }
}

/// Where a parameter's per-sample value comes from.
#[derive(Debug, Clone, Copy)]
pub enum ParamSource<'a> {
    Held(f64),
    Signal(&'a [f64]),
}

impl<'a> ParamSource<'a> {
    /// A connected signal wins over the held value.
    pub fn select(signal: Option<&'a [f64]>, held: f64) -> Self {
        match signal {
            Some(buffer) => ParamSource::Signal(buffer),
            None => ParamSource::Held(held),
        }
    }

    /// Value for frame `index`. A short signal buffer falls back to its last
    /// sample.
    #[inline]
    pub fn value_at(&self, index: usize) -> f64 {
        match *self {
            ParamSource::Held(value) => value,
            ParamSource::Signal(buffer) => buffer
                .get(index)
                .or_else(|| buffer.last())
                .copied()
                .unwrap_or(0.0),
        }
    }
}
