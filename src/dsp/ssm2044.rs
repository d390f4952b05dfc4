use tracing::debug;

use crate::dsp::{
    cascade::FilterState,
    coefficients::{CoefficientSolver, Coefficients},
    saturation::denormal_fix,
};

/*
SSM2044 Filter Instance
=======================

The SSM2044 is the 4-pole voltage-controlled low-pass IC found in the Korg
Polysix and Mono/Poly. This type is one filter voice: the cascade state, the
coefficient solver and the operating sample rate, with no host types mixed
in. Whatever integrates it (a graph node, a plugin, a Max-style perform loop)
owns an instance and drives it once per sample.

Parameters:
-----------

Cutoff (Hz):    20 to 20000, further limited to 0.45 × sample rate.
Resonance:      0.0 to 4.0. Above 0.25 the loop sustains itself once excited.
Gain:           0.0 to 4.0 input drive into the input saturator.

Every call to `process` re-derives the coefficients, so cutoff and resonance
can be modulated at audio rate. Nothing is smoothed internally.

Example usage:
  let mut filter = Ssm2044::new(48_000.0);
  let out = filter.process(sample, 800.0, 2.5, 1.0);
*/

pub struct Ssm2044 {
    state: FilterState,
    solver: CoefficientSolver,
    sample_rate: f64,
    sample_rate_inv: f64,
}

impl Ssm2044 {
    pub fn new(sample_rate: f64) -> Self {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        Self {
            state: FilterState::new(),
            solver: CoefficientSolver::new(),
            sample_rate,
            sample_rate_inv: 1.0 / sample_rate,
        }
    }

    /// Notify the filter of a host sample rate change.
    ///
    /// Must be called before the next `process` call at the new rate.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        if sample_rate != self.sample_rate {
            debug!(from = self.sample_rate, to = sample_rate, "ssm2044 sample rate changed");
        }
        self.sample_rate = sample_rate;
        self.sample_rate_inv = 1.0 / sample_rate;
        self.solver.invalidate();
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Zero the four stages and the feedback register.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Filter one sample.
    ///
    /// Returns the raw cascade output. Callers emitting straight to an audio
    /// stream should pass it through `denormal_fix` (as `render` does).
    #[inline]
    pub fn process(&mut self, input: f64, cutoff: f64, resonance: f64, gain: f64) -> f64 {
        let coeffs = self
            .solver
            .solve(cutoff, resonance, self.sample_rate, self.sample_rate_inv);
        self.state.next_sample(input, gain, coeffs)
    }

    /// Filter a buffer in place with fixed parameters.
    pub fn render(&mut self, buffer: &mut [f64], cutoff: f64, resonance: f64, gain: f64) {
        for sample in buffer.iter_mut() {
            *sample = denormal_fix(self.process(*sample, cutoff, resonance, gain));
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Coefficients used for the most recent sample.
    pub fn coefficients(&self) -> Coefficients {
        self.solver.last()
    }
}
