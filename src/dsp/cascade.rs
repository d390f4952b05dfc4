use crate::dsp::{
    coefficients::Coefficients,
    saturation::{denormal_fix, soft_saturation},
};

/*
ZDF Cascade
===========

Four one-pole stages in series with a global resonance feedback path:

    input ──gain──[sat 1.5]──(+)──[pole]──[pole]──[pole]──[pole]──┬── output
                              │                                   │
                              └──── k × [sat 2.0] ←── z⁻¹ ←───────┘

Stages 2–4 are driven by the same-sample output of the stage before them.
Only the outer loop is delayed: the feedback term is the previous sample's
raw 4th stage output, saturated fresh on every read. This one-sample delay
avoids an iterative solve and defines the character of the emulation, so it
is kept as is.

The feedback is summed, not subtracted, so the loop gain at DC is k. Past
k = 1 (resonance 0.25) an excited loop is held up by the feedback saturator
alone and settles on a sustained level. Exact silence stays silent.
*/

/// Input saturation drive (subtle).
pub const INPUT_DRIVE: f64 = 1.5;
/// Feedback saturation drive (moderate).
pub const FEEDBACK_DRIVE: f64 = 2.0;
/// Number of one-pole stages.
pub const STAGES: usize = 4;

/// Persistent memory of the cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    /// Integrator memory of each pole. Always exactly zero or at least
    /// `DENORMAL_THRESHOLD` in magnitude.
    pub stages: [f64; STAGES],
    /// Raw 4th stage output of the previous sample.
    pub feedback_sample: f64,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.stages = [0.0; STAGES];
        self.feedback_sample = 0.0;
    }

    /// True when every stage and the feedback register hold exactly zero.
    pub fn is_silent(&self) -> bool {
        self.feedback_sample == 0.0 && self.stages.iter().all(|&s| s == 0.0)
    }

    /// Advance the cascade by one sample and return the raw 4th stage output.
    ///
    /// The returned value is not denormal-fixed; whoever emits it to an audio
    /// stream is responsible for that.
    #[inline]
    pub fn next_sample(&mut self, input: f64, gain: f64, coeffs: Coefficients) -> f64 {
        let Coefficients { g, k } = coeffs;

        let saturated_input = soft_saturation(input * gain, INPUT_DRIVE);
        let saturated_feedback = soft_saturation(self.feedback_sample, FEEDBACK_DRIVE);
        let mut stage_in = saturated_input + k * saturated_feedback;

        for state in self.stages.iter_mut() {
            let stage_out = *state + g * (stage_in - *state);
            *state = denormal_fix(stage_out);
            stage_in = stage_out;
        }

        // raw, unfixed
        self.feedback_sample = stage_in;
        stage_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::coefficients::solve;
    use crate::dsp::saturation::DENORMAL_THRESHOLD;

    const SR: f64 = 44_100.0;

    fn coeffs(cutoff: f64, resonance: f64) -> Coefficients {
        solve(cutoff, resonance, SR, 1.0 / SR)
    }

    #[test]
    fn test_zero_state_zero_input_is_silent() {
        let mut state = FilterState::new();
        let out = state.next_sample(0.0, 1.0, coeffs(1000.0, 4.0));
        assert_eq!(out, 0.0);
        assert!(state.is_silent());
    }

    #[test]
    fn test_first_sample_matches_hand_computation() {
        let c = coeffs(1000.0, 0.0);
        let mut state = FilterState::new();
        let out = state.next_sample(0.5, 1.0, c);

        let x = soft_saturation(0.5, INPUT_DRIVE);
        let s1 = c.g * x;
        let s2 = c.g * s1;
        let s3 = c.g * s2;
        let s4 = c.g * s3;
        assert_eq!(state.stages, [s1, s2, s3, s4]);
        assert_eq!(out, s4);
        assert_eq!(state.feedback_sample, s4);
    }

    #[test]
    fn test_feedback_uses_previous_sample_only() {
        // The first sample cannot see any feedback, whatever k is
        let mut no_res = FilterState::new();
        let mut full_res = FilterState::new();
        let a = no_res.next_sample(0.3, 1.0, coeffs(2000.0, 0.0));
        let b = full_res.next_sample(0.3, 1.0, coeffs(2000.0, 4.0));
        assert_eq!(a, b);

        // The second one does
        let a = no_res.next_sample(0.3, 1.0, coeffs(2000.0, 0.0));
        let b = full_res.next_sample(0.3, 1.0, coeffs(2000.0, 4.0));
        assert!(b > a);
    }

    #[test]
    fn test_feedback_register_is_stored_unfixed() {
        let c = Coefficients { g: 0.5, k: 0.0 };
        let mut state = FilterState::new();
        let out = state.next_sample(1e-13, 1.0, c);

        // 1e-13 * 0.5^4 stays above the threshold
        assert!(out.abs() >= DENORMAL_THRESHOLD);

        // 1e-14 * 0.5^4 does not: the stage is flushed, the register is not

        let mut state = FilterState::new();
        let out = state.next_sample(1e-14, 1.0, c);
        assert!(out.abs() < DENORMAL_THRESHOLD && out != 0.0);
        assert_eq!(state.feedback_sample, out);
        assert_eq!(state.stages[3], 0.0);
    }

    #[test]
    fn test_stage_states_never_hold_tiny_values() {
        let c = coeffs(500.0, 0.0);
        let mut state = FilterState::new();
        state.next_sample(1.0, 1.0, c);
        for _ in 0..20_000 {
            state.next_sample(0.0, 1.0, c);
            for &s in &state.stages {
                assert!(s == 0.0 || s.abs() >= DENORMAL_THRESHOLD);
            }
        }
        assert_eq!(state.stages, [0.0; STAGES]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = FilterState::new();
        for _ in 0..64 {
            state.next_sample(0.9, 2.0, coeffs(3000.0, 2.0));
        }
        assert!(!state.is_silent());
        state.reset();
        assert!(state.is_silent());
        assert_eq!(state, FilterState::default());
    }
}
