use std::f64::consts::TAU;

/*
Coefficient Solver
==================

Each of the four poles is a one-pole integrator:

    y[n] = s + g * (x - s)

The integrator gain `g` is derived from the cutoff with a bilinear-transform
pre-warp, so the digital response matches the analog prototype exactly at
the cutoff frequency:

    wc = tan(2π * cutoff / sample_rate / 2)
    g  = wc / (1 + wc)

As the cutoff approaches Nyquist `g` approaches 1.0 and each stage turns into
a pure delay, which destabilizes the feedback loop. Two guards keep it away
from that edge: the cutoff is limited to 0.45 * sample_rate, and `g` itself is
clamped to 0.99.

The resonance feedback gain is a straight scale: k = resonance * 4.
*/

/// Lowest cutoff the solver will use (Hz).
pub const MIN_CUTOFF_HZ: f64 = 20.0;
/// Highest cutoff as a fraction of the sample rate.
pub const MAX_CUTOFF_RATIO: f64 = 0.45;
/// Stability ceiling for the integrator gain.
pub const MAX_G: f64 = 0.99;
/// Resonance to feedback gain scaling.
pub const RESONANCE_SCALE: f64 = 4.0;

/// Per-sample filter coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coefficients {
    /// Integrator gain, always within `[0.0, MAX_G]`.
    pub g: f64,
    /// Resonance feedback gain.
    pub k: f64,
}

/// Derive `g` and `k` for the given cutoff and resonance.
///
/// The cutoff is clamped against the current sample rate even when the caller
/// already clamped it, since the caller may have used a stale rate.
#[inline]
pub fn solve(cutoff: f64, resonance: f64, sample_rate: f64, sample_rate_inv: f64) -> Coefficients {
    debug_assert!(sample_rate > 0.0, "sample rate must be positive");

    let max_cutoff = sample_rate * MAX_CUTOFF_RATIO;
    let cutoff = if cutoff < MIN_CUTOFF_HZ {
        MIN_CUTOFF_HZ
    } else if cutoff > max_cutoff {
        max_cutoff
    } else {
        cutoff
    };

    let omega = TAU * cutoff;
    let omega_warped = (omega * sample_rate_inv * 0.5).tan();
    let g = (omega_warped / (1.0 + omega_warped)).clamp(0.0, MAX_G);

    Coefficients {
        g,
        k: resonance * RESONANCE_SCALE,
    }
}

/// Solver with a fast path for unchanged parameters.
///
/// Coefficients are still derived every sample, but when cutoff, resonance
/// and sample rate are bit-identical to the previous call the previous result
/// is returned instead of recomputing the `tan`.
#[derive(Debug, Clone, Default)]
pub struct CoefficientSolver {
    key: Option<(u64, u64, u64)>,
    cached: Coefficients,
}

impl CoefficientSolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn solve(
        &mut self,
        cutoff: f64,
        resonance: f64,
        sample_rate: f64,
        sample_rate_inv: f64,
    ) -> Coefficients {
        let key = (cutoff.to_bits(), resonance.to_bits(), sample_rate.to_bits());
        if self.key != Some(key) {
            self.cached = solve(cutoff, resonance, sample_rate, sample_rate_inv);
            self.key = Some(key);
        }
        self.cached
    }

    /// Most recently solved coefficients.
    pub fn last(&self) -> Coefficients {
        self.cached
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
