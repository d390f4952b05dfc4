//! Saturation and denormal guards.
//!
//! # Soft Saturation
//!
//! The SSM2044 character comes from two tanh stages: one on the input, one on
//! the resonance feedback. Both use a drive-compensated transfer function:
//!
//!   f(x) = tanh(x * drive) / drive
//!
//! Dividing by the drive keeps the small-signal slope at 1.0, so quiet
//! material passes almost untouched. Only large excursions get compressed,
//! and a higher drive makes compression start earlier. The output is bounded
//! by `1 / drive`, which is what keeps the feedback loop from running away.
//!
//!   drive   small-signal gain   ceiling
//!   1.5     1.0                 0.667
//!   2.0     1.0                 0.5
//!
//! # Denormals
//!
//! A decaying recursive filter eventually produces values so small they fall
//! into the subnormal range, where many CPUs slow down dramatically. Every
//! persistent state variable is flushed to exactly 0.0 once it drops below
//! `DENORMAL_THRESHOLD`, long before it gets anywhere near subnormal.

/// Magnitude below which state values are flushed to zero.
pub const DENORMAL_THRESHOLD: f64 = 1e-15;

/// Drive-compensated tanh soft clipper.
///
/// A drive of zero or less bypasses the saturator entirely.
#[inline]
pub fn soft_saturation(sample: f64, drive: f64) -> f64 {
    if drive <= 0.0 {
        return sample;
    }
    (sample * drive).tanh() / drive
}

/// Flush values below [`DENORMAL_THRESHOLD`] to exactly zero.
#[inline]
pub fn denormal_fix(sample: f64) -> f64 {
    if sample.abs() < DENORMAL_THRESHOLD {
        0.0
    } else {
        sample
    }
}

/// Apply [`soft_saturation`] to an entire buffer in place.
pub fn soft_saturation_buffer(buffer: &mut [f64], drive: f64) {
    for sample in buffer.iter_mut() {
        *sample = soft_saturation(*sample, drive);
    }
}

/// Apply [`denormal_fix`] to an entire buffer in place.
pub fn denormal_fix_buffer(buffer: &mut [f64]) {
    for sample in buffer.iter_mut() {
        *sample = denormal_fix(*sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_drive_bypasses() {
        assert_eq!(soft_saturation(3.7, 0.0), 3.7);
        assert_eq!(soft_saturation(-0.25, -1.0), -0.25);
    }

    #[test]
    fn test_small_signal_gain_is_near_unity() {
        // tanh(x) ≈ x for small x, so the compensated output ≈ input
        let output = soft_saturation(0.001, 2.0);
        assert!((output - 0.001).abs() < 1e-8);
    }

    #[test]
    fn test_output_bounded_by_inverse_drive() {
        for &drive in &[1.5, 2.0, 4.0] {
            let ceiling = 1.0 / drive;
            for &input in &[10.0, -10.0, 1e6, -1e6] {
                let output: f64 = soft_saturation(input, drive);
                assert!(output.abs() <= ceiling + 1e-12);
            }
        }
    }

    #[test]
    fn test_saturation_is_odd_symmetric() {
        let pos = soft_saturation(0.8, 1.5);
        let neg = soft_saturation(-0.8, 1.5);
        assert_eq!(pos, -neg);
    }

    #[test]
    fn test_denormal_fix_threshold() {
        assert_eq!(denormal_fix(1e-16), 0.0);
        assert_eq!(denormal_fix(-9.9e-16), 0.0);
        assert_eq!(denormal_fix(f64::MIN_POSITIVE / 4.0), 0.0);
        assert_eq!(denormal_fix(1e-15), 1e-15);
        assert_eq!(denormal_fix(-0.5), -0.5);
    }

    #[test]
    fn test_buffer_helpers() {
        let mut buffer = vec![1e-20, 0.5, -1e-18, 2.0];
        denormal_fix_buffer(&mut buffer);
        assert_eq!(buffer, vec![0.0, 0.5, 0.0, 2.0]);

        soft_saturation_buffer(&mut buffer, 2.0);
        assert_eq!(buffer[0], 0.0);
        assert!(buffer[3] < 0.5);
    }
}
