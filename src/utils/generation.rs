//! Deterministic signal generation utilities.
//!
//! These constructors build the short, fixed-length frames the transform
//! engine operates on. All of them are deterministic; the test suite
//! relies on identical inputs producing bit-identical transforms.

use crate::{RealFloat, to_precision};
use std::f64::consts::PI;

/// Generates one frame of a sine wave.
///
/// # Arguments
/// * `num_samples` - Number of samples to generate
/// * `frequency` - Frequency of the sine wave in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude of the wave
///
/// # Returns
/// A `Vec<F>` containing the generated samples.
pub fn sine<F: RealFloat>(
    num_samples: usize,
    frequency: f64,
    sample_rate: f64,
    amplitude: f64,
) -> Vec<F> {
    let step = 2.0 * PI * frequency / sample_rate;
    (0..num_samples)
        .map(|i| to_precision(amplitude * (step * i as f64).sin()))
        .collect()
}

/// Generates one frame of a cosine wave.
///
/// # Arguments
/// * `num_samples` - Number of samples to generate
/// * `frequency` - Frequency of the cosine wave in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude of the wave
///
/// # Returns
/// A `Vec<F>` containing the generated samples.
pub fn cosine<F: RealFloat>(
    num_samples: usize,
    frequency: f64,
    sample_rate: f64,
    amplitude: f64,
) -> Vec<F> {
    let step = 2.0 * PI * frequency / sample_rate;
    (0..num_samples)
        .map(|i| to_precision(amplitude * (step * i as f64).cos()))
        .collect()
}

/// Generates a unit impulse: zero everywhere except a single one.
///
/// Samples past the end are simply never set, so a `position` outside the
/// frame yields all zeros.
///
/// # Arguments
/// * `num_samples` - Number of samples to generate
/// * `position` - Index of the unit sample
pub fn impulse<F: RealFloat>(num_samples: usize, position: usize) -> Vec<F> {
    let mut samples = vec![F::zero(); num_samples];
    if let Some(sample) = samples.get_mut(position) {
        *sample = F::one();
    }
    samples
}

/// Generates a constant (DC) frame.
///
/// # Arguments
/// * `num_samples` - Number of samples to generate
/// * `value` - The constant sample value
pub fn constant<F: RealFloat>(num_samples: usize, value: f64) -> Vec<F> {
    vec![to_precision(value); num_samples]
}

/// Generates a linear ramp from 0 (inclusive) to 1 (exclusive).
///
/// # Arguments
/// * `num_samples` - Number of samples to generate
pub fn ramp<F: RealFloat>(num_samples: usize) -> Vec<F> {
    (0..num_samples)
        .map(|i| to_precision(i as f64 / num_samples.max(1) as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_sine_starts_at_zero() {
        let frame: Vec<f64> = sine(8, 440.0, 16_000.0, 1.0);
        assert_eq!(frame.len(), 8);
        assert_approx_eq!(frame[0], 0.0, 1e-12);
    }

    #[test]
    fn test_cosine_starts_at_amplitude() {
        let frame: Vec<f32> = cosine(8, 440.0, 16_000.0, 0.5);
        assert_approx_eq!(frame[0] as f64, 0.5, 1e-6);
    }

    #[test]
    fn test_impulse_has_single_one() {
        let frame: Vec<f32> = impulse(4, 2);
        assert_eq!(frame, vec![0.0, 0.0, 1.0, 0.0]);

        let silent: Vec<f32> = impulse(4, 9);
        assert_eq!(silent, vec![0.0; 4]);
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let frame: Vec<f64> = ramp(16);
        for pair in frame.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(frame[15] < 1.0);
    }
}
