//! Buffer comparison and error-metric utilities.
//!
//! Small numerical distance measures between equal-length sample buffers,
//! used by the round-trip tests and useful when validating an alternative
//! [`CosineTransform`](crate::CosineTransform) implementation against this
//! one.

use crate::{RealFloat, TransformError, TransformResult};

/// Computes the largest absolute difference between corresponding samples.
///
/// # Arguments
/// * `a` - First buffer
/// * `b` - Second buffer
///
/// # Returns
/// The maximum absolute per-sample difference as `f64` (0.0 for empty
/// buffers).
///
/// # Errors
/// Returns an error if the buffers have different lengths.
pub fn max_abs_difference<F: RealFloat>(a: &[F], b: &[F]) -> TransformResult<f64> {
    check_same_length(a, b)?;

    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x.to_f64().unwrap_or(0.0) - y.to_f64().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max))
}

/// Computes the root-mean-square error normalized by the reference peak.
///
/// The second buffer is the reference: the plain RMSE is divided by the
/// largest absolute reference sample. A reference of all zeros leaves the
/// RMSE unnormalized.
///
/// # Arguments
/// * `a` - Buffer under test
/// * `b` - Reference buffer
///
/// # Returns
/// The normalized RMSE as `f64` (0.0 for empty buffers).
///
/// # Errors
/// Returns an error if the buffers have different lengths.
pub fn nrmse<F: RealFloat>(a: &[F], b: &[F]) -> TransformResult<f64> {
    check_same_length(a, b)?;

    if a.is_empty() {
        return Ok(0.0);
    }

    let mut sum_sq = 0.0;
    let mut peak = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let reference = y.to_f64().unwrap_or(0.0);
        let diff = x.to_f64().unwrap_or(0.0) - reference;
        sum_sq += diff * diff;
        peak = peak.max(reference.abs());
    }

    let rmse = (sum_sq / a.len() as f64).sqrt();
    if peak > 0.0 { Ok(rmse / peak) } else { Ok(rmse) }
}

fn check_same_length<F: RealFloat>(a: &[F], b: &[F]) -> TransformResult<()> {
    if a.len() != b.len() {
        return Err(TransformError::DimensionMismatch(format!(
            "buffers must have the same length for comparison, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_identical_buffers_have_zero_distance() {
        let a = [1.0f32, -2.0, 3.0];
        assert_eq!(max_abs_difference(&a, &a).unwrap(), 0.0);
        assert_eq!(nrmse(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_max_abs_difference_picks_worst_sample() {
        let a = [0.0f64, 1.0, 2.0];
        let b = [0.5f64, 1.0, 1.0];
        assert_approx_eq!(max_abs_difference(&a, &b).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn test_nrmse_normalizes_by_reference_peak() {
        let a = [2.2f64, 0.0];
        let b = [2.0f64, 0.0];
        // RMSE is sqrt(0.04 / 2) ≈ 0.1414, peak is 2.0.
        assert_approx_eq!(nrmse(&a, &b).unwrap(), 0.070710678, 1e-6);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let a = [0.0f32; 3];
        let b = [0.0f32; 4];
        assert!(matches!(
            max_abs_difference(&a, &b),
            Err(TransformError::DimensionMismatch(_))
        ));
        assert!(matches!(
            nrmse(&a, &b),
            Err(TransformError::DimensionMismatch(_))
        ));
    }
}
