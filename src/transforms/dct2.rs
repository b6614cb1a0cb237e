//! Precomputed-matrix DCT-II engine.
//!
//! Construction derives both cosine basis matrices from their closed forms
//! once; the transform calls are then direct matrix-vector products against
//! caller-supplied buffers. Evaluation is O(N²) per call: for the short
//! frames this engine targets, precomputation locality beats a factorized
//! fast transform.

use super::traits::CosineTransform;
use crate::{RealFloat, TransformError, TransformResult, to_precision};
use ndarray::Array2;
use std::f64::consts::PI;

/// DCT-II/IDCT-II engine for a fixed transform size.
///
/// Both basis matrices are derived in `f64` and stored in the sample type
/// `F`, matching the convention of evaluating `cos` in double precision
/// and keeping single-precision coefficient tables when `F = f32`.
///
/// The engine is immutable after construction: transform calls take
/// `&self`, write only to their output buffer, and may run concurrently
/// from any number of threads over one shared instance.
#[derive(Debug, Clone)]
pub struct Dct2<F: RealFloat> {
    /// Transform size `N`, fixed at construction.
    size: usize,
    /// Forward basis: `forward[[k, n]] = 2·cos(π·(2n+1)·k / (2N))`.
    forward: Array2<F>,
    /// Inverse basis: `inverse[[k, n]] = 2·cos(π·(2k+1)·n / (2N))` for
    /// `n ≥ 1`. Column 0 stays zero; the DC contribution is applied
    /// directly in [`CosineTransform::inverse`], outside the matrix
    /// summation.
    inverse: Array2<F>,
}

impl<F: RealFloat> Dct2<F> {
    /// Precomputes the forward and inverse basis matrices for `size`.
    ///
    /// O(size²) time and space, paid once per engine lifetime.
    ///
    /// # Errors
    /// Returns [`TransformError::InvalidParameter`] if `size` is zero.
    pub fn new(size: usize) -> TransformResult<Self> {
        if size == 0 {
            return Err(TransformError::InvalidParameter(
                "transform size must be greater than 0".to_string(),
            ));
        }

        let m = PI / ((size << 1) as f64);

        let mut forward = Array2::zeros((size, size));
        for k in 0..size {
            for n in 0..size {
                forward[[k, n]] =
                    to_precision(2.0 * ((((n << 1) + 1) * k) as f64 * m).cos());
            }
        }

        let mut inverse = Array2::zeros((size, size));
        for k in 0..size {
            for n in 1..size {
                inverse[[k, n]] =
                    to_precision(2.0 * ((((k << 1) + 1) * n) as f64 * m).cos());
            }
        }

        tracing::debug!(size, "precomputed DCT-II basis matrices");

        Ok(Self {
            size,
            forward,
            inverse,
        })
    }

    /// Returns the transform size `N` fixed at construction.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Validates both buffer lengths against the precomputed size before
    /// any write to the output buffer.
    fn check_lengths(&self, input_len: usize, output_len: usize) -> TransformResult<()> {
        if input_len > self.size || output_len > self.size {
            return Err(TransformError::DimensionMismatch(format!(
                "input length {input_len} and output length {output_len} must not exceed the transform size {}",
                self.size
            )));
        }
        Ok(())
    }
}

impl<F: RealFloat> CosineTransform<F> for Dct2<F> {
    fn size(&self) -> usize {
        self.size
    }

    fn direct(&self, input: &[F], output: &mut [F]) -> TransformResult<()> {
        self.check_lengths(input.len(), output.len())?;

        for (k, out) in output.iter_mut().enumerate() {
            let row = self.forward.row(k);
            let mut acc = F::zero();
            for (&x, &c) in input.iter().zip(row.iter()) {
                acc = acc + x * c;
            }
            *out = acc;
        }

        Ok(())
    }

    fn direct_norm(&self, input: &[F], output: &mut [F]) -> TransformResult<()> {
        self.check_lengths(input.len(), output.len())?;

        // Both factors are derived in f64 and cast once, like the basis
        // coefficients themselves.
        let norm = to_precision::<F, _>((0.5 / self.size as f64).sqrt());
        let norm0 = to_precision::<F, _>(0.5_f64.sqrt());

        for (k, out) in output.iter_mut().enumerate() {
            let row = self.forward.row(k);
            let mut acc = F::zero();
            for (&x, &c) in input.iter().zip(row.iter()) {
                acc = acc + x * c;
            }
            *out = acc * norm;
        }

        // The DC correction is a separate second stage, not fused into the
        // per-index scale above; the order is part of the numerical
        // contract.
        if let Some(dc) = output.first_mut() {
            *dc = *dc * norm0;
        }

        Ok(())
    }

    fn inverse(&self, input: &[F], output: &mut [F]) -> TransformResult<()> {
        self.check_lengths(input.len(), output.len())?;

        let Some((&dc, rest)) = input.split_first() else {
            return Err(TransformError::InvalidParameter(
                "inverse transform requires at least the DC coefficient".to_string(),
            ));
        };

        for (k, out) in output.iter_mut().enumerate() {
            let row = self.inverse.row(k);
            // Column 0 of the inverse basis is never read; the DC term
            // seeds the accumulator instead.
            let mut acc = dc;
            for (&x, &c) in rest.iter().zip(row.iter().skip(1)) {
                acc = acc + x * c;
            }
            *out = acc;
        }

        Ok(())
    }
}
