//! Core trait definition for cosine transform engines.
//!
//! The trait pins down the numerical contract (coefficient formulas and
//! buffer-length preconditions included) so that a different evaluation
//! strategy, e.g. a fast factorized DCT, could be swapped in behind the
//! same seam without changing callers.

use crate::{RealFloat, TransformResult};

/// Forward and inverse DCT-II over fixed-size real-valued buffers.
///
/// An implementor is constructed for a fixed transform size `N` and is
/// immutable afterwards; every method is a pure function of the input
/// buffer that writes only to the output buffer. Buffers shorter than `N`
/// are accepted: a short input behaves as if zero-padded to `N`, and a
/// short output receives only the leading coefficients (or samples).
/// Buffers longer than `N` are rejected before anything is written.
pub trait CosineTransform<F: RealFloat> {
    /// Returns the transform size `N` fixed at construction.
    fn size(&self) -> usize;

    /// Computes the unnormalized forward DCT-II.
    ///
    /// For each output index `k`:
    /// `output[k] = Σ_{n} input[n] · 2·cos(π·(2n+1)·k / (2N))`.
    ///
    /// No scaling is applied; the result of transforming a constant signal
    /// of ones has `2N` in the DC slot.
    ///
    /// # Arguments
    /// * `input` - Time-domain samples, at most `N` of them
    /// * `output` - Receives the leading `output.len()` coefficients
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`](crate::TransformError::DimensionMismatch)
    /// if either buffer is longer than `N`. The output buffer is untouched
    /// on error.
    fn direct(&self, input: &[F], output: &mut [F]) -> TransformResult<()>;

    /// Computes the forward DCT-II with orthonormal scaling.
    ///
    /// The raw sums of [`direct`](CosineTransform::direct) are computed
    /// first, every entry is then multiplied by `sqrt(0.5 / N)`, and the
    /// DC entry is finally multiplied by a further `sqrt(0.5)`. The
    /// two-stage order is part of the contract: implementations must not
    /// fuse the factors into per-index constants, so that results stay
    /// reproducible bit-for-bit across implementations.
    ///
    /// # Arguments
    /// * `input` - Time-domain samples, at most `N` of them
    /// * `output` - Receives the leading `output.len()` scaled coefficients
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`](crate::TransformError::DimensionMismatch)
    /// if either buffer is longer than `N`. The output buffer is untouched
    /// on error.
    fn direct_norm(&self, input: &[F], output: &mut [F]) -> TransformResult<()>;

    /// Computes the unnormalized inverse DCT-II.
    ///
    /// For each output index `k`:
    /// `output[k] = input[0] + Σ_{n≥1} input[n] · 2·cos(π·(2k+1)·n / (2N))`.
    ///
    /// The DC coefficient contributes uniformly and unscaled to every
    /// output sample. There is no normalized inverse variant; undoing the
    /// scaling of [`direct_norm`](CosineTransform::direct_norm) is the
    /// caller's responsibility.
    ///
    /// # Arguments
    /// * `input` - Frequency-domain coefficients, at least one and at most `N`
    /// * `output` - Receives the leading `output.len()` reconstructed samples
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`](crate::TransformError::DimensionMismatch)
    /// if either buffer is longer than `N`, and
    /// [`TransformError::InvalidParameter`](crate::TransformError::InvalidParameter)
    /// if `input` is empty (there is no DC term to seed the outputs with).
    /// The output buffer is untouched on error.
    fn inverse(&self, input: &[F], output: &mut [F]) -> TransformResult<()>;
}
