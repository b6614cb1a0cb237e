// Correctness and logic
#![warn(clippy::unit_cmp)]
#![warn(clippy::match_same_arms)]
// Performance-focused
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::map_clone)]
#![warn(clippy::unnecessary_to_owned)]
#![warn(clippy::needless_collect)]
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)]
#![warn(clippy::identity_op)]
#![warn(clippy::needless_return)]
#![warn(clippy::manual_map)]
#![warn(clippy::unwrap_used)]
// Maintainability
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![deny(missing_docs)]

//! # dct_transforms
//!
//! A Discrete Cosine Transform (type-II) engine with precomputed basis matrices,
//! intended as a building block for signal-processing pipelines such as cepstral
//! feature extraction and compression-style spectral analysis.
//!
//! ## Overview
//!
//! The engine is constructed once for a fixed transform size `N`. Construction
//! precomputes the forward and inverse cosine basis matrices (`O(N²)` space),
//! after which the three transform operations are plain matrix-vector products
//! against caller-supplied buffers:
//!
//! - [`CosineTransform::direct`]: unnormalized forward DCT-II
//! - [`CosineTransform::direct_norm`]: orthonormally scaled forward DCT-II
//! - [`CosineTransform::inverse`]: unnormalized inverse (DCT-III up to scale)
//!
//! The direct `O(N²)` evaluation is deliberate: for the short frames typical of
//! feature extraction, the precomputed-matrix approach keeps every call
//! allocation-free and branch-light. No FFT-based fast path is provided.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! dct_transforms = "0.1"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use dct_transforms::{CosineTransform, Dct2};
//!
//! # fn main() -> dct_transforms::TransformResult<()> {
//! let dct = Dct2::<f32>::new(8)?;
//!
//! let input = [1.0f32; 8];
//! let mut spectrum = [0.0f32; 8];
//! dct.direct(&input, &mut spectrum)?;
//!
//! // A constant signal concentrates entirely into the DC coefficient.
//! assert_eq!(spectrum[0], 16.0);
//! # Ok(())
//! # }
//! ```
//!
//! Output buffers may be shorter than the transform size, which computes only
//! the leading coefficients (the usual truncated-cepstrum pattern):
//!
//! ```rust
//! use dct_transforms::{CosineTransform, Dct2, utils::generation::sine};
//!
//! # fn main() -> dct_transforms::TransformResult<()> {
//! let dct = Dct2::<f64>::new(64)?;
//! let frame: Vec<f64> = sine(64, 440.0, 16_000.0, 1.0);
//!
//! let mut cepstrum = [0.0f64; 13];
//! dct.direct_norm(&frame, &mut cepstrum)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`TransformResult`]. Preconditions are
//! validated before anything is written to the output buffer:
//!
//! ```rust
//! use dct_transforms::{CosineTransform, Dct2, TransformError};
//!
//! let dct = Dct2::<f32>::new(4).unwrap();
//! let too_long = [0.0f32; 5];
//! let mut output = [0.0f32; 4];
//!
//! match dct.direct(&too_long, &mut output) {
//!     Err(TransformError::DimensionMismatch(msg)) => eprintln!("rejected: {msg}"),
//!     other => panic!("expected a dimension error, got {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! An engine is immutable after construction and holds no interior mutability,
//! so a single instance can be shared freely across threads; callers only need
//! distinct output buffers per thread.
//!
//! ## License
//!
//! MIT License

mod error;

pub mod transforms;
pub mod utils;

use std::fmt::Debug;

pub use crate::error::{TransformError, TransformResult};
pub use crate::transforms::{CosineTransform, Dct2};
pub use crate::utils::{comparison, generation};

use num_traits::{Float, FloatConst, NumCast};

/// Marker trait for real floating-point sample types (f32, f64)
pub trait RealFloat: Float + FloatConst + NumCast + Debug {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Abstracts over floating-point precision in generic code where the target
/// type `F: RealFloat` may be either `f32` or `f64`, so numeric routines can
/// be written once without explicit `as` conversions. When `F` and `T` are
/// the same type the cast compiles down to a no-op.
///
/// # Panics
/// Panics if the numeric conversion fails (e.g. a non-finite value that the
/// target type cannot represent).
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat,
    T: NumCast,
{
    NumCast::from(value).expect("to_precision: valid numeric conversion")
}
