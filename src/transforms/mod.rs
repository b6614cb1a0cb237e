//! Discrete cosine transform operations.
//!
//! The transform surface is defined by one trait and implemented by one
//! engine, keeping the seam open for alternative evaluation strategies
//! behind the same contract.
//!
//! ## Module Organization
//!
//! - [`traits`] - The [`CosineTransform`] contract
//! - [`dct2`] - The precomputed-matrix DCT-II engine
//!
//! ## Quick Start
//!
//! ```rust
//! use dct_transforms::transforms::{CosineTransform, Dct2};
//!
//! # fn example() -> dct_transforms::TransformResult<()> {
//! let dct = Dct2::<f32>::new(16)?;
//!
//! let input = [0.5f32; 16];
//! let mut output = [0.0f32; 16];
//! dct.direct_norm(&input, &mut output)?;
//! # Ok(())
//! # }
//! ```

pub mod dct2;
pub mod traits;

// Re-export the transform surface for convenience
pub use dct2::Dct2;
pub use traits::CosineTransform;
