//! Fixed-size linear algebra for the noneuc renderer.
//!
//! The renderer feeds camera vectors and projection matrices to the graphics API once per frame,
//! so everything here is a small, `Copy`, stack-allocated value whose dimensions are known at
//! compile time.
//!
//! # Overview
//!
//! - [`Vector`] is an `N`-element column vector. It supports element-wise arithmetic, the dot
//!   product, norms, normalization, the 3D cross product, concatenation and element type casts.
//! - [`Matrix`] is a column-major matrix made of `C` column [`Vector`]s. It provides the identity,
//!   matrix-vector and matrix-matrix products, and the perspective projection used by the
//!   renderer.
//! - [`Unrolled`] is the hot-path variant of the common 2D and 3D [`f32`] vector operations,
//!   written out lane by lane. It is guaranteed to produce bit-identical results to the generic
//!   operations.
//!
//! # Faults and numeric edge cases
//!
//! Programming errors (out-of-bounds indexing, element lists that don't fit, invalid projection
//! parameters) panic. Dimension mismatches between statically sized vectors are rejected at
//! compile time.
//!
//! Numeric edge cases are *not* guarded: dividing by zero or normalizing a zero-length vector
//! follows IEEE 754 and produces infinities or NaN.

pub mod approx;
mod error;
mod matrix;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
