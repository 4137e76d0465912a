//! numen - small fixed-size linear algebra
//!
//! 2/3/4-component vectors and square matrices over a build-wide [`Scalar`],
//! bit-trick square roots, and a handful of scalar helpers. `Mat4` runs its
//! element-wise ops and products through a 4-lane kernel that uses SSE2, NEON
//! or `std::simd` where available.
//!
//! Everything is plain `Copy` data; fallible operations return [`Result`].

#![cfg_attr(feature = "portable_simd", feature(portable_simd))]

pub mod consts;
mod error;
pub mod kernel;
pub mod math;
pub mod matrix;
mod scalar;
pub mod vector;

pub use error::{Error, Result};
pub use math::{factorial, rsqrt, sqrt};
pub use matrix::{Mat2, Mat3, Mat4};
pub use scalar::{Real, Scalar, EPSILON, PRECISION};
pub use vector::{Vec2, Vec3, Vec4};
