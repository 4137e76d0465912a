//! Build-wide scalar precision.
//!
//! The `f64` cargo feature switches every vector, matrix and helper in the
//! crate to double precision. There is no way to mix precisions within one
//! build; the fast square root routines stay generic over [`Real`] so both
//! formats can be exercised regardless of the active one.

use std::ops::{Add, Div, Mul, Neg, Sub};

cfg_if::cfg_if! {
    if #[cfg(feature = "f64")] {
        /// Floating-point type used throughout the crate
        pub type Scalar = f64;

        /// Magnitudes below this are treated as zero by length and divisor checks
        pub const EPSILON: Scalar = 1e-12;

        /// Name of the active precision
        pub const PRECISION: &str = "f64";
    } else {
        /// Floating-point type used throughout the crate
        pub type Scalar = f32;

        /// Magnitudes below this are treated as zero by length and divisor checks
        pub const EPSILON: Scalar = 1e-6;

        /// Name of the active precision
        pub const PRECISION: &str = "f32";
    }
}

/// IEEE-754 binary format description used by the bit-level approximations.
///
/// The raw bit pattern is always carried in a `u64`, which is wide enough for
/// both formats and lets the magic-constant arithmetic share one code path.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Width of the exponent field
    const EXPONENT_BITS: u32;
    /// Width of the stored mantissa (without the implicit leading bit)
    const MANTISSA_BITS: u32;
    /// Exponent bias, `2^(EXPONENT_BITS - 1) - 1`
    const EXPONENT_BIAS: u64 = (1u64 << (Self::EXPONENT_BITS - 1)) - 1;
    /// Initial-guess constant for the inverse square root, `bias * 2^mantissa * 3 / 2`
    const RSQRT_MAGIC: u64 = Self::EXPONENT_BIAS * (1u64 << Self::MANTISSA_BITS) * 3 / 2;

    const ZERO: Self;
    const HALF: Self;
    const ONE: Self;
    const THREE_HALVES: Self;

    fn to_raw(self) -> u64;
    fn from_raw(bits: u64) -> Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;

    /// Gamma function `Γ(self)`
    fn tgamma(self) -> Self;
}

impl Real for f32 {
    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;

    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const ONE: Self = 1.0;
    const THREE_HALVES: Self = 1.5;

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self.to_bits())
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        // Only the low 32 bits carry an f32 pattern
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn floor(self) -> Self {
        f32::floor(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn tgamma(self) -> Self {
        libm::tgammaf(self)
    }
}

impl Real for f64 {
    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;

    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const ONE: Self = 1.0;
    const THREE_HALVES: Self = 1.5;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn tgamma(self) -> Self {
        libm::tgamma(self)
    }
}
