//! Scalar helpers: angle conversion, integer powers, fast square roots and factorials.
//!
//! `sqrt` and `rsqrt` here are approximations. They use the bit-level initial
//! guess followed by two Newton-Raphson steps, so results carry a relative
//! error of roughly 2e-4 at either precision. Use the std methods where exact
//! IEEE rounding matters.

use crate::consts::{DEG_TO_RAD, E, RAD_TO_DEG, TAU};
use crate::scalar::Real;
use crate::{Error, Result, Scalar};

/// Factorials of 0 through 20, the largest that fit in a `u64`
pub static FACTORIAL_TABLE: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: Scalar) -> Scalar {
    degrees * DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees(radians: Scalar) -> Scalar {
    radians * RAD_TO_DEG
}

/// `n * n`
#[inline]
pub fn sqr(n: Scalar) -> Scalar {
    n * n
}

/// True if `n` has no fractional part
#[inline]
pub fn is_int(n: Scalar) -> bool {
    n == n.floor()
}

/// True if `n` is a non-negative integer
#[inline]
pub fn is_uint(n: Scalar) -> bool {
    n >= 0.0 && is_int(n)
}

/// `x^n` by square-and-multiply; negative exponents reciprocate the base first
pub fn pow_int(x: Scalar, n: i32) -> Scalar {
    if n < 0 {
        pow_uint(1.0 / x, n.unsigned_abs())
    } else {
        pow_uint(x, n.unsigned_abs())
    }
}

/// `x^n` by square-and-multiply, O(log n) multiplications
pub fn pow_uint(mut x: Scalar, mut n: u32) -> Scalar {
    let mut result = 1.0;
    while n > 0 {
        if n & 1 == 1 {
            result *= x;
        }
        x *= x;
        n >>= 1;
    }
    result
}

/// Approximate `1/sqrt(n)` with no domain checks.
///
/// `n` is expected to be non-negative. Wrapping arithmetic keeps the bit
/// hack total, so NaN or negative input yields garbage rather than a panic.
#[inline]
pub(crate) fn rsqrt_unchecked<T: Real>(n: T) -> T {
    let guess = T::RSQRT_MAGIC.wrapping_sub(n.to_raw() >> 1);
    let mut x = T::from_raw(guess);

    // Two fixed Newton-Raphson steps
    x = x * (T::THREE_HALVES - T::HALF * n * x * x);
    x = x * (T::THREE_HALVES - T::HALF * n * x * x);
    x
}

/// Approximate `sqrt(n)` with no domain checks, `n * rsqrt(n)`
#[inline]
pub(crate) fn sqrt_unchecked<T: Real>(n: T) -> T {
    n * rsqrt_unchecked(n)
}

fn check_domain<T: Real>(n: T, op: &str) -> Result<()> {
    if n.is_nan() {
        log::trace!("{}: NaN input", op);
        return Err(Error::NotANumber);
    }
    if n < T::ZERO {
        log::trace!("{}: negative input", op);
        return Err(Error::Domain);
    }
    Ok(())
}

/// Fast approximate inverse square root.
///
/// Fails with [`Error::Domain`] for negative input and [`Error::NotANumber`]
/// for NaN. `rsqrt(+inf)` is zero and `rsqrt(0)` is a large finite value.
/// Works at either precision independently of the crate's `Scalar`.
pub fn rsqrt<T: Real>(n: T) -> Result<T> {
    check_domain(n, "rsqrt")?;
    if !n.is_finite() {
        return Ok(T::ZERO);
    }
    Ok(rsqrt_unchecked(n))
}

/// Fast approximate square root, see [`rsqrt`]
pub fn sqrt<T: Real>(n: T) -> Result<T> {
    check_domain(n, "sqrt")?;
    if !n.is_finite() {
        return Ok(n);
    }
    Ok(sqrt_unchecked(n))
}

/// `n!` for any non-negative `n`.
///
/// Integral `n <= 20` comes from [`FACTORIAL_TABLE`]. Larger integers use
/// Stirling's series with three correction terms, which keeps the relative
/// error within the fast square root's. Non-integral `n` evaluates `Γ(n + 1)`.
///
/// Fails with [`Error::Domain`] when `n < 0`, [`Error::NotANumber`] for NaN
/// and [`Error::Overflow`] when the result is not representable.
pub fn factorial(n: Scalar) -> Result<Scalar> {
    check_domain(n, "factorial")?;

    let result = if is_uint(n) {
        if n <= 20.0 {
            return Ok(FACTORIAL_TABLE[n as usize] as Scalar);
        }
        stirling(n)
    } else {
        (n + 1.0).tgamma()
    };

    if !result.is_finite() {
        log::trace!("factorial: {} overflows", n);
        return Err(Error::Overflow);
    }
    Ok(result)
}

fn stirling(n: Scalar) -> Scalar {
    let root = sqrt_unchecked(TAU * n);
    // Saturates for huge n, which overflows either way
    let power = pow_uint(n / E, n as u32);
    let correction = 1.0 + 1.0 / (12.0 * n) + 1.0 / (288.0 * n * n)
        - 139.0 / (51_840.0 * n * n * n);
    root * power * correction
}
