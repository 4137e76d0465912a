use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{check_divisor, check_finite_length, impl_vector_common};
use crate::math::sqrt_unchecked;
use crate::{Error, Result, Scalar, EPSILON};

/// 2-component vector, the column type of [`crate::Mat2`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 2]", into = "[Scalar; 2]")
)]
#[repr(C)]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

#[allow(clippy::should_implement_trait)]
impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn length(self) -> Scalar {
        sqrt_unchecked(self.length_squared())
    }

    #[inline]
    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.length_squared() < EPSILON * EPSILON
    }

    pub fn normalize(self) -> Result<Self> {
        if self.is_zero() {
            log::trace!("Vec2::normalize: zero-length input {:?}", self);
            return Err(Error::ZeroDivision);
        }
        check_finite_length(self.length_squared(), "Vec2::normalize")?;
        Ok(self.scale(1.0 / self.length()))
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    pub fn div(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs.as_array(), "Vec2::div")?;
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Scalar {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Perp-dot product `x1*y2 - y1*x2`, the z of the 3D cross product
    #[inline]
    pub fn cross(self, rhs: Self) -> Scalar {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Counter-clockwise perpendicular `(-y, x)`
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    pub fn project(self, onto: Self) -> Result<Self> {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec2::project: degenerate direction {:?}", onto);
            return Err(Error::ZeroDivision);
        }
        Ok(onto.scale(self.dot(onto) / len_sq))
    }

    pub fn reject(self, from: Self) -> Result<Self> {
        let len_sq = from.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec2::reject: degenerate direction {:?}", from);
            return Err(Error::ZeroDivision);
        }
        let scaler = self.dot(from) / len_sq;
        Ok(Self::new(self.x - scaler * from.x, self.y - scaler * from.y))
    }

    /// Reflect across the line with the given (not necessarily unit) normal
    pub fn reflect(self, normal: Self) -> Result<Self> {
        let len_sq = normal.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec2::reflect: degenerate normal {:?}", normal);
            return Err(Error::ZeroDivision);
        }
        let scaler = 2.0 * self.dot(normal) / len_sq;
        Ok(Self::new(
            self.x - scaler * normal.x,
            self.y - scaler * normal.y,
        ))
    }
}

impl_vector_common!(Vec2, 2);

impl From<(Scalar, Scalar)> for Vec2 {
    #[inline]
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Self::new(x, y)
    }
}
