use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{check_divisor, check_finite_length, impl_vector_common};
use crate::math::sqrt_unchecked;
use crate::{Error, Result, Scalar, EPSILON};

/// 3-component vector, the column type of [`crate::Mat3`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 3]", into = "[Scalar; 3]")
)]
#[repr(C)]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

#[allow(clippy::should_implement_trait)]
impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
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
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.length_squared() < EPSILON * EPSILON
    }

    pub fn normalize(self) -> Result<Self> {
        if self.is_zero() {
            log::trace!("Vec3::normalize: zero-length input {:?}", self);
            return Err(Error::ZeroDivision);
        }
        check_finite_length(self.length_squared(), "Vec3::normalize")?;
        Ok(self.scale(1.0 / self.length()))
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    pub fn div(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs.as_array(), "Vec3::div")?;
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z))
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Scalar {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    pub fn project(self, onto: Self) -> Result<Self> {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec3::project: degenerate direction {:?}", onto);
            return Err(Error::ZeroDivision);
        }
        Ok(onto.scale(self.dot(onto) / len_sq))
    }

    pub fn reject(self, from: Self) -> Result<Self> {
        let len_sq = from.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec3::reject: degenerate direction {:?}", from);
            return Err(Error::ZeroDivision);
        }
        let scaler = self.dot(from) / len_sq;
        Ok(Self::new(
            self.x - scaler * from.x,
            self.y - scaler * from.y,
            self.z - scaler * from.z,
        ))
    }

    /// Reflect across the plane with the given (not necessarily unit) normal
    pub fn reflect(self, normal: Self) -> Result<Self> {
        let len_sq = normal.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec3::reflect: degenerate normal {:?}", normal);
            return Err(Error::ZeroDivision);
        }
        let scaler = 2.0 * self.dot(normal) / len_sq;
        Ok(Self::new(
            self.x - scaler * normal.x,
            self.y - scaler * normal.y,
            self.z - scaler * normal.z,
        ))
    }
}

impl_vector_common!(Vec3, 3);

impl From<(Scalar, Scalar, Scalar)> for Vec3 {
    #[inline]
    fn from((x, y, z): (Scalar, Scalar, Scalar)) -> Self {
        Self::new(x, y, z)
    }
}
