use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

use super::impl_matrix_common;
use crate::{Scalar, Vec3};

/// 3x3 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 9]", into = "[Scalar; 9]")
)]
#[repr(C)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

assert_eq_size!(Mat3, [Scalar; 9]);

#[allow(clippy::should_implement_trait)]
impl Mat3 {
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
    pub const IDENTITY: Self = Self::from_cols(Vec3::X, Vec3::Y, Vec3::Z);

    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    fn map2(self, rhs: Self, f: impl Fn(Vec3, Vec3) -> Vec3) -> Self {
        Self::from_cols(
            f(self.cols[0], rhs.cols[0]),
            f(self.cols[1], rhs.cols[1]),
            f(self.cols[2], rhs.cols[2]),
        )
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        self.map2(rhs, Vec3::add)
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, Vec3::sub)
    }

    /// Element-wise product
    #[inline]
    pub fn hadamard(self, rhs: Self) -> Self {
        self.map2(rhs, Vec3::mul)
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self::from_cols(
            self.cols[0].scale(s),
            self.cols[1].scale(s),
            self.cols[2].scale(s),
        )
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::from_cols(
            self.cols[0].negate(),
            self.cols[1].negate(),
            self.cols[2].negate(),
        )
    }

    /// `c0*v.x + c1*v.y + c2*v.z`
    pub fn mul_vec3(self, v: Vec3) -> Vec3 {
        let [c0, c1, c2] = self.cols;
        c0.scale(v.x).add(c1.scale(v.y)).add(c2.scale(v.z))
    }

    /// Matrix product; column `i` of the result is `self.mul_vec3(rhs.col(i))`
    pub fn mul_mat3(self, rhs: Self) -> Self {
        Self::from_cols(
            self.mul_vec3(rhs.cols[0]),
            self.mul_vec3(rhs.cols[1]),
            self.mul_vec3(rhs.cols[2]),
        )
    }
}

impl_matrix_common!(Mat3, Vec3, 3, 9, mul_vec3, mul_mat3);
