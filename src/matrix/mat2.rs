use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

use super::impl_matrix_common;
use crate::{Scalar, Vec2};

/// 2x2 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 4]", into = "[Scalar; 4]")
)]
#[repr(C)]
pub struct Mat2 {
    pub cols: [Vec2; 2],
}

assert_eq_size!(Mat2, [Scalar; 4]);

#[allow(clippy::should_implement_trait)]
impl Mat2 {
    pub const ZERO: Self = Self::from_cols(Vec2::ZERO, Vec2::ZERO);
    pub const IDENTITY: Self = Self::from_cols(Vec2::X, Vec2::Y);

    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { cols: [c0, c1] }
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.cols[0].add(rhs.cols[0]), self.cols[1].add(rhs.cols[1]))
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.cols[0].sub(rhs.cols[0]), self.cols[1].sub(rhs.cols[1]))
    }

    #[inline]
    pub fn hadamard(self, rhs: Self) -> Self {
        Self::from_cols(self.cols[0].mul(rhs.cols[0]), self.cols[1].mul(rhs.cols[1]))
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self::from_cols(self.cols[0].scale(s), self.cols[1].scale(s))
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::from_cols(self.cols[0].negate(), self.cols[1].negate())
    }

    #[inline]
    pub fn mul_vec2(self, v: Vec2) -> Vec2 {
        self.cols[0].scale(v.x).add(self.cols[1].scale(v.y))
    }

    #[inline]
    pub fn mul_mat2(self, rhs: Self) -> Self {
        Self::from_cols(self.mul_vec2(rhs.cols[0]), self.mul_vec2(rhs.cols[1]))
    }
}

impl_matrix_common!(Mat2, Vec2, 2, 4, mul_vec2, mul_mat2);
