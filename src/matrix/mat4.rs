use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::{assert_eq_size, const_assert_eq};

use super::impl_matrix_common;
use crate::kernel::{ActiveKernel, Kernel4};
use crate::{Scalar, Vec4};

/// 4x4 column-major matrix.
///
/// Element-wise operations and products run through [`ActiveKernel`]; each
/// has a `*_with` form taking the kernel as a type parameter, so any compiled
/// backend can be called explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 16]", into = "[Scalar; 16]")
)]
#[repr(C, align(16))]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

assert_eq_size!(Mat4, [Scalar; 16]);
const_assert_eq!(std::mem::align_of::<Mat4>(), 16);

#[allow(clippy::should_implement_trait)]
impl Mat4 {
    pub const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
    pub const IDENTITY: Self = Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        self.add_with::<ActiveKernel>(rhs)
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        self.sub_with::<ActiveKernel>(rhs)
    }

    /// Element-wise product
    #[inline]
    pub fn hadamard(self, rhs: Self) -> Self {
        self.hadamard_with::<ActiveKernel>(rhs)
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        self.scale_with::<ActiveKernel>(s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        self.negate_with::<ActiveKernel>()
    }

    /// `c0*v.x + c1*v.y + c2*v.z + c3*v.w`
    #[inline]
    pub fn mul_vec4(self, v: Vec4) -> Vec4 {
        self.mul_vec4_with::<ActiveKernel>(v)
    }

    /// Matrix product; column `i` of the result is `self.mul_vec4(rhs.col(i))`
    #[inline]
    pub fn mul_mat4(self, rhs: Self) -> Self {
        self.mul_mat4_with::<ActiveKernel>(rhs)
    }

    #[inline]
    pub fn add_with<K: Kernel4>(self, rhs: Self) -> Self {
        Self::from_cols_array(&K::add(self.as_array(), rhs.as_array()))
    }

    #[inline]
    pub fn sub_with<K: Kernel4>(self, rhs: Self) -> Self {
        Self::from_cols_array(&K::sub(self.as_array(), rhs.as_array()))
    }

    #[inline]
    pub fn hadamard_with<K: Kernel4>(self, rhs: Self) -> Self {
        Self::from_cols_array(&K::hadamard(self.as_array(), rhs.as_array()))
    }

    #[inline]
    pub fn scale_with<K: Kernel4>(self, s: Scalar) -> Self {
        Self::from_cols_array(&K::scale(self.as_array(), s))
    }

    #[inline]
    pub fn negate_with<K: Kernel4>(self) -> Self {
        Self::from_cols_array(&K::negate(self.as_array()))
    }

    #[inline]
    pub fn mul_vec4_with<K: Kernel4>(self, v: Vec4) -> Vec4 {
        Vec4::from_array(K::mul_vec4(self.as_array(), v.as_array()))
    }

    #[inline]
    pub fn mul_mat4_with<K: Kernel4>(self, rhs: Self) -> Self {
        Self::from_cols_array(&K::mul_mat4(self.as_array(), rhs.as_array()))
    }
}

impl_matrix_common!(Mat4, Vec4, 4, 16, mul_vec4, mul_mat4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::ScalarKernel;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[cfg(not(feature = "f64"))]
    type RefMat4 = glam::Mat4;
    #[cfg(feature = "f64")]
    type RefMat4 = glam::DMat4;

    const SEQUENTIAL: [Scalar; 16] = [
        1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0,
    ];

    fn random_mat4(rng: &mut StdRng) -> Mat4 {
        Mat4::from_cols_array(&std::array::from_fn(|_| rng.random_range(-100.0..100.0)))
    }

    // Small integers keep every product and partial sum exact
    fn random_integer_mat4(rng: &mut StdRng) -> Mat4 {
        Mat4::from_cols_array(&std::array::from_fn(|_| rng.random_range(-8..=8) as Scalar))
    }

    #[test]
    fn test_identity_from_array() {
        let m = Mat4::from_cols_array(&[
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(m, Mat4::identity());
        assert_eq!(Mat4::diagonal(1.0), Mat4::IDENTITY);
        assert_eq!(Mat4::diagonal(0.0), Mat4::zero());
    }

    #[test]
    fn test_mul_vec4_sequential() {
        let m = Mat4::from_cols_array(&SEQUENTIAL);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.mul_vec4(v), Vec4::new(30.0, 70.0, 110.0, 150.0));
        assert_eq!(m * v, Vec4::new(30.0, 70.0, 110.0, 150.0));
    }

    #[test]
    fn test_column_and_element_views_agree() {
        let m = Mat4::from_cols_array(&SEQUENTIAL);
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(m.as_array()[col * 4 + row], m.col(col)[row]);
                assert_eq!(m.get(row, col), m.columns()[col][row]);
            }
        }
        assert_eq!(m.col(2), Vec4::new(3.0, 7.0, 11.0, 15.0));
        assert_eq!(m.to_cols_array(), SEQUENTIAL);
    }

    #[test]
    fn test_flat_index_matches_columns() {
        let mut m = Mat4::from_cols_array(&SEQUENTIAL);
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(m[col * 4 + row], m.col(col)[row], "element {} {}", row, col);
            }
        }
        assert_eq!(Mat4::IDENTITY[5], 1.0);
        assert_eq!(Mat4::IDENTITY[6], 0.0);

        m[7] = -2.0;
        assert_eq!(m.get(3, 1), -2.0);
        assert_eq!(m.cols[1].w, -2.0);

        let collected: Vec<Scalar> = m.elements().copied().collect();
        assert_eq!(collected.len(), 16);
        assert_eq!(collected[7], -2.0);
        assert_eq!(collected[..4], SEQUENTIAL[..4]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..64 {
            let m = random_mat4(&mut rng);
            assert_eq!(m.mul_mat4(Mat4::IDENTITY), m, "m * I != m for {:?}", m);
            assert_eq!(Mat4::IDENTITY.mul_mat4(m), m, "I * m != m for {:?}", m);
        }
    }

    #[test]
    fn test_product_columns_match_mul_vec4() {
        let mut rng = StdRng::seed_from_u64(45);
        for _ in 0..64 {
            let a = random_mat4(&mut rng);
            let b = random_mat4(&mut rng);
            let p = a * b;
            for i in 0..4 {
                assert_eq!(p.col(i), a.mul_vec4(b.col(i)), "column {} differs", i);
            }
        }
    }

    #[test]
    fn test_product_matches_glam() {
        let mut rng = StdRng::seed_from_u64(46);
        for _ in 0..64 {
            let a = random_integer_mat4(&mut rng);
            let b = random_integer_mat4(&mut rng);
            let expected = RefMat4::from_cols_array(a.as_array())
                * RefMat4::from_cols_array(b.as_array());
            assert_eq!(a.mul_mat4(b).to_cols_array(), expected.to_cols_array());
        }
    }

    #[test]
    fn test_active_matches_scalar_kernel() {
        let mut rng = StdRng::seed_from_u64(47);
        for _ in 0..64 {
            let a = random_mat4(&mut rng);
            let b = random_mat4(&mut rng);
            let v = Vec4::from_array(std::array::from_fn(|_| rng.random_range(-100.0..100.0)));
            assert_eq!(a.add(b), a.add_with::<ScalarKernel>(b));
            assert_eq!(a.sub(b), a.sub_with::<ScalarKernel>(b));
            assert_eq!(a.hadamard(b), a.hadamard_with::<ScalarKernel>(b));
            assert_eq!(a.scale(0.5), a.scale_with::<ScalarKernel>(0.5));
            assert_eq!(a.negate(), a.negate_with::<ScalarKernel>());
            assert_eq!(a.mul_vec4(v), a.mul_vec4_with::<ScalarKernel>(v));
            assert_eq!(a.mul_mat4(b), a.mul_mat4_with::<ScalarKernel>(b));
        }
    }

    #[test]
    fn test_element_wise_ops() {
        let m = Mat4::from_cols_array(&SEQUENTIAL);
        let twice = m + m;
        assert_eq!(twice, m.scale(2.0));
        assert_eq!(twice - m, m);
        assert_eq!(m - m, Mat4::ZERO);
        assert_eq!(-m + m, Mat4::ZERO);
        assert_eq!(m.hadamard(Mat4::IDENTITY), Mat4::diagonal(1.0).hadamard(m));
        assert_eq!(m.hadamard(Mat4::IDENTITY).get(3, 3), 16.0);
        assert_eq!(m * 0.0, Mat4::ZERO);
    }

    #[test]
    fn test_transpose() {
        let m = Mat4::from_cols_array(&SEQUENTIAL);
        let t = m.transpose();
        assert_eq!(t.col(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(t.transpose(), m);
        assert_eq!(Mat4::IDENTITY.transpose(), Mat4::IDENTITY);
    }

    #[test]
    fn test_assign_ops() {
        let m = Mat4::from_cols_array(&SEQUENTIAL);
        let mut acc = Mat4::IDENTITY;
        acc *= m;
        assert_eq!(acc, m);
        acc += m;
        acc -= m;
        acc *= 2.0;
        assert_eq!(acc, m.scale(2.0));
        acc.set(0, 3, -1.0);
        assert_eq!(acc.col(3).x, -1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_flat_array() {
        let json = serde_json::to_string(&Mat4::IDENTITY).unwrap();
        assert_eq!(
            json,
            "[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]"
        );
        let back: Mat4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mat4::IDENTITY);
    }
}
