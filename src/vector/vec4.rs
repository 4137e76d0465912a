use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{check_divisor, check_finite_length, impl_vector_common, Vec3};
use crate::math::sqrt_unchecked;
use crate::{Error, Result, Scalar, EPSILON};

/// 4-component vector, also the column type of [`crate::Mat4`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[Scalar; 4]", into = "[Scalar; 4]")
)]
#[repr(C)]
pub struct Vec4 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

#[allow(clippy::should_implement_trait)]
impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Extend a `Vec3` with a `w` component
    #[inline]
    pub const fn from_vec3(v: Vec3, w: Scalar) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drop the `w` component
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Approximate length, see [`crate::math::sqrt`]
    #[inline]
    pub fn length(self) -> Scalar {
        sqrt_unchecked(self.length_squared())
    }

    /// Exact sum of squared components
    #[inline]
    pub fn length_squared(self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// True if the squared length is below `EPSILON²`
    #[inline]
    pub fn is_zero(self) -> bool {
        self.length_squared() < EPSILON * EPSILON
    }

    /// Scale to unit length. Fails with [`Error::ZeroDivision`] if [`Self::is_zero`]
    /// and with [`Error::Overflow`] if the squared length is not representable.
    pub fn normalize(self) -> Result<Self> {
        if self.is_zero() {
            log::trace!("Vec4::normalize: zero-length input {:?}", self);
            return Err(Error::ZeroDivision);
        }
        check_finite_length(self.length_squared(), "Vec4::normalize")?;
        Ok(self.scale(1.0 / self.length()))
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }

    /// Component-wise product
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }

    /// Component-wise quotient.
    ///
    /// Every component of `rhs` is checked before any division; fails with
    /// [`Error::ZeroDivision`] if one has magnitude below epsilon, or
    /// [`Error::NotANumber`] if one is NaN.
    pub fn div(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs.as_array(), "Vec4::div")?;
        Ok(Self::new(
            self.x / rhs.x,
            self.y / rhs.y,
            self.z / rhs.z,
            self.w / rhs.w,
        ))
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Scalar {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// 3D cross product of the `xyz` parts, with `w` forced to 0.
    ///
    /// This is not a 4D operation: both inputs' `w` components are ignored.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
            0.0,
        )
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Projection of `self` onto `onto`
    pub fn project(self, onto: Self) -> Result<Self> {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec4::project: degenerate direction {:?}", onto);
            return Err(Error::ZeroDivision);
        }
        Ok(onto.scale(self.dot(onto) / len_sq))
    }

    /// Component of `self` orthogonal to `from`
    pub fn reject(self, from: Self) -> Result<Self> {
        let len_sq = from.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec4::reject: degenerate direction {:?}", from);
            return Err(Error::ZeroDivision);
        }
        let scaler = self.dot(from) / len_sq;
        Ok(Self::new(
            self.x - scaler * from.x,
            self.y - scaler * from.y,
            self.z - scaler * from.z,
            self.w - scaler * from.w,
        ))
    }

    /// Reflect `self` across the hyperplane with the given normal.
    ///
    /// The normal does not need to be unit length.
    pub fn reflect(self, normal: Self) -> Result<Self> {
        let len_sq = normal.length_squared();
        if len_sq < EPSILON {
            log::trace!("Vec4::reflect: degenerate normal {:?}", normal);
            return Err(Error::ZeroDivision);
        }
        let scaler = 2.0 * self.dot(normal) / len_sq;
        Ok(Self::new(
            self.x - scaler * normal.x,
            self.y - scaler * normal.y,
            self.z - scaler * normal.z,
            self.w - scaler * normal.w,
        ))
    }
}

impl_vector_common!(Vec4, 4);

impl From<(Scalar, Scalar, Scalar, Scalar)> for Vec4 {
    #[inline]
    fn from((x, y, z, w): (Scalar, Scalar, Scalar, Scalar)) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{W, X, Y, Z};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Tolerance for results that go through the approximate sqrt
    const APPROX: Scalar = 1e-3;

    fn random_vec4(rng: &mut StdRng) -> Vec4 {
        Vec4::new(
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
        )
    }

    #[test]
    fn test_named_and_indexed_views_alias() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[X], v.x);
        assert_eq!(v[Y], v.y);
        assert_eq!(v[Z], v.z);
        assert_eq!(v[W], v.w);

        v[Z] = 9.0;
        assert_eq!(v.z, 9.0);
        v.w = -1.0;
        assert_eq!(v.as_array()[3], -1.0);
        assert_eq!(
            v.as_array().as_ptr() as usize,
            &v.x as *const Scalar as usize
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(Vec4::zero(), Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert!(Vec4::zero().is_zero());
        assert_eq!(Vec4::default(), Vec4::ZERO);
    }

    #[test]
    fn test_length() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert!((v.length() - 5.0).abs() < 5.0 * APPROX);
    }

    #[test]
    fn test_length_squared_is_self_dot() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let v = random_vec4(&mut rng);
            assert_eq!(v.length_squared(), v.dot(v));
        }
    }

    #[test]
    fn test_normalize_unit_length() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..100 {
            let v = random_vec4(&mut rng);
            let n = v.normalize().unwrap();
            assert!(
                (n.length() - 1.0).abs() < APPROX,
                "normalize({:?}) has length {}",
                v,
                n.length()
            );
        }
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(Vec4::ZERO.normalize(), Err(Error::ZeroDivision));
        let tiny = Vec4::new(EPSILON * 0.1, 0.0, 0.0, 0.0);
        assert!(tiny.is_zero());
        assert_eq!(tiny.normalize(), Err(Error::ZeroDivision));
    }

    #[test]
    fn test_normalize_rejects_non_finite_length() {
        let huge = Vec4::new(Scalar::MAX / 2.0, 0.0, 0.0, 0.0);
        assert_eq!(huge.normalize(), Err(Error::Overflow));
        let nan = Vec4::new(Scalar::NAN, 1.0, 0.0, 0.0);
        assert_eq!(nan.normalize(), Err(Error::NotANumber));
    }

    #[test]
    fn test_is_zero_threshold() {
        let at = Vec4::new(EPSILON * 2.0, 0.0, 0.0, 0.0);
        assert!(!at.is_zero());
        assert!(at.normalize().is_ok());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.add(b), Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b.sub(a), Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a.mul(b), Vec4::new(5.0, 12.0, 21.0, 32.0));
        assert_eq!(a.scale(2.0), Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a.negate(), Vec4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a.dot(b), 70.0);

        // Operator forms agree
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * b, a.mul(b));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(-a, a.negate());
    }

    #[test]
    fn test_aliased_update() {
        let mut a = Vec4::new(1.0, -2.0, 3.0, -4.0);
        a = a.add(a);
        assert_eq!(a, Vec4::new(2.0, -4.0, 6.0, -8.0));
        a += a;
        assert_eq!(a, Vec4::new(4.0, -8.0, 12.0, -16.0));
        a *= 0.25;
        assert_eq!(a, Vec4::new(1.0, -2.0, 3.0, -4.0));
    }

    #[test]
    fn test_div() {
        let a = Vec4::new(4.0, 9.0, 25.0, 8.0);
        let b = Vec4::new(2.0, 3.0, 5.0, 4.0);
        assert_eq!(a.div(b).unwrap(), Vec4::new(2.0, 3.0, 5.0, 2.0));
    }

    #[test]
    fn test_div_checks_every_component() {
        let a = Vec4::ONE;
        for i in 0..4 {
            let mut b = Vec4::ONE;
            b[i] = 0.0;
            assert_eq!(a.div(b), Err(Error::ZeroDivision), "zero at lane {}", i);
        }
        let mut b = Vec4::ONE;
        b.w = -EPSILON * 0.5;
        assert_eq!(a.div(b), Err(Error::ZeroDivision));
        b.w = Scalar::NAN;
        assert_eq!(a.div(b), Err(Error::NotANumber));
    }

    #[test]
    fn test_cross_drops_w() {
        let a = Vec4::new(1.0, 0.0, 0.0, 7.0);
        let b = Vec4::new(0.0, 1.0, 0.0, 3.0);
        assert_eq!(a.cross(b), Vec4::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(b.cross(a), Vec4::new(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn test_project_reject() {
        let v = Vec4::new(3.0, 4.0, 0.0, 0.0);
        let onto = Vec4::new(2.0, 0.0, 0.0, 0.0);
        let p = v.project(onto).unwrap();
        let r = v.reject(onto).unwrap();
        assert_eq!(p, Vec4::new(3.0, 0.0, 0.0, 0.0));
        assert_eq!(r, Vec4::new(0.0, 4.0, 0.0, 0.0));
        assert_eq!(p + r, v);
        assert_eq!(r.dot(onto), 0.0);
    }

    #[test]
    fn test_reflect() {
        let v = Vec4::new(1.0, -1.0, 2.0, 0.5);
        let normal = Vec4::Y;
        assert_eq!(v.reflect(normal).unwrap(), Vec4::new(1.0, 1.0, 2.0, 0.5));
        // Non-unit normals give the same reflection
        assert_eq!(
            v.reflect(normal.scale(2.0)).unwrap(),
            Vec4::new(1.0, 1.0, 2.0, 0.5)
        );
    }

    #[test]
    fn test_degenerate_direction_fails() {
        let v = Vec4::ONE;
        assert_eq!(v.project(Vec4::ZERO), Err(Error::ZeroDivision));
        assert_eq!(v.reject(Vec4::ZERO), Err(Error::ZeroDivision));
        assert_eq!(v.reflect(Vec4::ZERO), Err(Error::ZeroDivision));
    }

    #[test]
    fn test_vec3_conversions() {
        let v = Vec4::from_vec3(Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::from((1.0, 2.0, 3.0, 1.0)), v);
        assert_eq!(<[Scalar; 4]>::from(v), [1.0, 2.0, 3.0, 1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_sequence() {
        let v = Vec4::new(1.0, 2.5, -3.0, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0,0.0]");
        let back: Vec4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
