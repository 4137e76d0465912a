//! Fixed-size vectors.
//!
//! Each vector is a `#[repr(C)]` struct of named components. The indexed view
//! (`as_array`, `Index`) is a `bytemuck` cast of the same storage, so
//! `v[X] == v.x` always holds.
//!
//! Operations return new values. Fallible ones (`normalize`, `div`,
//! `project`, `reject`, `reflect`) return [`crate::Result`] and never produce
//! a partial result.

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Index of the `x` component
pub const X: usize = 0;
/// Index of the `y` component
pub const Y: usize = 1;
/// Index of the `z` component
pub const Z: usize = 2;
/// Index of the `w` component
pub const W: usize = 3;

/// Operator and array-view impls shared by all vector types.
///
/// Operators forward to the inherent methods of the same name; only the
/// infallible operations get an operator form.
macro_rules! impl_vector_common {
    ($Vn:ident, $n:literal) => {
        impl $Vn {
            /// Components as an array, sharing storage with the named fields
            #[inline]
            pub fn as_array(&self) -> &[$crate::Scalar; $n] {
                bytemuck::cast_ref(self)
            }

            /// Mutable array view of the components
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$crate::Scalar; $n] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn to_array(self) -> [$crate::Scalar; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn from_array(array: [$crate::Scalar; $n]) -> Self {
                bytemuck::cast(array)
            }
        }

        impl From<[$crate::Scalar; $n]> for $Vn {
            #[inline]
            fn from(array: [$crate::Scalar; $n]) -> Self {
                Self::from_array(array)
            }
        }

        impl From<$Vn> for [$crate::Scalar; $n] {
            #[inline]
            fn from(v: $Vn) -> Self {
                v.to_array()
            }
        }

        impl AsRef<[$crate::Scalar; $n]> for $Vn {
            #[inline]
            fn as_ref(&self) -> &[$crate::Scalar; $n] {
                self.as_array()
            }
        }

        impl std::ops::Index<usize> for $Vn {
            type Output = $crate::Scalar;

            #[inline]
            fn index(&self, index: usize) -> &$crate::Scalar {
                &self.as_array()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $Vn {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $crate::Scalar {
                &mut self.as_array_mut()[index]
            }
        }

        impl std::ops::Add for $Vn {
            type Output = $Vn;

            #[inline]
            fn add(self, rhs: $Vn) -> $Vn {
                $Vn::add(self, rhs)
            }
        }

        impl std::ops::Sub for $Vn {
            type Output = $Vn;

            #[inline]
            fn sub(self, rhs: $Vn) -> $Vn {
                $Vn::sub(self, rhs)
            }
        }

        // Component-wise
        impl std::ops::Mul for $Vn {
            type Output = $Vn;

            #[inline]
            fn mul(self, rhs: $Vn) -> $Vn {
                $Vn::mul(self, rhs)
            }
        }

        impl std::ops::Mul<$crate::Scalar> for $Vn {
            type Output = $Vn;

            #[inline]
            fn mul(self, rhs: $crate::Scalar) -> $Vn {
                self.scale(rhs)
            }
        }

        impl std::ops::Mul<$Vn> for $crate::Scalar {
            type Output = $Vn;

            #[inline]
            fn mul(self, rhs: $Vn) -> $Vn {
                rhs.scale(self)
            }
        }

        impl std::ops::Neg for $Vn {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> $Vn {
                self.negate()
            }
        }

        impl std::ops::AddAssign for $Vn {
            #[inline]
            fn add_assign(&mut self, rhs: $Vn) {
                *self = $Vn::add(*self, rhs);
            }
        }

        impl std::ops::SubAssign for $Vn {
            #[inline]
            fn sub_assign(&mut self, rhs: $Vn) {
                *self = $Vn::sub(*self, rhs);
            }
        }

        impl std::ops::MulAssign for $Vn {
            #[inline]
            fn mul_assign(&mut self, rhs: $Vn) {
                *self = $Vn::mul(*self, rhs);
            }
        }

        impl std::ops::MulAssign<$crate::Scalar> for $Vn {
            #[inline]
            fn mul_assign(&mut self, rhs: $crate::Scalar) {
                *self = self.scale(rhs);
            }
        }
    };
}

pub(crate) use impl_vector_common;

/// Fails on a NaN divisor component or one whose magnitude is below epsilon
pub(crate) fn check_divisor(components: &[crate::Scalar], op: &str) -> crate::Result<()> {
    if components.iter().any(|c| c.is_nan()) {
        log::trace!("{}: NaN divisor component in {:?}", op, components);
        return Err(crate::Error::NotANumber);
    }
    if components.iter().any(|c| c.abs() < crate::EPSILON) {
        log::trace!("{}: divisor component below epsilon in {:?}", op, components);
        return Err(crate::Error::ZeroDivision);
    }
    Ok(())
}

/// Fails unless a squared length is finite
pub(crate) fn check_finite_length(len_sq: crate::Scalar, op: &str) -> crate::Result<()> {
    if len_sq.is_nan() {
        log::trace!("{}: NaN component", op);
        return Err(crate::Error::NotANumber);
    }
    if len_sq.is_infinite() {
        log::trace!("{}: squared length overflows", op);
        return Err(crate::Error::Overflow);
    }
    Ok(())
}
