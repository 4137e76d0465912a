//! Column-major square matrices.
//!
//! A matrix is an array of column vectors; the flat element view covers the
//! same storage, so element `col * N + row` is `cols[col][row]`.

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;

/// Constructors, views and operators shared by all matrix types.
///
/// The element-wise and product kernels (`add`, `sub`, `hadamard`, `scale`,
/// `negate`, `$mul_vec`, `$mul_mat`) are inherent methods of each type; the
/// operators here forward to them.
macro_rules! impl_matrix_common {
    ($Mn:ident, $Vn:ident, $n:literal, $len:literal, $mul_vec:ident, $mul_mat:ident) => {
        impl $Mn {
            /// Copy `N²` scalars verbatim, columns consecutive
            #[inline]
            pub fn from_cols_array(elements: &[$crate::Scalar; $len]) -> Self {
                bytemuck::cast(*elements)
            }

            #[inline]
            pub fn zero() -> Self {
                Self::ZERO
            }

            /// `value` on the diagonal, zero elsewhere
            pub fn diagonal(value: $crate::Scalar) -> Self {
                let mut m = Self::ZERO;
                for i in 0..$n {
                    m.cols[i][i] = value;
                }
                m
            }

            #[inline]
            pub fn identity() -> Self {
                Self::IDENTITY
            }

            /// Flat column-major view of the elements
            #[inline]
            pub fn as_array(&self) -> &[$crate::Scalar; $len] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$crate::Scalar; $len] {
                bytemuck::cast_mut(self)
            }

            /// Element iterator in column-major order
            #[inline]
            pub fn elements(&self) -> std::slice::Iter<'_, $crate::Scalar> {
                self.as_array().iter()
            }

            #[inline]
            pub fn to_cols_array(&self) -> [$crate::Scalar; $len] {
                *self.as_array()
            }

            /// Column `index`; panics if out of range
            #[inline]
            pub fn col(&self, index: usize) -> $Vn {
                self.cols[index]
            }

            #[inline]
            pub fn col_mut(&mut self, index: usize) -> &mut $Vn {
                &mut self.cols[index]
            }

            #[inline]
            pub fn columns(&self) -> &[$Vn; $n] {
                &self.cols
            }

            /// Element at `row`, `col`; panics if out of range
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> $crate::Scalar {
                self.cols[col][row]
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: $crate::Scalar) {
                self.cols[col][row] = value;
            }

            pub fn transpose(&self) -> Self {
                let mut m = Self::ZERO;
                for col in 0..$n {
                    for row in 0..$n {
                        m.cols[row][col] = self.cols[col][row];
                    }
                }
                m
            }
        }

        impl From<[$crate::Scalar; $len]> for $Mn {
            #[inline]
            fn from(elements: [$crate::Scalar; $len]) -> Self {
                Self::from_cols_array(&elements)
            }
        }

        impl From<$Mn> for [$crate::Scalar; $len] {
            #[inline]
            fn from(m: $Mn) -> Self {
                m.to_cols_array()
            }
        }

        impl AsRef<[$crate::Scalar; $len]> for $Mn {
            #[inline]
            fn as_ref(&self) -> &[$crate::Scalar; $len] {
                self.as_array()
            }
        }

        // Flat column-major element, `m[col * N + row]`
        impl std::ops::Index<usize> for $Mn {
            type Output = $crate::Scalar;

            #[inline]
            fn index(&self, index: usize) -> &$crate::Scalar {
                &self.as_array()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $Mn {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $crate::Scalar {
                &mut self.as_array_mut()[index]
            }
        }

        impl std::ops::Add for $Mn {
            type Output = $Mn;

            #[inline]
            fn add(self, rhs: $Mn) -> $Mn {
                $Mn::add(self, rhs)
            }
        }

        impl std::ops::Sub for $Mn {
            type Output = $Mn;

            #[inline]
            fn sub(self, rhs: $Mn) -> $Mn {
                $Mn::sub(self, rhs)
            }
        }

        impl std::ops::Neg for $Mn {
            type Output = $Mn;

            #[inline]
            fn neg(self) -> $Mn {
                self.negate()
            }
        }

        // Matrix product, not Hadamard
        impl std::ops::Mul for $Mn {
            type Output = $Mn;

            #[inline]
            fn mul(self, rhs: $Mn) -> $Mn {
                self.$mul_mat(rhs)
            }
        }

        impl std::ops::Mul<$Vn> for $Mn {
            type Output = $Vn;

            #[inline]
            fn mul(self, rhs: $Vn) -> $Vn {
                self.$mul_vec(rhs)
            }
        }

        impl std::ops::Mul<$crate::Scalar> for $Mn {
            type Output = $Mn;

            #[inline]
            fn mul(self, rhs: $crate::Scalar) -> $Mn {
                self.scale(rhs)
            }
        }

        impl std::ops::AddAssign for $Mn {
            #[inline]
            fn add_assign(&mut self, rhs: $Mn) {
                *self = $Mn::add(*self, rhs);
            }
        }

        impl std::ops::SubAssign for $Mn {
            #[inline]
            fn sub_assign(&mut self, rhs: $Mn) {
                *self = $Mn::sub(*self, rhs);
            }
        }

        impl std::ops::MulAssign for $Mn {
            #[inline]
            fn mul_assign(&mut self, rhs: $Mn) {
                *self = self.$mul_mat(rhs);
            }
        }

        impl std::ops::MulAssign<$crate::Scalar> for $Mn {
            #[inline]
            fn mul_assign(&mut self, rhs: $crate::Scalar) {
                *self = self.scale(rhs);
            }
        }
    };
}

pub(crate) use impl_matrix_common;
