//! 4-lane kernels behind the `Mat4` element-wise and product operations.
//!
//! Every backend implements [`Kernel4`] over column-major `[Scalar; 16]`
//! storage. [`ScalarKernel`] is always compiled; at most one vectorized
//! backend is compiled next to it and exported as [`ActiveKernel`]. The choice
//! is fixed at build time by target features and cargo features, so there is
//! no run-time dispatch.
//!
//! All backends issue the same operations in the same order: products are a
//! plain multiply followed by a plain add (never fused), accumulated over the
//! columns left to right. Backends are therefore bit-for-bit interchangeable.

mod scalar;

pub use scalar::ScalarKernel;

/// Column-major 4x4 storage
pub type Elems4x4 = [crate::Scalar; 16];

/// One 4-lane column
pub type Lanes4 = [crate::Scalar; 4];

/// Matrix kernels over 4-lane columns
pub trait Kernel4 {
    /// Backend name, for diagnostics
    const NAME: &'static str;

    fn add(a: &Elems4x4, b: &Elems4x4) -> Elems4x4;
    fn sub(a: &Elems4x4, b: &Elems4x4) -> Elems4x4;
    fn hadamard(a: &Elems4x4, b: &Elems4x4) -> Elems4x4;
    fn scale(a: &Elems4x4, s: crate::Scalar) -> Elems4x4;
    fn negate(a: &Elems4x4) -> Elems4x4;

    /// `c0*v[0] + c1*v[1] + c2*v[2] + c3*v[3]` over the columns of `m`
    fn mul_vec4(m: &Elems4x4, v: &Lanes4) -> Lanes4;

    /// Column `i` of the result is `mul_vec4(a, b.col(i))`
    fn mul_mat4(a: &Elems4x4, b: &Elems4x4) -> Elems4x4;
}

cfg_if::cfg_if! {
    if #[cfg(any(feature = "f64", feature = "scalar_math"))] {
        /// Backend selected for this build
        pub type ActiveKernel = ScalarKernel;
    } else if #[cfg(feature = "portable_simd")] {
        mod portable;
        pub use portable::PortableKernel;

        /// Backend selected for this build
        pub type ActiveKernel = PortableKernel;
    } else if #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))] {
        mod sse2;
        pub use sse2::Sse2Kernel;

        /// Backend selected for this build
        pub type ActiveKernel = Sse2Kernel;
    } else if #[cfg(all(target_arch = "aarch64", target_feature = "neon"))] {
        mod neon;
        pub use neon::NeonKernel;

        /// Backend selected for this build
        pub type ActiveKernel = NeonKernel;
    } else {
        /// Backend selected for this build
        pub type ActiveKernel = ScalarKernel;
    }
}

/// Name of the backend selected for this build
pub const BACKEND: &str = <ActiveKernel as Kernel4>::NAME;
