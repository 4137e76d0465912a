use super::{Elems4x4, Kernel4, Lanes4};
use crate::Scalar;

/// Portable fallback, one lane at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernel;

#[inline(always)]
fn zip_with(a: &Elems4x4, b: &Elems4x4, f: impl Fn(Scalar, Scalar) -> Scalar) -> Elems4x4 {
    let mut out = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            let i = col * 4 + row;
            out[i] = f(a[i], b[i]);
        }
    }
    out
}

impl Kernel4 for ScalarKernel {
    const NAME: &'static str = "scalar";

    fn add(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        zip_with(a, b, |x, y| x + y)
    }

    fn sub(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        zip_with(a, b, |x, y| x - y)
    }

    fn hadamard(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        zip_with(a, b, |x, y| x * y)
    }

    fn scale(a: &Elems4x4, s: Scalar) -> Elems4x4 {
        a.map(|x| x * s)
    }

    fn negate(a: &Elems4x4) -> Elems4x4 {
        a.map(|x| -x)
    }

    fn mul_vec4(m: &Elems4x4, v: &Lanes4) -> Lanes4 {
        let mut result = [0.0; 4];
        for row in 0..4 {
            let mut sum = m[row] * v[0];
            sum += m[4 + row] * v[1];
            sum += m[8 + row] * v[2];
            sum += m[12 + row] * v[3];
            result[row] = sum;
        }
        result
    }

    fn mul_mat4(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        let mut result = [0.0; 16];
        for col in 0..4 {
            let rhs = [b[col * 4], b[col * 4 + 1], b[col * 4 + 2], b[col * 4 + 3]];
            result[col * 4..col * 4 + 4].copy_from_slice(&Self::mul_vec4(a, &rhs));
        }
        result
    }
}
