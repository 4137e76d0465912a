#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{Elems4x4, Kernel4, Lanes4};

/// SSE2 backend, one `__m128` per column
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse2Kernel;

/// Apply a lane-wise binary op to each of the four column pairs.
///
/// SAFETY: `sse2` is statically enabled for this module and all loads and
/// stores are unaligned and stay within the 16-element arrays.
#[inline(always)]
fn columnwise(a: &Elems4x4, b: &Elems4x4, op: impl Fn(__m128, __m128) -> __m128) -> Elems4x4 {
    let mut out = [0.0f32; 16];
    unsafe {
        for col in 0..4 {
            let ca = _mm_loadu_ps(a.as_ptr().add(col * 4));
            let cb = _mm_loadu_ps(b.as_ptr().add(col * 4));
            _mm_storeu_ps(out.as_mut_ptr().add(col * 4), op(ca, cb));
        }
    }
    out
}

impl Kernel4 for Sse2Kernel {
    const NAME: &'static str = "sse2";

    fn add(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { _mm_add_ps(x, y) })
    }

    fn sub(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { _mm_sub_ps(x, y) })
    }

    fn hadamard(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { _mm_mul_ps(x, y) })
    }

    fn scale(a: &Elems4x4, s: f32) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            let scaler = _mm_set1_ps(s);
            for col in 0..4 {
                let c = _mm_loadu_ps(a.as_ptr().add(col * 4));
                _mm_storeu_ps(out.as_mut_ptr().add(col * 4), _mm_mul_ps(c, scaler));
            }
        }
        out
    }

    fn negate(a: &Elems4x4) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            // Flip the sign bit only
            let sign_mask = _mm_set1_ps(-0.0);
            for col in 0..4 {
                let c = _mm_loadu_ps(a.as_ptr().add(col * 4));
                _mm_storeu_ps(out.as_mut_ptr().add(col * 4), _mm_xor_ps(c, sign_mask));
            }
        }
        out
    }

    fn mul_vec4(m: &Elems4x4, v: &Lanes4) -> Lanes4 {
        let mut out = [0.0f32; 4];
        unsafe {
            let c0 = _mm_loadu_ps(m.as_ptr());
            let c1 = _mm_loadu_ps(m.as_ptr().add(4));
            let c2 = _mm_loadu_ps(m.as_ptr().add(8));
            let c3 = _mm_loadu_ps(m.as_ptr().add(12));

            let mut r = _mm_mul_ps(c0, _mm_set1_ps(v[0]));
            r = _mm_add_ps(r, _mm_mul_ps(c1, _mm_set1_ps(v[1])));
            r = _mm_add_ps(r, _mm_mul_ps(c2, _mm_set1_ps(v[2])));
            r = _mm_add_ps(r, _mm_mul_ps(c3, _mm_set1_ps(v[3])));

            _mm_storeu_ps(out.as_mut_ptr(), r);
        }
        out
    }

    fn mul_mat4(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            let a0 = _mm_loadu_ps(a.as_ptr());
            let a1 = _mm_loadu_ps(a.as_ptr().add(4));
            let a2 = _mm_loadu_ps(a.as_ptr().add(8));
            let a3 = _mm_loadu_ps(a.as_ptr().add(12));

            for col in 0..4 {
                let b_col = &b[col * 4..col * 4 + 4];
                let mut r = _mm_mul_ps(a0, _mm_set1_ps(b_col[0]));
                r = _mm_add_ps(r, _mm_mul_ps(a1, _mm_set1_ps(b_col[1])));
                r = _mm_add_ps(r, _mm_mul_ps(a2, _mm_set1_ps(b_col[2])));
                r = _mm_add_ps(r, _mm_mul_ps(a3, _mm_set1_ps(b_col[3])));

                _mm_storeu_ps(out.as_mut_ptr().add(col * 4), r);
            }
        }
        out
    }
}
