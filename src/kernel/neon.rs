use core::arch::aarch64::*;

use super::{Elems4x4, Kernel4, Lanes4};

/// NEON backend, one `float32x4_t` per column
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonKernel;

/// SAFETY: `neon` is statically enabled for this module and all loads and
/// stores stay within the 16-element arrays.
#[inline(always)]
fn columnwise(
    a: &Elems4x4,
    b: &Elems4x4,
    op: impl Fn(float32x4_t, float32x4_t) -> float32x4_t,
) -> Elems4x4 {
    let mut out = [0.0f32; 16];
    unsafe {
        for col in 0..4 {
            let ca = vld1q_f32(a.as_ptr().add(col * 4));
            let cb = vld1q_f32(b.as_ptr().add(col * 4));
            vst1q_f32(out.as_mut_ptr().add(col * 4), op(ca, cb));
        }
    }
    out
}

/// Broadcast-multiply-accumulate over the four columns.
///
/// `vmlaq_f32` is avoided: an explicit multiply then add keeps the rounding
/// identical to the scalar kernel on every toolchain.
#[inline(always)]
unsafe fn accumulate_columns(cols: &[float32x4_t; 4], v: &[f32]) -> float32x4_t {
    let mut r = vmulq_f32(cols[0], vdupq_n_f32(v[0]));
    r = vaddq_f32(r, vmulq_f32(cols[1], vdupq_n_f32(v[1])));
    r = vaddq_f32(r, vmulq_f32(cols[2], vdupq_n_f32(v[2])));
    r = vaddq_f32(r, vmulq_f32(cols[3], vdupq_n_f32(v[3])));
    r
}

#[inline(always)]
unsafe fn load_columns(m: &Elems4x4) -> [float32x4_t; 4] {
    [
        vld1q_f32(m.as_ptr()),
        vld1q_f32(m.as_ptr().add(4)),
        vld1q_f32(m.as_ptr().add(8)),
        vld1q_f32(m.as_ptr().add(12)),
    ]
}

impl Kernel4 for NeonKernel {
    const NAME: &'static str = "neon";

    fn add(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { vaddq_f32(x, y) })
    }

    fn sub(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { vsubq_f32(x, y) })
    }

    fn hadamard(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| unsafe { vmulq_f32(x, y) })
    }

    fn scale(a: &Elems4x4, s: f32) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            let scaler = vdupq_n_f32(s);
            for col in 0..4 {
                let c = vld1q_f32(a.as_ptr().add(col * 4));
                vst1q_f32(out.as_mut_ptr().add(col * 4), vmulq_f32(c, scaler));
            }
        }
        out
    }

    fn negate(a: &Elems4x4) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            for col in 0..4 {
                let c = vld1q_f32(a.as_ptr().add(col * 4));
                vst1q_f32(out.as_mut_ptr().add(col * 4), vnegq_f32(c));
            }
        }
        out
    }

    fn mul_vec4(m: &Elems4x4, v: &Lanes4) -> Lanes4 {
        let mut out = [0.0f32; 4];
        unsafe {
            let cols = load_columns(m);
            vst1q_f32(out.as_mut_ptr(), accumulate_columns(&cols, v));
        }
        out
    }

    fn mul_mat4(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        unsafe {
            let cols = load_columns(a);
            for col in 0..4 {
                let r = accumulate_columns(&cols, &b[col * 4..col * 4 + 4]);
                vst1q_f32(out.as_mut_ptr().add(col * 4), r);
            }
        }
        out
    }
}
