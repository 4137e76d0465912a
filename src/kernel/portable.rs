use std::simd::prelude::*;

use super::{Elems4x4, Kernel4, Lanes4};

/// `std::simd` backend (requires nightly + portable_simd feature)
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableKernel;

#[inline(always)]
fn columns(m: &Elems4x4) -> [f32x4; 4] {
    [
        f32x4::from_slice(&m[0..4]),
        f32x4::from_slice(&m[4..8]),
        f32x4::from_slice(&m[8..12]),
        f32x4::from_slice(&m[12..16]),
    ]
}

#[inline(always)]
fn columnwise(a: &Elems4x4, b: &Elems4x4, op: impl Fn(f32x4, f32x4) -> f32x4) -> Elems4x4 {
    let (ca, cb) = (columns(a), columns(b));
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        op(ca[col], cb[col]).copy_to_slice(&mut out[col * 4..col * 4 + 4]);
    }
    out
}

#[inline(always)]
fn accumulate_columns(cols: &[f32x4; 4], v: &[f32]) -> f32x4 {
    let mut r = cols[0] * f32x4::splat(v[0]);
    r += cols[1] * f32x4::splat(v[1]);
    r += cols[2] * f32x4::splat(v[2]);
    r += cols[3] * f32x4::splat(v[3]);
    r
}

impl Kernel4 for PortableKernel {
    const NAME: &'static str = "portable_simd";

    fn add(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| x + y)
    }

    fn sub(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| x - y)
    }

    fn hadamard(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        columnwise(a, b, |x, y| x * y)
    }

    fn scale(a: &Elems4x4, s: f32) -> Elems4x4 {
        let scaler = f32x4::splat(s);
        let mut out = [0.0f32; 16];
        for (col, c) in columns(a).into_iter().enumerate() {
            (c * scaler).copy_to_slice(&mut out[col * 4..col * 4 + 4]);
        }
        out
    }

    fn negate(a: &Elems4x4) -> Elems4x4 {
        let mut out = [0.0f32; 16];
        for (col, c) in columns(a).into_iter().enumerate() {
            (-c).copy_to_slice(&mut out[col * 4..col * 4 + 4]);
        }
        out
    }

    fn mul_vec4(m: &Elems4x4, v: &Lanes4) -> Lanes4 {
        accumulate_columns(&columns(m), v).to_array()
    }

    fn mul_mat4(a: &Elems4x4, b: &Elems4x4) -> Elems4x4 {
        let cols = columns(a);
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            accumulate_columns(&cols, &b[col * 4..col * 4 + 4])
                .copy_to_slice(&mut out[col * 4..col * 4 + 4]);
        }
        out
    }
}
