//! Mathematical constants at the active precision.

// Literals carry enough digits for f64; f32 builds round them.
#![allow(clippy::excessive_precision)]

use crate::Scalar;

/// π
pub const PI: Scalar = 3.141_592_653_589_793_238_46;

/// π/2
pub const FRAC_PI_2: Scalar = 1.570_796_326_794_896_619_23;

/// π/3
pub const FRAC_PI_3: Scalar = 1.047_197_551_196_597_746_15;

/// π/4
pub const FRAC_PI_4: Scalar = 0.785_398_163_397_448_309_61;

/// π/6
pub const FRAC_PI_6: Scalar = 0.523_598_775_598_298_873_07;

/// 2π
pub const TAU: Scalar = 6.283_185_307_179_586_476_92;

/// π/180, degrees to radians
pub const DEG_TO_RAD: Scalar = 0.017_453_292_519_943_295_77;

/// 180/π, radians to degrees
pub const RAD_TO_DEG: Scalar = 57.295_779_513_082_320_876_79;

/// Euler's number
pub const E: Scalar = 2.718_281_828_459_045_235_36;

/// log₂(e)
pub const LOG2_E: Scalar = 1.442_695_040_888_963_407_36;

/// log₁₀(e)
pub const LOG10_E: Scalar = 0.434_294_481_903_251_827_65;

/// Euler–Mascheroni constant γ
pub const EULER_GAMMA: Scalar = 0.577_215_664_901_532_860_61;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_agree_with_std() {
        let tol = 1e-6;
        assert!((PI as f64 - std::f64::consts::PI).abs() < tol);
        assert!((TAU as f64 - std::f64::consts::TAU).abs() < tol);
        assert!((E as f64 - std::f64::consts::E).abs() < tol);
        assert!((LOG2_E as f64 - std::f64::consts::LOG2_E).abs() < tol);
        assert!((LOG10_E as f64 - std::f64::consts::LOG10_E).abs() < tol);
        assert!((DEG_TO_RAD * RAD_TO_DEG - 1.0).abs() < 1e-6);
    }
}
