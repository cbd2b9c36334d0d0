//! Complex values and the principal branch of the natural logarithm.
//!
//! Every logarithm evaluation in the workspace goes through [`ln_principal`],
//! so the heatmap sampler and the surface generator agree on the branch cut
//! (negative real axis) and on what counts as "undefined".

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A complex number whose parts are both finite.
///
/// Values can only be built through [`ComplexValue::new`], which rejects NaN
/// and infinities, so a `ComplexValue` never carries a non-finite part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexValue {
    re: f64,
    im: f64,
}

impl ComplexValue {
    /// Returns `None` if either part is NaN or infinite.
    pub fn new(re: f64, im: f64) -> Option<Self> {
        if re.is_finite() && im.is_finite() {
            Some(Self { re, im })
        } else {
            None
        }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.re, self.im)
    }

    /// Complex exponential, the inverse of [`ln_principal`] on its range.
    pub fn exp(self) -> Option<Self> {
        let e = self.to_complex().exp();
        Self::new(e.re, e.im)
    }
}

impl From<ComplexValue> for Complex64 {
    fn from(value: ComplexValue) -> Self {
        value.to_complex()
    }
}

/// Principal argument of `re + i·im`, restricted to (−π, π].
///
/// `atan2` yields −π for a negative real part with a negative-zero imaginary
/// part; that value is folded onto +π so the interval stays half-open.
#[inline]
pub fn principal_arg(re: f64, im: f64) -> f64 {
    let arg = im.atan2(re);
    if arg <= -PI {
        PI
    } else {
        arg
    }
}

/// Natural logarithm on the principal branch.
///
/// Returns `ln|z| + i·arg(z)` with `arg(z)` in (−π, π]. The origin and any
/// non-finite input have no logarithm and yield `None`.
pub fn ln_principal(re: f64, im: f64) -> Option<ComplexValue> {
    if !re.is_finite() || !im.is_finite() {
        return None;
    }
    if re == 0.0 && im == 0.0 {
        return None;
    }

    let z = Complex64::new(re, im);
    let magnitude = z.norm();
    // Subnormal inputs can still underflow the norm to zero.
    if magnitude == 0.0 {
        return None;
    }

    ComplexValue::new(magnitude.ln(), principal_arg(re, im))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_finite_parts() {
        assert!(ComplexValue::new(f64::NAN, 0.0).is_none());
        assert!(ComplexValue::new(0.0, f64::INFINITY).is_none());
        assert!(ComplexValue::new(f64::NEG_INFINITY, 1.0).is_none());
        assert!(ComplexValue::new(1.0, -2.0).is_some());
    }

    #[test]
    fn ln_of_origin_is_undefined() {
        assert!(ln_principal(0.0, 0.0).is_none());
        assert!(ln_principal(-0.0, 0.0).is_none());
        assert!(ln_principal(0.0, -0.0).is_none());
    }

    #[test]
    fn ln_of_non_finite_is_undefined() {
        assert!(ln_principal(f64::NAN, 1.0).is_none());
        assert!(ln_principal(1.0, f64::INFINITY).is_none());
    }

    #[test]
    fn ln_of_one_is_zero() {
        let v = ln_principal(1.0, 0.0).unwrap();
        assert_eq!(v.re(), 0.0);
        assert_eq!(v.im(), 0.0);
    }

    #[test]
    fn ln_of_i_is_half_pi() {
        let v = ln_principal(0.0, 1.0).unwrap();
        assert!(v.re().abs() < 1e-15);
        assert!((v.im() - PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn ln_of_negative_real_uses_positive_pi() {
        let v = ln_principal(-2.0, 0.0).unwrap();
        assert!((v.re() - 2.0_f64.ln()).abs() < 1e-15);
        assert_eq!(v.im(), PI);

        let below = ln_principal(-2.0, -0.0).unwrap();
        assert_eq!(below.im(), PI, "negative zero must not produce -π");
    }

    #[test]
    fn ln_then_exp_roundtrip() {
        let inputs = [(1.5, 0.5), (-0.3, 2.0), (-1.0, -1.0), (0.01, -0.02)];
        for (re, im) in inputs {
            let back = ln_principal(re, im).unwrap().exp().unwrap();
            assert!((back.re() - re).abs() < 1e-12, "re mismatch for ({re},{im})");
            assert!((back.im() - im).abs() < 1e-12, "im mismatch for ({re},{im})");
        }
    }

    #[test]
    fn principal_arg_stays_in_half_open_interval() {
        for i in 0..360 {
            let t = (i as f64).to_radians();
            let arg = principal_arg(t.cos(), t.sin());
            assert!(arg > -PI && arg <= PI, "arg {arg} out of (-π, π]");
        }
    }
}
