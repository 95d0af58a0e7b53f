//! Scalar field and the numeric helpers the determinant and eigenvalue code depend on.
use std::{fmt::Debug, ops::Neg};

use num_complex::Complex64;
use num_traits::NumAssign;

/// Tolerance for [approx_eq]
pub const EPSILON: f64 = 1e-15;

/// Element type of a [Mat](crate::Mat).
///
/// Implemented for `f64` and [Complex64]. Anything that can be embedded in the
/// complex plane can be used, since eigenvalues are always reported as complex.
pub trait Scalar: Copy + Debug + NumAssign + Neg<Output = Self> {
    /// Embed a real number
    fn from_real(re: f64) -> Self;

    /// Real part
    fn re(&self) -> f64;

    /// Imaginary part
    fn im(&self) -> f64;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re(), self.im())
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_real(re: f64) -> Self {
        re
    }

    #[inline]
    fn re(&self) -> f64 {
        *self
    }

    #[inline]
    fn im(&self) -> f64 {
        0.
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn from_real(re: f64) -> Self {
        Complex64::new(re, 0.)
    }

    #[inline]
    fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    fn im(&self) -> f64 {
        self.im
    }

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

/// Computes `base^exp` by repeated multiplication.
///
/// Only ever used for cofactor signs, so `exp` stays small.
pub fn int_pow(base: i64, exp: u32) -> i64 {
    let mut result = 1;
    for _ in 0..exp {
        result *= base;
    }
    result
}

/// Check if `|x - y| <= EPSILON`
#[inline]
pub fn approx_eq(x: f64, y: f64) -> bool {
    (x - y).abs() <= EPSILON
}

/// Non-negative root of `target` by bisection on `[0, max(target, 1)]`.
///
/// Stops once the midpoint squared is [approx_eq] to `target`, or when the
/// interval can no longer be split at `f64` precision.
fn bisect_root(target: f64) -> f64 {
    debug_assert!(!(target < 0.));
    if target == 0. || !target.is_finite() {
        return target;
    }

    let mut lo = 0.;
    // Below 1 the root is larger than the value itself
    let mut hi = if target < 1. { 1. } else { target };
    loop {
        let mid = lo + (hi - lo) / 2.;
        let square = mid * mid;
        if approx_eq(square, target) || mid <= lo || mid >= hi {
            return mid;
        }
        if square < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
}

/// Square root of a real number, by bisection.
///
/// Negative inputs produce a purely imaginary result.
pub fn bounded_sqrt(x: f64) -> Complex64 {
    let root = bisect_root(x.abs());
    if x < 0. {
        Complex64::new(0., root)
    } else {
        Complex64::new(root, 0.)
    }
}

/// Principal square root of a complex number.
///
/// Falls back to [bounded_sqrt] when `z` is (approximately) real. Otherwise the
/// larger component is `sqrt((|z| ± re) / 2)` by bisection, and the smaller one is
/// `im / (2 * larger)`, which stays accurate when `|im|` is tiny next to `|re|`.
pub fn complex_sqrt(z: Complex64) -> Complex64 {
    if approx_eq(z.im, 0.) {
        return bounded_sqrt(z.re);
    }

    let modulus = bisect_root(z.norm_sqr());
    if z.re >= 0. {
        let re = bisect_root((modulus + z.re) / 2.);
        Complex64::new(re, z.im / (2. * re))
    } else {
        let im = bisect_root((modulus - z.re) / 2.);
        Complex64::new(z.im.abs() / (2. * im), im.copysign(z.im))
    }
}

#[cfg(test)]
mod test {
    use num_complex::Complex64;

    use super::{approx_eq, bounded_sqrt, complex_sqrt, int_pow, Scalar};

    macro_rules! assert_close {
        ($a: expr, $b: expr) => {
            {
                let (a, b): (Complex64, Complex64) = ($a, $b);
                const EPS: f64 = 1e-9;
                if (a - b).norm() >= EPS {
                    assert_eq!(a, b);
                }
            }
        };
    }

    #[test]
    fn int_pow_signs() {
        assert_eq!(int_pow(-1, 0), 1);
        assert_eq!(int_pow(-1, 1), -1);
        assert_eq!(int_pow(-1, 4), 1);
        assert_eq!(int_pow(-1, 7), -1);
        assert_eq!(int_pow(3, 4), 81);
    }

    #[test]
    fn approx_eq_tolerance() {
        assert!(approx_eq(1., 1.));
        assert!(approx_eq(0., 5e-16));
        assert!(!approx_eq(0., 1e-14));
    }

    #[test]
    fn sqrt_perfect_square() {
        assert_eq!(bounded_sqrt(4.), Complex64::new(2., 0.));
        assert_eq!(bounded_sqrt(0.), Complex64::new(0., 0.));
    }

    #[test]
    fn sqrt_small_values() {
        assert_close!(bounded_sqrt(0.25), Complex64::new(0.5, 0.));
        assert_close!(bounded_sqrt(1e-4), Complex64::new(1e-2, 0.));
    }

    #[test]
    fn sqrt_irrational() {
        assert_close!(bounded_sqrt(2.), Complex64::new(std::f64::consts::SQRT_2, 0.));
        assert_close!(bounded_sqrt(1e6), Complex64::new(1e3, 0.));
    }

    #[test]
    fn sqrt_negative_is_imaginary() {
        let root = bounded_sqrt(-36.);
        assert_eq!(root.re, 0.);
        assert_close!(root, Complex64::new(0., 6.));
    }

    #[test]
    fn sqrt_non_finite_terminates() {
        assert!(bounded_sqrt(f64::NAN).re.is_nan());
        assert_eq!(bounded_sqrt(f64::INFINITY).re, f64::INFINITY);
    }

    #[test]
    fn complex_roots() {
        assert_close!(complex_sqrt(Complex64::new(-3., 4.)), Complex64::new(1., 2.));
        assert_close!(complex_sqrt(Complex64::new(-3., -4.)), Complex64::new(1., -2.));
        assert_close!(complex_sqrt(Complex64::new(0., 2.)), Complex64::new(1., 1.));
        assert_close!(complex_sqrt(Complex64::new(-9., 0.)), Complex64::new(0., 3.));
    }

    #[test]
    fn complex_root_keeps_small_component() {
        let root = complex_sqrt(Complex64::new(-4., 1e-10));
        assert_eq!(root.im, 2.);
        assert!((root.re - 2.5e-11).abs() < 1e-24, "{root}");

        let root = complex_sqrt(Complex64::new(-4., -1e-10));
        assert_eq!(root.im, -2.);
        assert!((root.re - 2.5e-11).abs() < 1e-24, "{root}");

        let root = complex_sqrt(Complex64::new(4., 1e-10));
        assert_eq!(root.re, 2.);
        assert!((root.im - 2.5e-11).abs() < 1e-24, "{root}");
    }

    #[test]
    fn real_scalar_embedding() {
        assert_eq!(<f64 as Scalar>::from_real(2.5).to_complex(), Complex64::new(2.5, 0.));
        assert_eq!(Complex64::from_real(-1.).im(), 0.);
        assert_eq!(Complex64::new(3., 4.).to_complex(), Complex64::new(3., 4.));
    }
}
