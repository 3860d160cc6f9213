// src/integer_math/gcd.rs

use crate::core::euclid_integer::EuclidInteger;

/// Greatest common divisor of two `i32` values by Euclidean reduction.
///
/// Rewrites `(a, b)` as `(b, a % b)` until `b` is zero and returns `a`. The
/// remainder is truncated, so the sign of the result is not normalized:
/// `gcd(-5, 0) == -5` and `gcd(48, -18) == -6`. Use [`gcd_magnitude`] or
/// [`gcd_normalized`] when a non-negative divisor is required.
pub fn gcd(a: i32, b: i32) -> i32 {
    gcd_euclid(a, b)
}

/// Width-generic form of [`gcd`].
pub fn gcd_euclid<T: EuclidInteger>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let t = a.truncated_rem(&b);
        a = b;
        b = t;
    }
    a
}

/// Unsigned magnitude of the Euclidean result.
pub fn gcd_magnitude<T: EuclidInteger>(a: T, b: T) -> T::Magnitude {
    gcd_euclid(a, b).magnitude()
}

/// Non-negative Euclidean result in the input width.
///
/// Fails only when the reduction ends on `T::MIN`, whose absolute value has
/// no signed representation.
pub fn gcd_normalized<T: EuclidInteger>(a: T, b: T) -> Result<T, String> {
    let g = gcd_euclid(a, b);
    g.checked_abs().ok_or_else(|| {
        format!(
            "gcd({}, {}) = {} has no non-negative {} representation",
            a,
            b,
            g,
            T::width_name()
        )
    })
}

/// Iterator over the working pairs visited by the Euclidean reduction.
///
/// Yields the input pair first and the terminal pair `(g, 0)` last.
#[derive(Debug, Clone)]
pub struct EuclidSteps<T: EuclidInteger> {
    pair: Option<(T, T)>,
}

impl<T: EuclidInteger> EuclidSteps<T> {
    pub fn new(a: T, b: T) -> Self {
        EuclidSteps { pair: Some((a, b)) }
    }
}

impl<T: EuclidInteger> Iterator for EuclidSteps<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let (a, b) = self.pair?;
        self.pair = if b.is_zero() {
            None
        } else {
            Some((b, a.truncated_rem(&b)))
        };
        Some((a, b))
    }
}
