// src/core/euclid_integer.rs

use num::traits::{CheckedNeg, CheckedRem};
use num::{PrimInt, Signed};
use std::fmt::{Debug, Display};

/// Fixed-width signed integer usable by the Euclidean reduction
///
/// This trait abstracts over the primitive signed widths so the reduction
/// loop can run at whatever width the caller picks, while `gcd` itself stays
/// pinned to `i32`.
///
/// Implementations:
/// - i8, i16, i32, i64, i128, isize
pub trait EuclidInteger:
    PrimInt +
    Signed +
    CheckedRem +
    CheckedNeg +
    Debug +
    Display +
    Send +
    Sync +
    'static
{
    /// Unsigned type able to hold `|Self::MIN|`
    type Magnitude: PrimInt + Debug + Display + Send + Sync + 'static;

    /// Truncated remainder, sign following the dividend.
    ///
    /// `MIN rem -1` yields 0 instead of overflowing. Must not be called with
    /// a zero divisor.
    fn truncated_rem(&self, divisor: &Self) -> Self {
        self.checked_rem(divisor).unwrap_or_else(Self::zero)
    }

    /// Absolute value, None when it does not fit (only for `MIN`)
    fn checked_abs(&self) -> Option<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Some(*self)
        }
    }

    /// Absolute value as the unsigned type of the same width (always succeeds)
    fn magnitude(&self) -> Self::Magnitude;

    /// Width name for debugging/logging
    fn width_name() -> &'static str;
}

macro_rules! impl_euclid_integer {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl EuclidInteger for $signed {
                type Magnitude = $unsigned;

                fn magnitude(&self) -> $unsigned {
                    self.unsigned_abs()
                }

                fn width_name() -> &'static str {
                    stringify!($signed)
                }
            }
        )*
    };
}

impl_euclid_integer! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_rem_follows_dividend() {
        assert_eq!((-48i32).truncated_rem(&18), -12);
        assert_eq!(48i32.truncated_rem(&-18), 12);
        assert_eq!((-18i32).truncated_rem(&-12), -6);
        assert_eq!(7i64.truncated_rem(&7), 0);
    }

    #[test]
    fn test_truncated_rem_min_by_minus_one() {
        // Plain `%` panics here
        assert_eq!(i8::MIN.truncated_rem(&-1), 0);
        assert_eq!(i32::MIN.truncated_rem(&-1), 0);
        assert_eq!(i128::MIN.truncated_rem(&-1), 0);
    }

    #[test]
    fn test_checked_abs() {
        assert_eq!((-5i32).checked_abs(), Some(5));
        assert_eq!(5i32.checked_abs(), Some(5));
        assert_eq!(0i32.checked_abs(), Some(0));
        assert_eq!(i32::MIN.checked_abs(), None);
        assert_eq!(i16::MIN.checked_abs(), None);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-5i32).magnitude(), 5u32);
        assert_eq!(i32::MIN.magnitude(), 1u32 << 31);
        assert_eq!(i64::MIN.magnitude(), 1u64 << 63);
        assert_eq!(i8::MAX.magnitude(), 127u8);
    }

    #[test]
    fn test_width_names() {
        assert_eq!(<i32 as EuclidInteger>::width_name(), "i32");
        assert_eq!(<i128 as EuclidInteger>::width_name(), "i128");
        assert_eq!(<isize as EuclidInteger>::width_name(), "isize");
    }
}
