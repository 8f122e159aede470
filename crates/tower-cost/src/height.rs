//! Numeric heights.
//!
//! A tower is a slice of any type implementing [`Height`]. Integer heights use
//! checked arithmetic and report overflow; real heights must be finite and
//! report an overflow when an intermediate value leaves the finite range.

use std::fmt;

/// A numeric tower height.
pub trait Height: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity, the cost of a tower with no adjacent pair.
    const ZERO: Self;

    /// Whether this value is usable as input (always true for integers).
    fn is_finite(self) -> bool;

    /// `self - prev + 1`, or `None` if it does not fit.
    fn checked_diff(self, prev: Self) -> Option<Self>;

    /// `self * index`, or `None` if it does not fit.
    fn checked_scale(self, index: usize) -> Option<Self>;

    /// `self + other`, or `None` if it does not fit.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_height {
    ($($t:ty),*) => {
        $(
            impl Height for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }

                #[inline]
                fn checked_diff(self, prev: Self) -> Option<Self> {
                    self.checked_sub(prev)?.checked_add(1)
                }

                #[inline]
                fn checked_scale(self, index: usize) -> Option<Self> {
                    let factor = <$t>::try_from(index).ok()?;
                    self.checked_mul(factor)
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_real_height {
    ($($t:ty),*) => {
        $(
            impl Height for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline]
                fn checked_diff(self, prev: Self) -> Option<Self> {
                    finite(self - prev + 1.0)
                }

                #[inline]
                fn checked_scale(self, index: usize) -> Option<Self> {
                    finite(self * index as $t)
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    finite(self + other)
                }
            }
        )*
    };
}

impl_integer_height!(i32, i64, i128);
impl_real_height!(f32, f64);

#[inline]
fn finite<H: Height>(value: H) -> Option<H> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_diff_is_offset_by_one() {
        assert_eq!(4i64.checked_diff(1), Some(4));
        assert_eq!(1i64.checked_diff(5), Some(-3));
        assert_eq!(7i32.checked_diff(7), Some(1));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(i64::MAX.checked_diff(0), None);
        assert_eq!(0i64.checked_diff(i64::MIN), None);
        assert_eq!(i32::MIN.checked_scale(2), None);
        assert_eq!(i32::MAX.checked_sum(1), None);
    }

    #[test]
    fn scale_rejects_indices_outside_the_type() {
        assert_eq!(1i32.checked_scale(usize::MAX), None);
        assert_eq!((-3i128).checked_scale(4), Some(-12));
    }

    #[test]
    fn real_heights_must_stay_finite() {
        assert!(!f64::NAN.is_finite());
        assert!(!Height::is_finite(f64::INFINITY));
        assert_eq!(2.5f64.checked_diff(1.0), Some(2.5));
        assert_eq!(f64::MAX.checked_scale(2), None);
        assert_eq!(f32::MAX.checked_sum(f32::MAX), None);
    }
}
