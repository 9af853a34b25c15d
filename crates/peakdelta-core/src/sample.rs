//! Sample - numeric element type of a detection sequence
//!
//! The detectors only compare the step between consecutive samples with
//! a threshold, so any signed numeric type qualifies. Integer steps are
//! evaluated in `i128`, so extreme neighbours such as `i16::MIN` and
//! `i16::MAX` neither overflow nor wrap. Unsigned types are left out: the
//! default fall threshold is negative.

use std::fmt::Debug;

/// Numeric type usable as a sequence element and as a threshold.
pub trait Sample: Copy + PartialOrd + Debug {
    /// Default rise threshold (`1`)
    const DEFAULT_RISE: Self;
    /// Default fall threshold (`-1`)
    const DEFAULT_FALL: Self;

    /// `true` if `next - prev > threshold`.
    fn step_above(prev: Self, next: Self, threshold: Self) -> bool;

    /// `true` if `next - prev < threshold`.
    fn step_below(prev: Self, next: Self, threshold: Self) -> bool;

    /// `true` if the value compares with itself (i.e. it is not NaN).
    #[inline]
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const DEFAULT_RISE: Self = 1.0;
                const DEFAULT_FALL: Self = -1.0;

                #[inline]
                fn step_above(prev: Self, next: Self, threshold: Self) -> bool {
                    next - prev > threshold
                }

                #[inline]
                fn step_below(prev: Self, next: Self, threshold: Self) -> bool {
                    next - prev < threshold
                }
            }
        )*
    };
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const DEFAULT_RISE: Self = 1;
                const DEFAULT_FALL: Self = -1;

                #[inline]
                fn step_above(prev: Self, next: Self, threshold: Self) -> bool {
                    next as i128 - prev as i128 > threshold as i128
                }

                #[inline]
                fn step_below(prev: Self, next: Self, threshold: Self) -> bool {
                    (next as i128 - prev as i128) < threshold as i128
                }
            }
        )*
    };
}

impl_sample_float!(f32, f64);
impl_sample_int!(i16, i32, i64, isize);
