//! Peak - a detected spike region and its maximum
//!
//! A peak covers the half-open index range `[start_index, end_index)` of
//! the input sequence, so `&sequence[peak.range()]` is the whole curve.
//! `start_index` is the sample just before the qualifying rise and
//! `end_index` is one past the qualifying fall (or the sequence length for
//! a peak that never closed).

use std::ops::Range;

use crate::error::{Error, Result};
use crate::sample::Sample;

/// How [`Peak::merge`] picks `(value, peak_index)` when two peaks combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Compare values only; on equal values the earlier peak is kept.
    #[default]
    KeepFirst,
    /// Compare `(value, peak_index)` pairs lexicographically; on equal
    /// values the later peak (larger index) is kept.
    Lexicographic,
}

/// A detected peak.
///
/// Invariant: `start_index < peak_index < end_index`, and
/// `value == sequence[peak_index]` for the sequence it was detected in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak<T> {
    /// Maximum sample value inside the peak
    pub value: T,
    /// Index of `value` in the sequence
    pub peak_index: usize,
    /// Index of the sample preceding the qualifying rise
    pub start_index: usize,
    /// One past the qualifying fall, or the sequence length
    pub end_index: usize,
}

impl<T: Sample> Peak<T> {
    /// Create a peak, checking the index ordering invariant.
    pub fn new(value: T, peak_index: usize, start_index: usize, end_index: usize) -> Result<Self> {
        if start_index >= peak_index || peak_index >= end_index {
            return Err(Error::InvalidPeak {
                start_index,
                peak_index,
                end_index,
            });
        }
        Ok(Self {
            value,
            peak_index,
            start_index,
            end_index,
        })
    }

    /// Nested pair form `((value, peak_index), (start_index, end_index))`.
    #[inline]
    pub fn as_tuple(&self) -> ((T, usize), (usize, usize)) {
        (
            (self.value, self.peak_index),
            (self.start_index, self.end_index),
        )
    }

    /// Index range covered by the peak.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Number of samples covered by the peak.
    #[inline]
    pub fn width(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Signed index gap from the end of this peak to the start of `next`.
    ///
    /// Adjacent peaks may share a sample, in which case the gap is `-1`.
    #[inline]
    pub fn gap_to(&self, next: &Peak<T>) -> isize {
        next.start_index as isize - self.end_index as isize
    }

    /// Combine this peak with the following one.
    ///
    /// The result spans from `self.start_index` to `next.end_index`; its
    /// maximum is chosen according to `tie_break`.
    pub fn merge(self, next: Peak<T>, tie_break: TieBreak) -> Peak<T> {
        let take_next = match tie_break {
            TieBreak::KeepFirst => next.value > self.value,
            TieBreak::Lexicographic => {
                next.value > self.value
                    || (next.value == self.value && next.peak_index > self.peak_index)
            }
        };
        let (value, peak_index) = if take_next {
            (next.value, next.peak_index)
        } else {
            (self.value, self.peak_index)
        };
        Peak {
            value,
            peak_index,
            start_index: self.start_index,
            end_index: next.end_index,
        }
    }
}

impl<T> From<Peak<T>> for ((T, usize), (usize, usize)) {
    fn from(peak: Peak<T>) -> Self {
        (
            (peak.value, peak.peak_index),
            (peak.start_index, peak.end_index),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(value: f64, peak_index: usize, start_index: usize, end_index: usize) -> Peak<f64> {
        Peak::new(value, peak_index, start_index, end_index).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_ordering() {
        assert!(Peak::new(1.0, 1, 0, 3).is_ok());
        assert_eq!(
            Peak::new(1.0, 0, 0, 3),
            Err(Error::InvalidPeak {
                start_index: 0,
                peak_index: 0,
                end_index: 3
            })
        );
        assert!(Peak::new(1.0, 3, 0, 3).is_err());
        assert!(Peak::new(1.0, 2, 3, 5).is_err());
    }

    #[test]
    fn test_tuple_forms() {
        let p = peak(2.0, 1, 0, 3);
        assert_eq!(p.as_tuple(), ((2.0, 1), (0, 3)));
        let t: ((f64, usize), (usize, usize)) = p.into();
        assert_eq!(t, ((2.0, 1), (0, 3)));
    }

    #[test]
    fn test_range_and_width() {
        let p = peak(2.0, 3, 2, 5);
        assert_eq!(p.range(), 2..5);
        assert_eq!(p.width(), 3);
    }

    #[test]
    fn test_gap_to() {
        let a = peak(3.0, 1, 0, 3);
        assert_eq!(a.gap_to(&peak(2.0, 3, 2, 5)), -1);
        assert_eq!(a.gap_to(&peak(2.0, 4, 3, 6)), 0);
        assert_eq!(a.gap_to(&peak(2.0, 8, 7, 9)), 4);
    }

    #[test]
    fn test_merge_larger_value_wins() {
        let a = peak(3.0, 1, 0, 3);
        let b = peak(4.0, 3, 2, 5);
        assert_eq!(a.merge(b, TieBreak::KeepFirst), peak(4.0, 3, 0, 5));
        assert_eq!(b.merge(peak(1.0, 6, 5, 7), TieBreak::KeepFirst), peak(4.0, 3, 2, 7));
    }

    #[test]
    fn test_merge_tie_policies() {
        let a = peak(2.0, 1, 0, 3);
        let b = peak(2.0, 3, 2, 5);
        assert_eq!(a.merge(b, TieBreak::KeepFirst), peak(2.0, 1, 0, 5));
        assert_eq!(a.merge(b, TieBreak::Lexicographic), peak(2.0, 3, 0, 5));
    }

    #[test]
    fn test_tie_break_default() {
        assert_eq!(TieBreak::default(), TieBreak::KeepFirst);
    }
}
