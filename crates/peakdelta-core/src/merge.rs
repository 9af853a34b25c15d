//! Merging of closely spaced peaks
//!
//! Left-to-right reduction over an ordered peak stream: an accumulator
//! absorbs every following peak whose gap to it is smaller than
//! `minimum_space`, so chains of close peaks collapse into one.
//! A gap exactly equal to `minimum_space` keeps the peaks apart.

use std::iter::FusedIterator;

use tracing::debug;

use crate::options::merging_enabled;
use crate::peak::{Peak, TieBreak};
use crate::sample::Sample;

/// Iterator adapter merging peaks closer than `minimum_space`.
///
/// With `minimum_space <= -1` it passes the inner peaks through unchanged.
///
/// # Example
/// ```
/// use peakdelta_core::{EdgeDetector, PeakMerger, TieBreak};
///
/// let signal = [0.0, 3.0, 0.0, 2.0, 0.0, 0.0];
/// let merged: Vec<_> = PeakMerger::new(EdgeDetector::new(&signal, 1.0, -1.0), 0, TieBreak::KeepFirst)
///     .map(|p| p.as_tuple())
///     .collect();
/// assert_eq!(merged, vec![((3.0, 1), (0, 5))]);
/// ```
#[derive(Debug, Clone)]
pub struct PeakMerger<I, T> {
    inner: I,
    minimum_space: isize,
    tie_break: TieBreak,
    pending: Option<Peak<T>>,
}

impl<I, T> PeakMerger<I, T>
where
    I: Iterator<Item = Peak<T>>,
    T: Sample,
{
    /// Wrap an ordered peak iterator.
    ///
    /// # Arguments
    /// * `inner` - Peaks in increasing `start_index` order
    /// * `minimum_space` - Gaps strictly below this merge; `<= -1` disables
    /// * `tie_break` - Which maximum survives when merged values are equal
    pub fn new(inner: I, minimum_space: isize, tie_break: TieBreak) -> Self {
        Self {
            inner,
            minimum_space,
            tie_break,
            pending: None,
        }
    }
}

impl<I, T> Iterator for PeakMerger<I, T>
where
    I: Iterator<Item = Peak<T>>,
    T: Sample,
{
    type Item = Peak<T>;

    fn next(&mut self) -> Option<Peak<T>> {
        if !merging_enabled(self.minimum_space) {
            return self.inner.next();
        }

        loop {
            let Some(next) = self.inner.next() else {
                return self.pending.take();
            };

            match self.pending.take() {
                None => self.pending = Some(next),
                Some(current) => {
                    let gap = current.gap_to(&next);
                    if gap < self.minimum_space {
                        let merged = current.merge(next, self.tie_break);
                        debug!(
                            gap,
                            minimum_space = self.minimum_space,
                            ?merged,
                            "merged adjacent peaks"
                        );
                        self.pending = Some(merged);
                    } else {
                        self.pending = Some(next);
                        return Some(current);
                    }
                }
            }
        }
    }
}

impl<I, T> FusedIterator for PeakMerger<I, T>
where
    I: FusedIterator<Item = Peak<T>>,
    T: Sample,
{
}

/// Merge an ordered peak list, collecting the result.
pub fn merge_peaks<T, I>(peaks: I, minimum_space: isize, tie_break: TieBreak) -> Vec<Peak<T>>
where
    I: IntoIterator<Item = Peak<T>>,
    T: Sample,
{
    PeakMerger::new(peaks.into_iter(), minimum_space, tie_break).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(value: f64, peak_index: usize, start_index: usize, end_index: usize) -> Peak<f64> {
        Peak {
            value,
            peak_index,
            start_index,
            end_index,
        }
    }

    fn tuples(peaks: Vec<Peak<f64>>) -> Vec<((f64, usize), (usize, usize))> {
        peaks.into_iter().map(Into::into).collect()
    }

    #[test]
    fn test_empty_stream() {
        assert!(merge_peaks(Vec::<Peak<f64>>::new(), 3, TieBreak::KeepFirst).is_empty());
    }

    #[test]
    fn test_single_peak_passes() {
        let peaks = vec![peak(2.0, 1, 0, 3)];
        assert_eq!(merge_peaks(peaks.clone(), 10, TieBreak::KeepFirst), peaks);
    }

    #[test]
    fn test_disabled_is_passthrough() {
        let peaks = vec![peak(3.0, 1, 0, 3), peak(2.0, 3, 2, 5)];
        assert_eq!(merge_peaks(peaks.clone(), -1, TieBreak::KeepFirst), peaks);
        assert_eq!(merge_peaks(peaks.clone(), -5, TieBreak::Lexicographic), peaks);
    }

    #[test]
    fn test_strict_gap_comparison() {
        // gap between the two peaks is 2
        let peaks = vec![peak(2.0, 1, 0, 3), peak(4.0, 6, 5, 8)];
        assert_eq!(merge_peaks(peaks.clone(), 2, TieBreak::KeepFirst), peaks);
        assert_eq!(
            tuples(merge_peaks(peaks, 3, TieBreak::KeepFirst)),
            vec![((4.0, 6), (0, 8))]
        );
    }

    #[test]
    fn test_transitive_chain() {
        let peaks = vec![
            peak(2.0, 1, 0, 3),
            peak(5.0, 4, 3, 6),
            peak(3.0, 7, 6, 9),
            peak(1.0, 20, 19, 21),
        ];
        assert_eq!(
            tuples(merge_peaks(peaks, 1, TieBreak::KeepFirst)),
            vec![((5.0, 4), (0, 9)), ((1.0, 20), (19, 21))]
        );
    }

    #[test]
    fn test_tie_break_on_equal_values() {
        let peaks = vec![peak(2.0, 1, 0, 3), peak(2.0, 3, 2, 5)];
        assert_eq!(
            tuples(merge_peaks(peaks.clone(), 0, TieBreak::KeepFirst)),
            vec![((2.0, 1), (0, 5))]
        );
        assert_eq!(
            tuples(merge_peaks(peaks, 0, TieBreak::Lexicographic)),
            vec![((2.0, 3), (0, 5))]
        );
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let peaks = vec![peak(2.0, 1, 0, 3), peak(2.0, 8, 7, 9)];
        let mut it = PeakMerger::new(peaks.into_iter(), 0, TieBreak::KeepFirst);
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
