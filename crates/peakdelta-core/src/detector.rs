//! Configured peak detection
//!
//! [`PeakDetector`] runs the edge pass followed by the optional merge
//! pass with a validated [`DetectOptions`]. [`detect_peaks`] is the
//! one-shot form taking the parameters directly.

use tracing::debug;

use crate::edge::EdgeDetector;
use crate::error::Result;
use crate::merge::PeakMerger;
use crate::options::DetectOptions;
use crate::peak::{Peak, TieBreak};
use crate::sample::Sample;

/// Peak detector with validated options.
///
/// # Example
/// ```
/// use peakdelta_core::{DetectOptions, PeakDetector};
///
/// let detector = PeakDetector::new(DetectOptions::new().with_minimum_space(0)).unwrap();
/// let peaks = detector.detect(&[0.0, 3.0, 0.0, 2.0, 0.0, 0.0, -1.0, 1.0, -2.0, -1.0]);
/// assert_eq!(peaks.len(), 2);
/// assert_eq!(peaks[0].as_tuple(), ((3.0, 1), (0, 5)));
/// assert_eq!(peaks[1].as_tuple(), ((1.0, 7), (6, 9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakDetector<T> {
    options: DetectOptions<T>,
}

impl<T: Sample> Default for PeakDetector<T> {
    fn default() -> Self {
        Self {
            options: DetectOptions::default(),
        }
    }
}

impl<T: Sample> PeakDetector<T> {
    /// Create a detector, validating `options`.
    pub fn new(options: DetectOptions<T>) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in use
    pub fn options(&self) -> &DetectOptions<T> {
        &self.options
    }

    /// Lazy candidate stream of `sequence`, before merging.
    pub fn edges<'a>(&self, sequence: &'a [T]) -> EdgeDetector<'a, T> {
        EdgeDetector::new(
            sequence,
            self.options.rise_threshold,
            self.options.fall_threshold,
        )
    }

    /// Lazy final peak stream of `sequence`.
    pub fn peaks<'a>(&self, sequence: &'a [T]) -> PeakMerger<EdgeDetector<'a, T>, T> {
        PeakMerger::new(
            self.edges(sequence),
            self.options.minimum_space,
            self.options.tie_break,
        )
    }

    /// Detect and collect the final peaks of `sequence`.
    pub fn detect(&self, sequence: &[T]) -> Vec<Peak<T>> {
        let peaks: Vec<Peak<T>> = self.peaks(sequence).collect();
        debug!(
            samples = sequence.len(),
            peaks = peaks.len(),
            minimum_space = self.options.minimum_space,
            "peak detection finished"
        );
        peaks
    }
}

/// Find peaks of `sequence`, merging those closer than `minimum_space`.
///
/// Equal maxima keep the earlier peak ([`TieBreak::KeepFirst`]). With
/// `minimum_space <= -1` the result equals
/// [`detect_edges`](crate::detect_edges).
///
/// # Example
/// ```
/// use peakdelta_core::detect_peaks;
///
/// let s = [0.0, 3.0, 0.0, 2.0, 0.0, 0.0];
/// assert_eq!(detect_peaks(&s, 1.0, -1.0, -1).len(), 2);
/// assert_eq!(detect_peaks(&s, 1.0, -1.0, 0)[0].as_tuple(), ((3.0, 1), (0, 5)));
/// ```
pub fn detect_peaks<T: Sample>(
    sequence: &[T],
    rise_threshold: T,
    fall_threshold: T,
    minimum_space: isize,
) -> Vec<Peak<T>> {
    let peaks: Vec<Peak<T>> = PeakMerger::new(
        EdgeDetector::new(sequence, rise_threshold, fall_threshold),
        minimum_space,
        TieBreak::KeepFirst,
    )
    .collect();
    debug!(
        samples = sequence.len(),
        peaks = peaks.len(),
        minimum_space,
        "peak detection finished"
    );
    peaks
}
