//! Edge-triggered peak candidate detection
//!
//! A single forward pass over consecutive-sample differences.
//!
//! # Algorithm Overview
//!
//! 1. **Searching**: a step `dy = y[i+1] - y[i]` with `dy > rise_threshold`
//!    opens a candidate starting at `i`, with `y[i+1]` as running maximum
//! 2. **InPeak**: a step with `dy < fall_threshold` closes the candidate at
//!    `i + 2`; any other step raises the running maximum if `y[i+1]` is
//!    strictly larger, so the earliest of equal maxima is kept
//! 3. **End of sequence**: a candidate still open is emitted with the
//!    sequence length as its end index
//!
//! Only a single step crossing a threshold counts. A run of small rises
//! never opens a candidate and a run of small falls never closes one,
//! however large the cumulative change.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::peak::Peak;
use crate::sample::Sample;

/// Detector state between two steps
#[derive(Debug, Clone, Copy, PartialEq)]
enum State<T> {
    /// No candidate is open
    Searching,
    /// A candidate is open with its running maximum
    InPeak {
        start_index: usize,
        value: T,
        peak_index: usize,
    },
}

/// Lazy iterator over the peak candidates of a sequence.
///
/// Candidates come out in increasing `start_index` order. Each one is
/// yielded as soon as its closing fall is seen, so the iterator never
/// reads further into the sequence than needed. Cloning an unstarted
/// detector restarts the scan.
///
/// # Example
/// ```
/// use peakdelta_core::EdgeDetector;
///
/// let signal = [0.0, 2.0, 0.0, 2.0, 0.0];
/// let mut edges = EdgeDetector::new(&signal, 1.0, -1.0);
/// assert_eq!(edges.next().map(|p| p.as_tuple()), Some(((2.0, 1), (0, 3))));
/// assert_eq!(edges.next().map(|p| p.as_tuple()), Some(((2.0, 3), (2, 5))));
/// assert_eq!(edges.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeDetector<'a, T> {
    samples: &'a [T],
    rise_threshold: T,
    fall_threshold: T,
    /// Left index of the next step to examine
    position: usize,
    state: State<T>,
}

impl<'a, T: Sample> EdgeDetector<'a, T> {
    /// Create a detector over `samples`.
    ///
    /// # Arguments
    /// * `samples` - Input sequence
    /// * `rise_threshold` - Step strictly above this opens a candidate
    /// * `fall_threshold` - Step strictly below this closes a candidate
    pub fn new(samples: &'a [T], rise_threshold: T, fall_threshold: T) -> Self {
        Self {
            samples,
            rise_threshold,
            fall_threshold,
            position: 0,
            state: State::Searching,
        }
    }

    /// The sequence being scanned
    pub fn samples(&self) -> &'a [T] {
        self.samples
    }
}

impl<T: Sample> Iterator for EdgeDetector<'_, T> {
    type Item = Peak<T>;

    fn next(&mut self) -> Option<Peak<T>> {
        while self.position + 1 < self.samples.len() {
            let i = self.position;
            self.position += 1;

            let y0 = self.samples[i];
            let y1 = self.samples[i + 1];

            match self.state {
                State::Searching => {
                    if T::step_above(y0, y1, self.rise_threshold) {
                        self.state = State::InPeak {
                            start_index: i,
                            value: y1,
                            peak_index: i + 1,
                        };
                    }
                }
                State::InPeak {
                    start_index,
                    value,
                    peak_index,
                } => {
                    if T::step_below(y0, y1, self.fall_threshold) {
                        self.state = State::Searching;
                        let peak = Peak {
                            value,
                            peak_index,
                            start_index,
                            end_index: i + 2,
                        };
                        trace!(?peak, "peak closed by fall edge");
                        return Some(peak);
                    } else if y1 > value {
                        self.state = State::InPeak {
                            start_index,
                            value: y1,
                            peak_index: i + 1,
                        };
                    }
                }
            }
        }

        // The last sample is still part of an unterminated peak
        if let State::InPeak {
            start_index,
            value,
            peak_index,
        } = std::mem::replace(&mut self.state, State::Searching)
        {
            let peak = Peak {
                value,
                peak_index,
                start_index,
                end_index: self.samples.len(),
            };
            trace!(?peak, "peak left open at end of sequence");
            return Some(peak);
        }

        None
    }
}

impl<T: Sample> FusedIterator for EdgeDetector<'_, T> {}

/// Find all peak candidates of `sequence`, without merging.
///
/// Sequences shorter than two samples yield no peaks.
///
/// # Example
/// ```
/// use peakdelta_core::detect_edges;
///
/// let peaks = detect_edges(&[0.0, 2.0, 0.0, -1.0], 1.0, -1.0);
/// assert_eq!(peaks.len(), 1);
/// assert_eq!(peaks[0].as_tuple(), ((2.0, 1), (0, 3)));
/// ```
pub fn detect_edges<T: Sample>(sequence: &[T], rise_threshold: T, fall_threshold: T) -> Vec<Peak<T>> {
    let peaks: Vec<Peak<T>> = EdgeDetector::new(sequence, rise_threshold, fall_threshold).collect();
    debug!(
        samples = sequence.len(),
        peaks = peaks.len(),
        "edge detection finished"
    );
    peaks
}
