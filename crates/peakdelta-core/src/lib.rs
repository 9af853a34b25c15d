//! peakdelta-core - Spike detection with rise and fall delta thresholds
//!
//! Finds positive, spike-shaped peaks in a 1-D sequence. A step between
//! consecutive samples larger than the rise threshold opens a peak, and a
//! step smaller than the (negative) fall threshold closes it. Peaks that
//! end up closer together than a minimum index gap can then be merged.
//!
//! - [`EdgeDetector`] / [`detect_edges`] - raw peak candidates
//! - [`PeakMerger`] / [`merge_peaks`] - coalescing of close candidates
//! - [`PeakDetector`] / [`detect_peaks`] - both passes in sequence
//! - [`Peak`] - detected region `[start_index, end_index)` and its maximum
//! - [`DetectOptions`] - thresholds, merge distance and tie-break policy
//!
//! # Example
//!
//! ```
//! use peakdelta_core::detect_peaks;
//!
//! let signal = [0.0, 3.0, 0.0, 2.0, 0.0, 0.0, -1.0, 1.0, -2.0, -1.0];
//! let peaks = detect_peaks(&signal, 1.0, -1.0, 0);
//! let pairs: Vec<_> = peaks.iter().map(|p| p.as_tuple()).collect();
//! assert_eq!(pairs, vec![((3.0, 1), (0, 5)), ((1.0, 7), (6, 9))]);
//! ```

pub mod detector;
pub mod edge;
pub mod error;
pub mod merge;
pub mod options;
pub mod peak;
pub mod sample;

pub use detector::{PeakDetector, detect_peaks};
pub use edge::{EdgeDetector, detect_edges};
pub use error::{Error, Result};
pub use merge::{PeakMerger, merge_peaks};
pub use options::{DetectOptions, MERGE_DISABLED, merging_enabled};
pub use peak::{Peak, TieBreak};
pub use sample::Sample;
