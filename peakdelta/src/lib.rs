//! peakdelta - Positive spike detection for sampled signals
//!
//! Locates discrete events (pulses, spikes) in a 1-D sequence without
//! prior knowledge of their shape, width or baseline, using only two slope
//! thresholds: one that opens a peak and one that closes it.
//!
//! # Example
//!
//! ```
//! use peakdelta::{DetectOptions, PeakDetector, detect_edges};
//!
//! let signal = [0.0, 2.0, 0.0, 2.0, 0.0];
//!
//! let edges = detect_edges(&signal, 1.0, -1.0);
//! assert_eq!(edges.len(), 2);
//!
//! let detector = PeakDetector::new(DetectOptions::new().with_minimum_space(0)).unwrap();
//! let merged = detector.detect(&signal);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].range(), 0..5);
//! ```

pub use peakdelta_core::*;
