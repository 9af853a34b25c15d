//! peakdelta-test - Regression test framework for peakdelta
//!
//! Provides [`RegParams`] to accumulate checks across a regression test
//! and report every failure at the end, plus reproducible synthetic
//! signals in [`signal`].
//!
//! # Usage
//!
//! ```ignore
//! use peakdelta_test::RegParams;
//!
//! let mut rp = RegParams::new("edge");
//! rp.compare_peaks(&[((2.0, 1), (0, 3))], &peaks);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display" (also print peaks)
//! - `RUST_LOG`: tracing filter for the detectors' log output

mod error;
mod params;
pub mod signal;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use peakdelta_core::{Peak, Sample};
use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Check that `peaks` is a valid detection result for `sequence`.
///
/// Verifies `start < peak < end <= len`, `value == sequence[peak_index]`
/// and strictly increasing start indices.
pub fn verify_peaks<T: Sample>(sequence: &[T], peaks: &[Peak<T>]) -> TestResult<()> {
    let len = sequence.len();
    let mut previous_start: Option<usize> = None;

    for (i, p) in peaks.iter().enumerate() {
        if p.start_index >= p.peak_index || p.peak_index >= p.end_index || p.end_index > len {
            return Err(TestError::IndexOrder {
                peak: i,
                start_index: p.start_index,
                peak_index: p.peak_index,
                end_index: p.end_index,
                len,
            });
        }
        if sequence[p.peak_index] != p.value {
            return Err(TestError::ValueMismatch {
                peak: i,
                peak_index: p.peak_index,
            });
        }
        if let Some(prev) = previous_start.filter(|&prev| p.start_index <= prev) {
            return Err(TestError::NotIncreasing {
                peak: i,
                start_index: p.start_index,
                previous_start: prev,
            });
        }
        previous_start = Some(p.start_index);
    }

    Ok(())
}
