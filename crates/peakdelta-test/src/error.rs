//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TestError {
    /// Peak indices violate `start < peak < end <= len`
    #[error(
        "peak {peak}: indices out of order: start {start_index}, peak {peak_index}, end {end_index}, len {len}"
    )]
    IndexOrder {
        peak: usize,
        start_index: usize,
        peak_index: usize,
        end_index: usize,
        len: usize,
    },

    /// Peak value differs from the sample at its peak index
    #[error("peak {peak}: value does not match sequence[{peak_index}]")]
    ValueMismatch { peak: usize, peak_index: usize },

    /// Peak does not start strictly after the previous one
    #[error("peak {peak}: start {start_index} not after previous start {previous_start}")]
    NotIncreasing {
        peak: usize,
        start_index: usize,
        previous_start: usize,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
