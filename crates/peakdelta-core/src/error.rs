//! Error types for peakdelta-core
//!
//! The detection passes themselves never fail. Errors are only produced
//! while building a configured detector or a checked [`Peak`](crate::Peak).

use thiserror::Error;

/// peakdelta error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Peak indices violate `start_index < peak_index < end_index`
    #[error("invalid peak: expected start {start_index} < peak {peak_index} < end {end_index}")]
    InvalidPeak {
        start_index: usize,
        peak_index: usize,
        end_index: usize,
    },
}

/// Result type alias for peakdelta operations
pub type Result<T> = std::result::Result<T, Error>;
