//! Detection options
//!
//! Bundles the rise/fall thresholds, the merge distance and the merge
//! tie-break policy for [`PeakDetector`](crate::PeakDetector).

use crate::error::{Error, Result};
use crate::peak::TieBreak;
use crate::sample::Sample;

/// `minimum_space` value that turns merging off. Any value `<= -1` does.
pub const MERGE_DISABLED: isize = -1;

/// Whether a merge pass with this `minimum_space` changes anything
#[inline]
pub fn merging_enabled(minimum_space: isize) -> bool {
    minimum_space > MERGE_DISABLED
}

/// Options for peak detection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectOptions<T> {
    /// Rise threshold (default: 1)
    /// A step `y[i+1] - y[i]` strictly above this opens a peak
    pub rise_threshold: T,

    /// Fall threshold (default: -1)
    /// A step `y[i+1] - y[i]` strictly below this closes a peak
    pub fall_threshold: T,

    /// Minimum index gap between two peaks (default: -1, merging disabled)
    /// Peaks whose gap is smaller than this are merged
    pub minimum_space: isize,

    /// Tie-break policy used when merging (default: `KeepFirst`)
    pub tie_break: TieBreak,
}

impl<T: Sample> Default for DetectOptions<T> {
    fn default() -> Self {
        Self {
            rise_threshold: T::DEFAULT_RISE,
            fall_threshold: T::DEFAULT_FALL,
            minimum_space: MERGE_DISABLED,
            tie_break: TieBreak::KeepFirst,
        }
    }
}

impl<T: Sample> DetectOptions<T> {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rise threshold
    pub fn with_rise_threshold(mut self, threshold: T) -> Self {
        self.rise_threshold = threshold;
        self
    }

    /// Set the fall threshold
    pub fn with_fall_threshold(mut self, threshold: T) -> Self {
        self.fall_threshold = threshold;
        self
    }

    /// Set the minimum space between peaks
    pub fn with_minimum_space(mut self, space: isize) -> Self {
        self.minimum_space = space;
        self
    }

    /// Set the merge tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Validate options
    ///
    /// Thresholds of any sign are accepted; only values that cannot be
    /// ordered (NaN) are rejected.
    pub fn validate(&self) -> Result<()> {
        if !self.rise_threshold.is_comparable() {
            return Err(Error::InvalidParameter(format!(
                "rise_threshold must be comparable, got {:?}",
                self.rise_threshold
            )));
        }
        if !self.fall_threshold.is_comparable() {
            return Err(Error::InvalidParameter(format!(
                "fall_threshold must be comparable, got {:?}",
                self.fall_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DetectOptions::<f64>::default();
        assert_eq!(opts.rise_threshold, 1.0);
        assert_eq!(opts.fall_threshold, -1.0);
        assert_eq!(opts.minimum_space, MERGE_DISABLED);
        assert_eq!(opts.tie_break, TieBreak::KeepFirst);
        assert!(!merging_enabled(opts.minimum_space));
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = DetectOptions::<i32>::new()
            .with_rise_threshold(5)
            .with_fall_threshold(-3)
            .with_minimum_space(2)
            .with_tie_break(TieBreak::Lexicographic);
        assert_eq!(opts.rise_threshold, 5);
        assert_eq!(opts.fall_threshold, -3);
        assert_eq!(opts.minimum_space, 2);
        assert_eq!(opts.tie_break, TieBreak::Lexicographic);
        assert!(merging_enabled(opts.minimum_space));
    }

    #[test]
    fn test_merging_enabled_boundary() {
        assert!(merging_enabled(0));
        assert!(merging_enabled(25));
        assert!(!merging_enabled(MERGE_DISABLED));
        assert!(!merging_enabled(-7));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let opts = DetectOptions::<f64>::new().with_rise_threshold(f64::NAN);
        assert!(matches!(opts.validate(), Err(Error::InvalidParameter(_))));

        let opts = DetectOptions::<f32>::new().with_fall_threshold(f32::NAN);
        assert!(matches!(opts.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_accepts_unusual_signs() {
        let opts = DetectOptions::<f64>::new()
            .with_rise_threshold(-0.5)
            .with_fall_threshold(0.5);
        assert!(opts.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "rise_threshold": 0.5,
            "fall_threshold": -0.25,
            "minimum_space": 3,
            "tie_break": "Lexicographic"
        }"#;
        let opts: DetectOptions<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(
            opts,
            DetectOptions::new()
                .with_rise_threshold(0.5)
                .with_fall_threshold(-0.25)
                .with_minimum_space(3)
                .with_tie_break(TieBreak::Lexicographic)
        );
        assert!(opts.validate().is_ok());
    }
}
