//! Regression test parameters and operations

use crate::{init_logging, verify_peaks};
use peakdelta_core::{Peak, Sample};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expectations (default)
    #[default]
    Compare,
    /// Compare, and also print every detected peak list
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unknown means `Compare`
    pub fn parse(mode: &str) -> Self {
        match mode.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current check, the mode, and every failure seen so far. Checks
/// never panic; call [`cleanup`](Self::cleanup) at the end and assert on
/// its result.
pub struct RegParams {
    /// Name of the test (e.g., "edge")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from `REGTEST_MODE`; logging is initialized from
    /// `RUST_LOG`.
    pub fn new(test_name: &str) -> Self {
        init_logging();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare a detected peak list with its expected nested-pair form
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected `((value, peak_index), (start_index, end_index))` list
    /// * `actual` - Detected peaks
    ///
    /// # Returns
    ///
    /// `true` if both lists are identical, `false` otherwise.
    pub fn compare_peaks<T: Sample>(
        &mut self,
        expected: &[((T, usize), (usize, usize))],
        actual: &[Peak<T>],
    ) -> bool {
        let actual: Vec<_> = actual.iter().map(Peak::as_tuple).collect();
        self.compare_lists(expected, &actual)
    }

    /// Compare two peak lists for exact equality
    pub fn compare_peak_lists<T: Sample>(&mut self, expected: &[Peak<T>], actual: &[Peak<T>]) -> bool {
        self.compare_lists(expected, actual)
    }

    fn compare_lists<P: PartialEq + std::fmt::Debug>(&mut self, expected: &[P], actual: &[P]) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("{}_reg index {}: {:?}", self.test_name, self.index, actual);
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: peak comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Check the structural invariants of a detection result
    ///
    /// See [`verify_peaks`] for the conditions checked.
    pub fn check_peak_invariants<T: Sample>(&mut self, sequence: &[T], peaks: &[Peak<T>]) -> bool {
        self.index += 1;

        match verify_peaks(sequence, peaks) {
            Ok(()) => true,
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: invariant check for index {}: {}",
                    self.test_name, self.index, e
                );
                self.fail(msg);
                false
            }
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("compare"), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_peaks() {
        let mut rp = RegParams::new("test");
        let peaks = [Peak {
            value: 2.0,
            peak_index: 1,
            start_index: 0,
            end_index: 3,
        }];
        assert!(rp.compare_peaks(&[((2.0, 1), (0, 3))], &peaks));
        assert!(!rp.compare_peaks(&[((2.0, 1), (0, 4))], &peaks));
        assert!(!rp.compare_peaks(&[], &peaks));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_check_peak_invariants() {
        let mut rp = RegParams::new("test");
        let s = [0.0, 2.0, 0.0];
        let good = [Peak {
            value: 2.0,
            peak_index: 1,
            start_index: 0,
            end_index: 3,
        }];
        assert!(rp.check_peak_invariants(&s, &good));
        let bad = [Peak {
            value: 2.0,
            peak_index: 1,
            start_index: 0,
            end_index: 4,
        }];
        assert!(!rp.check_peak_invariants(&s, &bad));
        assert_eq!(rp.failures().len(), 1);
    }
}
