//! Differential test harness comparing this parser with `serde_json`.

use super::repro::ReproBundle;
use super::{ConformanceError, ConformanceResult};
use crate::json::{parse_with_limits, to_pretty_string, JsonValue, Limits};

/// Result of a differential test.
#[derive(Debug)]
pub enum DiffResult {
    /// Both parsers produced the same tree.
    Match,
    /// Both parsers rejected the input.
    BothRejected,
    /// Both accepted but the trees differ.
    Mismatch {
        /// Our tree.
        ours: JsonValue,
        /// `serde_json`'s tree.
        reference: JsonValue,
        /// Repro bundle for debugging.
        repro: ReproBundle,
    },
    /// `serde_json` accepted a dict-rooted input that we rejected.
    OursRejected {
        /// Our error message.
        error: String,
        /// Repro bundle for debugging.
        repro: ReproBundle,
    },
    /// We accepted an input that `serde_json` rejected.
    ReferenceRejected {
        /// `serde_json`'s error message.
        error: String,
        /// Repro bundle for debugging.
        repro: ReproBundle,
    },
}

impl DiffResult {
    /// Check if the two parsers agreed (same tree, or both rejected).
    pub fn is_agreement(&self) -> bool {
        matches!(self, Self::Match | Self::BothRejected)
    }

    /// Repro bundle for disagreements.
    pub fn repro(&self) -> Option<&ReproBundle> {
        match self {
            Self::Match | Self::BothRejected => None,
            Self::Mismatch { repro, .. }
            | Self::OursRejected { repro, .. }
            | Self::ReferenceRejected { repro, .. } => Some(repro),
        }
    }
}

fn describe(value: &JsonValue) -> String {
    to_pretty_string(value).unwrap_or_else(|_| value.to_string())
}

/// Differential test harness.
#[derive(Debug, Clone, Default)]
pub struct DiffTestHarness {
    limits: Limits,
}

impl DiffTestHarness {
    /// Create a harness that parses with `limits`.
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Parse `input` with both parsers and compare the results.
    ///
    /// Inputs `serde_json` accepts with a non-object root count as rejected
    /// by the reference too, since this parser requires an object root.
    pub fn compare(&self, test_name: &str, input: &str) -> DiffResult {
        let ours = parse_with_limits(input.as_bytes(), self.limits);
        let reference = serde_json::from_str::<serde_json::Value>(input)
            .map_err(|e| e.to_string())
            .and_then(|v| {
                if v.is_object() {
                    Ok(JsonValue::from(v))
                } else {
                    Err("top-level value must be an object".to_string())
                }
            });

        match (ours, reference) {
            (Ok(ours), Ok(reference)) if ours == reference => DiffResult::Match,
            (Ok(ours), Ok(reference)) => {
                let repro =
                    ReproBundle::new(test_name, input, describe(&ours), describe(&reference));
                DiffResult::Mismatch {
                    ours,
                    reference,
                    repro,
                }
            }
            (Err(_), Err(_)) => DiffResult::BothRejected,
            (Err(e), Ok(reference)) => DiffResult::OursRejected {
                error: e.to_string(),
                repro: ReproBundle::new(test_name, input, e.to_string(), describe(&reference)),
            },
            (Ok(ours), Err(e)) => DiffResult::ReferenceRejected {
                repro: ReproBundle::new(test_name, input, describe(&ours), e.clone()),
                error: e,
            },
        }
    }

    /// Print `value`, parse the output, and require the same tree back.
    /// Printing the reparsed tree must reproduce the text exactly.
    pub fn check_round_trip(&self, value: &JsonValue) -> ConformanceResult<()> {
        let first = to_pretty_string(value).map_err(|e| ConformanceError::Print(e.to_string()))?;
        let reparsed = parse_with_limits(first.as_bytes(), self.limits).map_err(|e| {
            ConformanceError::Reparse {
                text: first.clone(),
                error: e.to_string(),
            }
        })?;

        if &reparsed != value {
            return Err(ConformanceError::TreeMismatch {
                expected: first,
                actual: describe(&reparsed),
            });
        }

        let second =
            to_pretty_string(&reparsed).map_err(|e| ConformanceError::Print(e.to_string()))?;
        if first != second {
            let first_diff = first
                .bytes()
                .zip(second.bytes())
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| first.len().min(second.len()));
            return Err(ConformanceError::NotIdempotent {
                first,
                second,
                first_diff,
            });
        }
        Ok(())
    }

    /// Run a batch of differential tests.
    pub fn run_batch<'a>(&self, tests: impl Iterator<Item = (&'a str, &'a str)>) -> BatchResult {
        let mut results = BatchResult::new();

        for (name, input) in tests {
            let result = self.compare(name, input);
            if result.is_agreement() {
                results.record_pass();
            } else {
                tracing::debug!(test = name, "parser disagreement");
                results.record_fail(name, result);
            }
        }

        results
    }
}

/// Results from running a batch of differential tests.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Number of inputs on which the parsers agreed.
    pub passed: usize,
    /// Number of inputs on which they disagreed.
    pub failed: usize,
    /// Details of failures.
    pub failures: Vec<FailureDetail>,
}

/// Details about a disagreement.
#[derive(Debug)]
pub struct FailureDetail {
    /// Test name.
    pub name: String,
    /// The disagreement.
    pub result: DiffResult,
}

impl BatchResult {
    /// Create a new empty batch result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an agreement.
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Record a disagreement.
    pub fn record_fail(&mut self, name: &str, result: DiffResult) {
        self.failed += 1;
        self.failures.push(FailureDetail {
            name: name.to_string(),
            result,
        });
    }

    /// Check if all tests passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Format a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed (total: {})",
            self.passed,
            self.failed,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match() {
        let harness = DiffTestHarness::default();
        let result = harness.compare("nested", r#"{"a": [1, {"b": 2.5}], "c": null}"#);
        assert!(matches!(result, DiffResult::Match));
        assert!(result.repro().is_none());
    }

    #[test]
    fn test_both_reject() {
        let harness = DiffTestHarness::default();
        assert!(matches!(harness.compare("open", "{"), DiffResult::BothRejected));
        assert!(matches!(harness.compare("array", "[1,2,3]"), DiffResult::BothRejected));
    }

    #[test]
    fn test_trailing_content_disagrees() {
        let harness = DiffTestHarness::default();
        let result = harness.compare("trailing", r#"{"a": 1} x"#);
        assert!(matches!(result, DiffResult::ReferenceRejected { .. }));
        assert_eq!(result.repro().map(|r| r.test_name.as_str()), Some("trailing"));
    }

    #[test]
    fn test_raw_escapes_mismatch() {
        let harness = DiffTestHarness::default();
        let result = harness.compare("escape", r#"{"a": "x\ny"}"#);
        assert!(matches!(result, DiffResult::Mismatch { .. }));
    }

    #[test]
    fn test_round_trip() {
        let harness = DiffTestHarness::default();
        let mut root = JsonValue::new_dict();
        root.dict_insert("n", JsonValue::Number(0.1)).unwrap();
        root.dict_insert("e", JsonValue::new_array()).unwrap();
        assert!(harness.check_round_trip(&root).is_ok());
    }

    #[test]
    fn test_round_trip_requires_dict() {
        let harness = DiffTestHarness::default();
        let err = harness.check_round_trip(&JsonValue::Null).unwrap_err();
        assert!(matches!(err, ConformanceError::Print(_)));
    }

    #[test]
    fn test_batch_result() {
        let harness = DiffTestHarness::default();
        let cases = [
            ("ok", r#"{"a": true}"#),
            ("bad", r#"{"a": tru}"#),
            ("trailing", r#"{} {}"#),
        ];
        let result = harness.run_batch(cases.iter().copied());
        assert_eq!(result.passed, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert!(!result.all_passed());
        assert_eq!(result.failures[0].name, "trailing");
        assert_eq!(result.summary(), "2 passed, 1 failed (total: 3)");
    }

    #[test]
    fn test_record_pass_counts_only() {
        let mut result = BatchResult::new();
        result.record_pass();
        result.record_pass();
        assert_eq!(result.passed, 2);
        assert!(result.failures.is_empty());
        assert!(result.all_passed());
    }
}
