//! Differential testing against `serde_json`.
//!
//! Each input is parsed by this crate and by `serde_json`; both results are
//! normalized to [`JsonValue`](crate::json::JsonValue) and compared. The
//! harness also checks that printing a tree and parsing the output gives the
//! same tree back.
//!
//! Inputs whose strings contain escape sequences are expected to differ:
//! this parser keeps escapes raw while `serde_json` decodes them.

mod harness;
mod repro;

pub use harness::{BatchResult, DiffResult, DiffTestHarness, FailureDetail};
pub use repro::ReproBundle;

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors raised by the round-trip checks.
#[derive(Debug)]
pub enum ConformanceError {
    /// Printing the tree failed
    Print(String),
    /// Parsing the printed text failed
    Reparse {
        /// Text that failed to parse
        text: String,
        /// Parser error message
        error: String,
    },
    /// Reparsed tree differs from the original
    TreeMismatch {
        /// Printed original
        expected: String,
        /// Printed reparse
        actual: String,
    },
    /// Printing the same tree twice gave different text
    NotIdempotent {
        /// First printing
        first: String,
        /// Second printing
        second: String,
        /// First differing byte index
        first_diff: usize,
    },
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Print(msg) => write!(f, "print failed: {}", msg),
            Self::Reparse { text, error } => {
                write!(f, "printed text failed to parse ({}): {}", error, text)
            }
            Self::TreeMismatch { expected, actual } => {
                write!(f, "round trip changed the tree: expected {}, got {}", expected, actual)
            }
            Self::NotIdempotent { first_diff, .. } => {
                write!(f, "printing is not idempotent (first diff at byte {})", first_diff)
            }
        }
    }
}

impl std::error::Error for ConformanceError {}
