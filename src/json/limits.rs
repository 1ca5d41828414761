//! Resource limits for parsing.
//!
//! The parser recurses once per nested container and reads whole files into
//! memory, so both are bounded. Limits deserialize from JSON with every
//! field optional, which is how the CLI's `--limits` file is read.

use serde::{Deserialize, Serialize};

/// Parse limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth of arrays and dicts
    pub max_nesting_depth: u64,
}

impl Limits {
    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 64,
        }
    }

    /// Generous limits for local files.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64 MiB
            max_nesting_depth: 512,
        }
    }

    /// Load limits from a JSON document such as `{"max_nesting_depth": 8}`.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_is_tighter() {
        let strict = Limits::strict();
        let lenient = Limits::lenient();
        assert!(strict.max_input_size < lenient.max_input_size);
        assert!(strict.max_nesting_depth < lenient.max_nesting_depth);
        assert_eq!(Limits::default(), lenient);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let limits = Limits::from_json(r#"{"max_nesting_depth": 8}"#).unwrap();
        assert_eq!(limits.max_nesting_depth, 8);
        assert_eq!(limits.max_input_size, Limits::lenient().max_input_size);
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(Limits::from_json(r#"{"max_nesting_depth": "deep"}"#).is_err());
    }
}
