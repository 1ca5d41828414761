//! Reproduction bundle for a parser disagreement.

use std::path::Path;

/// Everything needed to reproduce a mismatch between the two parsers.
#[derive(Debug, Clone)]
pub struct ReproBundle {
    /// Test name that failed.
    pub test_name: String,
    /// Input text.
    pub input: String,
    /// What this crate produced (printed tree or error).
    pub ours: String,
    /// What `serde_json` produced (printed tree or error).
    pub reference: String,
}

impl ReproBundle {
    /// Create a new repro bundle.
    pub fn new(test_name: &str, input: &str, ours: String, reference: String) -> Self {
        Self {
            test_name: test_name.to_string(),
            input: input.to_string(),
            ours,
            reference,
        }
    }

    /// Format as a human-readable report.
    pub fn to_report(&self) -> String {
        format!(
            r#"=== Parser Mismatch Report ===
Test: {}
Input ({} bytes):
{}

jsonobj:
{}

serde_json:
{}

To reproduce:
  jsonobj check <input.json>
"#,
            self.test_name,
            self.input.len(),
            self.input,
            self.ours,
            self.reference,
        )
    }

    /// Save the report to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_report())
    }

    /// Format as JSON for machine parsing.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "test_name": self.test_name,
            "input": self.input,
            "ours": self.ours,
            "reference": self.reference,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ReproBundle {
        ReproBundle::new(
            "escapes",
            r#"{"a": "x\ny"}"#,
            "{\"a\" : \"x\\ny\"}".to_string(),
            "{\"a\" : \"x\ny\"}".to_string(),
        )
    }

    #[test]
    fn test_repro_bundle_report() {
        let report = bundle().to_report();
        assert!(report.contains("Test: escapes"));
        assert!(report.contains("jsonobj:"));
        assert!(report.contains("serde_json:"));
    }

    #[test]
    fn test_repro_bundle_json() {
        let json = bundle().to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["test_name"], "escapes");
        assert_eq!(parsed["input"], r#"{"a": "x\ny"}"#);
    }

    #[test]
    fn test_repro_bundle_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repro.txt");
        bundle().save(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("=== Parser Mismatch Report ==="));
    }
}
