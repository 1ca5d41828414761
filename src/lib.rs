//! jsonobj - an in-memory JSON tree with a hand-written parser and printer.
//!
//! # Architecture
//!
//! - [`vector`] - growable array with deterministic doubling, a rewindable
//!   cursor, and a length-prefixed binary codec
//! - [`json`] - the [`JsonValue`] tree, recursive descent parser, and
//!   indented printer
//! - [`conformance`] - differential checks against `serde_json`
//! - [`error`] - error types shared by all modules
//!
//! Documents are always rooted at an object. String contents are stored as
//! written, escapes included, and printed back verbatim.
//!
//! # Example
//!
//! ```
//! use jsonobj::{parse_str, to_pretty_string, JsonValue};
//!
//! let mut root = JsonValue::new_dict();
//! root.dict_insert("name", JsonValue::new_string("jsonobj")).unwrap();
//! root.dict_insert("tags", JsonValue::new_array()).unwrap();
//!
//! let text = to_pretty_string(&root).unwrap();
//! assert_eq!(text, "{\n    \"name\" : \"jsonobj\",\n    \"tags\" : [ ]\n}\n");
//! assert_eq!(parse_str(&text).unwrap(), root);
//! ```

// Library code reports failures through JsonError; it must not panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;
pub mod vector;

// Re-export commonly used types
pub use error::{JsonError, JsonResult, VectorError, VectorResult};
pub use json::{
    parse, parse_file, parse_str, parse_with_limits, to_pretty_string, write_pretty, JsonKind,
    JsonValue, Limits,
};
pub use vector::Vector;
