//! JSON value tree, parser, and printer.
//!
//! # Architecture
//!
//! - [`types`] - [`JsonValue`] and [`JsonKind`]
//! - [`iter`] - peek/next/reset iterators over arrays and dicts
//! - [`limits`] - input size and nesting limits
//! - [`cursor`] - byte cursor, token and raw string reader
//! - [`parser`] - recursive descent parser
//! - [`printer`] - indented printer
//!
//! # Example
//!
//! ```
//! use jsonobj::json::{parse_str, to_pretty_string, JsonValue};
//!
//! let doc = parse_str(r#"{"a": [1, {"b": 2}]}"#).unwrap();
//! assert_eq!(doc.get("a").and_then(|a| a.get_index(0)), Some(&JsonValue::Number(1.0)));
//!
//! let text = to_pretty_string(&doc).unwrap();
//! assert_eq!(parse_str(&text).unwrap(), doc);
//! ```

pub mod cursor;
pub mod iter;
pub mod limits;
pub mod parser;
pub mod printer;
pub mod types;

// Re-export commonly used items
pub use iter::{ArrayIter, DictIter, DictPair};
pub use limits::Limits;
pub use parser::{parse, parse_file, parse_file_with_limits, parse_str, parse_with_limits, Parser};
pub use printer::{to_pretty_string, write_pretty};
pub use types::{JsonKind, JsonValue};
