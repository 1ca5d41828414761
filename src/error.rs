//! Error types for parsing, building, and printing JSON trees.
//!
//! Every failure the library can report is a variant here. Parse errors carry
//! the byte offset at which the cursor stopped; there is no recovery, the
//! whole parse fails and any partially built tree is dropped.

use thiserror::Error;

use crate::json::JsonKind;

/// Errors produced by the JSON value model, parser, and printer.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Input ended inside a string, container, or before a value started.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEof {
        /// Byte offset where input ran out
        position: usize,
    },

    /// A structural byte other than the one the grammar requires.
    #[error("expected {expected} but found '{found}' at byte {position}")]
    UnexpectedByte {
        /// What the grammar required at this point
        expected: &'static str,
        /// The byte actually found, shown as a char
        found: char,
        /// Byte offset of the offending byte
        position: usize,
    },

    /// A token starting with `t`, `f` or `n` that is not `true`, `false` or `null`.
    #[error("invalid literal '{token}' at byte {position}")]
    InvalidLiteral {
        /// The token text
        token: String,
        /// Byte offset where the token starts
        position: usize,
    },

    /// A token that does not parse completely as a number.
    #[error("invalid number '{token}' at byte {position}")]
    InvalidNumber {
        /// The token text
        token: String,
        /// Byte offset where the token starts
        position: usize,
    },

    /// The input buffer is not valid UTF-8.
    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte
        position: usize,
    },

    /// The parsed or printed root is not a dict.
    #[error("top-level value must be an object, found {found}")]
    RootNotObject {
        /// Type name of the rejected root
        found: &'static str,
    },

    /// Containers nested deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Depth reached
        depth: u64,
        /// Configured maximum
        limit: u64,
    },

    /// Input larger than the configured limit.
    #[error("input of {size} bytes exceeds limit {limit}")]
    InputTooLarge {
        /// Input size in bytes
        size: u64,
        /// Configured maximum
        limit: u64,
    },

    /// Append or insert on a value of the wrong kind.
    #[error("expected {expected} value, found {found}")]
    KindMismatch {
        /// Kind the operation requires
        expected: JsonKind,
        /// Kind of the receiver
        found: JsonKind,
    },

    /// Reading the input file or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Get the numeric error code.
    ///
    /// Codes are stable: 1xx for malformed input, 2xx for model and I/O errors.
    pub fn code(&self) -> u32 {
        match self {
            JsonError::UnexpectedEof { .. } => 100,
            JsonError::UnexpectedByte { .. } => 101,
            JsonError::InvalidLiteral { .. } => 102,
            JsonError::InvalidNumber { .. } => 103,
            JsonError::InvalidUtf8 { .. } => 104,
            JsonError::RootNotObject { .. } => 105,
            JsonError::NestingTooDeep { .. } => 110,
            JsonError::InputTooLarge { .. } => 111,
            JsonError::KindMismatch { .. } => 200,
            JsonError::Io(_) => 201,
        }
    }

    /// Byte offset of the failure, for errors raised while scanning input.
    pub fn position(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedEof { position }
            | JsonError::UnexpectedByte { position, .. }
            | JsonError::InvalidLiteral { position, .. }
            | JsonError::InvalidNumber { position, .. }
            | JsonError::InvalidUtf8 { position } => Some(*position),
            _ => None,
        }
    }
}

/// Errors produced by [`Vector`](crate::vector::Vector) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// `set` at an index past the end (index == len is allowed and appends).
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Current element count
        len: usize,
    },
}

/// Result type for JSON operations.
pub type JsonResult<T> = Result<T, JsonError>;

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;
