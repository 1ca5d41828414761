//! Recursive descent parser.
//!
//! Dispatch looks at one byte after skipping whitespace: `{` dict, `"`
//! string, `[` array, `t`/`f`/`n` literals, anything else a number. Numbers
//! and literals are read as bare tokens ending at whitespace, `,`, `}` or
//! `]`. String contents are kept raw; escapes are not decoded.
//!
//! Every production returns a `JsonResult`; a container under construction
//! is dropped by `?` when a child fails, so a failed parse leaves nothing
//! behind.

use std::path::Path;

use super::cursor::Cursor;
use super::limits::Limits;
use super::types::JsonValue;
use crate::error::{JsonError, JsonResult};

/// JSON parser over an in-memory buffer.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> JsonResult<Self> {
        // Check input size limit
        let size = input.len() as u64;
        if size > limits.max_input_size {
            return Err(JsonError::InputTooLarge {
                size,
                limit: limits.max_input_size,
            });
        }

        Ok(Self {
            cursor: Cursor::new(input)?,
            limits,
            depth: 0,
        })
    }

    /// Parse one document. The root must be a dict.
    pub fn parse(&mut self) -> JsonResult<JsonValue> {
        let value = self.parse_value()?;
        if !value.is_dict() {
            return Err(JsonError::RootNotObject {
                found: value.type_name(),
            });
        }

        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            tracing::trace!(
                position = self.cursor.position(),
                "ignoring content after root value"
            );
        }
        Ok(value)
    }

    /// Parse a single value of any kind.
    pub fn parse_value(&mut self) -> JsonResult<JsonValue> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(b'{') => self.parse_dict(),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b't') => self.parse_literal("true", JsonValue::Bool(true)),
            Some(b'f') => self.parse_literal("false", JsonValue::Bool(false)),
            Some(b'n') => self.parse_literal("null", JsonValue::Null),
            Some(_) => self.parse_number(),
            None => Err(self.cursor.eof()),
        }
    }

    fn parse_string(&mut self) -> JsonResult<JsonValue> {
        let raw = self.cursor.read_raw_string()?;
        Ok(JsonValue::new_string(raw))
    }

    fn parse_literal(&mut self, literal: &'static str, value: JsonValue) -> JsonResult<JsonValue> {
        let position = self.cursor.position();
        let token = self.cursor.read_token()?;
        if token != literal {
            return Err(JsonError::InvalidLiteral {
                token: token.to_owned(),
                position,
            });
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> JsonResult<JsonValue> {
        let position = self.cursor.position();
        let token = self.cursor.read_token()?;
        match token.parse::<f64>() {
            Ok(n) if !token.is_empty() => Ok(JsonValue::Number(n)),
            _ if token.is_empty() => Err(self.cursor.unexpected("a value")),
            _ => Err(JsonError::InvalidNumber {
                token: token.to_owned(),
                position,
            }),
        }
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::NestingTooDeep {
                depth: self.depth,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;
        self.cursor.expect(b'[', "'['")?;
        let mut array = JsonValue::new_array();

        // Empty array
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b']') {
            self.cursor.bump();
            self.leave();
            return Ok(array);
        }

        loop {
            let value = self.parse_value()?;
            array.array_append(value)?;

            // Exactly one comma between elements, no trailing comma
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                    if self.cursor.peek() == Some(b']') {
                        return Err(self.cursor.unexpected("a value"));
                    }
                }
                Some(b']') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => return Err(self.cursor.unexpected("',' or ']'")),
                None => return Err(self.cursor.eof()),
            }
        }

        self.leave();
        Ok(array)
    }

    fn parse_dict(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;
        self.cursor.expect(b'{', "'{'")?;
        let mut dict = JsonValue::new_dict();

        // Empty dict
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.bump();
            self.leave();
            return Ok(dict);
        }

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.cursor.unexpected("'\"'")),
                None => return Err(self.cursor.eof()),
            }
            let key = self.cursor.read_raw_string()?;

            self.cursor.skip_whitespace();
            self.cursor.expect(b':', "':'")?;

            let value = self.parse_value()?;
            dict.dict_insert(key, value)?;

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                }
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => return Err(self.cursor.unexpected("',' or '}'")),
                None => return Err(self.cursor.eof()),
            }
        }

        self.leave();
        Ok(dict)
    }
}

/// Parse a document with default limits.
pub fn parse(input: &[u8]) -> JsonResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse a document held in a `str`.
pub fn parse_str(input: &str) -> JsonResult<JsonValue> {
    parse(input.as_bytes())
}

/// Parse a document with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> JsonResult<JsonValue> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse().map_err(|e| {
        tracing::debug!(error = %e, "parse failed");
        e
    })
}

/// Read a whole file and parse it with default limits.
pub fn parse_file<P: AsRef<Path>>(path: P) -> JsonResult<JsonValue> {
    parse_file_with_limits(path, Limits::default())
}

/// Read a whole file and parse it with custom limits.
///
/// The file size is checked against `max_input_size` before it is read.
pub fn parse_file_with_limits<P: AsRef<Path>>(path: P, limits: Limits) -> JsonResult<JsonValue> {
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    if size > limits.max_input_size {
        return Err(JsonError::InputTooLarge {
            size,
            limit: limits.max_input_size,
        });
    }

    let contents = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read JSON file");
    parse_with_limits(&contents, limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsonKind;

    #[test]
    fn test_parse_number_value() {
        let result = parse_str(r#"{"n": 3.5}"#).unwrap();
        assert_eq!(result.len(), Some(1));
        assert_eq!(result.get("n"), Some(&JsonValue::Number(3.5)));
    }

    #[test]
    fn test_parse_literals() {
        let result = parse_str(r#"{"b": true, "f": false, "x": null}"#).unwrap();
        assert_eq!(result.get("b"), Some(&JsonValue::Bool(true)));
        assert_eq!(result.get("f"), Some(&JsonValue::Bool(false)));
        assert_eq!(result.get("x"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_parse_string_raw() {
        let result = parse_str(r#"{"s": "line\nnext \"q\""}"#).unwrap();
        assert_eq!(result.get("s").and_then(JsonValue::as_str), Some(r#"line\nnext \"q\""#));
    }

    #[test]
    fn test_parse_nested() {
        let result = parse_str(r#"{"a": [1, {"b": 2}]}"#).unwrap();
        let arr = result.get("a").unwrap();
        assert_eq!(arr.kind(), JsonKind::Array);
        assert_eq!(arr.get_index(0), Some(&JsonValue::Number(1.0)));
        let inner = arr.get_index(1).unwrap();
        assert_eq!(inner.get("b"), Some(&JsonValue::Number(2.0)));
    }

    #[test]
    fn test_parse_empty_containers() {
        let result = parse_str(r#"{"a": [ ], "d": {}}"#).unwrap();
        assert_eq!(result.get("a").and_then(JsonValue::len), Some(0));
        assert_eq!(result.get("d").and_then(JsonValue::len), Some(0));
        assert!(parse_str("{}").unwrap().is_dict());
        assert!(parse_str(" \n{ }\n").unwrap().is_dict());
    }

    #[test]
    fn test_scalar_last_in_array() {
        let result = parse_str(r#"{"a": [1, 2, true]}"#).unwrap();
        assert_eq!(result.get("a").and_then(JsonValue::len), Some(3));
    }

    #[test]
    fn test_root_not_object() {
        let err = parse_str("[1,2,3]").unwrap_err();
        assert!(matches!(err, JsonError::RootNotObject { found: "array" }));
        let err = parse_str(r#""text""#).unwrap_err();
        assert!(matches!(err, JsonError::RootNotObject { found: "string" }));
    }

    #[test]
    fn test_unterminated_dict() {
        assert!(matches!(
            parse_str("{").unwrap_err(),
            JsonError::UnexpectedEof { .. }
        ));
        assert!(matches!(
            parse_str(r#"{"a": 1"#).unwrap_err(),
            JsonError::UnexpectedEof { .. }
        ));
    }

    #[test]
    fn test_bad_literal() {
        let err = parse_str(r#"{"a": tru}"#).unwrap_err();
        match err {
            JsonError::InvalidLiteral { token, position } => {
                assert_eq!(token, "tru");
                assert_eq!(position, 6);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_str(r#"{"a": nulls}"#).is_err());
        assert!(parse_str(r#"{"a": falsey}"#).is_err());
    }

    #[test]
    fn test_bad_number() {
        let err = parse_str(r#"{"a": 12abc}"#).unwrap_err();
        assert!(matches!(err, JsonError::InvalidNumber { ref token, .. } if token == "12abc"));
    }

    #[test]
    fn test_hex_float_rejected() {
        let err = parse_str(r#"{"a": 0x1p3}"#).unwrap_err();
        assert!(matches!(err, JsonError::InvalidNumber { ref token, .. } if token == "0x1p3"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_str(r#"{"a": ,}"#).unwrap_err();
        assert!(matches!(err, JsonError::UnexpectedByte { found: ',', .. }));
    }

    #[test]
    fn test_trailing_commas_rejected() {
        assert!(parse_str(r#"{"a":1,}"#).is_err());
        assert!(parse_str(r#"{"a":[1,2,]}"#).is_err());
    }

    #[test]
    fn test_missing_separator_rejected() {
        let err = parse_str(r#"{"a":[1 2]}"#).unwrap_err();
        assert!(matches!(err, JsonError::UnexpectedByte { found: '2', .. }));
        assert!(parse_str(r#"{"a":1 "b":2}"#).is_err());
    }

    #[test]
    fn test_missing_colon() {
        let err = parse_str(r#"{"a" 1}"#).unwrap_err();
        assert!(matches!(
            err,
            JsonError::UnexpectedByte {
                expected: "':'",
                found: '1',
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let result = parse_str(r#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(result.len(), Some(1));
        assert_eq!(result.get("k"), Some(&JsonValue::Number(2.0)));
    }

    #[test]
    fn test_trailing_content_ignored() {
        let result = parse_str(r#"{"a": 1} trailing"#).unwrap();
        assert_eq!(result.get("a"), Some(&JsonValue::Number(1.0)));
    }

    #[test]
    fn test_nesting_depth_limit() {
        let limits = Limits {
            max_nesting_depth: 2,
            ..Limits::default()
        };
        assert!(parse_with_limits(br#"{"a": [1]}"#, limits).is_ok());
        let err = parse_with_limits(br#"{"a": [[1]]}"#, limits).unwrap_err();
        assert!(matches!(err, JsonError::NestingTooDeep { depth: 3, limit: 2 }));
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        let limits = Limits {
            max_nesting_depth: 2,
            ..Limits::default()
        };
        assert!(parse_with_limits(br#"{"a": [1], "b": {}, "c": [2]}"#, limits).is_ok());
    }

    #[test]
    fn test_input_size_limit() {
        let limits = Limits {
            max_input_size: 4,
            ..Limits::default()
        };
        let err = parse_with_limits(br#"{"a": 1}"#, limits).unwrap_err();
        assert_eq!(err.code(), 111);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_str("").unwrap_err(),
            JsonError::UnexpectedEof { position: 0 }
        ));
        assert!(matches!(
            parse_str("   ").unwrap_err(),
            JsonError::UnexpectedEof { .. }
        ));
    }
}
