//! Forward-only byte cursor over the parser input.
//!
//! The cursor never backtracks; productions look at most one byte ahead.
//! Input is validated as UTF-8 once up front, and every slice handed out
//! starts and ends next to an ASCII delimiter, so slices are always valid
//! `str`s.

use crate::error::{JsonError, JsonResult};

/// Bytes that end a bare token (number or literal).
const TOKEN_TERMINATORS: &[u8] = b" \t\r\n,}]";

/// Cursor over a UTF-8 input buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> JsonResult<Self> {
        let text = std::str::from_utf8(input).map_err(|e| JsonError::InvalidUtf8 {
            position: e.valid_up_to(),
        })?;
        Ok(Self { text, pos: 0 })
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once every byte has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte at the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the byte at the cursor.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume `expected` or fail without moving.
    pub fn expect(&mut self, expected: u8, what: &'static str) -> JsonResult<()> {
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(self.unexpected(what)),
            None => Err(self.eof()),
        }
    }

    /// Skip space, tab, CR and LF.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read a bare token: everything up to the next terminator or end of input.
    ///
    /// The terminator is not consumed. The token may be empty.
    pub fn read_token(&mut self) -> JsonResult<&'a str> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if TOKEN_TERMINATORS.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        self.slice(start, self.pos)
    }

    /// Read a quoted string and return its raw contents.
    ///
    /// The cursor must be on the opening quote and ends one byte past the
    /// closing quote. A backslash escapes the byte after it, except that an
    /// escaped backslash escapes nothing further. Escape sequences are kept
    /// exactly as written.
    pub fn read_raw_string(&mut self) -> JsonResult<&'a str> {
        self.expect(b'"', "'\"'")?;
        let start = self.pos;
        let mut escaped = false;
        loop {
            match self.bump() {
                None => return Err(self.eof()),
                Some(b'"') if !escaped => return self.slice(start, self.pos - 1),
                Some(b'\\') => escaped = !escaped,
                Some(_) => escaped = false,
            }
        }
    }

    fn slice(&self, start: usize, end: usize) -> JsonResult<&'a str> {
        self.text
            .get(start..end)
            .ok_or(JsonError::InvalidUtf8 { position: start })
    }

    /// Error for end of input at the cursor.
    pub fn eof(&self) -> JsonError {
        JsonError::UnexpectedEof { position: self.pos }
    }

    /// Error for the byte at the cursor not being `expected`.
    pub fn unexpected(&self, expected: &'static str) -> JsonError {
        match self.text.get(self.pos..).and_then(|rest| rest.chars().next()) {
            Some(found) => JsonError::UnexpectedByte {
                expected,
                found,
                position: self.pos,
            },
            None => self.eof(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(input: &str) -> Cursor<'_> {
        Cursor::new(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_skip_whitespace() {
        let mut c = cursor(" \t\r\n x");
        c.skip_whitespace();
        assert_eq!(c.peek(), Some(b'x'));
        c.skip_whitespace();
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn test_token_stops_at_terminators() {
        for (input, token, next) in [
            ("12 ", "12", Some(b' ')),
            ("true,", "true", Some(b',')),
            ("null}", "null", Some(b'}')),
            ("3.5]", "3.5", Some(b']')),
            ("-1e3\n", "-1e3", Some(b'\n')),
            ("false", "false", None),
        ] {
            let mut c = cursor(input);
            assert_eq!(c.read_token().unwrap(), token, "input {input:?}");
            assert_eq!(c.peek(), next, "input {input:?}");
        }
    }

    #[test]
    fn test_empty_token() {
        let mut c = cursor(",");
        assert_eq!(c.read_token().unwrap(), "");
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn test_raw_string_keeps_escapes() {
        let mut c = cursor(r#""a\nb\"c" rest"#);
        assert_eq!(c.read_raw_string().unwrap(), r#"a\nb\"c"#);
        assert_eq!(c.peek(), Some(b' '));
    }

    #[test]
    fn test_escaped_backslash_does_not_escape_quote() {
        let mut c = cursor(r#""a\\" tail"#);
        assert_eq!(c.read_raw_string().unwrap(), r"a\\");
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn test_unterminated_string() {
        let mut c = cursor(r#""abc"#);
        assert!(matches!(
            c.read_raw_string(),
            Err(JsonError::UnexpectedEof { position: 4 })
        ));

        let mut c = cursor(r#""abc\""#);
        assert!(c.read_raw_string().is_err());
    }

    #[test]
    fn test_multibyte_string_contents() {
        let mut c = cursor("\"h\u{e9}llo \u{1f600}\"");
        assert_eq!(c.read_raw_string().unwrap(), "h\u{e9}llo \u{1f600}");
        assert!(c.is_eof());
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = Cursor::new(&[b'"', 0xFF, b'"']).unwrap_err();
        assert!(matches!(err, JsonError::InvalidUtf8 { position: 1 }));
    }

    #[test]
    fn test_unexpected_reports_char() {
        let c = cursor("\u{e9}");
        match c.unexpected("':'") {
            JsonError::UnexpectedByte { found, position, .. } => {
                assert_eq!(found, '\u{e9}');
                assert_eq!(position, 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
