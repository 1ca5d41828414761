//! Indented printer.
//!
//! Layout: four spaces per level; scalars inline; `[ ]` and `{}` for empty
//! containers; otherwise one child per line, a comma after every child but
//! the last, and the closing bracket back at the parent's indentation. Dict
//! entries print as `"key" : value`. Strings are written between quotes
//! exactly as stored, since the parser keeps escapes raw.

use std::fmt;
use std::io;

use super::types::JsonValue;
use crate::error::{JsonError, JsonResult};

const INDENT: &str = "    ";

fn write_indent<W: fmt::Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn write_value<W: fmt::Write>(value: &JsonValue, out: &mut W, depth: usize) -> fmt::Result {
    match value {
        JsonValue::String(s) => write!(out, "\"{s}\""),
        JsonValue::Number(n) => write!(out, "{n}"),
        JsonValue::Bool(true) => out.write_str("true"),
        JsonValue::Bool(false) => out.write_str("false"),
        JsonValue::Null => out.write_str("null"),
        JsonValue::Array(items) => {
            if items.is_empty() {
                return out.write_str("[ ]");
            }
            out.write_str("[\n")?;
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                write_indent(out, depth + 1)?;
                write_value(item, out, depth + 1)?;
                out.write_str(if i < last { ",\n" } else { "\n" })?;
            }
            write_indent(out, depth)?;
            out.write_char(']')
        }
        JsonValue::Dict(map) => {
            if map.is_empty() {
                return out.write_str("{}");
            }
            out.write_str("{\n")?;
            let last = map.len() - 1;
            for (i, (key, item)) in map.iter().enumerate() {
                write_indent(out, depth + 1)?;
                write!(out, "\"{key}\" : ")?;
                write_value(item, out, depth + 1)?;
                out.write_str(if i < last { ",\n" } else { "\n" })?;
            }
            write_indent(out, depth)?;
            out.write_char('}')
        }
    }
}

fn require_dict(value: &JsonValue) -> JsonResult<()> {
    if value.is_dict() {
        Ok(())
    } else {
        Err(JsonError::RootNotObject {
            found: value.type_name(),
        })
    }
}

/// Print a dict-rooted document followed by a newline.
pub fn to_pretty_string(value: &JsonValue) -> JsonResult<String> {
    require_dict(value)?;
    Ok(format!("{value}\n"))
}

/// Write a dict-rooted document followed by a newline.
pub fn write_pretty<W: io::Write>(value: &JsonValue, writer: &mut W) -> JsonResult<()> {
    let text = to_pretty_string(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Any value at depth zero, without a trailing newline.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, 0)
    }
}
