//! JSON extraction from free-form model output.
//!
//! Models asked for JSON still wrap it in prose ("Here is the data: [...]
//! hope this helps") or code fences. Extraction works on the raw reply, before
//! any markdown stripping, by matching brackets of the expected kind while
//! skipping over JSON string literals.

use super::{ParseError, ResponseShape};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Balanced spans for `shape`, in order of their opening bracket.
///
/// One pass with a stack of open positions. String literals are only tracked
/// inside a structure, so stray quotes in surrounding prose are harmless.
///
/// Returns `Err` when the text has no opening bracket at all, or when no
/// opening bracket is ever closed.
fn balanced_spans(raw: &str, shape: ResponseShape) -> Result<Vec<&str>, ParseError> {
    let (open, close) = shape.brackets().ok_or(ParseError::FreeText)?;

    let mut starts: Vec<usize> = Vec::new();
    let mut found: Vec<(usize, usize)> = Vec::new();
    let mut saw_open = false;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in raw.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' if !starts.is_empty() => in_string = true,
            c if c == open => {
                saw_open = true;
                starts.push(i);
            }
            c if c == close => {
                if let Some(start) = starts.pop() {
                    found.push((start, i + c.len_utf8()));
                }
            }
            _ => {}
        }
    }

    // Inner spans close first; callers want outer-before-inner, left to right.
    found.sort_unstable_by_key(|&(start, _)| start);
    let spans: Vec<&str> = found.into_iter().map(|(start, end)| &raw[start..end]).collect();

    match (saw_open, spans.is_empty()) {
        (false, _) => Err(ParseError::NoStructure { expected: shape }),
        (true, true) => Err(ParseError::Unbalanced { expected: shape }),
        (true, false) => Ok(spans),
    }
}

/// Locate and parse the first balanced JSON structure of the given shape.
///
/// Spans are tried in order; the first that parses as JSON wins, so a
/// bracketed aside like `[1]` before the real payload is only chosen when
/// nothing later parses.
///
/// ```rust
/// use agri_advisor::structured::{extract_json, ResponseShape};
///
/// let value = extract_json(r#"Here is data: [{"a":1}] thanks"#, ResponseShape::JsonArray).unwrap();
/// assert_eq!(value, serde_json::json!([{"a": 1}]));
///
/// assert!(extract_json("no data today", ResponseShape::JsonArray).is_err());
/// ```
pub fn extract_json(raw: &str, shape: ResponseShape) -> Result<Value, ParseError> {
    let spans = balanced_spans(raw, shape)?;
    let mut first_error = None;
    for span in spans {
        match serde_json::from_str::<Value>(span) {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }
    // balanced_spans never returns an empty list, so an error was recorded.
    Err(match first_error {
        Some(source) => ParseError::InvalidJson { source },
        None => ParseError::NoStructure { expected: shape },
    })
}

/// Like [`extract_json`], but the winning span must also deserialize into `T`.
pub fn extract_as<T: DeserializeOwned>(raw: &str, shape: ResponseShape) -> Result<T, ParseError> {
    let spans = balanced_spans(raw, shape)?;
    let mut first_error: Option<ParseError> = None;
    for span in spans {
        let value = match serde_json::from_str::<Value>(span) {
            Ok(value) => value,
            Err(source) => {
                first_error.get_or_insert(ParseError::InvalidJson { source });
                continue;
            }
        };
        match serde_json::from_value::<T>(value) {
            Ok(typed) => return Ok(typed),
            Err(e) => {
                first_error.get_or_insert(ParseError::Mismatch {
                    target: std::any::type_name::<T>(),
                    message: e.to_string(),
                });
            }
        }
    }
    Err(first_error.unwrap_or(ParseError::NoStructure { expected: shape }))
}
