use serde_json::Value;

use crate::errors::QueryError;
use crate::parser::Parser;

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Root,                    // $
    Key(String),             // name
    KeyIndex(String, usize), // name[i]
    Index(usize),            // [i], applied to the current value directly
}

impl Path {
    pub fn parse(input: &str) -> Result<Path, QueryError> {
        Parser::new(input).parse_path()
    }

    /// Walk `root` segment by segment.
    ///
    /// Returns `Ok(None)` as soon as a key is missing from a mapping; the remaining
    /// segments are not looked at. Shape mismatches and bad indices are errors.
    pub fn resolve<'a>(&self, root: Option<&'a Value>) -> Result<Option<&'a Value>, QueryError> {
        let Some(mut current) = root else {
            return if self.segments.iter().all(|s| *s == Segment::Root) {
                Ok(None)
            } else {
                Err(QueryError::NoDocument)
            };
        };

        for seg in &self.segments {
            current = match seg {
                Segment::Root => current,
                Segment::Key(key) => match lookup(current, key)? {
                    Some(v) => v,
                    None => return Ok(None),
                },
                Segment::KeyIndex(key, index) => match lookup(current, key)? {
                    Some(list) => index_into(list, *index)?,
                    None => return Ok(None),
                },
                Segment::Index(index) => index_into(current, *index)?,
            };
        }
        Ok(Some(current))
    }
}

/// Parse `path` and evaluate it against `root`.
///
/// `Ok(None)` means the path is well formed but names nothing in the document.
pub fn evaluate<'a>(
    root: Option<&'a Value>,
    path: &str,
) -> Result<Option<&'a Value>, QueryError> {
    let parsed = Path::parse(path)?;
    let outcome = parsed.resolve(root);
    tracing::debug!(path, found = matches!(outcome, Ok(Some(_))), "evaluated path");
    outcome
}

fn lookup<'a>(value: &'a Value, key: &str) -> Result<Option<&'a Value>, QueryError> {
    match value {
        Value::Object(map) => Ok(map.get(key)),
        other => Err(QueryError::NotAMapping {
            key: key.to_string(),
            found: type_name(other),
        }),
    }
}

fn index_into(value: &Value, index: usize) -> Result<&Value, QueryError> {
    match value {
        Value::Array(items) => items.get(index).ok_or(QueryError::IndexOutOfRange {
            index,
            len: items.len(),
        }),
        other => Err(QueryError::NotAList {
            index,
            found: type_name(other),
        }),
    }
}

pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether `key` can be written as a plain key segment and read back unchanged.
pub fn is_addressable_key(key: &str) -> bool {
    !key.is_empty() && key != "$" && !key.contains(['.', '['])
}
