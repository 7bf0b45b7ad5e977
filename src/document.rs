use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DocumentError;
use crate::suggest;

/// The current JSON document.
///
/// The parsed value is an immutable snapshot that is swapped out whole on every
/// successful parse. A failed parse keeps the previous snapshot (and its
/// suggestions) and only records the error and the text as typed.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    value: Option<Arc<Value>>,
    error: Option<DocumentError>,
    suggestions: Vec<String>,
    anchor_suggestions: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestions carry the `$.` prefix when `anchor` is set.
    pub fn with_anchor(anchor: bool) -> Self {
        let mut doc = Self::default();
        doc.anchor_suggestions = anchor;
        doc
    }

    /// Replace the document text.
    ///
    /// On success the text is normalized to two-space pretty JSON and the
    /// suggestions are recomputed.
    pub fn set_text(&mut self, raw: &str) -> Result<Arc<Value>, DocumentError> {
        tracing::debug!(bytes = raw.len(), "parsing document");
        match parse(raw) {
            Ok(value) => {
                let value = Arc::new(value);
                self.text = pretty(&value);
                self.suggestions = suggest::index_with_anchor(&value, self.anchor_suggestions);
                if let Some(previous) = self.value.replace(Arc::clone(&value)) {
                    release(previous);
                }
                self.error = None;
                tracing::info!(suggestions = self.suggestions.len(), "document committed");
                Ok(value)
            }
            Err(err) => {
                let err = DocumentError::from(err);
                tracing::warn!(error = %err, "document did not parse; keeping previous value");
                self.text = raw.to_string();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Text as shown to the user: canonical after a good parse, as typed after a bad one.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last successfully parsed value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Option<Arc<Value>> {
        self.value.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&DocumentError> {
        self.error.as_ref()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            release(value);
        }
    }
}

/// Parse JSON text of any nesting depth.
pub fn parse(raw: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Two-space indented JSON, for values of any nesting depth.
pub fn pretty(value: &Value) -> String {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::pretty(&mut out);
    // Writing a Value into memory only fails on non-string map keys, which Value cannot hold
    if value.serialize(serde_stacker::Serializer::new(&mut ser)).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

// Dropping a Value recurses once per nesting level; take the last
// reference apart with an explicit stack instead.
fn release(snapshot: Arc<Value>) {
    let Ok(value) = Arc::try_unwrap(snapshot) else {
        return;
    };
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}
