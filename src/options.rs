use std::path::Path;

use serde::Deserialize;

use crate::errors::{ConsoleError, Result};

/// Document shown when a session starts.
pub const STARTER_DOCUMENT: &str = "{\n  \"example\": \"data\"\n}";

/// Session configuration. Every field is optional in the JSON form.
///
/// ```json
/// { "initial_document": "{\"a\": 1}", "anchor_suggestions": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleOptions {
    /// Text loaded on start and on reset. `None` starts with no document.
    pub initial_document: Option<String>,
    /// Prefix suggestions with `$.`.
    pub anchor_suggestions: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            initial_document: Some(STARTER_DOCUMENT.to_string()),
            anchor_suggestions: false,
        }
    }
}

impl ConsoleOptions {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(ConsoleError::Options)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConsoleError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
