use serde_json::Value;

use crate::document::{pretty, Document};
use crate::errors::{DocumentError, QueryError};
use crate::history::{Entry, Outcome, QueryLog};
use crate::options::ConsoleOptions;
use crate::path;

/// Prefix that marks a failed query in the log.
pub const ERROR_PREFIX: &str = "Error: ";

/// Rendering of a path that names nothing.
pub const ABSENT: &str = "undefined";

// =========================
// Session: document + log
// =========================

/// One interactive session: the current document and the queries run against it.
#[derive(Debug, Clone)]
pub struct Session {
    options: ConsoleOptions,
    document: Document,
    log: QueryLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConsoleOptions::default())
    }
}

impl Session {
    pub fn new(options: ConsoleOptions) -> Self {
        let mut session = Self {
            document: Document::with_anchor(options.anchor_suggestions),
            log: QueryLog::new(),
            options,
        };
        session.load_initial_document();
        session
    }

    fn load_initial_document(&mut self) {
        if let Some(text) = self.options.initial_document.clone() {
            // A bad starter document leaves the session with no value and the error set
            if let Err(err) = self.document.set_text(&text) {
                tracing::warn!(error = %err, "initial document is not valid JSON");
            }
        }
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn set_text(&mut self, raw: &str) -> Result<(), DocumentError> {
        self.document.set_text(raw).map(|_| ())
    }

    pub fn suggestions(&self) -> &[String] {
        self.document.suggestions()
    }

    pub fn log(&self) -> &QueryLog {
        &self.log
    }

    /// Evaluate `query` against the current snapshot without logging it.
    pub fn evaluate(&self, query: &str) -> Result<Option<Value>, QueryError> {
        path::evaluate(self.document.value(), query).map(|found| found.cloned())
    }

    /// Evaluate `query` and append the outcome to the log.
    ///
    /// Blank or whitespace-only text is rejected: nothing is evaluated or logged.
    pub fn submit(&mut self, query: &str) -> Option<&Entry> {
        if query.trim().is_empty() {
            tracing::debug!("ignoring blank query");
            return None;
        }
        let (result, outcome) = render(path::evaluate(self.document.value(), query));
        Some(self.log.append(query, result, outcome))
    }

    /// Clear the log and reload the initial document.
    pub fn reset(&mut self) {
        self.log.clear();
        self.document = Document::with_anchor(self.options.anchor_suggestions);
        self.load_initial_document();
    }
}

/// Render an evaluation outcome the way the log shows it.
pub fn render(outcome: Result<Option<&Value>, QueryError>) -> (String, Outcome) {
    match outcome {
        Ok(Some(value)) => (pretty(value), Outcome::Found),
        Ok(None) => (ABSENT.to_string(), Outcome::Absent),
        Err(err) => (format!("{ERROR_PREFIX}{err}"), Outcome::Failed),
    }
}
