use std::fmt;

use itertools::Itertools;

/// How a logged query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Absent,
    Failed,
}

/// One executed query and its rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub query: String,
    pub result: String,
    pub outcome: Outcome,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "> {}\n{}", self.query, self.result)
    }
}

/// Append-only record of executed queries, oldest first.
#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    entries: Vec<Entry>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        query: impl Into<String>,
        result: impl Into<String>,
        outcome: Outcome,
    ) -> &Entry {
        self.entries.push(Entry {
            query: query.into(),
            result: result.into(),
            outcome,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Only a session reset clears the log.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, blank-line separated.
    pub fn transcript(&self) -> String {
        self.entries.iter().map(Entry::to_string).join("\n\n")
    }
}
