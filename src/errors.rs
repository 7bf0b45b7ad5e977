use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Errors raised while evaluating a path expression.
// A path that is well formed but simply absent is NOT an error; see `path::evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    // The path text does not follow the grammar (empty segment, bad index text, ...)
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    // A plain key was applied to something that is not a mapping
    #[error("cannot read key `{key}` of {found}")]
    NotAMapping { key: String, found: &'static str },

    // An index was applied to something that is not a list
    #[error("cannot index {found} with [{index}]")]
    NotAList { index: usize, found: &'static str },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    // A key or index was applied while no document has been parsed yet
    #[error("no document loaded")]
    NoDocument,
}

impl QueryError {
    /// Malformed path text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, QueryError::Syntax { .. })
    }

    /// Well-formed path applied to a value of the wrong shape.
    pub fn is_type_mismatch(&self) -> bool {
        !self.is_syntax()
    }
}

// Raised when document text is not valid JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to Display; keep only the cause
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(cut) => message[..cut].to_string(),
            None => message,
        };
        DocumentError::Parse {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

// Errors surfaced by the console and the binary
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("unknown command `:{0}` (try :help)")]
    UnknownCommand(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

// Type alias for results that use `ConsoleError` as the error type
pub type Result<T> = std::result::Result<T, ConsoleError>;
