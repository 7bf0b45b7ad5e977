//! Interrogate a JSON document with a small dotted path language.
//!
//! ```
//! use json_path_console::{evaluate, suggest};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": [10, 20, 30]}});
//! assert_eq!(evaluate(Some(&doc), "$.a.b[1]").unwrap(), Some(&json!(20)));
//! assert_eq!(evaluate(Some(&doc), "a.missing").unwrap(), None);
//! assert!(evaluate(Some(&doc), "a.b[7]").is_err());
//! assert_eq!(suggest::index(&doc), vec!["a", "a.b"]);
//! ```

pub mod console;
pub mod document;
pub mod errors;
pub mod history;
pub mod options;
pub mod path;
pub mod session;
pub mod suggest;
mod parser;

pub use console::{Command, Console, Flow};
pub use document::Document;
pub use errors::{ConsoleError, DocumentError, QueryError, Result};
pub use history::{Entry, Outcome, QueryLog};
pub use options::ConsoleOptions;
pub use path::{evaluate, Path, Segment};
pub use session::Session;
