//! Line-oriented console over a [`Session`].
//!
//! A plain line is a path query. Lines starting with `:` are commands.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::errors::{ConsoleError, Result};
use crate::session::Session;
use crate::suggest;

const HELP: &str = "\
<path>             evaluate a path, e.g. $.store.books[0].title
:doc <json>        replace the document text
:load <file>       read the document text from a file
:show              print the document
:suggest [prefix]  list completion candidates
:history           print all queries so far
:reset             clear history and restore the initial document
:help              this text
:quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(String),
    SetDocument(String),
    Load(PathBuf),
    Show,
    Suggest(Option<String>),
    History,
    Reset,
    Help,
    Quit,
    Nothing,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(if line.trim().is_empty() {
                Command::Nothing
            } else {
                Command::Query(line.to_string())
            });
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());

        Ok(match (name, arg) {
            ("doc", Some(text)) => Command::SetDocument(text),
            ("load", Some(file)) => Command::Load(PathBuf::from(file)),
            ("show", None) => Command::Show,
            ("suggest", prefix) => Command::Suggest(prefix),
            ("history", None) => Command::History,
            ("reset", None) => Command::Reset,
            ("help", None) => Command::Help,
            ("quit" | "q", None) => Command::Quit,
            (name, _) => return Err(ConsoleError::UnknownCommand(name.to_string())),
        })
    }
}

/// Whether the console should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Console {
    session: Session,
}

impl Console {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Parse and run one line. Command errors are printed, not returned; only
    /// failures to write to `out` are.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match Command::parse(line) {
            Ok(cmd) => self.execute(cmd, out),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> Result<Flow> {
        match cmd {
            Command::Nothing => {}
            Command::Query(query) => {
                if let Some(entry) = self.session.submit(&query) {
                    writeln!(out, "{entry}")?;
                }
            }
            Command::SetDocument(text) => self.set_document(&text, out)?,
            Command::Load(file) => match std::fs::read_to_string(&file) {
                Ok(text) => self.set_document(&text, out)?,
                Err(source) => {
                    let err = ConsoleError::ReadFile {
                        path: file.display().to_string(),
                        source,
                    };
                    writeln!(out, "{err}")?;
                }
            },
            Command::Show => {
                let doc = self.session.document();
                writeln!(out, "{}", doc.text())?;
                if let Some(err) = doc.error() {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Suggest(prefix) => {
                let prefix = prefix.as_deref().unwrap_or("");
                for candidate in suggest::matching(self.session.suggestions(), prefix) {
                    writeln!(out, "{candidate}")?;
                }
            }
            Command::History => {
                let log = self.session.log();
                if log.is_empty() {
                    writeln!(out, "No queries executed yet.")?;
                } else {
                    writeln!(out, "{}", log.transcript())?;
                }
            }
            Command::Reset => {
                self.session.reset();
                writeln!(out, "session reset")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn set_document(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        match self.session.set_text(text) {
            Ok(()) => writeln!(out, "document loaded ({} paths)", self.session.suggestions().len())?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    /// Read lines from `input` until EOF or `:quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Stop {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("a.b").unwrap(), Command::Query("a.b".into()));
        assert_eq!(Command::parse("  ").unwrap(), Command::Nothing);
        assert_eq!(
            Command::parse(":doc {\"a\": 1}").unwrap(),
            Command::SetDocument("{\"a\": 1}".into())
        );
        assert_eq!(Command::parse(":load data.json").unwrap(), Command::Load("data.json".into()));
        assert_eq!(Command::parse(":suggest").unwrap(), Command::Suggest(None));
        assert_eq!(Command::parse(":suggest a.").unwrap(), Command::Suggest(Some("a.".into())));
        assert_eq!(Command::parse(":q").unwrap(), Command::Quit);
        assert_eq!(Command::parse(":history\r\n").unwrap(), Command::History);
    }

    #[test]
    fn query_text_is_not_trimmed() {
        assert_eq!(Command::parse(" a ").unwrap(), Command::Query(" a ".into()));
    }

    #[test]
    fn unknown_or_malformed_commands() {
        assert!(matches!(Command::parse(":frobnicate"), Err(ConsoleError::UnknownCommand(n)) if n == "frobnicate"));
        assert!(Command::parse(":doc").is_err());
        assert!(Command::parse(":show extra").is_err());
    }
}
