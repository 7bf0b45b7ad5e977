use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use json_path_console::{suggest, Console, ConsoleError, ConsoleOptions, Outcome, Session};

/// Inspect a JSON document with dotted path queries.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON document file. Without it the configured initial document is used.
    document: Option<PathBuf>,
    /// Run this query and print the result (repeatable). Skips the console.
    #[arg(short, long = "query")]
    queries: Vec<String>,
    /// Print completion candidates for the document (`--suggest=PREFIX` filters them).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "")]
    suggest: Option<String>,
    /// Prefix suggestions with the `$.` root anchor.
    #[arg(long)]
    anchor: bool,
    /// Options file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    /// More logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jpc: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode, ConsoleError> {
    let mut options = match &args.config {
        Some(path) => ConsoleOptions::from_json_file(path)?,
        None => ConsoleOptions::default(),
    };
    if args.anchor {
        options.anchor_suggestions = true;
    }
    if let Some(path) = &args.document {
        let text = std::fs::read_to_string(path).map_err(|source| ConsoleError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        options.initial_document = Some(text);
    }

    let session = Session::new(options);
    if let Some(err) = session.document().error() {
        if args.document.is_some() {
            return Err(err.clone().into());
        }
        eprintln!("jpc: {err}");
    }

    if args.queries.is_empty() && args.suggest.is_none() {
        return interactive(session);
    }
    batch(session, &args.queries, args.suggest.as_deref())
}

fn batch(
    session: Session,
    queries: &[String],
    suggest_prefix: Option<&str>,
) -> Result<ExitCode, ConsoleError> {
    let stdout = io::stdout();
    let failed = run_batch(session, queries, suggest_prefix, &mut stdout.lock())?;
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Print each query's entry and the suggestions. Returns whether anything failed:
/// an invalid document or a query that ended in an error.
fn run_batch(
    mut session: Session,
    queries: &[String],
    suggest_prefix: Option<&str>,
    out: &mut impl Write,
) -> Result<bool, ConsoleError> {
    let mut failed = session.document().error().is_some();

    for query in queries {
        if let Some(entry) = session.submit(query) {
            failed |= entry.outcome == Outcome::Failed;
            writeln!(out, "{entry}")?;
        }
    }
    if let Some(prefix) = suggest_prefix {
        for candidate in suggest::matching(session.suggestions(), prefix) {
            writeln!(out, "{candidate}")?;
        }
    }

    Ok(failed)
}

fn interactive(session: Session) -> Result<ExitCode, ConsoleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if stdin.is_terminal() {
        writeln!(out, "jpc: type a path such as $.example, or :help")?;
    }

    let mut console = Console::new(session);
    console.run(stdin.lock(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    fn session(doc: Option<&str>) -> Session {
        Session::new(ConsoleOptions {
            initial_document: doc.map(str::to_string),
            anchor_suggestions: false,
        })
    }

    #[test]
    fn suggest_does_not_swallow_the_document() {
        let a = args(&["jpc", "--suggest", "doc.json"]);
        assert_eq!(a.suggest.as_deref(), Some(""));
        assert_eq!(a.document, Some(PathBuf::from("doc.json")));

        let a = args(&["jpc", "--suggest=user.", "doc.json"]);
        assert_eq!(a.suggest.as_deref(), Some("user."));
        assert_eq!(a.document, Some(PathBuf::from("doc.json")));

        let a = args(&["jpc", "doc.json"]);
        assert_eq!(a.suggest, None);
    }

    #[test]
    fn batch_prints_entries_then_suggestions() {
        let mut out = Vec::new();
        let failed = run_batch(
            session(Some(r#"{"a": {"b": 1}}"#)),
            &["a.b".to_string()],
            Some("a"),
            &mut out,
        )
        .unwrap();
        assert!(!failed);
        assert_eq!(String::from_utf8(out).unwrap(), "> a.b\n1\na\na.b\n");
    }

    #[test]
    fn batch_fails_on_query_error() {
        let mut out = Vec::new();
        let failed = run_batch(session(Some(r#"{"a": 1}"#)), &["a[0]".to_string()], None, &mut out).unwrap();
        assert!(failed);
    }

    #[test]
    fn batch_fails_on_invalid_document() {
        let mut out = Vec::new();
        let failed = run_batch(session(Some("{\"a\":")), &[], Some(""), &mut out).unwrap();
        assert!(failed);
        assert!(out.is_empty());
    }
}
