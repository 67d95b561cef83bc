use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use schemelet::run;

/// Evaluates one Scheme expression, or starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the expression from this file.
    #[arg(short, long, conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Keep the interactive session's history in this file.
    #[arg(long)]
    history: Option<PathBuf>,

    /// The expression to evaluate.
    expr: Option<String>,
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match (args.expr, args.file) {
        (Some(expr), _) => println!("{}", run(expr.trim())),
        (None, Some(path)) => run_script(&path)?,
        (None, None) => run_repl(args.history.as_deref()).map_err(|e| e.to_string())?,
    }
    Ok(())
}

fn run_script(path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("{} could not be read: {e}", path.display()))?;
    println!("{}", run(source.trim()));
    Ok(())
}

fn run_repl(history: Option<&Path>) -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = history {
        if let Err(err) = rl.load_history(path) {
            warn!(path = %path.display(), %err, "no previous history");
        }
    }
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                if let Err(err) = rl.add_history_entry(line) {
                    warn!(%err, "could not record history");
                }
                println!("{}", run(line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    if let Some(path) = history {
        rl.save_history(path)?;
    }
    Ok(())
}
