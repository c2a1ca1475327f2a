//! search-notes CLI: find markdown notes by frontmatter metadata.
//!
//! Logging: set `RUST_LOG=note_lookup=debug` to see skipped notes on stderr.

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use note_lookup::{
    LookupError, NoteFilter, SearchConfig, render_json, render_report, search_notes,
};

const EXAMPLES: &str = "\
Examples:
    search-notes notes/
    search-notes --type procedure notes/
    search-notes --domain security --tag oauth notes/
    search-notes --stability high --confidence high notes/";

#[derive(Parser, Debug)]
#[command(
    name = "search-notes",
    version,
    about = "Find notes by frontmatter metadata",
    after_help = EXAMPLES
)]
struct Cli {
    /// Notes directory to search recursively.
    #[arg(value_name = "NOTES_DIR")]
    notes_dir: Option<PathBuf>,

    /// Filter by note type.
    #[arg(long = "type", value_name = "TYPE", allow_hyphen_values = true)]
    note_type: Option<String>,

    /// Filter by domain (repeatable; any value matches).
    #[arg(long = "domain", value_name = "DOMAIN", allow_hyphen_values = true)]
    domains: Vec<String>,

    /// Filter by tag (repeatable; any value matches).
    #[arg(long = "tag", value_name = "TAG", allow_hyphen_values = true)]
    tags: Vec<String>,

    /// Filter by stability (low/medium/high).
    #[arg(long, value_name = "LEVEL", allow_hyphen_values = true)]
    stability: Option<String>,

    /// Filter by confidence (low/medium/high).
    #[arg(long, value_name = "LEVEL", allow_hyphen_values = true)]
    confidence: Option<String>,

    /// Filter by scope.
    #[arg(long, value_name = "SCOPE", allow_hyphen_values = true)]
    scope: Option<String>,

    /// Filter by intent.
    #[arg(long, value_name = "INTENT", allow_hyphen_values = true)]
    intent: Option<String>,

    /// Filter by id (supports `*` and `?` wildcards).
    #[arg(long = "id", value_name = "PATTERN", allow_hyphen_values = true)]
    id_pattern: Option<String>,

    /// Filter by title keyword (case-insensitive).
    #[arg(long = "title", value_name = "KEYWORD", allow_hyphen_values = true)]
    title_keyword: Option<String>,

    /// Output as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Excerpt length in characters (default: 200, or the settings file).
    #[arg(long, value_name = "N")]
    excerpt_chars: Option<usize>,

    /// Follow symbolic links while walking the notes directory.
    #[arg(long, default_value_t = false)]
    follow_links: bool,

    /// YAML settings file.
    #[arg(long = "conf", value_name = "FILE")]
    config_file: Option<PathBuf>,
}

impl Cli {
    fn filter(&self) -> Result<NoteFilter> {
        let mut builder = NoteFilter::builder()
            .domains(self.domains.iter().cloned())
            .tags(self.tags.iter().cloned());
        if let Some(value) = &self.note_type {
            builder = builder.note_type(value.as_str());
        }
        if let Some(value) = &self.stability {
            builder = builder.stability(value.as_str());
        }
        if let Some(value) = &self.confidence {
            builder = builder.confidence(value.as_str());
        }
        if let Some(value) = &self.scope {
            builder = builder.scope(value.as_str());
        }
        if let Some(value) = &self.intent {
            builder = builder.intent(value.as_str());
        }
        if let Some(value) = &self.id_pattern {
            builder = builder.id_pattern(value.as_str());
        }
        if let Some(value) = &self.title_keyword {
            builder = builder.title_keyword(value.as_str());
        }
        Ok(builder.build()?)
    }

    fn config(&self) -> Result<SearchConfig> {
        let base = match &self.config_file {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };
        Ok(base
            .with_excerpt_chars(self.excerpt_chars)
            .with_follow_links(self.follow_links))
    }
}

fn wants_help(args: &[OsString]) -> bool {
    args.len() <= 1 || args[1..].iter().any(|arg| arg == "-h" || arg == "--help")
}

fn print_usage() -> std::io::Result<()> {
    Cli::command().print_help()?;
    writeln!(std::io::stdout())
}

fn run(cli: &Cli, notes_dir: &Path) -> Result<()> {
    let config = cli.config()?;
    let filter = cli.filter()?;
    tracing::debug!(?filter, ?config, "starting note search");

    let results = match search_notes(notes_dir, &filter, &config) {
        Ok(results) => results,
        Err(error @ LookupError::RootNotFound(_)) => {
            // Keep stdout parseable when it carries JSON.
            if cli.json {
                eprintln!("Error: {error}");
            } else {
                println!("Error: {error}");
            }
            Vec::new()
        }
        Err(error) => return Err(error.into()),
    };

    if cli.json {
        let rendered = render_json(&results).context("failed to serialize results as JSON")?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&results));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    if wants_help(&args) {
        return finish(print_usage().context("failed to print usage"));
    }
    let cli = Cli::parse_from(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("note_lookup=warn,search_notes=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(notes_dir) = cli.notes_dir.clone() else {
        println!("Error: No notes directory specified");
        if let Err(error) = print_usage() {
            tracing::warn!(%error, "failed to print usage");
        }
        return ExitCode::FAILURE;
    };

    finish(run(&cli, &notes_dir))
}

fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
