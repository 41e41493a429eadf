//! Check command implementation.
//!
//! Runs the analyzer over every requested file and reports lexical and
//! syntax errors. Exits with an error when any file has problems.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::analysis::{analyze, Analysis};
use crate::diagnostic::{LexError, SyntaxError};
use crate::discovery::{collect_sources, Config, OutputFormat};
use crate::error::{Result, TourneyError};
use crate::output::{display_path, plural, Printer};

use super::{output_format, parse_options, print_diagnostics, print_json, read_source};

/// Check tournament files for lexical and syntax errors
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (defaults to the config's sources)
    pub paths: Vec<PathBuf>,

    /// Report matches that name teams missing from TEAMS
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Per-file result in JSON output.
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    ok: bool,
    /// Whether parsing ran (lexing was clean).
    parsed: bool,
    lex_errors: &'a [LexError],
    syntax_errors: &'a [SyntaxError],
}

impl<'a> FileReport<'a> {
    fn new(path: &std::path::Path, analysis: &'a Analysis) -> Self {
        Self {
            path: display_path(path),
            ok: analysis.is_clean(),
            parsed: analysis.parsed.is_some(),
            lex_errors: &analysis.lex_errors,
            syntax_errors: analysis.syntax_errors(),
        }
    }
}

pub fn run(args: CheckArgs, config: &Config, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let files = collect_sources(&args.paths, &cwd, config)?;
    if files.is_empty() {
        printer.warning("Warning", "no .tourney files found");
        return Ok(());
    }

    let options = parse_options(args.strict, config);
    let format = output_format(args.format, config);

    let mut analyses = Vec::with_capacity(files.len());
    for path in &files {
        let source = read_source(path)?;
        let analysis = analyze(&source, options);
        if format == OutputFormat::Text {
            printer.status("Checking", &printer.cyan(&display_path(path)));
            print_diagnostics(path, &source, &analysis);
        }
        analyses.push(analysis);
    }

    if format == OutputFormat::Json {
        let reports: Vec<FileReport> = files
            .iter()
            .zip(&analyses)
            .map(|(path, analysis)| FileReport::new(path, analysis))
            .collect();
        print_json(&reports)?;
    }

    let failed = analyses.iter().filter(|a| !a.is_clean()).count();
    let errors: usize = analyses.iter().map(Analysis::error_count).sum();
    if failed > 0 {
        return Err(TourneyError::Analysis {
            message: format!(
                "{} in {} of {}",
                plural(errors, "error", "errors"),
                failed,
                plural(files.len(), "file", "files")
            ),
            help: None,
        });
    }

    printer.status(
        "Finished",
        &format!("{} checked, no errors", plural(files.len(), "file", "files")),
    );
    Ok(())
}
