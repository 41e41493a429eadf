pub mod check;
pub mod completions;
pub mod dot;
pub mod report;
pub mod tokens;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::analysis::{analyze, Analysis};
use crate::discovery::{find_config, Config, OutputFormat};
use crate::error::{Result, TourneyError};
use crate::output::{display_path, plural, Printer};
use crate::parser::ParseOptions;

/// Environment variable holding a log filter such as `tourney=debug`.
pub const LOG_ENV: &str = "TOURNEY_LOG";

/// tourney - Tournament definition checker and reporter
#[derive(Parser, Debug)]
#[command(name = "tourney")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the nearest tourney.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check tournament files for lexical and syntax errors
    Check(check::CheckArgs),

    /// List the tokens of a tournament file
    Tokens(tokens::TokensArgs),

    /// Print tournament reports
    Report(report::ReportArgs),

    /// Export the bracket as a Graphviz DOT graph
    Dot(dot::DotArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Install the stderr log subscriber.
///
/// `TOURNEY_LOG` wins over the `-v` count when set.
pub fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "tourney=debug",
        _ => "tourney=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let printer = Printer::new();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => check::run(args, &config, &printer),
        Commands::Tokens(args) => tokens::run(args, &config, &printer),
        Commands::Report(args) => report::run(args, &config, &printer),
        Commands::Dot(args) => dot::run(args, &config, &printer),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Load an explicit config file, or the nearest `tourney.yaml`, or defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| find_config(&cwd)),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Command-line override of the config's strict flag.
pub(crate) fn parse_options(strict: bool, config: &Config) -> ParseOptions {
    let mut options = config.parse_options();
    options.strict_team_refs |= strict;
    options
}

pub(crate) fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or(config.format)
}

pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| TourneyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read source: {}", e),
    })
}

/// Print every lexical and syntax error of an analysis with source context.
pub(crate) fn print_diagnostics(path: &Path, source: &str, analysis: &Analysis) {
    let name = display_path(path);
    for error in &analysis.lex_errors {
        eprintln!("{:?}", miette::Report::new(error.to_diagnostic(&name, source)));
    }
    for error in analysis.syntax_errors() {
        eprintln!("{:?}", miette::Report::new(error.to_diagnostic(&name, source)));
    }
}

/// Analyze one file for a command that needs a document.
///
/// Lexical errors stop the command; syntax errors are printed and the
/// best-effort document is returned.
pub(crate) fn load_document(
    path: &Path,
    options: ParseOptions,
    printer: &Printer,
) -> Result<Analysis> {
    let source = read_source(path)?;
    let analysis = analyze(&source, options);
    print_diagnostics(path, &source, &analysis);

    if analysis.parsed.is_none() {
        return Err(TourneyError::Analysis {
            message: format!(
                "{} has {}",
                display_path(path),
                plural(analysis.lex_errors.len(), "lexical error", "lexical errors")
            ),
            help: Some("Fix the lexical errors first; parsing needs a clean token stream".to_string()),
        });
    }

    let errors = analysis.syntax_errors();
    if !errors.is_empty() {
        let consequence = if errors.iter().any(|e| e.kind.is_structural()) {
            "output may be incomplete"
        } else {
            "the document itself is complete"
        };
        printer.warning(
            "Warning",
            &format!(
                "{} has {}; {}",
                display_path(path),
                plural(errors.len(), "syntax error", "syntax errors"),
                consequence
            ),
        );
    }
    Ok(analysis)
}

/// Serialize a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| TourneyError::Analysis {
        message: format!("Failed to serialize output: {}", e),
        help: None,
    })?;
    println!("{}", json);
    Ok(())
}
