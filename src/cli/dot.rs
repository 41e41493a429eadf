//! Dot command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Config;
use crate::error::{Result, TourneyError};
use crate::output::{display_path, Printer};
use crate::report::dot::to_dot;

use super::{load_document, parse_options};

/// Export the bracket as a Graphviz DOT graph
#[derive(Args, Debug)]
pub struct DotArgs {
    /// Tournament file
    pub file: PathBuf,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Report matches that name teams missing from TEAMS
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: DotArgs, config: &Config, printer: &Printer) -> Result<()> {
    let options = parse_options(args.strict, config);
    let analysis = load_document(&args.file, options, printer)?;
    let Some(tournament) = analysis.document() else {
        return Ok(());
    };

    let dot = to_dot(tournament);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &dot).map_err(|e| TourneyError::Io {
                path: path.clone(),
                message: format!("Failed to write DOT file: {}", e),
            })?;
            printer.status("Wrote", &printer.cyan(&display_path(path)));
        }
        None => print!("{}", dot),
    }
    Ok(())
}
