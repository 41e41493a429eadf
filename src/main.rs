use clap::Parser;
use miette::Result;
use tourney::cli::{init_tracing, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tourney::cli::run(cli)?;

    Ok(())
}
