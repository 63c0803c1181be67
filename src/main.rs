use clap::Parser;
use miette::Result;
use palswap::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    palswap::cli::swap::run(cli)?;

    Ok(())
}
