//! CLI entry point for the sequence gap-filling tool

use clap::Parser;
use seqfill::io::cli::{Cli, GapFiller};

fn main() -> seqfill::Result<()> {
    let cli = Cli::parse();
    GapFiller::new(cli).run()?;
    Ok(())
}
