//! `pawfect`: text front end over the Pawfect catalog core.
mod cli;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    platform::run_app(cli)
}
