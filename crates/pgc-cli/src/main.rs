//! pgcopy CLI - dependency-ordered PostgreSQL table copy

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{copy, plan, triggers};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Plan(args) => plan::execute(args, &cli.global).await,
        cli::Commands::Triggers(args) => triggers::execute(args, &cli.global).await,
        cli::Commands::Copy(args) => copy::execute(args, &cli.global).await,
    }
}
