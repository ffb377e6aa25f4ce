//! zttt - tic-tac-toe in the terminal

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;
use zttt_cli::{Cli, CliConfig, Command, GameSummary, Session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument]
fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration resolved");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config.indicators().clone());

    let first = cli.command.first_mover();
    let board = match cli.command {
        Command::Pvp => session.run_pvp()?,
        Command::Pvc { seed, .. } => session.run_pvc(config.pvc_options(first, seed))?,
        Command::Random { seed } => session.run_random(seed)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&GameSummary::from_board(&board))?);
    }
    Ok(())
}
