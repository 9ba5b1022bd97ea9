mod cli;
mod commands;
mod model;
mod util;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::model::RankingConfig;

fn main() {
    init_tracing();

    let cli = parse_cli();
    if let Err(err) = run(cli) {
        error!(error = %err, "ranking generation failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

/// Help and version go out as clap prints them; argument errors are logged like
/// every other failure.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            error!(error = %err.render(), "invalid command-line arguments");
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RankingConfig::from(cli);
    commands::rankings::run(&config)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .init();
}
