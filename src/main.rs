//! Terminal tic-tac-toe with a perfect minimax opponent.

use anyhow::Result;
use clap::Parser;
use minimax_tictactoe::cli::Cli;
use minimax_tictactoe::play;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(first = ?cli.first, "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    play::run_game(&mut reader, &mut writer, cli.first.into())
}
