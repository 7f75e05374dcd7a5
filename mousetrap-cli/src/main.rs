//! Mousetrap CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game (singleplayer vs the AI mouse, or 1vs1)
//! - saves: Manage saved games

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mousetrap_cli::play_cmd::{self, PlayArgs};
use mousetrap_cli::saves::DEFAULT_SAVE_FILE;
use mousetrap_cli::saves_cmd::{self, SavesAction};

#[derive(Parser)]
#[command(name = "mousetrap")]
#[command(about = "Trap the mouse on a hex board before it reaches the edge")]
struct Cli {
    /// Save file
    #[arg(long, global = true, default_value = DEFAULT_SAVE_FILE)]
    saves: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play(PlayArgs),
    /// Manage saved games
    Saves {
        #[command(subcommand)]
        action: SavesAction,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG wins over --verbose)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, &cli.saves),
        Commands::Saves { action } => saves_cmd::run(action, &cli.saves, std::io::stdout()),
    }
}
