//! Play command - start or resume a game in the terminal

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use mousetrap_core::{Difficulty, GameConfig, GameResult, GameState};

use crate::saves::SaveStore;
use crate::session::{Session, HELP};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// You place walls, the computer plays the mouse
    Singleplayer,
    /// Two players share the keyboard
    #[value(name = "1vs1")]
    OneVsOne,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Game mode
    #[arg(long, value_enum, default_value = "singleplayer")]
    pub mode: Mode,

    /// AI strength for singleplayer (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Seed for the starting wall layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// Resume a saved game instead of starting a new one
    #[arg(long, value_name = "NAME")]
    pub load: Option<String>,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run play command on stdin/stdout
pub fn run(args: PlayArgs, saves_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = play(args, saves_path, stdin.lock(), stdout.lock())?;
    if result.is_none() {
        tracing::info!("Game left unfinished");
    }
    Ok(())
}

/// Set up the game and hand it to a session reading from `input`
pub fn play<R: BufRead, W: Write>(
    args: PlayArgs,
    saves_path: &Path,
    input: R,
    mut out: W,
) -> Result<Option<GameResult>> {
    let game = match &args.load {
        Some(name) => load_game(saves_path, name)?,
        None => new_game(&args),
    };

    tracing::info!(
        "Starting {:?} game (difficulty={:?}, walls={})",
        game.game_type(),
        game.difficulty(),
        game.walls().len()
    );

    writeln!(out, "{}", HELP)?;
    let mut session = Session::new(game, PathBuf::from(saves_path));
    session.run(input, out)
}

fn new_game(args: &PlayArgs) -> GameState {
    let config = match args.mode {
        Mode::Singleplayer => GameConfig::singleplayer(args.difficulty),
        Mode::OneVsOne => GameConfig::one_vs_one(),
    };
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    GameState::new(&config)
}

/// Rebuild a saved game by name
pub fn load_game(saves_path: &Path, name: &str) -> Result<GameState> {
    let store = SaveStore::load(saves_path)?;
    let record = store
        .get(name)
        .with_context(|| format!("No save named '{}' in {}", name, saves_path.display()))?;
    GameState::from_record(record).with_context(|| format!("Save '{}' is invalid", name))
}
