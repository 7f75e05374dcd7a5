//! Interactive game session: parses typed commands and drives the turn flow
//!
//! ## Turn flow
//! - Singleplayer: every accepted wall is answered by the AI mouse, then the
//!   board is checked for an escape, then for a trap.
//! - One-vs-one: walls and mouse alternate. A wall that leaves the mouse with
//!   no exits wins for the walls; a mouse step onto the outer ring wins for
//!   the mouse.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use mousetrap_core::{Cell, GameResult, GameState, GameType};

use crate::render::{render_board, status_line};
use crate::saves::SaveStore;

// ============================================================================
// COMMANDS
// ============================================================================

/// A line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Wall(Cell),
    Move(Cell),
    Undo,
    Redo,
    Save(String),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = parts.collect();

        let cell = |args: &[&str]| -> Result<Cell> {
            match args {
                [row, col] => {
                    let row = row.parse().with_context(|| format!("Bad row: {}", row))?;
                    let col = col.parse().with_context(|| format!("Bad column: {}", col))?;
                    Ok(Cell::new(row, col))
                }
                _ => bail!("Expected ROW COL"),
            }
        };

        match verb.as_str() {
            "w" | "wall" => Ok(Command::Wall(cell(&rest)?)),
            "m" | "move" => Ok(Command::Move(cell(&rest)?)),
            "u" | "undo" => Ok(Command::Undo),
            "r" | "redo" => Ok(Command::Redo),
            "s" | "save" => Ok(Command::Save(rest.join(" "))),
            "show" | "board" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "" => bail!("Empty command"),
            other => bail!("Unknown command: {}", other),
        }
    }
}

pub const HELP: &str = "\
Commands:
  wall ROW COL   place a wall            (w)
  move ROW COL   move the mouse (1vs1)   (m)
  undo / redo                            (u / r)
  save NAME      save the game           (s)
  show           redraw the board
  help           this text
  quit           leave without saving    (q)";

/// What the session should do after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(GameResult),
    Quit,
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session {
    game: GameState,
    saves_path: PathBuf,
}

impl Session {
    pub fn new(game: GameState, saves_path: PathBuf) -> Self {
        Self { game, saves_path }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Read commands until the game ends, the user quits or input runs out.
    /// Returns the result if the game was decided.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<Option<GameResult>> {
        self.draw(&mut out)?;

        // a loaded game may already be decided
        let result = self.game.result();
        if result != GameResult::Ongoing {
            writeln!(out, "{}", outcome_message(self.game.game_type(), result))?;
            return Ok(Some(result));
        }

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            match self.handle(command, &mut out)? {
                Step::Continue => {}
                Step::Finished(result) => {
                    self.draw(&mut out)?;
                    writeln!(out, "{}", outcome_message(self.game.game_type(), result))?;
                    return Ok(Some(result));
                }
                Step::Quit => return Ok(None),
            }
        }
        Ok(None)
    }

    /// Apply one command
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Step> {
        match command {
            Command::Wall(cell) => self.play_wall(cell, out),
            Command::Move(cell) => self.play_mouse(cell, out),
            Command::Undo => {
                if self.game.undo() {
                    self.draw(out)?;
                } else {
                    writeln!(out, "Nothing to undo")?;
                }
                Ok(Step::Continue)
            }
            Command::Redo => {
                if self.game.redo() {
                    self.draw(out)?;
                } else {
                    writeln!(out, "Nothing to redo")?;
                }
                Ok(Step::Continue)
            }
            Command::Save(name) => {
                match self.save(&name) {
                    Ok(()) => writeln!(out, "Saved as '{}'", name.trim())?,
                    Err(e) => writeln!(out, "Save failed: {:#}", e)?,
                }
                Ok(Step::Continue)
            }
            Command::Show => {
                self.draw(out)?;
                Ok(Step::Continue)
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(Step::Continue)
            }
            Command::Quit => Ok(Step::Quit),
        }
    }

    fn play_wall<W: Write>(&mut self, cell: Cell, out: &mut W) -> Result<Step> {
        if !self.game.place_wall(cell) {
            writeln!(out, "Can't place a wall at {}", cell)?;
            return Ok(Step::Continue);
        }

        if self.game.game_type() == GameType::Singleplayer {
            match self.game.move_mouse_ai() {
                Some(to) => tracing::info!("Mouse moved to {}", to),
                None => tracing::info!("Mouse has no move"),
            }
        }

        self.after_move(out)
    }

    fn play_mouse<W: Write>(&mut self, cell: Cell, out: &mut W) -> Result<Step> {
        if self.game.game_type() == GameType::Singleplayer {
            writeln!(out, "The mouse is played by the computer")?;
            return Ok(Step::Continue);
        }
        if !self.game.move_mouse(cell) {
            writeln!(out, "The mouse can't move to {}", cell)?;
            return Ok(Step::Continue);
        }
        self.after_move(out)
    }

    fn after_move<W: Write>(&mut self, out: &mut W) -> Result<Step> {
        match self.game.result() {
            GameResult::Ongoing => {
                self.draw(out)?;
                Ok(Step::Continue)
            }
            result => Ok(Step::Finished(result)),
        }
    }

    fn save(&self, name: &str) -> Result<()> {
        let mut store = SaveStore::load(&self.saves_path)?;
        store.insert(name.trim(), self.game.to_record())?;
        store.write(&self.saves_path)
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let show_moves = self.game.game_type() == GameType::OneVsOne && self.game.is_mouse_turn();
        write!(out, "{}", render_board(&self.game, show_moves))?;
        writeln!(out, "{}", status_line(&self.game))?;
        Ok(())
    }
}

/// Final message from the point of view of the human player(s)
pub fn outcome_message(game_type: GameType, result: GameResult) -> &'static str {
    match (game_type, result) {
        (_, GameResult::Ongoing) => "The game is still on",
        (GameType::Singleplayer, GameResult::MouseTrapped) => "You win! The mouse is trapped.",
        (GameType::Singleplayer, GameResult::MouseEscaped) => "You lose. The mouse escaped.",
        (GameType::OneVsOne, GameResult::MouseTrapped) => "Walls win! The mouse is trapped.",
        (GameType::OneVsOne, GameResult::MouseEscaped) => "Mouse wins! It escaped.",
    }
}
