//! Saves command - inspect and manage the save file

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::play_cmd::load_game;
use crate::render::{render_board, status_line};
use crate::saves::SaveStore;

#[derive(Subcommand, Debug)]
pub enum SavesAction {
    /// List saved games
    List,
    /// Print a saved board
    Show { name: String },
    /// Delete a saved game
    Delete { name: String },
}

pub fn run<W: Write>(action: SavesAction, saves_path: &Path, mut out: W) -> Result<()> {
    match action {
        SavesAction::List => {
            let store = SaveStore::load(saves_path)?;
            if store.is_empty() {
                writeln!(out, "No saved games in {}", saves_path.display())?;
            }
            for name in store.names() {
                if let Some(record) = store.get(name) {
                    writeln!(
                        out,
                        "{:<20} {:?} turn {} score {}",
                        name, record.game_type, record.turn, record.score
                    )?;
                }
            }
        }
        SavesAction::Show { name } => {
            let game = load_game(saves_path, &name)?;
            write!(out, "{}", render_board(&game, false))?;
            writeln!(out, "{}", status_line(&game))?;
        }
        SavesAction::Delete { name } => {
            let mut store = SaveStore::load(saves_path)?;
            if store.remove(&name).is_none() {
                bail!("No save named '{}'", name);
            }
            store.write(saves_path)?;
            writeln!(out, "Deleted '{}'", name)?;
        }
    }
    Ok(())
}
