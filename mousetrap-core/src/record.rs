//! Flat, persistable game record
//!
//! The same shape is used for saved games and for undo/redo snapshots.
//! Field names match the saved-game JSON layout:
//!
//! ```json
//! {
//!   "game_type": "singleplayer",
//!   "difficulty": "hard",
//!   "turn": 4,
//!   "current_player": "walls",
//!   "mouse_pos": [5, 6],
//!   "walls": [[0, 3], [4, 4]],
//!   "score": 19900
//! }
//! ```

use crate::board::Cell;
use crate::config::{Difficulty, GameType};
use crate::game::Player;
use serde::{Deserialize, Serialize};

/// Errors from rebuilding a game out of a record
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("cell {0} is outside the board")]
    CellOutOfBounds(Cell),

    #[error("mouse at {0} stands on a wall")]
    MouseOnWall(Cell),

    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete game state as plain data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_type: GameType,
    pub difficulty: Option<Difficulty>,
    pub turn: u32,
    pub current_player: Player,
    #[serde(rename = "mouse_pos", alias = "mouse_position")]
    pub mouse_position: Cell,
    /// Order carries no meaning
    pub walls: Vec<Cell>,
    pub score: u32,
}

impl GameRecord {
    /// Check that every cell is on the board and the mouse is not walled in place
    pub fn validate(&self) -> Result<(), RecordError> {
        if let Some(&cell) = std::iter::once(&self.mouse_position)
            .chain(&self.walls)
            .find(|cell| !cell.is_inside())
        {
            return Err(RecordError::CellOutOfBounds(cell));
        }
        if self.walls.contains(&self.mouse_position) {
            return Err(RecordError::MouseOnWall(self.mouse_position));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: GameRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
