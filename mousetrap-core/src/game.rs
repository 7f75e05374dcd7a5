//! Game state, move legality and undo/redo

use crate::ai::MouseAI;
use crate::board::{Cell, WallView};
use crate::config::{random_walls, Difficulty, GameConfig, GameType};
use crate::history::History;
use crate::record::{GameRecord, RecordError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Score at the start of every game
pub const STARTING_SCORE: u32 = 20_000;

/// Score deducted per wall placed
pub const WALL_COST: u32 = 50;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Side to move (only tracked in one-vs-one games)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Walls,
    Mouse,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Walls => Player::Mouse,
            Player::Mouse => Player::Walls,
        }
    }
}

/// Game result, derived from the current position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    /// Mouse reached the outer ring
    MouseEscaped,
    /// Mouse has no free neighbor
    MouseTrapped,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// The board and everything needed to replay it.
///
/// All mutation goes through `place_wall`, `move_mouse`, `move_mouse_ai`,
/// `undo` and `redo`. A rejected call leaves the state untouched.
#[derive(Clone, Debug)]
pub struct GameState {
    game_type: GameType,
    difficulty: Option<Difficulty>,
    turn: u32,
    current_player: Player,
    score: u32,
    mouse: Cell,
    walls: FxHashSet<Cell>,
    history: History,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with a random starting layout
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// New game drawing its layout from `rng`
    pub fn with_rng<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut state = Self::empty(config.game_type, config.difficulty);
        state.walls = random_walls(rng, &config.wall_counts, config.difficulty, state.mouse);
        tracing::debug!(
            game_type = ?config.game_type,
            difficulty = ?config.difficulty,
            walls = state.walls.len(),
            "new game"
        );
        state
    }

    /// Board with no walls and the mouse at the center
    pub fn empty(game_type: GameType, difficulty: Option<Difficulty>) -> Self {
        Self {
            game_type,
            difficulty,
            turn: 0,
            current_player: Player::Walls,
            score: STARTING_SCORE,
            mouse: Cell::center(),
            walls: FxHashSet::default(),
            history: History::new(),
        }
    }

    /// Rebuild a game from a record, skipping random initialization
    pub fn from_record(record: &GameRecord) -> Result<Self, RecordError> {
        record.validate()?;
        let mut state = Self::empty(record.game_type, record.difficulty);
        state.restore(record.clone());
        Ok(state)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Completed plies
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mouse_position(&self) -> Cell {
        self.mouse
    }

    pub fn walls(&self) -> &FxHashSet<Cell> {
        &self.walls
    }

    /// Read-only wall view for searches
    pub fn view(&self) -> WallView<'_> {
        WallView::new(&self.walls)
    }

    pub fn is_wall_turn(&self) -> bool {
        self.current_player == Player::Walls
    }

    pub fn is_mouse_turn(&self) -> bool {
        self.current_player == Player::Mouse
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn is_free(&self, cell: Cell) -> bool {
        self.view().is_free(cell)
    }

    /// Cells the mouse may move to
    pub fn neighbors(&self) -> Vec<Cell> {
        self.neighbors_of(self.mouse)
    }

    /// Free cells adjacent to `cell`
    pub fn neighbors_of(&self, cell: Cell) -> Vec<Cell> {
        self.view().neighbors(cell)
    }

    /// Mouse stands on the outer ring
    pub fn is_escaped(&self) -> bool {
        self.mouse.is_on_edge()
    }

    /// Mouse has nowhere to go
    pub fn is_trapped(&self) -> bool {
        self.neighbors().is_empty()
    }

    /// Escape is checked before trap
    pub fn result(&self) -> GameResult {
        if self.is_escaped() {
            GameResult::MouseEscaped
        } else if self.is_trapped() {
            GameResult::MouseTrapped
        } else {
            GameResult::Ongoing
        }
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Hand the move to the other side (one-vs-one only)
    pub fn switch_player(&mut self) {
        if self.game_type == GameType::OneVsOne {
            self.current_player = self.current_player.opponent();
        }
    }

    /// Place a wall on a free cell that is not the mouse's
    pub fn place_wall(&mut self, cell: Cell) -> bool {
        if self.game_type == GameType::OneVsOne && !self.is_wall_turn() {
            return false;
        }
        if !self.is_free(cell) || cell == self.mouse {
            tracing::trace!(%cell, "wall rejected");
            return false;
        }

        let before = self.to_record();
        self.history.record(before);
        self.walls.insert(cell);
        self.score = self.score.saturating_sub(WALL_COST);
        self.turn += 1;
        self.switch_player();
        true
    }

    /// Move the mouse to one of its free neighbors
    pub fn move_mouse(&mut self, target: Cell) -> bool {
        if self.game_type == GameType::OneVsOne && !self.is_mouse_turn() {
            return false;
        }
        if !self.neighbors().contains(&target) {
            tracing::trace!(%target, "mouse move rejected");
            return false;
        }

        self.commit_mouse_move(target);
        true
    }

    /// Let the AI answer for the mouse (singleplayer only).
    ///
    /// Returns the cell the mouse moved to, or `None` if no move was made.
    pub fn move_mouse_ai(&mut self) -> Option<Cell> {
        let ai = MouseAI::for_difficulty(self.difficulty?);
        self.move_mouse_with(&ai)
    }

    /// Same as `move_mouse_ai`, with a caller-supplied AI
    pub fn move_mouse_with(&mut self, ai: &MouseAI) -> Option<Cell> {
        if self.game_type != GameType::Singleplayer {
            return None;
        }
        let target = ai.choose_move(&self.view(), self.mouse)?;
        debug_assert!(self.neighbors().contains(&target));
        self.commit_mouse_move(target);
        Some(target)
    }

    fn commit_mouse_move(&mut self, target: Cell) {
        let before = self.to_record();
        self.history.record(before);
        self.mouse = target;
        self.turn += 1;
        self.switch_player();
    }

    // ========================================================================
    // UNDO / REDO
    // ========================================================================

    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = self.to_record();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                tracing::debug!(turn = self.turn, "undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = self.to_record();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                tracing::debug!(turn = self.turn, "redo");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ========================================================================
    // SERIALIZATION
    // ========================================================================

    /// Snapshot as a flat record (walls sorted row-major)
    pub fn to_record(&self) -> GameRecord {
        let mut walls: Vec<Cell> = self.walls.iter().copied().collect();
        walls.sort_unstable();
        GameRecord {
            game_type: self.game_type,
            difficulty: self.difficulty,
            turn: self.turn,
            current_player: self.current_player,
            mouse_position: self.mouse,
            walls,
            score: self.score,
        }
    }

    /// Overwrite every mutable field at once
    fn restore(&mut self, record: GameRecord) {
        self.turn = record.turn;
        self.current_player = record.current_player;
        self.mouse = record.mouse_position;
        self.walls = record.walls.into_iter().collect();
        self.score = record.score;
    }
}

/// Histories are not compared
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.game_type == other.game_type
            && self.difficulty == other.difficulty
            && self.turn == other.turn
            && self.current_player == other.current_player
            && self.score == other.score
            && self.mouse == other.mouse
            && self.walls == other.walls
    }
}

impl Eq for GameState {}

// ============================================================================
// TESTS
// ============================================================================
