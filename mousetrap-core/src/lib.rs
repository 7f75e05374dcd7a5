//! Mousetrap Core - Game engine and AI
//!
//! This crate provides the core game logic for Mousetrap:
//! - Board geometry (11x11 hex grid with row-parity offsets)
//! - Game state, wall/mouse legality and win detection
//! - Undo/redo history of full-state snapshots
//! - Mouse AI: greedy, breadth-first and A* search with a survival fallback
//! - Flat game records for saving and loading

pub mod board;
pub mod config;
pub mod game;
pub mod history;
pub mod eval;
pub mod ai;
pub mod record;

// Re-exports for convenient access
pub use board::{Cell, WallView, SIZE};
pub use config::{Difficulty, GameConfig, GameType, WallCounts};
pub use game::{GameResult, GameState, Player, STARTING_SCORE, WALL_COST};
pub use history::History;
pub use eval::Heuristics;
pub use ai::{MouseAI, PathSearch, SearchResult, Strategy};
pub use record::{GameRecord, RecordError};
