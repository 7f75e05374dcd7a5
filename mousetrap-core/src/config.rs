//! Game configuration: mode, difficulty tier and initial wall layout

use crate::board::{Cell, SIZE};
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Who controls the mouse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Human places walls, the AI answers with the mouse
    #[serde(rename = "singleplayer")]
    Singleplayer,
    /// Two humans alternate walls and mouse
    #[serde(rename = "1vs1")]
    OneVsOne,
}

/// AI tier for singleplayer games
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Inclusive range of starting walls per tier.
///
/// Easier tiers start with more walls already on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallCounts {
    pub easy: (usize, usize),
    pub medium: (usize, usize),
    pub hard: (usize, usize),
    /// Used when no difficulty is set (one-vs-one)
    pub untiered: (usize, usize),
}

impl Default for WallCounts {
    fn default() -> Self {
        Self {
            easy: (19, 25),
            medium: (13, 18),
            hard: (8, 12),
            untiered: (10, 15),
        }
    }
}

impl WallCounts {
    pub fn range(&self, difficulty: Option<Difficulty>) -> RangeInclusive<usize> {
        let (lo, hi) = match difficulty {
            Some(Difficulty::Easy) => self.easy,
            Some(Difficulty::Medium) => self.medium,
            Some(Difficulty::Hard) => self.hard,
            None => self.untiered,
        };
        lo.min(hi)..=hi.max(lo)
    }
}

/// Configuration for a new game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub game_type: GameType,
    pub difficulty: Option<Difficulty>,
    /// Seed for the initial wall layout (None = entropy)
    pub seed: Option<u64>,
    pub wall_counts: WallCounts,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::singleplayer(Difficulty::Medium)
    }
}

impl GameConfig {
    pub fn singleplayer(difficulty: Difficulty) -> Self {
        Self {
            game_type: GameType::Singleplayer,
            difficulty: Some(difficulty),
            seed: None,
            wall_counts: WallCounts::default(),
        }
    }

    pub fn one_vs_one() -> Self {
        Self {
            game_type: GameType::OneVsOne,
            difficulty: None,
            seed: None,
            wall_counts: WallCounts::default(),
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the starting wall ranges
    pub fn with_wall_counts(mut self, wall_counts: WallCounts) -> Self {
        self.wall_counts = wall_counts;
        self
    }
}

/// Scatter a random number of walls (drawn from the tier's range) over the
/// board, never on `mouse`.
pub fn random_walls<R: Rng>(
    rng: &mut R,
    counts: &WallCounts,
    difficulty: Option<Difficulty>,
    mouse: Cell,
) -> FxHashSet<Cell> {
    let max_walls = (SIZE as usize * SIZE as usize) - 1;
    let target = rng.gen_range(counts.range(difficulty)).min(max_walls);

    let mut walls = FxHashSet::default();
    while walls.len() < target {
        let cell = Cell::new(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE));
        if cell != mouse {
            walls.insert(cell);
        }
    }
    walls
}
