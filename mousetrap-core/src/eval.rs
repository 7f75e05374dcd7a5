//! Position evaluation for the mouse AI

use crate::board::{Cell, WallView};
use serde::{Deserialize, Serialize};

/// Most exits a hex cell can have
pub const MAX_EXITS: usize = 6;

/// Heuristic weights for cell evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Penalty per missing exit
    pub trap_weight: f32,
    /// Penalty per wall in the density window
    pub density_weight: f32,
    /// Half-width of the density window (2 => 5x5)
    pub density_radius: i8,
    /// Survival bonus per open exit
    pub exit_weight: f32,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            trap_weight: 2.0,
            density_weight: 0.5,
            density_radius: 2,
            exit_weight: 2.0,
        }
    }
}

impl Heuristics {
    /// Penalize cells with fewer legal exits
    pub fn trap_penalty(&self, view: &WallView<'_>, cell: Cell) -> f32 {
        let exits = view.neighbors(cell).len();
        MAX_EXITS.saturating_sub(exits) as f32 * self.trap_weight
    }

    /// Penalize wall-dense neighborhoods even where the cell itself is open
    pub fn wall_density_penalty(&self, view: &WallView<'_>, cell: Cell) -> f32 {
        view.walls_within(cell, self.density_radius) as f32 * self.density_weight
    }

    /// A* estimate of remaining cost from `cell`
    pub fn estimate(&self, view: &WallView<'_>, cell: Cell) -> f32 {
        cell.distance_to_edge() as f32
            + self.trap_penalty(view, cell)
            + self.wall_density_penalty(view, cell)
    }

    /// How long the mouse is likely to last on `cell` (higher = better)
    pub fn survival_score(&self, view: &WallView<'_>, cell: Cell) -> f32 {
        let exits = view.neighbors(cell).len() as f32;
        -self.trap_penalty(view, cell) - self.wall_density_penalty(view, cell)
            + exits * self.exit_weight
    }
}
