//! Mouse AI: greedy, breadth-first and A* escape search
//!
//! Every strategy is deterministic for a given wall layout. Neighbor
//! expansion always follows the offset-table order from `board`, so ties
//! resolve the same way every time.

use std::collections::VecDeque;

use crate::board::{Cell, WallView};
use crate::config::Difficulty;
use crate::eval::Heuristics;
use rustc_hash::{FxHashMap, FxHashSet};

// ============================================================================
// STRATEGY SELECTION
// ============================================================================

/// Search algorithm driving the mouse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Step to the neighbor closest to the edge, no lookahead
    Greedy,
    /// First step of the shortest escape path
    Bfs,
    /// First step of the cheapest escape path under `Heuristics`
    AStar,
}

impl Strategy {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Greedy,
            Difficulty::Medium => Strategy::Bfs,
            Difficulty::Hard => Strategy::AStar,
        }
    }
}

/// Outcome of an escape search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSearch {
    /// An escape is reachable. Holds the first step of the path, or `None`
    /// when the start is already on the edge.
    Found(Option<Cell>),
    /// No edge cell is reachable
    Exhausted,
}

/// Search outcome plus the number of frontier pops it took
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: PathSearch,
    pub expansions: usize,
}

/// Mouse AI player
#[derive(Clone, Debug)]
pub struct MouseAI {
    pub strategy: Strategy,
    pub heuristics: Heuristics,
}

impl MouseAI {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            heuristics: Heuristics::default(),
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(Strategy::for_difficulty(difficulty))
    }

    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Pick the mouse's next cell. `None` only when no move should be made:
    /// the mouse has no free neighbor, or it already stands on the edge.
    pub fn choose_move(&self, view: &WallView<'_>, mouse: Cell) -> Option<Cell> {
        let choice = match self.strategy {
            Strategy::Greedy => greedy_move(view, mouse),
            Strategy::Bfs => bfs_move(view, mouse, &self.heuristics),
            Strategy::AStar => astar_move(view, mouse, &self.heuristics),
        };
        tracing::debug!(strategy = ?self.strategy, from = %mouse, to = ?choice, "mouse move");
        choice
    }
}

/// First step of a finished search, or the survival move if it found nothing
fn follow_search(
    search: SearchResult,
    view: &WallView<'_>,
    mouse: Cell,
    heuristics: &Heuristics,
) -> Option<Cell> {
    tracing::trace!(expansions = search.expansions, outcome = ?search.outcome, "search done");
    match search.outcome {
        PathSearch::Found(step) => step,
        PathSearch::Exhausted => {
            tracing::debug!(from = %mouse, "no escape path, using survival fallback");
            survival_move(view, mouse, heuristics)
        }
    }
}

// ============================================================================
// GREEDY
// ============================================================================

/// Neighbor with the smallest distance to the edge (first one on ties)
pub fn greedy_move(view: &WallView<'_>, mouse: Cell) -> Option<Cell> {
    view.neighbors(mouse)
        .into_iter()
        .min_by_key(|cell| cell.distance_to_edge())
}

// ============================================================================
// BREADTH-FIRST SEARCH
// ============================================================================

/// FIFO search for the nearest edge cell
pub fn bfs_search(view: &WallView<'_>, start: Cell) -> SearchResult {
    let mut queue: VecDeque<(Cell, Option<Cell>)> = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut expansions = 0;

    queue.push_back((start, None));
    visited.insert(start);

    while let Some((current, first_step)) = queue.pop_front() {
        expansions += 1;

        if current.is_on_edge() {
            return SearchResult {
                outcome: PathSearch::Found(first_step),
                expansions,
            };
        }

        for next in view.neighbors(current) {
            if visited.insert(next) {
                queue.push_back((next, first_step.or(Some(next))));
            }
        }
    }

    SearchResult {
        outcome: PathSearch::Exhausted,
        expansions,
    }
}

/// BFS move with survival fallback
pub fn bfs_move(view: &WallView<'_>, mouse: Cell, heuristics: &Heuristics) -> Option<Cell> {
    follow_search(bfs_search(view, mouse), view, mouse, heuristics)
}

// ============================================================================
// A* SEARCH
// ============================================================================

#[derive(Clone, Copy, Debug)]
struct Node {
    f: f32,
    g: u32,
    cell: Cell,
    first_step: Option<Cell>,
}

/// Best-first search on `f = g + estimate`.
///
/// The frontier is re-sorted before every pop. The sort is stable, so
/// entries with equal `f` come out in the order they were discovered.
pub fn astar_search(view: &WallView<'_>, start: Cell, heuristics: &Heuristics) -> SearchResult {
    let mut open = vec![Node {
        f: heuristics.estimate(view, start),
        g: 0,
        cell: start,
        first_step: None,
    }];
    let mut visited: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut expansions = 0;

    while !open.is_empty() {
        open.sort_by(|a, b| a.f.total_cmp(&b.f));
        let node = open.remove(0);
        expansions += 1;

        if node.cell.is_on_edge() {
            return SearchResult {
                outcome: PathSearch::Found(node.first_step),
                expansions,
            };
        }

        // Skip if already reached at equal or lower cost
        if visited.get(&node.cell).is_some_and(|&best| best <= node.g) {
            continue;
        }
        visited.insert(node.cell, node.g);

        for next in view.neighbors(node.cell) {
            let g = node.g + 1;
            open.push(Node {
                f: g as f32 + heuristics.estimate(view, next),
                g,
                cell: next,
                first_step: node.first_step.or(Some(next)),
            });
        }
    }

    SearchResult {
        outcome: PathSearch::Exhausted,
        expansions,
    }
}

/// A* move with survival fallback
pub fn astar_move(view: &WallView<'_>, mouse: Cell, heuristics: &Heuristics) -> Option<Cell> {
    follow_search(astar_search(view, mouse, heuristics), view, mouse, heuristics)
}

// ============================================================================
// SURVIVAL FALLBACK
// ============================================================================

/// Neighbor with the best survival score (first one on ties)
pub fn survival_move(view: &WallView<'_>, mouse: Cell, heuristics: &Heuristics) -> Option<Cell> {
    let mut best: Option<(Cell, f32)> = None;
    for cell in view.neighbors(mouse) {
        let score = heuristics.survival_score(view, cell);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell)
}

// ============================================================================
// TESTS
// ============================================================================
