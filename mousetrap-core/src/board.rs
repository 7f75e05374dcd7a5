//! Hex grid geometry with row-parity offset coordinates

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Board side length (rows and columns)
pub const SIZE: i8 = 11;

/// Neighbor offsets (drow, dcol) for cells on even rows
pub const EVEN_ROW_OFFSETS: [(i8, i8); 6] = [
    (-1, -1), // NW
    (-1, 0),  // NE
    (0, -1),  // W
    (0, 1),   // E
    (1, -1),  // SW
    (1, 0),   // SE
];

/// Neighbor offsets (drow, dcol) for cells on odd rows
pub const ODD_ROW_OFFSETS: [(i8, i8); 6] = [
    (-1, 0), // NW
    (-1, 1), // NE
    (0, -1), // W
    (0, 1),  // E
    (1, 0),  // SW
    (1, 1),  // SE
];

/// A grid coordinate. Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i8, i8)", into = "(i8, i8)")]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Mouse start cell
    pub const fn center() -> Self {
        Self::new(SIZE / 2, SIZE / 2)
    }

    /// Check if this cell is on the board
    pub fn is_inside(&self) -> bool {
        (0..SIZE).contains(&self.row) && (0..SIZE).contains(&self.col)
    }

    /// Check if this cell lies on the outer ring
    pub fn is_on_edge(&self) -> bool {
        self.row == 0 || self.col == 0 || self.row == SIZE - 1 || self.col == SIZE - 1
    }

    /// Steps along a row or column to the nearest edge
    pub fn distance_to_edge(&self) -> i8 {
        self.row
            .min(self.col)
            .min((SIZE - 1).saturating_sub(self.row))
            .min((SIZE - 1).saturating_sub(self.col))
    }

    /// Offset table for this cell's row parity
    pub fn offsets(&self) -> &'static [(i8, i8); 6] {
        if self.row % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        }
    }

    /// The on-board cell at the given offset, if any
    pub fn offset(self, dr: i8, dc: i8) -> Option<Cell> {
        let cell = Cell::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        cell.is_inside().then_some(cell)
    }

    /// In-bounds adjacent cells, in offset-table order (walls ignored)
    pub fn adjacent(self) -> impl Iterator<Item = Cell> {
        self.offsets()
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Every cell on the board, row-major
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Cell::new(row, col)))
    }
}

impl From<(i8, i8)> for Cell {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i8, i8) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Read-only view of a wall set.
///
/// This is all the AI strategies get to see of the board: they can ask
/// which cells are free and where the mouse could step, but cannot touch
/// the walls themselves.
#[derive(Clone, Copy, Debug)]
pub struct WallView<'a> {
    walls: &'a FxHashSet<Cell>,
}

impl<'a> WallView<'a> {
    pub fn new(walls: &'a FxHashSet<Cell>) -> Self {
        Self { walls }
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Inside the board and not a wall (mouse occupancy is not considered)
    pub fn is_free(&self, cell: Cell) -> bool {
        cell.is_inside() && !self.is_wall(cell)
    }

    /// Free adjacent cells, in offset-table order
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.adjacent().filter(|&n| !self.is_wall(n)).collect()
    }

    /// Walls inside the square index window of the given radius around `cell`
    pub fn walls_within(&self, cell: Cell, radius: i8) -> usize {
        let radius = radius.max(0);
        let mut count = 0;
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if cell.offset(dr, dc).is_some_and(|p| self.is_wall(p)) {
                    count += 1;
                }
            }
        }
        count
    }
}
