//! The [`Grid`] type — an owned rectangular board of [`Cell`]s.
//!
//! Storage is a flat row-major `Vec<Cell>`; coordinates live in the index
//! mapping, not in the cells, so a cell's position always matches its slot.
//! A search exclusively borrows the grid (`&mut Grid`) for its whole run
//! and reports results as coordinates rather than aliases into the board.

use crate::cell::{Cell, CellKind};
use crate::pos::Pos;

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Board dimensions and the designated start/end positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub end: Pos,
}

impl Default for GridConfig {
    /// The standard 20×50 board with start at (10, 10) and end at (10, 40).
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Pos::new(10, 10),
            end: Pos::new(10, 40),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular board of [`Cell`]s with exactly one start and one end.
///
/// Walls and the start/end placement persist across search runs; everything
/// else is search-scoped and wiped by [`reset`](Grid::reset).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Build a fresh board from `config`: every cell `Unvisited` except the
    /// designated start and end, all search state pristine.
    ///
    /// Returns `None` when the config is malformed: non-positive
    /// dimensions, start or end out of bounds, or start == end.
    pub fn new(config: &GridConfig) -> Option<Self> {
        if config.rows <= 0 || config.cols <= 0 {
            return None;
        }
        let mut grid = Self {
            cells: vec![Cell::default(); (config.rows * config.cols) as usize],
            rows: config.rows,
            cols: config.cols,
        };
        if !grid.contains(config.start)
            || !grid.contains(config.end)
            || config.start == config.end
        {
            return None;
        }
        grid.at_mut(config.start)?.kind = CellKind::Start;
        grid.at_mut(config.end)?.kind = CellKind::End;
        Some(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `p` lies within the board.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Convert a position to a flat index. `None` if out of bounds.
    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        if self.contains(p) {
            Some((p.row * self.cols + p.col) as usize)
        } else {
            None
        }
    }

    /// Convert a flat index back to a position.
    #[inline]
    fn pos(&self, idx: usize) -> Pos {
        Pos::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Pos) -> Option<&mut Cell> {
        let i = self.idx(p)?;
        Some(&mut self.cells[i])
    }

    /// Row-major iterator over every position on the board.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Pos::new(i / cols, i % cols))
    }

    /// Row-major iterator over `(Pos, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (self.pos(i), c))
    }

    /// Locate the unique cell of the given kind.
    fn find(&self, kind: CellKind) -> Option<Pos> {
        self.iter().find(|(_, c)| c.kind == kind).map(|(p, _)| p)
    }

    /// Position of the start cell.
    pub fn start(&self) -> Option<Pos> {
        self.find(CellKind::Start)
    }

    /// Position of the end cell.
    pub fn end(&self) -> Option<Pos> {
        self.find(CellKind::End)
    }

    /// Wipe all search-scoped state: distances, visited flags, back-links,
    /// heuristics and replay orders, demoting `Visited`/`Path`/`Current`
    /// cells back to `Unvisited`. Walls and start/end stay put. Idempotent.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
        }
    }

    // -----------------------------------------------------------------------
    // Editing operations
    // -----------------------------------------------------------------------

    /// Flip a cell between `Wall` and `Unvisited`. Start and end cells are
    /// left alone, as is anything out of bounds.
    pub fn toggle_wall(&mut self, p: Pos) {
        let Some(cell) = self.at_mut(p) else {
            return;
        };
        match cell.kind {
            CellKind::Start | CellKind::End => {}
            CellKind::Wall => cell.kind = CellKind::Unvisited,
            _ => cell.kind = CellKind::Wall,
        }
    }

    /// Relocate the start cell to `to`. No-op when `to` is out of bounds, a
    /// wall, or the end cell, so the board always keeps exactly one start.
    pub fn move_start(&mut self, to: Pos) {
        self.move_terminal(CellKind::Start, to);
    }

    /// Relocate the end cell to `to`. Same rules as [`move_start`](Grid::move_start).
    pub fn move_end(&mut self, to: Pos) {
        self.move_terminal(CellKind::End, to);
    }

    fn move_terminal(&mut self, kind: CellKind, to: Pos) {
        let Some(target) = self.at(to) else {
            return;
        };
        match target.kind {
            CellKind::Wall => return,
            k if k.is_persistent() && k != kind => return,
            k if k == kind => return,
            _ => {}
        }
        if let Some(old) = self.find(kind) {
            if let Some(cell) = self.at_mut(old) {
                cell.kind = CellKind::Unvisited;
            }
        }
        if let Some(cell) = self.at_mut(to) {
            cell.kind = kind;
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut grid = Grid::new(&GridConfig {
            rows: 3,
            cols: 4,
            start: Pos::new(0, 0),
            end: Pos::new(2, 3),
        })
        .unwrap();
        grid.toggle_wall(Pos::new(1, 1));
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
