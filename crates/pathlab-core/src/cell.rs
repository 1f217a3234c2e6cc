//! The [`Cell`] type — one grid position's classification and search state.

use crate::pos::Pos;

/// Sentinel distance meaning "not reached from the start".
pub const UNREACHABLE: u32 = u32::MAX;

/// Mutually exclusive cell classification.
///
/// A grid holds at most one `Start` and one `End`. `Visited`, `Path` and
/// `Current` are presentation states written during replay and demoted back
/// to `Unvisited` by [`Grid::reset`](crate::Grid::reset).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    Start,
    End,
    Wall,
    #[default]
    Unvisited,
    Visited,
    Path,
    Current,
}

impl CellKind {
    /// Whether this kind survives a grid reset.
    #[inline]
    pub const fn is_persistent(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Wall)
    }
}

/// One grid cell: its kind plus per-search bookkeeping.
///
/// `distance`, `visited`, `previous`, `heuristic` and `f_score` belong to
/// the algorithms; `visit_order` and `path_order` belong to the replay
/// layer. All of them are transient and cleared by a reset; only the kind
/// (and only its persistent variants) carries over between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    /// Cost from the start cell, [`UNREACHABLE`] until relaxed.
    pub distance: u32,
    /// True once a search has settled this cell.
    pub visited: bool,
    /// Back-link toward the start, as a coordinate into the grid.
    pub previous: Option<Pos>,
    /// Heuristic estimate to the end (A* and Greedy only).
    pub heuristic: Option<u32>,
    /// `distance + heuristic` (A* only).
    pub f_score: Option<u32>,
    /// 1-based settlement index, assigned during replay.
    pub visit_order: Option<u32>,
    /// 1-based path index, assigned during replay.
    pub path_order: Option<u32>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellKind::Unvisited)
    }
}

impl Cell {
    /// A fresh cell of the given kind with pristine search state.
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            distance: UNREACHABLE,
            visited: false,
            previous: None,
            heuristic: None,
            f_score: None,
            visit_order: None,
            path_order: None,
        }
    }

    /// Clear all transient search and replay state, demoting a
    /// non-persistent kind back to `Unvisited`.
    pub fn clear_search_state(&mut self) {
        if !self.kind.is_persistent() {
            self.kind = CellKind::Unvisited;
        }
        self.distance = UNREACHABLE;
        self.visited = false;
        self.previous = None;
        self.heuristic = None;
        self.f_score = None;
        self.visit_order = None;
        self.path_order = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_state() {
        let c = Cell::new(CellKind::Wall);
        assert_eq!(c.kind, CellKind::Wall);
        assert_eq!(c.distance, UNREACHABLE);
        assert!(!c.visited);
        assert_eq!(c.previous, None);
    }

    #[test]
    fn clear_demotes_presentation_kinds() {
        for kind in [CellKind::Visited, CellKind::Path, CellKind::Current] {
            let mut c = Cell::new(kind);
            c.clear_search_state();
            assert_eq!(c.kind, CellKind::Unvisited);
        }
    }

    #[test]
    fn clear_preserves_persistent_kinds() {
        for kind in [CellKind::Start, CellKind::End, CellKind::Wall] {
            let mut c = Cell::new(kind);
            c.distance = 3;
            c.visited = true;
            c.previous = Some(Pos::new(0, 0));
            c.visit_order = Some(17);
            c.clear_search_state();
            assert_eq!(c.kind, kind);
            assert_eq!(c.distance, UNREACHABLE);
            assert!(!c.visited);
            assert_eq!(c.previous, None);
            assert_eq!(c.visit_order, None);
        }
    }
}
