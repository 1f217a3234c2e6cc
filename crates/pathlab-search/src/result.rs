use std::fmt;
use std::str::FromStr;

use pathlab_core::{Grid, Pos};

use crate::{astar, bfs, dijkstra, greedy};

/// Outcome of a search run.
///
/// `visited` is the settlement trace in order, the contract the replay
/// layer depends on. `path` is the reconstructed start→end path inclusive,
/// or empty when no path exists; consumers check `path`, not `visited`,
/// to distinguish the no-path case.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited: Vec<Pos>,
    pub path: Vec<Pos>,
}

impl SearchResult {
    /// Whether a path to the end was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of unit steps along the path (cells minus one), 0 if none.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A grid without a designated start or end cell cannot be searched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    MissingStart,
    MissingEnd,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no start cell on the grid"),
            Self::MissingEnd => write!(f, "no end cell on the grid"),
        }
    }
}

impl std::error::Error for SearchError {}

/// The four search strategies, selectable by name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    #[default]
    AStar,
    Greedy,
}

impl Algorithm {
    /// All strategies, in presentation order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dijkstra, Self::AStar, Self::Greedy];

    /// The CLI/config name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::Greedy => "greedy",
        }
    }

    /// Whether the strategy guarantees a shortest path on unit-cost grids.
    pub const fn optimal(self) -> bool {
        !matches!(self, Self::Greedy)
    }

    /// Locate the grid's start and end cells and run the strategy.
    ///
    /// Fails fast with a [`SearchError`] when either distinguished cell is
    /// missing; the caller surfaces that as a validation error before any
    /// search work happens.
    pub fn run(self, grid: &mut Grid) -> Result<SearchResult, SearchError> {
        let start = grid.start().ok_or(SearchError::MissingStart)?;
        let end = grid.end().ok_or(SearchError::MissingEnd)?;
        Ok(match self {
            Self::Bfs => bfs(grid, start, end),
            Self::Dijkstra => dijkstra(grid, start, end),
            Self::AStar => astar(grid, start, end),
            Self::Greedy => greedy(grid, start, end),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            "greedy" => Ok(Self::Greedy),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_renames_to_lowercase() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, "\"astar\"");
    }

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            visited: vec![Pos::new(0, 0), Pos::new(0, 1)],
            path: vec![Pos::new(0, 0), Pos::new(0, 1)],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
