//! **pathlab-replay** — turns a [`SearchResult`] into an animation schedule.
//!
//! The algorithms compute their full trace eagerly in one pass; animating
//! it is entirely the consumer's concern. This crate builds the schedule as
//! plain data: one [`ReplayFrame`] per visual update, visited cells first
//! (in settlement order) and then the path (start→end), each frame carrying
//! the delay to wait *before* applying it. A consumer aborts an animation
//! simply by dropping the remaining frames; the search itself is never
//! interrupted.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pathlab_core::{CellKind, Grid, Pos};
use pathlab_search::SearchResult;

/// Delay before each path frame, regardless of speed preset.
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(50);

/// Visited-frame pacing presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Delay before each visited frame.
    pub const fn step_delay(self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(50),
            Self::Medium => Duration::from_millis(20),
            Self::Fast => Duration::from_millis(5),
        }
    }

    /// The CLI/config name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "medium" => Ok(Self::Medium),
            "fast" => Ok(Self::Fast),
            other => Err(format!("unknown speed: {other}")),
        }
    }
}

/// What a frame paints onto its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrameChange {
    /// Mark the cell visited, with its 1-based settlement index.
    Visit { order: u32 },
    /// Mark the cell as part of the final path, with its 1-based index.
    Path { order: u32 },
}

/// One visual update: which cell, what change, and how long to wait first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayFrame {
    pub pos: Pos,
    pub delay: Duration,
    pub change: FrameChange,
}

/// Build the full animation schedule for a search result.
///
/// Visited frames come first, one per settled cell in settlement order,
/// paced by `speed`; path frames follow from start to end, paced by
/// [`PATH_STEP_DELAY`]. Orders are 1-based and consecutive within each
/// phase. An empty path simply contributes no frames.
pub fn schedule(result: &SearchResult, speed: Speed) -> Vec<ReplayFrame> {
    let mut frames = Vec::with_capacity(result.visited.len() + result.path.len());
    for (i, &pos) in result.visited.iter().enumerate() {
        frames.push(ReplayFrame {
            pos,
            delay: speed.step_delay(),
            change: FrameChange::Visit { order: i as u32 + 1 },
        });
    }
    for (i, &pos) in result.path.iter().enumerate() {
        frames.push(ReplayFrame {
            pos,
            delay: PATH_STEP_DELAY,
            change: FrameChange::Path { order: i as u32 + 1 },
        });
    }
    frames
}

/// Apply one frame to the grid.
///
/// The start and end cells are never repainted: frames targeting them are
/// dropped so the terminals stay visible throughout the animation. This is
/// the only place `visit_order`/`path_order` are assigned.
pub fn apply(frame: &ReplayFrame, grid: &mut Grid) {
    let Some(cell) = grid.at_mut(frame.pos) else {
        return;
    };
    if matches!(cell.kind, CellKind::Start | CellKind::End) {
        return;
    }
    match frame.change {
        FrameChange::Visit { order } => {
            cell.kind = CellKind::Visited;
            cell.visit_order = Some(order);
        }
        FrameChange::Path { order } => {
            cell.kind = CellKind::Path;
            cell.path_order = Some(order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::GridConfig;
    use pathlab_search::Algorithm;

    fn open_5x5() -> Grid {
        Grid::new(&GridConfig {
            rows: 5,
            cols: 5,
            start: Pos::new(0, 0),
            end: Pos::new(4, 4),
        })
        .unwrap()
    }

    fn demo_result() -> (Grid, SearchResult) {
        let mut grid = open_5x5();
        let result = Algorithm::Bfs.run(&mut grid).unwrap();
        (grid, result)
    }

    #[test]
    fn visited_frames_precede_path_frames() {
        let (_, result) = demo_result();
        let frames = schedule(&result, Speed::Medium);
        assert_eq!(frames.len(), result.visited.len() + result.path.len());
        let first_path = frames
            .iter()
            .position(|f| matches!(f.change, FrameChange::Path { .. }))
            .unwrap();
        assert_eq!(first_path, result.visited.len());
        assert!(frames[..first_path]
            .iter()
            .all(|f| matches!(f.change, FrameChange::Visit { .. })));
    }

    #[test]
    fn orders_are_one_based_and_consecutive() {
        let (_, result) = demo_result();
        let frames = schedule(&result, Speed::Fast);
        let visit_orders: Vec<u32> = frames
            .iter()
            .filter_map(|f| match f.change {
                FrameChange::Visit { order } => Some(order),
                _ => None,
            })
            .collect();
        let path_orders: Vec<u32> = frames
            .iter()
            .filter_map(|f| match f.change {
                FrameChange::Path { order } => Some(order),
                _ => None,
            })
            .collect();
        assert_eq!(visit_orders, (1..=result.visited.len() as u32).collect::<Vec<_>>());
        assert_eq!(path_orders, (1..=result.path.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn delays_follow_the_presets() {
        let (_, result) = demo_result();
        for speed in [Speed::Slow, Speed::Medium, Speed::Fast] {
            let frames = schedule(&result, speed);
            for f in &frames {
                match f.change {
                    FrameChange::Visit { .. } => assert_eq!(f.delay, speed.step_delay()),
                    FrameChange::Path { .. } => assert_eq!(f.delay, PATH_STEP_DELAY),
                }
            }
        }
    }

    #[test]
    fn apply_paints_cells_but_spares_terminals() {
        let (mut grid, result) = demo_result();
        for frame in schedule(&result, Speed::Medium) {
            apply(&frame, &mut grid);
        }
        assert_eq!(grid.at(Pos::new(0, 0)).unwrap().kind, CellKind::Start);
        assert_eq!(grid.at(Pos::new(4, 4)).unwrap().kind, CellKind::End);
        assert_eq!(grid.at(Pos::new(0, 0)).unwrap().visit_order, None);
        // Interior path cells are painted with their orders.
        let on_path = result.path[1];
        let cell = grid.at(on_path).unwrap();
        assert_eq!(cell.kind, CellKind::Path);
        assert_eq!(cell.path_order, Some(2));
    }

    #[test]
    fn no_path_means_no_path_frames() {
        let mut grid = open_5x5();
        grid.toggle_wall(Pos::new(3, 4));
        grid.toggle_wall(Pos::new(3, 3));
        grid.toggle_wall(Pos::new(4, 3));
        let result = Algorithm::Dijkstra.run(&mut grid).unwrap();
        let frames = schedule(&result, Speed::Medium);
        assert!(!frames.is_empty());
        assert!(frames
            .iter()
            .all(|f| matches!(f.change, FrameChange::Visit { .. })));
    }

    #[test]
    fn reset_clears_applied_annotations() {
        let (mut grid, result) = demo_result();
        for frame in schedule(&result, Speed::Medium) {
            apply(&frame, &mut grid);
        }
        grid.reset();
        for (_, cell) in grid.iter() {
            assert_eq!(cell.visit_order, None);
            assert_eq!(cell.path_order, None);
            assert!(!matches!(cell.kind, CellKind::Visited | CellKind::Path));
        }
    }

    #[test]
    fn speed_names_round_trip() {
        for speed in [Speed::Slow, Speed::Medium, Speed::Fast] {
            assert_eq!(speed.name().parse::<Speed>().unwrap(), speed);
        }
        assert!("warp".parse::<Speed>().is_err());
    }
}
