use std::collections::BinaryHeap;

use pathlab_core::{CellKind, Grid, Pos};

use crate::distance::manhattan;
use crate::neighbors::neighbors;
use crate::open::OpenEntry;
use crate::path::reconstruct_path;
use crate::result::SearchResult;

/// A* search from `start` to `end` with the Manhattan heuristic.
///
/// Best-first on `f = g + h`. Since the heuristic never overestimates and
/// is consistent for 4-directional unit moves, the first settlement of the
/// end cell carries an optimal path. A neighbour is relaxed only when the
/// tentative g-score strictly improves its distance; the improved entry is
/// re-pushed and any stale heap entry for the same cell is discarded at
/// extraction by the settled check.
pub fn astar(grid: &mut Grid, start: Pos, end: Pos) -> SearchResult {
    let mut visited_order = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq = 0u32;
    let mut nbuf = Vec::with_capacity(4);

    if let Some(cell) = grid.at_mut(start) {
        let h = manhattan(start, end);
        cell.distance = 0;
        cell.heuristic = Some(h);
        cell.f_score = Some(h);
        open.push(OpenEntry {
            key: h,
            seq,
            pos: start,
        });
    }

    while let Some(entry) = open.pop() {
        let cp = entry.pos;
        let Some(cell) = grid.at_mut(cp) else {
            continue;
        };
        if cell.visited || cell.kind == CellKind::Wall {
            continue;
        }
        cell.visited = true;
        let current_g = cell.distance;
        visited_order.push(cp);

        if cp == end {
            return SearchResult {
                path: reconstruct_path(grid, cp),
                visited: visited_order,
            };
        }

        nbuf.clear();
        neighbors(grid, cp, &mut nbuf);
        for &np in &nbuf {
            let Some(neighbor) = grid.at_mut(np) else {
                continue;
            };
            if neighbor.visited {
                continue;
            }
            let tentative_g = current_g + 1;
            if tentative_g < neighbor.distance {
                let h = manhattan(np, end);
                neighbor.previous = Some(cp);
                neighbor.distance = tentative_g;
                neighbor.heuristic = Some(h);
                neighbor.f_score = Some(tentative_g + h);
                seq += 1;
                open.push(OpenEntry {
                    key: tentative_g + h,
                    seq,
                    pos: np,
                });
            }
        }
    }

    SearchResult {
        visited: visited_order,
        path: Vec::new(),
    }
}
