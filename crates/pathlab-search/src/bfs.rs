use std::collections::VecDeque;

use pathlab_core::{CellKind, Grid, Pos};

use crate::neighbors::neighbors;
use crate::path::reconstruct_path;
use crate::result::SearchResult;

/// Breadth-first search from `start` to `end`.
///
/// FIFO expansion over unit-cost edges guarantees the shortest path: cells
/// are settled level by level, so the first time the end is settled its
/// distance is the true graph distance. A cell may sit in the queue more
/// than once when reached through different parents; the first dequeue
/// settles it and later duplicates are skipped.
pub fn bfs(grid: &mut Grid, start: Pos, end: Pos) -> SearchResult {
    let mut visited_order = Vec::new();
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    if let Some(cell) = grid.at_mut(start) {
        cell.distance = 0;
        queue.push_back(start);
    }

    while let Some(cp) = queue.pop_front() {
        let Some(cell) = grid.at_mut(cp) else {
            continue;
        };
        if cell.visited || cell.kind == CellKind::Wall {
            continue;
        }
        cell.visited = true;
        let current_distance = cell.distance;
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
            neighbor.distance = current_distance + 1;
            neighbor.previous = Some(cp);
            queue.push_back(np);
        }
    }

    SearchResult {
        visited: visited_order,
        path: Vec::new(),
    }
}
