use std::collections::BinaryHeap;

use pathlab_core::{CellKind, Grid, Pos};

use crate::distance::manhattan;
use crate::neighbors::neighbors;
use crate::open::OpenEntry;
use crate::path::reconstruct_path;
use crate::result::SearchResult;

/// Greedy best-first search from `start` to `end`.
///
/// Ranks the open set purely by the heuristic, never consulting the
/// accumulated distance, so it homes in on the end fast but offers no
/// shortest-path guarantee. Each cell enters the open set at most once,
/// the first time it is discovered, and is never re-relaxed afterwards;
/// the `heuristic` field doubles as the discovery marker. `distance` is
/// still tracked for bookkeeping.
pub fn greedy(grid: &mut Grid, start: Pos, end: Pos) -> SearchResult {
    let mut visited_order = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq = 0u32;
    let mut nbuf = Vec::with_capacity(4);

    if let Some(cell) = grid.at_mut(start) {
        let h = manhattan(start, end);
        cell.distance = 0;
        cell.heuristic = Some(h);
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
            if neighbor.visited || neighbor.heuristic.is_some() {
                continue;
            }
            let h = manhattan(np, end);
            neighbor.distance = current_distance + 1;
            neighbor.previous = Some(cp);
            neighbor.heuristic = Some(h);
            seq += 1;
            open.push(OpenEntry {
                key: h,
                seq,
                pos: np,
            });
        }
    }

    SearchResult {
        visited: visited_order,
        path: Vec::new(),
    }
}
