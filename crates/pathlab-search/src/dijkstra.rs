use pathlab_core::{CellKind, Grid, Pos, UNREACHABLE};

use crate::neighbors::neighbors;
use crate::path::reconstruct_path;
use crate::result::SearchResult;

/// Dijkstra's algorithm from `start` to `end`.
///
/// Selection scans the *entire* remaining node set: the unvisited list is
/// stably re-sorted by distance every iteration and the front element
/// removed, so cells at equal distance settle in list order (initially
/// row-major). O(V² log V), which is the intended trade-off at board scale.
///
/// Relaxation is unconditional: every still-unvisited neighbour of the
/// settled cell has its `distance` and `previous` overwritten, with no
/// improvement check. A neighbour rediscovered from a later parent keeps
/// the later back-link. See DESIGN.md for why this is kept as-is.
pub fn dijkstra(grid: &mut Grid, start: Pos, end: Pos) -> SearchResult {
    let mut visited_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    if let Some(cell) = grid.at_mut(start) {
        cell.distance = 0;
    }
    let mut unvisited: Vec<Pos> = grid.positions().collect();

    while !unvisited.is_empty() {
        unvisited.sort_by_key(|&p| grid.at(p).map_or(UNREACHABLE, |c| c.distance));
        let cp = unvisited.remove(0);
        let Some(cell) = grid.at_mut(cp) else {
            continue;
        };
        if cell.kind == CellKind::Wall {
            continue;
        }
        if cell.distance == UNREACHABLE {
            // Nothing left in the frontier; the rest is unreachable.
            return SearchResult {
                visited: visited_order,
                path: Vec::new(),
            };
        }
        if cell.visited {
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
        }
    }

    SearchResult {
        visited: visited_order,
        path: Vec::new(),
    }
}
