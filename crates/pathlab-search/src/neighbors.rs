use pathlab_core::{CellKind, Grid, Pos};

/// Append the traversable orthogonal neighbours of `p` into `buf`, in
/// up, down, left, right order, skipping walls and out-of-bounds positions.
///
/// The caller clears `buf` before calling; algorithms reuse one buffer
/// across expansions. The fixed order is a contract: it is the tie-breaker
/// for every strategy that expands neighbours without re-ranking them.
pub fn neighbors(grid: &Grid, p: Pos, buf: &mut Vec<Pos>) {
    for n in p.neighbors_4() {
        match grid.at(n) {
            Some(cell) if cell.kind != CellKind::Wall => buf.push(n),
            _ => {}
        }
    }
}
