use pathlab_core::{Grid, Pos};

/// Reconstruct the start→end path by walking `previous` links back from
/// `end`.
///
/// Follows back-links until a cell without one (the start), then reverses.
/// If `end` was never reached the result is just `[end]`; "no path" is
/// signalled by the *algorithm* returning an empty path, not by this
/// function.
pub fn reconstruct_path(grid: &Grid, end: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(p) = cur {
        path.push(p);
        cur = grid.at(p).and_then(|c| c.previous);
    }
    path.reverse();
    path
}
