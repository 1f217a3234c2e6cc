use pathlab_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-directional unit-cost movement, which is
/// what makes [`astar`](crate::astar) optimal.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
