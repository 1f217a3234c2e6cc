//! Grid positions.

use std::fmt;

/// A 2D integer grid position. Rows grow downward, columns grow rightward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in up, down, left, right order.
    ///
    /// The order is part of the search contract: algorithms that expand
    /// neighbours without re-ranking break ties by it.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_4_order() {
        let p = Pos::new(3, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Pos::new(2, 5), // up
                Pos::new(4, 5), // down
                Pos::new(3, 4), // left
                Pos::new(3, 6), // right
            ]
        );
    }

    #[test]
    fn shift() {
        let p = Pos::new(1, 2);
        assert_eq!(p.shift(-1, 3), Pos::new(0, 5));
    }

    #[test]
    fn row_major_ordering() {
        let mut ps = vec![Pos::new(1, 0), Pos::new(0, 9), Pos::new(0, 0)];
        ps.sort();
        assert_eq!(ps, vec![Pos::new(0, 0), Pos::new(0, 9), Pos::new(1, 0)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_round_trip() {
        let p = Pos::new(7, 42);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
