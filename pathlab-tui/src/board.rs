//! The demo board: the standard 20×50 grid with a fixed wall layout.

use pathlab_core::{Grid, GridConfig, Pos};

/// Two full-height wall bars between start and end, each with a single gap
/// on opposite sides of the board, so every algorithm has to weave rather
/// than walk a straight line.
const WALLS: &[(i32, i32, i32, i32)] = &[
    // (col, from_row, to_row, gap_row)
    (20, 0, 19, 15),
    (30, 0, 19, 5),
];

/// Build the demo board. `None` only if the layout constants are broken.
pub fn demo_board() -> Option<Grid> {
    let mut grid = Grid::new(&GridConfig::default())?;
    for &(col, from_row, to_row, gap_row) in WALLS {
        for row in from_row..=to_row {
            if row != gap_row {
                grid.toggle_wall(Pos::new(row, col));
            }
        }
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_search::Algorithm;

    #[test]
    fn board_is_valid() {
        let grid = demo_board().unwrap();
        assert_eq!(grid.start(), Some(Pos::new(10, 10)));
        assert_eq!(grid.end(), Some(Pos::new(10, 40)));
    }

    #[test]
    fn every_algorithm_finds_a_way_through() {
        for algo in Algorithm::ALL {
            let mut grid = demo_board().unwrap();
            let result = algo.run(&mut grid).unwrap();
            assert!(result.found(), "{algo} found no path on the demo board");
            assert!(result.path.contains(&Pos::new(15, 20)), "{algo} missed gap 1");
            assert!(result.path.contains(&Pos::new(5, 30)), "{algo} missed gap 2");
        }
    }
}
