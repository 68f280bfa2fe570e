//! Connectivity oracle: decides whether two tiles can be joined by a path of
//! at most three straight segments.
//!
//! The board is conceptually padded by one empty cell on every side so paths
//! may leave the grid and run along its outer edge. The search runs over
//! `(cell, direction)` states; moving straight costs nothing, changing
//! direction costs one turn. A 0-1 BFS (zero-cost steps pushed to the front of
//! the deque) pops states in non-decreasing turn order, and a state is only
//! re-queued when reached with strictly fewer turns.
use crate::engine::{Board, Position};
use crate::error::EngineError;
use std::collections::VecDeque;

/// Maximum number of direction changes in a legal connecting path.
pub const MAX_TURNS: u8 = 2;

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const UNVISITED: u8 = u8::MAX;

#[derive(Clone, Copy, Debug)]
struct State {
    row: usize,
    col: usize,
    dir: usize,
    turns: u8,
}

impl Board {
    /// Returns whether the tiles at `a` and `b` form a legal pair.
    ///
    /// `false` when `a == b`, when either cell is empty, or when the values
    /// differ; no search is performed in those cases.
    ///
    /// # Errors
    /// `EngineError::OutOfBounds` if either position is off the board.
    ///
    /// # Examples
    /// ```
    /// use shisen_solver::engine::Position;
    /// use shisen_solver::utils::board_from_str_array;
    ///
    /// let board = board_from_str_array(&["A.", ".A"]).unwrap();
    /// assert!(board.can_connect(Position::new(0, 0), Position::new(1, 1)).unwrap());
    /// assert!(board.can_connect(Position::new(0, 0), Position::new(5, 5)).is_err());
    /// ```
    pub fn can_connect(&self, a: Position, b: Position) -> Result<bool, EngineError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Ok(connects(self, a, b))
    }
}

/// Unchecked core of `Board::can_connect`; both positions must be on the board.
pub(crate) fn connects(board: &Board, a: Position, b: Position) -> bool {
    if a == b {
        return false;
    }
    let value = board.get_tile(a);
    if value.is_empty() || value != board.get_tile(b) {
        return false;
    }

    let rows = board.rows() + 2;
    let cols = board.cols() + 2;
    let start = (a.row + 1, a.col + 1);
    let end = (b.row + 1, b.col + 1);

    let mut blocked = vec![false; rows * cols];
    for (pos, _) in board.occupied() {
        blocked[(pos.row + 1) * cols + pos.col + 1] = true;
    }
    // The two endpoints hold the tiles under test and must stay traversable.
    blocked[start.0 * cols + start.1] = false;
    blocked[end.0 * cols + end.1] = false;

    // Fewest turns seen per (cell, direction).
    let mut best = vec![UNVISITED; rows * cols * DIRECTIONS.len()];
    let mut queue = VecDeque::new();

    for (dir, &delta) in DIRECTIONS.iter().enumerate() {
        let Some((row, col)) = step(start, delta, rows, cols) else {
            continue;
        };
        let cell = row * cols + col;
        if blocked[cell] {
            continue;
        }
        best[cell * DIRECTIONS.len() + dir] = 0;
        queue.push_back(State {
            row,
            col,
            dir,
            turns: 0,
        });
    }

    while let Some(current) = queue.pop_front() {
        let cell = current.row * cols + current.col;
        if best[cell * DIRECTIONS.len() + current.dir] < current.turns {
            continue; // superseded by a cheaper visit
        }
        if (current.row, current.col) == end {
            return true;
        }

        for (dir, &delta) in DIRECTIONS.iter().enumerate() {
            let turns = current.turns + u8::from(dir != current.dir);
            if turns > MAX_TURNS {
                continue;
            }
            let Some((row, col)) = step((current.row, current.col), delta, rows, cols) else {
                continue;
            };
            let next = row * cols + col;
            if blocked[next] || best[next * DIRECTIONS.len() + dir] <= turns {
                continue;
            }

            best[next * DIRECTIONS.len() + dir] = turns;
            let state = State {
                row,
                col,
                dir,
                turns,
            };
            if turns == current.turns {
                queue.push_front(state);
            } else {
                queue.push_back(state);
            }
        }
    }

    false
}

fn step(
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_adjacent_pair_connects() {
        let board = board_from_str_array(&["AA", ".."]).unwrap();
        assert!(board.can_connect(p(0, 0), p(0, 1)).unwrap());

        let board = board_from_str_array(&["C.", "C."]).unwrap();
        assert!(board.can_connect(p(0, 0), p(1, 0)).unwrap());
    }

    #[test]
    fn test_diagonal_pair_connects_with_one_turn() {
        let board = board_from_str_array(&["A.", ".A"]).unwrap();
        assert!(board.can_connect(p(0, 0), p(1, 1)).unwrap());
    }

    #[test]
    fn test_diagonal_pair_with_both_corners_blocked() {
        // Every route around the blockers needs three turns.
        let board = board_from_str_array(&["AB", "BA"]).unwrap();
        assert!(!board.can_connect(p(0, 0), p(1, 1)).unwrap());
        assert!(!board.can_connect(p(0, 1), p(1, 0)).unwrap());
    }

    #[test]
    fn test_path_along_outer_edge() {
        // The A's are separated by B; the route goes up, across the border row and down.
        let board = board_from_str_array(&["ABA", "CBC"]).unwrap();
        assert!(board.can_connect(p(0, 0), p(0, 2)).unwrap());
        // Same along the bottom border.
        assert!(board.can_connect(p(1, 0), p(1, 2)).unwrap());
    }

    #[test]
    fn test_path_down_the_left_edge() {
        // C blocks the direct route; go left, down the border column, then right.
        let board = board_from_str_array(&["A.B", "CCB", "A.."]).unwrap();
        assert!(board.can_connect(p(0, 0), p(2, 0)).unwrap());
    }

    #[test]
    fn test_z_shape_with_exactly_two_turns() {
        // Right along row 0, down column 2, right into (2,3).
        let board = board_from_str_array(&["A...", "BB.C", "DD.A", "CEE."]).unwrap();
        assert!(board.can_connect(p(0, 0), p(2, 3)).unwrap());

        // With row 0 blocked at column 2 every remaining route needs three turns.
        let board = board_from_str_array(&["A.FF", "BB.C", "DD.A", "CEE."]).unwrap();
        assert!(!board.can_connect(p(0, 0), p(2, 3)).unwrap());
    }

    #[test]
    fn test_enclosed_tiles_do_not_connect() {
        let board = board_from_str_array(&["BCDEFG", "HAIIAH", "BCDEFG"]).unwrap();
        assert!(!board.can_connect(p(1, 1), p(1, 4)).unwrap());
        // Going around the whole board would take three turns.
        assert!(!board.can_connect(p(1, 0), p(1, 5)).unwrap());
        assert!(board.can_connect(p(1, 2), p(1, 3)).unwrap());
    }

    #[test]
    fn test_removed_tiles_open_new_paths() {
        let board = board_from_str_array(&["BCDEFG", "HAIIAH", "BCDEFG"]).unwrap();
        let opened = board.remove_pair(p(1, 2), p(1, 3)).unwrap();
        assert!(opened.can_connect(p(1, 1), p(1, 4)).unwrap());
    }

    #[test]
    fn test_same_position_empty_and_mismatched() {
        let board = board_from_str_array(&["AB", "BA"]).unwrap();
        assert!(!board.can_connect(p(0, 0), p(0, 0)).unwrap());
        assert!(!board.can_connect(p(0, 0), p(0, 1)).unwrap());

        let board = board_from_str_array(&["A.", "A."]).unwrap();
        assert!(!board.can_connect(p(0, 1), p(1, 1)).unwrap());
        assert!(!board.can_connect(p(0, 0), p(0, 1)).unwrap());
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let board = board_from_str_array(&["AA"]).unwrap();
        let err = board.can_connect(p(0, 0), p(0, 2)).unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                row: 0,
                col: 2,
                rows: 1,
                cols: 2
            }
        );
        assert!(board.can_connect(p(1, 0), p(0, 0)).is_err());
    }

    #[test]
    fn test_can_connect_is_symmetric() {
        for seed in 0..8 {
            let board = Board::generate_with_seed(4, 6, seed).unwrap();
            // Remove one interior pair so some inner paths exist.
            let hole = p(1, 1);
            let partner = board
                .positions()
                .find(|&q| q != hole && board.get_tile(q) == board.get_tile(hole))
                .unwrap();
            let board = board.remove_pair(hole, partner).unwrap();

            let positions: Vec<Position> = board.positions().collect();
            for &x in &positions {
                for &y in &positions {
                    assert_eq!(
                        board.can_connect(x, y).unwrap(),
                        board.can_connect(y, x).unwrap(),
                        "asymmetric result for {} and {} on seed {}",
                        x,
                        y,
                        seed
                    );
                }
                assert!(!board.can_connect(x, x).unwrap());
            }
        }
    }
}
