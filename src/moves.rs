//! Move discovery.
//!
//! Occupied cells are grouped by symbol and every unordered pair inside a group
//! is tested with the connectivity oracle. `find_all_moves` orders its result by
//! weight (how many tiles of that symbol remain), so the solver explores rare,
//! quickly exhausted symbols before large groups with many interchangeable pairs.
use crate::connect::connects;
use crate::engine::{Board, Position, Symbol};
use std::collections::HashMap;
use std::fmt;

/// An unordered pair of distinct positions holding equal tiles that can be connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub first: Position,
    pub second: Position,
}

impl Move {
    pub const fn new(first: Position, second: Position) -> Self {
        Move { first, second }
    }

    pub fn positions(&self) -> [Position; 2] {
        [self.first, self.second]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

impl Board {
    /// Returns the first legal move found, or `None` if the board is stuck or cleared.
    ///
    /// # Examples
    /// ```
    /// use shisen_solver::engine::Position;
    /// use shisen_solver::utils::board_from_str_array;
    ///
    /// let board = board_from_str_array(&["C.", "C."]).unwrap();
    /// let mv = board.find_any_move().unwrap();
    /// assert_eq!(mv.positions(), [Position::new(0, 0), Position::new(1, 0)]);
    /// ```
    pub fn find_any_move(&self) -> Option<Move> {
        for group in group_by_symbol(self) {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    if connects(self, a, b) {
                        return Some(Move::new(a, b));
                    }
                }
            }
        }
        None
    }

    /// Returns every legal move paired with its weight, sorted ascending by weight.
    ///
    /// The sort is stable, so moves of equal weight keep row-major discovery order.
    pub fn find_all_moves(&self) -> Vec<(Move, usize)> {
        let mut moves = Vec::new();
        for group in group_by_symbol(self) {
            let weight = group.len();
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    if connects(self, a, b) {
                        moves.push((Move::new(a, b), weight));
                    }
                }
            }
        }
        moves.sort_by_key(|&(_, weight)| weight);
        moves
    }
}

/// Positions of each symbol with at least two tiles, in order of first appearance.
fn group_by_symbol(board: &Board) -> Vec<Vec<Position>> {
    let mut slots: HashMap<Symbol, usize> = HashMap::new();
    let mut groups: Vec<Vec<Position>> = Vec::new();

    for (pos, symbol) in board.occupied() {
        let slot = *slots.entry(symbol).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(pos);
    }

    groups.retain(|group| group.len() >= 2);
    groups
}
