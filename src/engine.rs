//! Core board model for the Shisen-Sho engine.
//!
//! This module defines the game's fundamental components:
//! - `CATALOG` and `Symbol`: the fixed, ordered set of tile faces.
//! - `Tile`: a cell value, either empty or a symbol face.
//! - `Position`: a 0-indexed (row, col) coordinate.
//! - `Board`: a rectangular grid of tiles with the generator and the pure
//!   mutators (`remove_pair`, `is_cleared`, `shuffle_remaining`).
//!
//! Path finding lives in `connect`, move discovery in `moves`.
use crate::error::EngineError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The ordered symbol catalog. Generation always draws from the front.
pub const CATALOG: [&str; 40] = [
    "white-dragon",
    "green-dragon",
    "red-dragon",
    "east-wind",
    "south-wind",
    "west-wind",
    "north-wind",
    "characters-1",
    "characters-2",
    "characters-3",
    "characters-4",
    "characters-5",
    "characters-6",
    "characters-7",
    "characters-8",
    "characters-9",
    "circles-1",
    "circles-2",
    "circles-3",
    "circles-4",
    "circles-5",
    "circles-6",
    "circles-7",
    "circles-8",
    "circles-9",
    "bamboos-1",
    "bamboos-2",
    "bamboos-3",
    "bamboos-4",
    "bamboos-5",
    "bamboos-6",
    "bamboos-7",
    "bamboos-8",
    "bamboos-9",
    "spring",
    "summer",
    "autumn",
    "winter",
    "plum",
    "orchid",
];

// One display character per catalog entry, same order.
const SYMBOL_CHARS: &[u8; 40] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmn";

/// Character used for empty cells in text boards and canonical keys.
pub const EMPTY_CHAR: char = '.';

/// A tile face, stored as its index into `CATALOG`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Returns the symbol at `index` in the catalog, or `None` past its end.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CATALOG.len()).then(|| Symbol(index as u8))
    }

    /// Parses a display character back into a symbol.
    ///
    /// ```
    /// use shisen_solver::engine::Symbol;
    /// assert_eq!(Symbol::from_char('A'), Symbol::from_index(0));
    /// assert_eq!(Symbol::from_char('n'), Symbol::from_index(39));
    /// assert_eq!(Symbol::from_char('.'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        SYMBOL_CHARS
            .iter()
            .position(|&b| b as char == ch)
            .map(|i| Symbol(i as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The catalog name of this symbol, e.g. `"white-dragon"`.
    pub fn name(self) -> &'static str {
        CATALOG[self.index()]
    }

    pub fn to_char(self) -> char {
        SYMBOL_CHARS[self.index()] as char
    }
}

/// The value held by a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Face(Symbol),
}

impl Tile {
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Tile::Empty => None,
            Tile::Face(symbol) => Some(symbol),
        }
    }

    /// Converts the tile to its character representation.
    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => EMPTY_CHAR,
            Tile::Face(symbol) => symbol.to_char(),
        }
    }
}

/// A 0-indexed board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of tiles, stored row-major.
///
/// Every engine operation treats a `Board` as a value: mutators return a new
/// board and leave the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Creates a board of the given size with every cell empty.
    ///
    /// # Errors
    /// `EngineError::InvalidDimensions` if either dimension is zero.
    pub fn new_empty(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let total = checked_area(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Tile::Empty; total],
        })
    }

    /// Builds a board from explicit rows. All rows must share the first row's length.
    ///
    /// # Errors
    /// `EngineError::InvalidDimensions` for an empty grid or ragged rows.
    pub fn from_rows(grid: Vec<Vec<Tile>>) -> Result<Self, EngineError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        checked_area(rows, cols)?;
        if grid.iter().any(|row| row.len() != cols) {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: grid.into_iter().flatten().collect(),
        })
    }

    /// Produces a randomized board of paired tiles.
    ///
    /// The first `rows * cols / 2` catalog symbols are each placed twice and the
    /// deck is shuffled with an unbiased Fisher-Yates permutation before being
    /// laid out row-major. No solvability guarantee is made here; see
    /// `solver::generate_playable`.
    ///
    /// # Errors
    /// * `EngineError::InvalidDimensions` if a dimension is zero or the cell count is odd.
    /// * `EngineError::InsufficientSymbols` if the board needs more pairs than the catalog holds.
    ///
    /// # Examples
    /// ```
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use shisen_solver::engine::Board;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let board = Board::generate(4, 5, &mut rng).unwrap();
    /// assert_eq!(board.remaining_tiles(), 20);
    /// assert!(Board::generate(3, 3, &mut rng).is_err());
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let total = checked_area(rows, cols)?;
        if total % 2 != 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }

        let needed = total / 2;
        if needed > CATALOG.len() {
            return Err(EngineError::InsufficientSymbols {
                needed,
                available: CATALOG.len(),
            });
        }

        let mut deck: Vec<Tile> = (0..needed)
            .flat_map(|i| {
                let tile = Tile::Face(Symbol(i as u8));
                [tile, tile]
            })
            .collect();
        deck.shuffle(rng);

        Ok(Board {
            rows,
            cols,
            cells: deck,
        })
    }

    /// Same as `generate`, seeded from `seed` for reproducible boards.
    pub fn generate_with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, EngineError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(rows, cols, &mut rng)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns `Ok(())` if `pos` lies on the board, `EngineError::OutOfBounds` otherwise.
    pub fn check_bounds(&self, pos: Position) -> Result<(), EngineError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the tile at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn get_tile(&self, pos: Position) -> Tile {
        assert!(self.in_bounds(pos), "position {} outside board", pos);
        self.cells[pos.row * self.cols + pos.col]
    }

    /// Returns the tile at `pos`, or `None` if it is off the board.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.in_bounds(pos)
            .then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// Sets the tile at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        assert!(self.in_bounds(pos), "position {} outside board", pos);
        self.cells[pos.row * self.cols + pos.col] = tile;
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter_map(|(pos, tile)| tile.symbol().map(|symbol| (pos, symbol)))
    }

    /// Number of non-empty cells.
    pub fn remaining_tiles(&self) -> usize {
        self.cells.iter().filter(|tile| !tile.is_empty()).count()
    }

    /// Returns a new board with both positions emptied.
    ///
    /// Legality is not checked here; callers validate the pair with `can_connect` first.
    ///
    /// # Errors
    /// `EngineError::OutOfBounds` if either position is off the board.
    pub fn remove_pair(&self, a: Position, b: Position) -> Result<Board, EngineError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Ok(self.without_pair(a, b))
    }

    /// Unchecked `remove_pair` for positions already known to be on the board.
    pub(crate) fn without_pair(&self, a: Position, b: Position) -> Board {
        let mut next = self.clone();
        next.set_tile(a, Tile::Empty);
        next.set_tile(b, Tile::Empty);
        next
    }

    /// True iff every cell is empty.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|tile| tile.is_empty())
    }

    /// Returns a new board with the remaining tiles randomly permuted.
    ///
    /// Empty cells keep their positions and the multiset of symbols is preserved.
    /// The result may still have no legal move.
    pub fn shuffle_remaining<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut values: Vec<Tile> = self
            .cells
            .iter()
            .copied()
            .filter(|tile| !tile.is_empty())
            .collect();
        values.shuffle(rng);

        let mut refill = values.into_iter();
        let cells = self
            .cells
            .iter()
            .map(|tile| {
                if tile.is_empty() {
                    Tile::Empty
                } else {
                    refill.next().unwrap_or(Tile::Empty)
                }
            })
            .collect();

        Board {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row-major serialization distinguishing every symbol and empty cells.
    ///
    /// Two boards have the same key iff they are equal.
    ///
    /// ```
    /// use shisen_solver::utils::board_from_str_array;
    /// let board = board_from_str_array(&["A.", ".A"]).unwrap();
    /// assert_eq!(board.canonical_key(), "A.|.A");
    /// ```
    pub fn canonical_key(&self) -> String {
        let mut key = String::with_capacity(self.cells.len() + self.rows);
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                key.push('|');
            }
            key.extend(row.iter().map(|tile| tile.to_char()));
        }
        key
    }

    /// Renders the board with row/column headers, drawing highlighted cells in
    /// reverse video.
    pub fn to_string_with_highlight(&self, highlight: &[Position]) -> String {
        let mut output = String::from("   ");
        for col in 0..self.cols {
            output.push_str(&format!("{:<2}", col));
        }

        for row in 0..self.rows {
            output.push('\n');
            output.push_str(&format!("{:<3}", row));
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let ch = self.get_tile(pos).to_char();
                if highlight.contains(&pos) {
                    output.push_str(&format!("\x1b[7m{}\x1b[m ", ch));
                } else {
                    output.push(ch);
                    output.push(' ');
                }
            }
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(&[]))
    }
}

fn checked_area(rows: usize, cols: usize) -> Result<usize, EngineError> {
    match rows.checked_mul(cols) {
        Some(total) if total > 0 => Ok(total),
        _ => Err(EngineError::InvalidDimensions { rows, cols }),
    }
}
