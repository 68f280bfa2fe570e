use crate::engine::{Board, Symbol, Tile, EMPTY_CHAR};
use crate::error::ParseError;
use std::collections::BTreeMap;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from row 0. Valid characters are
/// `.` for an empty cell and `A`..`Z`, `a`..`n` for catalog symbols 0..39
/// (see `Symbol::to_char`).
///
/// # Errors
/// * `ParseError::Empty` if there are no rows or the first row is empty.
/// * `ParseError::RaggedRow` if a row's length differs from the first row's.
/// * `ParseError::UnrecognizedChar` for any other character.
/// * `ParseError::UnpairedSymbol` if a symbol occurs an odd number of times.
///
/// # Examples
/// ```
/// use shisen_solver::engine::{Position, Symbol, Tile};
/// use shisen_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["AB", "BA", ".."]).unwrap();
/// assert_eq!(board.rows(), 3);
/// assert_eq!(board.cols(), 2);
/// assert_eq!(board.get_tile(Position::new(0, 1)), Tile::Face(Symbol::from_char('B').unwrap()));
/// assert_eq!(board.get_tile(Position::new(2, 0)), Tile::Empty);
///
/// assert!(board_from_str_array(&["A#"]).is_err());
/// assert!(board_from_str_array(&["AA", "B."]).is_err());
/// ```
pub fn board_from_str_array<S: AsRef<str>>(s: &[S]) -> Result<Board, ParseError> {
    let expected = s.first().map_or(0, |row| row.as_ref().chars().count());
    if expected == 0 {
        return Err(ParseError::Empty);
    }

    let mut grid = Vec::with_capacity(s.len());
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();

    for (r, row_str) in s.iter().enumerate() {
        let row_str = row_str.as_ref();
        let found = row_str.chars().count();
        if found != expected {
            return Err(ParseError::RaggedRow {
                row: r,
                expected,
                found,
            });
        }

        let mut row = Vec::with_capacity(expected);
        for (c, ch) in row_str.chars().enumerate() {
            let tile = if ch == EMPTY_CHAR {
                Tile::Empty
            } else {
                let symbol =
                    Symbol::from_char(ch).ok_or(ParseError::UnrecognizedChar { ch, row: r, col: c })?;
                *counts.entry(ch).or_insert(0) += 1;
                Tile::Face(symbol)
            };
            row.push(tile);
        }
        grid.push(row);
    }

    if let Some((&ch, &count)) = counts.iter().find(|(_, count)| **count % 2 != 0) {
        return Err(ParseError::UnpairedSymbol { ch, count });
    }

    // Shape was validated above.
    Board::from_rows(grid).map_err(|_| ParseError::Empty)
}

/// Splits text into board rows, ignoring blank lines and surrounding whitespace.
pub fn board_from_text(text: &str) -> Result<Board, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    board_from_str_array(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Position;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["AB.C", "CB.A"]).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.get_tile(Position::new(0, 2)), Tile::Empty);
        assert_eq!(
            board.get_tile(Position::new(1, 3)),
            Tile::Face(Symbol::from_index(0).unwrap())
        );
        assert_eq!(board.remaining_tiles(), 6);
    }

    #[test]
    fn test_board_from_str_array_accepts_owned_strings() {
        let rows = vec![String::from("nn"), String::from("..")];
        let board = board_from_str_array(&rows).unwrap();
        assert_eq!(
            board.get_tile(Position::new(0, 0)),
            Tile::Face(Symbol::from_index(39).unwrap())
        );
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["AA", "X#"]);
        assert_eq!(
            result,
            Err(ParseError::UnrecognizedChar {
                ch: '#',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_board_from_str_array_ragged_row() {
        let result = board_from_str_array(&["AA..", "AA."]);
        assert_eq!(
            result,
            Err(ParseError::RaggedRow {
                row: 1,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_board_from_str_array_unpaired_symbol() {
        let result = board_from_str_array(&["AAA.", "BB.."]);
        assert_eq!(result, Err(ParseError::UnpairedSymbol { ch: 'A', count: 3 }));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board_str: [&str; 0] = [];
        assert_eq!(board_from_str_array(&board_str), Err(ParseError::Empty));
        assert_eq!(board_from_str_array(&[""]), Err(ParseError::Empty));
    }

    #[test]
    fn test_board_from_text_skips_blank_lines() {
        let board = board_from_text("\n  AB\n\n  BA  \n").unwrap();
        assert_eq!(board.canonical_key(), "AB|BA");
    }
}
