use crate::engine::Board;
use crate::error::EngineError;
use crate::moves::Move;
use crate::vlog;
use rand::Rng;
use std::collections::HashMap;

/// Represents a clearing sequence found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Moves that, applied in order, clear the board.
    pub moves: Vec<Move>,
    /// Distinct board states whose outcome was settled during the search.
    pub states_explored: usize,
}

/// Returns whether some sequence of legal moves clears `board`.
///
/// Runs the same search as `solve` with a fresh memo table.
pub fn is_solvable(board: &Board) -> bool {
    solve(board).is_some()
}

/// Finds a sequence of moves that clears `board`, or `None` if none exists.
///
/// Backtracking search over `find_all_moves` in weight order. Every settled
/// board state is memoized by its canonical key for the duration of this call
/// only, so states reached through different move orders are evaluated once.
///
/// # Examples
/// ```
/// use shisen_solver::solver::solve;
/// use shisen_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["ABBA"]).unwrap();
/// let solution = solve(&board).unwrap();
/// assert_eq!(solution.moves.len(), 2);
///
/// let stuck = board_from_str_array(&["AB", "BA"]).unwrap();
/// assert!(solve(&stuck).is_none());
/// ```
pub fn solve(board: &Board) -> Option<Solution> {
    let mut memo: HashMap<String, bool> = HashMap::new();
    let mut path = Vec::new();
    let solved = search(board, &mut memo, &mut path);

    vlog!(
        "solver: {} after settling {} states",
        if solved { "solved" } else { "unsolvable" },
        memo.len()
    );

    solved.then(|| Solution {
        moves: path,
        states_explored: memo.len(),
    })
}

fn search(board: &Board, memo: &mut HashMap<String, bool>, path: &mut Vec<Move>) -> bool {
    if board.is_cleared() {
        return true;
    }

    let key = board.canonical_key();
    if let Some(&known) = memo.get(&key) {
        return known;
    }

    for (mv, _) in board.find_all_moves() {
        let next = board.without_pair(mv.first, mv.second);
        path.push(mv);
        if search(&next, memo, path) {
            memo.insert(key, true);
            return true;
        }
        path.pop();
    }

    memo.insert(key, false);
    false
}

/// Generates boards until one passes `is_solvable`.
///
/// Retries without limit; use `generate_playable_bounded` to cap the attempts.
///
/// # Errors
/// Only the dimension errors of `Board::generate`.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use shisen_solver::solver::{generate_playable, is_solvable};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let board = generate_playable(4, 4, &mut rng).unwrap();
/// assert!(is_solvable(&board));
/// ```
pub fn generate_playable<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Board, EngineError> {
    generate_until_solvable(rows, cols, None, rng)
}

/// Like `generate_playable`, but gives up after `max_attempts` boards.
///
/// # Errors
/// * The dimension errors of `Board::generate`.
/// * `EngineError::GenerationExhausted` when every attempt was unsolvable.
pub fn generate_playable_bounded<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Board, EngineError> {
    generate_until_solvable(rows, cols, Some(max_attempts), rng)
}

fn generate_until_solvable<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    max_attempts: Option<u32>,
    rng: &mut R,
) -> Result<Board, EngineError> {
    let mut attempts: u32 = 0;
    loop {
        if let Some(limit) = max_attempts {
            if attempts >= limit {
                return Err(EngineError::GenerationExhausted { attempts });
            }
        }

        let board = Board::generate(rows, cols, rng)?;
        attempts = attempts.saturating_add(1);
        if is_solvable(&board) {
            vlog!("generator: {}x{} board accepted after {} attempt(s)", rows, cols, attempts);
            return Ok(board);
        }
        vlog!("generator: attempt {} unsolvable, regenerating", attempts);
    }
}
