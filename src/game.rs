//! Game session state: the current board plus move/score counters and undo history.
use crate::config::GameConfig;
use crate::engine::{Board, Position};
use crate::error::EngineError;
use crate::moves::Move;
use crate::vlog;
use rand::Rng;

/// Where a game stands after the last action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Tiles remain and at least one legal move exists.
    Playing,
    /// Every tile has been removed.
    Won,
    /// Tiles remain but no legal move exists; a shuffle is needed.
    Stuck,
}

/// Manages the state and progression of a Shisen-Sho session.
///
/// # Examples
/// ```
/// use shisen_solver::engine::Position;
/// use shisen_solver::game::{Game, GameStatus};
/// use shisen_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["AA", "BB"]).unwrap();
/// let mut game = Game::new(board);
/// assert!(game.process_move(Position::new(0, 0), Position::new(0, 1)).unwrap());
/// assert_eq!(game.score(), 10);
///
/// let hint = game.hint().unwrap();
/// game.process_move(hint.first, hint.second).unwrap();
/// assert_eq!(game.status(), GameStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    score: u32,
    moves: u32,
    points_per_pair: u32,
    shuffle_attempts: u32,
    history: Vec<(Board, u32, u32)>, // (board, score, moves) snapshots for undo
}

impl Game {
    /// Starts a game on `board` with the default scoring and shuffle settings.
    pub fn new(board: Board) -> Self {
        Self::with_config(board, &GameConfig::default())
    }

    /// Starts a game on `board` using the scoring and shuffle settings of `config`.
    pub fn with_config(board: Board, config: &GameConfig) -> Self {
        Game {
            board: board.clone(),
            score: 0,
            moves: 0,
            points_per_pair: config.points_per_pair,
            shuffle_attempts: config.shuffle_attempts,
            history: vec![(board, 0, 0)],
        }
    }

    /// Generates a solvable board of the configured size and starts a game on it.
    pub fn new_playable<R: Rng + ?Sized>(
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let board = config.generate_board(rng)?;
        Ok(Self::with_config(board, config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of pairs removed so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_cleared() {
            GameStatus::Won
        } else if self.board.find_any_move().is_some() {
            GameStatus::Playing
        } else {
            GameStatus::Stuck
        }
    }

    /// A legal move on the current board, if any.
    pub fn hint(&self) -> Option<Move> {
        self.board.find_any_move()
    }

    /// Removes the pair at `a` and `b` if they hold equal tiles that can be connected.
    ///
    /// Returns `Ok(false)` and leaves the game untouched when the pair is not legal.
    ///
    /// # Errors
    /// `EngineError::OutOfBounds` if either position is off the board.
    pub fn process_move(&mut self, a: Position, b: Position) -> Result<bool, EngineError> {
        if !self.board.can_connect(a, b)? {
            return Ok(false);
        }

        self.board = self.board.remove_pair(a, b)?;
        self.score += self.points_per_pair;
        self.moves += 1;
        self.history.push((self.board.clone(), self.score, self.moves));
        Ok(true)
    }

    /// Reshuffles the remaining tiles until a move exists or the attempts run out.
    ///
    /// Does nothing on a won game. The shuffle is recorded in the undo history.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameStatus {
        if self.board.is_cleared() {
            return GameStatus::Won;
        }

        let mut candidate = self.board.shuffle_remaining(rng);
        let mut attempts = 1;
        while attempts < self.shuffle_attempts && candidate.find_any_move().is_none() {
            candidate = candidate.shuffle_remaining(rng);
            attempts += 1;
        }
        vlog!("shuffle: {} attempt(s)", attempts);

        self.board = candidate;
        self.history.push((self.board.clone(), self.score, self.moves));
        self.status()
    }

    /// Reverts the last move or shuffle. Returns `false` at the initial state.
    pub fn undo_last_move(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        match self.history.last() {
            Some((board, score, moves)) => {
                self.board = board.clone();
                self.score = *score;
                self.moves = *moves;
                true
            }
            None => false,
        }
    }
}
