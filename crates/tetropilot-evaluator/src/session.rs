//! Self-playing game session.
//!
//! A [`GameSession`] wires the pieces together: it draws from a
//! [`PieceSource`], runs the move search for each piece, and commits the
//! chosen placement to its board until the stack tops out or the caller's
//! turn limit runs out.

use derive_more::IsVariant;
use tetropilot_engine::{Board, PieceKind, PieceSource};

use crate::{
    move_search::{Move, pick_move},
    weights::FeatureWeights,
};

/// Whether the session is still accepting pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// What happened on one successful turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    piece: PieceKind,
    chosen: Move,
    rows_removed: usize,
}

impl StepReport {
    #[must_use]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    #[must_use]
    pub fn chosen(&self) -> Move {
        self.chosen
    }

    #[must_use]
    pub fn rows_removed(&self) -> usize {
        self.rows_removed
    }
}

/// A game loop that plays itself with a fixed weight vector.
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    board: Board,
    weights: FeatureWeights,
    piece_source: S,
    rows_completed: usize,
    state: SessionState,
}

impl<S> GameSession<S>
where
    S: PieceSource,
{
    #[must_use]
    pub fn new(board: Board, weights: FeatureWeights, piece_source: S) -> Self {
        Self {
            board,
            weights,
            piece_source,
            rows_completed: 0,
            state: SessionState::Playing,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total rows cleared since the session started.
    #[must_use]
    pub fn rows_completed(&self) -> usize {
        self.rows_completed
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Plays one turn: draws a piece, searches for its best placement and
    /// commits it.
    ///
    /// Returns `None` once the session is over, either because a previous
    /// turn ended it or because the placement chosen this turn tops out.
    /// After a top-out the board and counters stay frozen at their final
    /// values.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.state.is_game_over() {
            return None;
        }

        let piece = self.piece_source.next_piece();
        let chosen = pick_move(&self.board, &self.weights, piece);

        let piece_rows = self.board.shifted_piece(chosen.orientation(), chosen.column());
        let placement_row = self.board.placement_row(&piece_rows);
        match self.board.apply(piece_rows, placement_row) {
            Ok(outcome) => {
                let rows_removed = outcome.rows_removed();
                self.rows_completed += rows_removed;
                Some(StepReport {
                    piece,
                    chosen,
                    rows_removed,
                })
            }
            Err(_) => {
                self.state = SessionState::GameOver;
                None
            }
        }
    }

    /// Plays until the game ends or `turn_limit` turns have been taken.
    /// Returns the number of turns actually played.
    pub fn play(&mut self, turn_limit: usize) -> usize {
        for turn in 0..turn_limit {
            if self.step().is_none() {
                return turn;
            }
        }
        turn_limit
    }
}
