//! Decision engine for automated Tetris play.
//!
//! Given a board and the next falling piece, this crate selects the
//! placement (orientation and column) that maximizes a hand-tuned linear
//! heuristic over board features:
//!
//! 1. **Features** ([`board_feature`]) - Five scalar measurements of a
//!    board (plus the landing height of the last move): landing height,
//!    row transitions, column transitions, holes, and well sums.
//! 2. **Evaluation** ([`placement_evaluator`]) - A weighted sum of the
//!    feature values with fixed weights ([`weights`]), producing a single
//!    comparable score per placement.
//! 3. **Search** ([`move_search`]) - Exhaustive enumeration of every
//!    (orientation, column) pair for the current piece, simulated on a
//!    clone of the live board, keeping the highest-scoring candidate.
//! 4. **Session** ([`session`]) - The game loop: draw a piece, pick the
//!    best move, commit it to the live board, count cleared rows, stop on
//!    top-out.
//!
//! The search is greedy with no lookahead: each move is chosen on its own
//! merits. That keeps a move decision bounded (at most 4 orientations ×
//! the number of valid columns, each an O(board) simulation) and fully
//! deterministic for a given piece sequence and weight set.

pub use self::{
    move_search::{Move, pick_move},
    placement_evaluator::evaluate_placement,
    session::{GameSession, SessionState, StepReport},
    weights::FeatureWeights,
};

pub mod board_feature;
pub mod move_search;
pub mod placement_evaluator;
pub mod session;
pub mod weights;
