//! Piece supply for game sessions.
//!
//! The decision engine treats the stream of falling pieces as an external
//! collaborator: anything implementing [`PieceSource`] can drive a game.
//! [`RandomPieceSource`] supplies uniformly random pieces for live play
//! and [`ReplayPieceSource`] replays a fixed sequence for deterministic
//! tests and regression fixtures.

pub use self::piece_source::*;

mod piece_source;
