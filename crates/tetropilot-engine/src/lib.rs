pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Rejected board configuration, reported by [`Board::new`](core::Board::new).
///
/// The engine refuses to construct a board it cannot represent exactly
/// rather than silently truncating row bitmasks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardConfigError {
    #[display("board must have at least {min} columns, got {got}")]
    TooFewColumns { min: usize, got: usize },
    #[display("board must have at most {max} columns for a 32-bit row word, got {got}")]
    TooManyColumns { max: usize, got: usize },
    #[display("board must have at least {min} rows, got {got}")]
    TooFewRows { min: usize, got: usize },
    #[display("row {index} bitmask {value:#x} has bits beyond the {columns}-column width")]
    RowOutOfRange {
        index: usize,
        value: u32,
        columns: usize,
    },
}

/// A placement would extend above the top of the board.
///
/// This is a terminal game condition, not a fault: the board is left
/// untouched and the session owning it transitions to game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece placement extends above the board")]
pub struct TopOut;
