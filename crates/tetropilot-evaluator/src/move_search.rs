//! Exhaustive one-piece move search.
//!
//! For the current piece, every legal (orientation, column) pair is
//! simulated on a scratch copy of the board and scored with
//! [`evaluate_placement`](crate::evaluate_placement). The search is greedy:
//! it considers only the piece in hand, with no lookahead to upcoming
//! pieces.

use tetropilot_engine::{Board, Orientation, PieceKind};

use crate::{placement_evaluator::evaluate_placement, weights::FeatureWeights};

/// A chosen placement: which orientation of the piece to use and which
/// column its leftmost cell occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    piece: PieceKind,
    orientation_index: usize,
    column: usize,
}

impl Move {
    #[must_use]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    #[must_use]
    pub fn orientation_index(&self) -> usize {
        self.orientation_index
    }

    /// The orientation the search selected from the piece's catalog.
    #[must_use]
    pub fn orientation(&self) -> &'static Orientation {
        &self.piece.orientations()[self.orientation_index]
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Picks the highest-scoring placement for `piece` on `board`.
///
/// Candidates are enumerated in catalog order: orientations in their
/// declared order, columns left to right within each orientation. A
/// candidate replaces the incumbent only on a strictly better score, so
/// ties resolve to the earliest candidate. Candidates that would top out
/// are skipped; if every candidate tops out the first one is returned and
/// the caller's own placement attempt reports the top-out.
#[must_use]
pub fn pick_move(board: &Board, weights: &FeatureWeights, piece: PieceKind) -> Move {
    let mut best: Option<(f64, Move)> = None;

    for (orientation_index, orientation) in piece.orientations().iter().enumerate() {
        for column in 0..=board.num_columns() - orientation.width() {
            let mut scratch = board.clone();
            let piece_rows = scratch.shifted_piece(orientation, column);
            let placement_row = scratch.placement_row(&piece_rows);
            let Ok(outcome) = scratch.apply(piece_rows, placement_row) else {
                continue;
            };

            let score = evaluate_placement(weights, &outcome, &scratch);
            if best.as_ref().is_none_or(|&(best_score, _)| score > best_score) {
                best = Some((
                    score,
                    Move {
                        piece,
                        orientation_index,
                        column,
                    },
                ));
            }
        }
    }

    best.map_or(
        Move {
            piece,
            orientation_index: 0,
            column: 0,
        },
        |(_, chosen)| chosen,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights_keep_first_candidate() {
        let board = Board::new(10, 20).unwrap();
        for piece in PieceKind::ALL {
            let chosen = pick_move(&board, &FeatureWeights::ZERO, piece);
            assert_eq!(chosen.orientation_index(), 0);
            assert_eq!(chosen.column(), 0);
        }
    }

    #[test]
    fn test_i_piece_fills_a_deep_well() {
        // Columns 0-8 are stacked four deep; a vertical I in column 9
        // clears four rows at once and leaves the board empty.
        let board = Board::from_ascii(
            r"
            ..........
            ..........
            ..........
            ..........
            #########.
            #########.
            #########.
            #########.
            ",
        );
        let chosen = pick_move(&board, &FeatureWeights::TUNED, PieceKind::I);
        assert_eq!(chosen.orientation_index(), 0);
        assert_eq!(chosen.column(), 9);

        let mut board = board;
        let piece_rows = board.shifted_piece(chosen.orientation(), chosen.column());
        let placement_row = board.placement_row(&piece_rows);
        let outcome = board.apply(piece_rows, placement_row).unwrap();
        assert_eq!(outcome.rows_removed(), 4);
        assert!(board.rows().iter().all(|&row| row == 0));
    }

    #[test]
    fn test_all_candidates_top_out_falls_back_to_first() {
        // The three bottom rows are packed solid and the top row has an
        // occupied cell, so no I placement fits anywhere.
        let board = Board::from_ascii(
            r"
            #...
            ####
            ####
            ####
            ",
        );
        let chosen = pick_move(&board, &FeatureWeights::TUNED, PieceKind::I);
        assert_eq!(chosen.orientation_index(), 0);
        assert_eq!(chosen.column(), 0);

        let mut board = board;
        let piece_rows = board.shifted_piece(chosen.orientation(), chosen.column());
        let placement_row = board.placement_row(&piece_rows);
        assert!(board.apply(piece_rows, placement_row).is_err());
    }
}
