//! Placement scoring: a weighted sum of board features.

use tetropilot_engine::{Board, MoveOutcome};

use crate::{board_feature, weights::FeatureWeights};

/// Scores a committed placement.
///
/// `board` is the state after the placement (full rows already removed)
/// and `outcome` describes the move that produced it. Higher scores are
/// better; with the default weights every feature except `rows_removed`
/// penalizes the placement.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn evaluate_placement(weights: &FeatureWeights, outcome: &MoveOutcome, board: &Board) -> f64 {
    weights.landing_height * board_feature::landing_height(outcome)
        + weights.rows_removed * outcome.rows_removed() as f64
        + weights.row_transitions * f64::from(board_feature::row_transitions(board))
        + weights.column_transitions * f64::from(board_feature::column_transitions(board))
        + weights.holes * f64::from(board_feature::number_of_holes(board))
        + weights.well_sums * f64::from(board_feature::well_sums(board))
}

#[cfg(test)]
mod tests {
    use tetropilot_engine::PieceKind;

    use super::*;

    #[test]
    fn test_empty_board_scores_edge_features_only() {
        let mut board = Board::new(10, 20).unwrap();
        let flat_i = &PieceKind::I.orientations()[1];
        let piece = board.shifted_piece(flat_i, 0);
        let row = board.placement_row(&piece);
        let outcome = board.apply(piece, row).unwrap();

        // One flat I on the floor: landing height 0, no holes or wells,
        // 20 * 2 row transitions minus the piece's own contribution.
        let weights = FeatureWeights {
            landing_height: -1.0,
            ..FeatureWeights::ZERO
        };
        assert_eq!(evaluate_placement(&weights, &outcome, &board), 0.0);

        let weights = FeatureWeights {
            holes: -1.0,
            well_sums: -1.0,
            ..FeatureWeights::ZERO
        };
        assert_eq!(evaluate_placement(&weights, &outcome, &board), 0.0);
    }

    #[test]
    fn test_score_is_linear_in_weights() {
        let mut board = Board::new(10, 20).unwrap();
        let upright_s = &PieceKind::S.orientations()[0];
        let piece = board.shifted_piece(upright_s, 4);
        let row = board.placement_row(&piece);
        let outcome = board.apply(piece, row).unwrap();

        let single = evaluate_placement(
            &FeatureWeights {
                column_transitions: -1.0,
                ..FeatureWeights::ZERO
            },
            &outcome,
            &board,
        );
        let doubled = evaluate_placement(
            &FeatureWeights {
                column_transitions: -2.0,
                ..FeatureWeights::ZERO
            },
            &outcome,
            &board,
        );
        assert_eq!(doubled, single * 2.0);
    }

    #[test]
    fn test_rows_removed_rewarded() {
        let mut board = Board::from_ascii(
            r"
            ....
            ....
            ....
            .###
            ",
        );
        let upright_i = &PieceKind::I.orientations()[0];
        let piece = board.shifted_piece(upright_i, 0);
        let row = board.placement_row(&piece);
        let outcome = board.apply(piece, row).unwrap();
        assert_eq!(outcome.rows_removed(), 1);

        let weights = FeatureWeights {
            rows_removed: 1.0,
            ..FeatureWeights::ZERO
        };
        assert_eq!(evaluate_placement(&weights, &outcome, &board), 1.0);
    }
}
