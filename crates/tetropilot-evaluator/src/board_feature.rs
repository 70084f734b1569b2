//! Board feature extraction.
//!
//! Each function measures one scalar property of a board state (or, for
//! [`landing_height`], of the move that produced it). The features feed
//! the weighted evaluation in [`placement_evaluator`](crate::placement_evaluator);
//! their exact definitions are load-bearing because the fixed weights were
//! tuned against them. In particular [`column_transitions`] counts a
//! boundary transition only at the bottom of each column while
//! [`row_transitions`] counts both row edges: the stack has walls on
//! three sides but no ceiling. Preserve the asymmetry.
//!
//! All functions are pure and read-only over the board.

use tetropilot_engine::{Board, MoveOutcome};

/// Vertical center of the piece placed by the last move.
///
/// The bottom row of the piece rests at `landing_height`; adding half the
/// piece height above it gives the center. Lower landings are better, so
/// this feature carries a negative weight.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn landing_height(outcome: &MoveOutcome) -> f64 {
    outcome.landing_height() as f64 + (outcome.piece_rows().len() - 1) as f64 / 2.0
}

/// Total number of occupancy transitions along rows.
///
/// A transition is a filled cell adjacent to an empty cell (or vice
/// versa) in the same row. Both board edges count as filled walls, so an
/// entirely empty row contributes exactly 2 transitions.
#[must_use]
pub fn row_transitions(board: &Board) -> u32 {
    let mut transitions = 0;

    for &row in board.rows() {
        let mut last_bit = 1;
        for j in 0..board.num_columns() {
            let bit = (row >> j) & 1;
            if bit != last_bit {
                transitions += 1;
            }
            last_bit = bit;
        }
        if last_bit == 0 {
            transitions += 1;
        }
    }
    transitions
}

/// Total number of occupancy transitions along columns.
///
/// Scans each column from the bottom row upward with the floor counted as
/// filled; an entirely empty column therefore contributes exactly 1
/// transition. There is no matching check at the top of the column.
#[must_use]
pub fn column_transitions(board: &Board) -> u32 {
    let mut transitions = 0;

    for j in 0..board.num_columns() {
        let mut last_bit = 1;
        for &row in board.rows() {
            let bit = (row >> j) & 1;
            if bit != last_bit {
                transitions += 1;
            }
            last_bit = bit;
        }
    }
    transitions
}

/// Number of holes: empty cells covered by a filled cell (or by another
/// hole) somewhere above them in the same column.
///
/// Computed row by row from the top down with a running covered-empty
/// bitmask: a cell is a hole iff it is empty and the cell directly above
/// it was filled or already a hole. The topmost row can never hold holes.
#[must_use]
pub fn number_of_holes(board: &Board) -> u32 {
    let mask = board.full_row_mask();
    let rows = board.rows();

    let mut holes = 0;
    let mut row_holes = 0;
    let mut previous_row = rows[rows.len() - 1];

    for &row in rows[..rows.len() - 1].iter().rev() {
        row_holes = !row & (previous_row | row_holes) & mask;
        holes += row_holes.count_ones();
        previous_row = row;
    }
    holes
}

/// Accumulated depth of wells.
///
/// A well cell is an empty cell whose two horizontal neighbors are both
/// filled; at the edge columns the board boundary stands in for the
/// missing neighbor. Every well cell contributes 1 plus 1 for each
/// contiguous empty cell below it, and because the column scan revisits
/// stacked well cells, a well of depth `n` contributes `n + (n-1) + … + 1`
/// in total, so deeper wells are penalized quadratically.
#[must_use]
pub fn well_sums(board: &Board) -> u32 {
    let rows = board.rows();
    let num_columns = board.num_columns();
    let mut well_sums = 0;

    // Inner columns: both neighbors must be filled.
    for i in 1..num_columns - 1 {
        for j in (0..rows.len()).rev() {
            if (rows[j] >> i) & 1 == 0
                && (rows[j] >> (i - 1)) & 1 == 1
                && (rows[j] >> (i + 1)) & 1 == 1
            {
                well_sums += 1;
                for k in (0..j).rev() {
                    if (rows[k] >> i) & 1 == 0 {
                        well_sums += 1;
                    } else {
                        break;
                    }
                }
            }
        }
    }

    // Leftmost column: the board edge is the left neighbor.
    for j in (0..rows.len()).rev() {
        if rows[j] & 1 == 0 && (rows[j] >> 1) & 1 == 1 {
            well_sums += 1;
            for k in (0..j).rev() {
                if rows[k] & 1 == 0 {
                    well_sums += 1;
                } else {
                    break;
                }
            }
        }
    }

    // Rightmost column: the board edge is the right neighbor.
    for j in (0..rows.len()).rev() {
        if (rows[j] >> (num_columns - 1)) & 1 == 0 && (rows[j] >> (num_columns - 2)) & 1 == 1 {
            well_sums += 1;
            for k in (0..j).rev() {
                if (rows[k] >> (num_columns - 1)) & 1 == 0 {
                    well_sums += 1;
                } else {
                    break;
                }
            }
        }
    }

    well_sums
}
