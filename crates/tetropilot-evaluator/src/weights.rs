//! Feature weights for placement evaluation.

use serde::{Deserialize, Serialize};

/// Weights for the linear placement evaluation.
///
/// Each field multiplies the board feature of the same name (see
/// [`board_feature`](crate::board_feature)); the placement score is the sum
/// of the products. Features that describe desirable outcomes (cleared
/// rows) carry positive weights, features that describe surface damage
/// (holes, transitions, wells) carry negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub landing_height: f64,
    pub rows_removed: f64,
    pub row_transitions: f64,
    pub column_transitions: f64,
    pub holes: f64,
    pub well_sums: f64,
}

impl FeatureWeights {
    /// All weights zero. Mostly useful as a base for tests that want to
    /// isolate a single feature.
    pub const ZERO: Self = Self {
        landing_height: 0.0,
        rows_removed: 0.0,
        row_transitions: 0.0,
        column_transitions: 0.0,
        holes: 0.0,
        well_sums: 0.0,
    };

    /// Hand-tuned weights from particle swarm optimization over long
    /// self-play games on the standard 10x20 board.
    pub const TUNED: Self = Self {
        landing_height: -4.500_158_825_082_766,
        rows_removed: 3.418_126_810_139_269_4,
        row_transitions: -3.217_888_286_848_775_3,
        column_transitions: -9.348_695_305_445_199,
        holes: -7.899_265_427_351_652,
        well_sums: -3.385_597_224_726_362_6,
    };
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self::TUNED
    }
}
