use serde::{Deserialize, Serialize};

use crate::error::ChaseError;
use crate::match_state::Team;

/// Column holding P(batting side loses).
pub const LOSS_COLUMN: usize = 0;
/// Column holding P(batting side wins).
pub const WIN_COLUMN: usize = 1;
/// Allowed drift from 1.0 in the sum of the two columns.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Win/loss probabilities for the side batting second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub loss_probability: f64,
    pub win_probability: f64,
}

impl PredictionResult {
    /// Read a classifier output row, checking it is a genuine probability pair.
    pub fn from_columns(
        columns: &[f64],
        batting_team: Team,
        bowling_team: Team,
    ) -> Result<Self, ChaseError> {
        if columns.len() != 2 {
            return Err(ChaseError::PredictionFailure(format!(
                "expected 2 probability columns, got {}",
                columns.len()
            )));
        }

        let loss = columns[LOSS_COLUMN];
        let win = columns[WIN_COLUMN];
        for p in [loss, win] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ChaseError::PredictionFailure(format!(
                    "probability out of range: {}",
                    p
                )));
            }
        }
        if (loss + win - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ChaseError::PredictionFailure(format!(
                "probabilities sum to {} instead of 1",
                loss + win
            )));
        }

        Ok(PredictionResult {
            batting_team,
            bowling_team,
            loss_probability: loss,
            win_probability: win,
        })
    }

    /// Win probability as a whole percentage.
    pub fn win_percent(&self) -> u32 {
        (self.win_probability * 100.0).round() as u32
    }

    pub fn loss_percent(&self) -> u32 {
        (self.loss_probability * 100.0).round() as u32
    }
}
