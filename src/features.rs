//! Feature derivation: validated match state in, classifier row out.
//!
//! Two divisions can hit zero and both are pinned to an exact 0.0:
//! - current run rate before the first ball has been bowled
//! - required run rate once no balls remain
//!
//! The second is a compatibility policy, not cricket. With no balls left and
//! runs still needed the chase is lost, so anyone deciding the end of a match
//! must look at `balls_remaining` rather than read a zero required rate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::match_state::{City, Team, ValidatedState, BALLS_PER_OVER, INNINGS_BALLS};

/// Column names the classifier was trained against.
pub mod names {
    pub const BATTING_TEAM: &str = "batting_squad";
    pub const BOWLING_TEAM: &str = "bowling_squad";
    pub const VENUE_CITY: &str = "venue_city";
    pub const RUNS_NEEDED: &str = "runs_needed";
    pub const BALLS_REMAINING: &str = "balls_remaining";
    pub const WICKETS_REMAINING: &str = "wickets_remaining";
    pub const TARGET_SCORE: &str = "target_score";
    pub const CURRENT_RUN_RATE: &str = "cur_run_rate";
    pub const REQUIRED_RUN_RATE: &str = "req_run_rate";

    pub const CATEGORICAL: [&str; 3] = [BATTING_TEAM, BOWLING_TEAM, VENUE_CITY];
    pub const NUMERIC: [&str; 6] = [
        RUNS_NEEDED,
        BALLS_REMAINING,
        WICKETS_REMAINING,
        TARGET_SCORE,
        CURRENT_RUN_RATE,
        REQUIRED_RUN_RATE,
    ];
}

/// The numeric view of a live chase the classifier scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub venue_city: City,
    pub runs_needed: u32,
    /// In [0, 120]
    pub balls_remaining: u32,
    /// In [1, 10]
    pub wickets_remaining: u32,
    pub target_score: u32,
    /// Runs per over so far
    pub current_run_rate: f64,
    /// Runs per over needed from here
    pub required_run_rate: f64,
}

/// One cell of a classifier input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Category(String),
    Number(f64),
}

impl FeatureValue {
    pub fn as_category(&self) -> Option<&str> {
        match self {
            FeatureValue::Category(s) => Some(s),
            FeatureValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(v) => Some(*v),
            FeatureValue::Category(_) => None,
        }
    }
}

/// A single-row input keyed by column name, so the classifier never depends
/// on field order.
pub type FeatureRecord = BTreeMap<String, FeatureValue>;

impl FeatureVector {
    pub fn to_record(&self) -> FeatureRecord {
        let mut row = FeatureRecord::new();
        let mut cat = |k: &str, v: &str| {
            row.insert(k.to_string(), FeatureValue::Category(v.to_string()));
        };
        cat(names::BATTING_TEAM, self.batting_team.name());
        cat(names::BOWLING_TEAM, self.bowling_team.name());
        cat(names::VENUE_CITY, self.venue_city.name());

        let numeric = [
            (names::RUNS_NEEDED, f64::from(self.runs_needed)),
            (names::BALLS_REMAINING, f64::from(self.balls_remaining)),
            (names::WICKETS_REMAINING, f64::from(self.wickets_remaining)),
            (names::TARGET_SCORE, f64::from(self.target_score)),
            (names::CURRENT_RUN_RATE, self.current_run_rate),
            (names::REQUIRED_RUN_RATE, self.required_run_rate),
        ];
        for (k, v) in numeric {
            row.insert(k.to_string(), FeatureValue::Number(v));
        }
        row
    }
}

/// Runs per over given runs and legal balls; zero balls yields exactly 0.0.
pub fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        f64::from(runs) * f64::from(BALLS_PER_OVER) / f64::from(balls)
    }
}

/// Derive the classifier features from a validated state. Infallible.
pub fn derive(state: &ValidatedState) -> FeatureVector {
    let bowled = state.balls_bowled();
    debug_assert!(bowled <= INNINGS_BALLS, "validated state bowled {bowled} balls");
    let balls_remaining = INNINGS_BALLS.saturating_sub(bowled);

    let runs_needed = state.target_score - state.current_score;
    let wickets_remaining = 10 - state.wickets_lost;

    let features = FeatureVector {
        batting_team: state.batting_team,
        bowling_team: state.bowling_team,
        venue_city: state.venue_city,
        runs_needed,
        balls_remaining,
        wickets_remaining,
        target_score: state.target_score,
        current_run_rate: run_rate(state.current_score, bowled),
        required_run_rate: run_rate(runs_needed, balls_remaining),
    };

    debug!(
        runs_needed,
        balls_remaining,
        wickets_remaining,
        crr = features.current_run_rate,
        rrr = features.required_run_rate,
        "features derived"
    );
    features
}
