pub mod overs;
pub mod teams;
pub mod validator;

pub use overs::{Overs, BALLS_PER_OVER, INNINGS_BALLS, INNINGS_OVERS};
pub use teams::{City, Team};
pub use validator::{validate, ValidatedState};

use serde::{Deserialize, Serialize};

/// Match figures for the second innings of a 20-over game, as entered.
///
/// Nothing here is cross-checked yet; run it through [`validate`] before
/// deriving features from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub venue_city: City,
    /// Runs the batting side must exceed
    pub target_score: u32,
    pub current_score: u32,
    pub overs: Overs,
    pub wickets_lost: u32,
}

impl MatchState {
    /// Legal deliveries bowled so far.
    pub fn balls_bowled(&self) -> u32 {
        self.overs.total_balls()
    }
}
