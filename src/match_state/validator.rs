//! Consistency and liveness checks on an entered match state.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. same team on both sides
//! 2. target already reached
//! 3. ten wickets down
//! 4. overs/balls outside a legal in-progress innings

use tracing::debug;

use super::overs::{BALLS_PER_OVER, INNINGS_OVERS};
use super::MatchState;
use crate::error::{ChaseError, Decided, InputFault};

/// A match state that passed every check. Only [`validate`] builds one, so
/// feature derivation can take it without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedState(MatchState);

impl ValidatedState {
    pub fn state(&self) -> &MatchState {
        &self.0
    }
}

impl std::ops::Deref for ValidatedState {
    type Target = MatchState;

    fn deref(&self) -> &MatchState {
        &self.0
    }
}

pub fn validate(state: MatchState) -> Result<ValidatedState, ChaseError> {
    if state.batting_team == state.bowling_team {
        return Err(InputFault::SameTeams.into());
    }

    if state.current_score >= state.target_score {
        return Err(Decided::ChaseComplete.into());
    }

    if state.wickets_lost >= 10 {
        return Err(Decided::AllOut.into());
    }

    // Overs run 0..=19; a completed 20th over would end the innings.
    if state.overs.whole >= INNINGS_OVERS {
        return Err(InputFault::IllegalOverCount.into());
    }
    if state.overs.balls >= BALLS_PER_OVER {
        return Err(InputFault::IllegalBallCount.into());
    }

    debug!(
        batting = %state.batting_team,
        bowling = %state.bowling_team,
        overs = %state.overs,
        "match state validated"
    );
    Ok(ValidatedState(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_state::fixtures::mid_chase;
    use crate::match_state::{Overs, Team};

    #[test]
    fn accepts_live_chase() {
        let state = mid_chase();
        let validated = validate(state).unwrap();
        assert_eq!(*validated.state(), state);
    }

    #[test]
    fn rejects_same_team() {
        let mut state = mid_chase();
        state.bowling_team = state.batting_team;
        assert_eq!(validate(state), Err(ChaseError::from(InputFault::SameTeams)));
    }

    #[test]
    fn rejects_completed_chase() {
        let mut state = mid_chase();
        state.current_score = 180;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::ChaseComplete)));
        state.current_score = 195;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::ChaseComplete)));
    }

    #[test]
    fn rejects_all_out() {
        let mut state = mid_chase();
        state.wickets_lost = 10;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::AllOut)));
    }

    #[test]
    fn nine_down_is_still_live() {
        let mut state = mid_chase();
        state.wickets_lost = 9;
        assert!(validate(state).is_ok());
    }

    #[test]
    fn rejects_illegal_ball_digit() {
        for raw in ["14.6", "14.7", "14.9"] {
            let mut state = mid_chase();
            state.overs = Overs::from_decimal_str(raw).unwrap();
            assert_eq!(
                validate(state),
                Err(ChaseError::from(InputFault::IllegalBallCount)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_twentieth_over() {
        let mut state = mid_chase();
        state.overs = Overs::new(20, 0);
        assert_eq!(validate(state), Err(ChaseError::from(InputFault::IllegalOverCount)));
    }

    #[test]
    fn last_legal_ball_state() {
        let mut state = mid_chase();
        state.overs = Overs::new(19, 5);
        assert!(validate(state).is_ok());
    }

    #[test]
    fn checks_short_circuit_in_order() {
        // Every check fails here; the team check must be the one reported.
        let mut state = mid_chase();
        state.bowling_team = Team::MumbaiIndians;
        state.current_score = 500;
        state.wickets_lost = 10;
        state.overs = Overs::new(25, 9);
        assert_eq!(validate(state), Err(ChaseError::from(InputFault::SameTeams)));

        state.bowling_team = Team::DelhiCapitals;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::ChaseComplete)));

        state.current_score = 10;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::AllOut)));
    }

    #[test]
    fn zero_target_is_already_decided() {
        let mut state = mid_chase();
        state.target_score = 0;
        state.current_score = 0;
        assert_eq!(validate(state), Err(ChaseError::from(Decided::ChaseComplete)));
    }
}
