use thiserror::Error;

use crate::engine::Stage;

/// Why a match state could not be accepted as entered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFault {
    #[error("teams must differ")]
    SameTeams,

    #[error("illegal over count")]
    IllegalOverCount,

    #[error("illegal ball count")]
    IllegalBallCount,

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("malformed overs value: {0}")]
    MalformedOvers(String),

    #[error("missing {0}")]
    Missing(&'static str),
}

/// How the chase already ended.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decided {
    #[error("chase complete")]
    ChaseComplete,

    #[error("all out")]
    AllOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFault {
    /// No file at the configured path
    Missing,
    /// The file exists but cannot be read or used as a win model
    Unusable,
}

/// Every way a prediction request can end without a probability.
///
/// None of these are retried: the pipeline is deterministic, so the same
/// match state always reproduces the same failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChaseError {
    /// Malformed or out-of-range field (impossible ball count, same team twice, ...)
    #[error("invalid input: {0}")]
    InvalidInput(InputFault),

    /// Chase complete or innings over. Not a fault, just nothing left to predict.
    #[error("match already decided: {0}")]
    MatchAlreadyDecided(Decided),

    /// The classifier failed or returned something that is not a probability pair
    #[error("prediction failed: {0}")]
    PredictionFailure(String),

    /// The model artifact could not be loaded or does not fit the fixed vocabularies
    #[error("model unavailable at {path}: {reason}")]
    ModelUnavailable {
        path: String,
        fault: ModelFault,
        reason: String,
    },
}

impl From<InputFault> for ChaseError {
    fn from(fault: InputFault) -> Self {
        ChaseError::InvalidInput(fault)
    }
}

impl From<Decided> for ChaseError {
    fn from(decided: Decided) -> Self {
        ChaseError::MatchAlreadyDecided(decided)
    }
}

impl ChaseError {
    /// The human-readable reason without the kind prefix.
    pub fn reason(&self) -> String {
        match self {
            ChaseError::InvalidInput(fault) => fault.to_string(),
            ChaseError::MatchAlreadyDecided(decided) => decided.to_string(),
            ChaseError::PredictionFailure(r) => r.clone(),
            ChaseError::ModelUnavailable { reason, .. } => reason.clone(),
        }
    }

    /// Terminal lifecycle state a request lands in when it fails this way.
    ///
    /// `ModelUnavailable` happens before any request exists; it is reported as
    /// `Rejected` if it ever surfaces through a request path.
    pub fn terminal_stage(&self) -> Stage {
        match self {
            ChaseError::InvalidInput(_)
            | ChaseError::MatchAlreadyDecided(_)
            | ChaseError::ModelUnavailable { .. } => Stage::Rejected,
            ChaseError::PredictionFailure(_) => Stage::PredictionFailed,
        }
    }

    /// Text shown to the person who entered the match figures.
    pub fn user_message(&self, batting_team: &str) -> String {
        match self {
            ChaseError::InvalidInput(InputFault::SameTeams) => {
                "❌ Batting and Bowling teams cannot be the same!".to_string()
            }
            ChaseError::InvalidInput(fault) => format!("❌ Invalid match state: {}", fault),
            ChaseError::MatchAlreadyDecided(Decided::ChaseComplete) => {
                format!("❌ Match Over! {} has already won.", batting_team)
            }
            ChaseError::MatchAlreadyDecided(Decided::AllOut) => {
                "❌ Match Over! All wickets fell.".to_string()
            }
            ChaseError::PredictionFailure(r) => format!("Error in prediction: {}", r),
            ChaseError::ModelUnavailable {
                path,
                fault: ModelFault::Missing,
                ..
            } => format!("Model file '{}' not found. Please upload it.", path),
            ChaseError::ModelUnavailable {
                path,
                fault: ModelFault::Unusable,
                reason,
            } => format!("Model file '{}' cannot be used: {}", path, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_reason_verbatim() {
        let err = ChaseError::from(InputFault::IllegalBallCount);
        assert_eq!(err.to_string(), "invalid input: illegal ball count");
        assert_eq!(err.reason(), "illegal ball count");

        let err = ChaseError::from(Decided::AllOut);
        assert_eq!(err.to_string(), "match already decided: all out");
        assert_eq!(err.reason(), "all out");
    }

    #[test]
    fn terminal_stage_per_kind() {
        assert_eq!(
            ChaseError::from(InputFault::SameTeams).terminal_stage(),
            Stage::Rejected
        );
        assert_eq!(ChaseError::from(Decided::AllOut).terminal_stage(), Stage::Rejected);
        assert_eq!(
            ChaseError::PredictionFailure("boom".into()).terminal_stage(),
            Stage::PredictionFailed
        );
    }

    #[test]
    fn user_messages_name_the_batting_side() {
        let msg = ChaseError::from(Decided::ChaseComplete).user_message("Mumbai Indians");
        assert!(msg.contains("Mumbai Indians has already won"));

        let msg = ChaseError::from(Decided::AllOut).user_message("Mumbai Indians");
        assert!(msg.contains("All wickets fell"));

        let msg = ChaseError::from(InputFault::SameTeams).user_message("Mumbai Indians");
        assert!(msg.contains("cannot be the same"));
    }

    #[test]
    fn user_message_follows_fault_not_wording() {
        let msg = ChaseError::from(InputFault::UnknownTeam("teams must differ".into()))
            .user_message("Mumbai Indians");
        assert!(msg.contains("unknown team"), "{msg}");
        assert!(!msg.contains("cannot be the same"), "{msg}");
    }

    #[test]
    fn model_message_depends_on_fault() {
        let missing = ChaseError::ModelUnavailable {
            path: "models/x.json".into(),
            fault: ModelFault::Missing,
            reason: "failed to read models/x.json".into(),
        };
        assert!(missing.user_message("").contains("not found"));

        let unusable = ChaseError::ModelUnavailable {
            path: "models/x.json".into(),
            fault: ModelFault::Unusable,
            reason: "model was not trained on venue_city = \"Sharjah\"".into(),
        };
        let msg = unusable.user_message("");
        assert!(!msg.contains("not found"), "{msg}");
        assert!(msg.contains("Sharjah"), "{msg}");
    }
}
