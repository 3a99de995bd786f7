use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::classifier::{LogisticModel, PredictionResult, WinClassifier};
use crate::error::ChaseError;
use crate::features::{self, FeatureVector};
use crate::match_state::{validate, MatchState};

/// Where a single prediction request is in its lifecycle.
///
/// `Received -> Validating -> {Rejected | Deriving} -> {Predicted | PredictionFailed}`.
/// There is no way back into `Validating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Received,
    Validating,
    Rejected,
    Deriving,
    Predicted,
    PredictionFailed,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Rejected | Stage::Predicted | Stage::PredictionFailed)
    }

    pub fn can_advance_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Received, Stage::Validating)
                | (Stage::Validating, Stage::Rejected)
                | (Stage::Validating, Stage::Deriving)
                | (Stage::Deriving, Stage::Predicted)
                | (Stage::Deriving, Stage::PredictionFailed)
        )
    }
}

/// Features and probabilities from one successful request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub features: FeatureVector,
    pub result: PredictionResult,
}

/// Validates match states, derives features and asks the classifier.
///
/// Holds nothing but a shared read-only classifier, so clones can serve
/// requests from any number of threads.
#[derive(Clone)]
pub struct ChasePredictor {
    classifier: Arc<dyn WinClassifier>,
}

impl ChasePredictor {
    pub fn new(classifier: Arc<dyn WinClassifier>) -> Self {
        ChasePredictor { classifier }
    }

    /// Build a predictor around the JSON model at `path`. A missing or
    /// mismatched artifact fails here, before any request is accepted.
    pub fn from_model_path<P: AsRef<Path>>(path: P) -> Result<Self, ChaseError> {
        let model = LogisticModel::load(path)?;
        Ok(Self::new(Arc::new(model)))
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Win/loss probabilities for the batting side.
    pub fn predict(&self, state: MatchState) -> Result<PredictionResult, ChaseError> {
        self.evaluate(state).map(|p| p.result)
    }

    /// Run the full pipeline, keeping the derived features alongside the result.
    pub fn evaluate(&self, state: MatchState) -> Result<Prediction, ChaseError> {
        let mut stage = Stage::Received;

        advance(&mut stage, Stage::Validating);
        let validated = match validate(state) {
            Ok(v) => v,
            Err(e) => {
                advance(&mut stage, Stage::Rejected);
                warn!("Rejected {} v {}: {}", state.batting_team, state.bowling_team, e);
                return Err(e);
            }
        };

        advance(&mut stage, Stage::Deriving);
        let features = features::derive(&validated);
        let record = features.to_record();

        let classified = self
            .classifier
            .predict_proba(&record)
            .map_err(|e| ChaseError::PredictionFailure(format!("{:#}", e)))
            .and_then(|columns| {
                PredictionResult::from_columns(&columns, features.batting_team, features.bowling_team)
            });

        match classified {
            Ok(result) => {
                advance(&mut stage, Stage::Predicted);
                info!(
                    "{} {:.1}% v {} {:.1}% ({} needed off {}, {} wickets left)",
                    result.batting_team,
                    result.win_probability * 100.0,
                    result.bowling_team,
                    result.loss_probability * 100.0,
                    features.runs_needed,
                    features.balls_remaining,
                    features.wickets_remaining,
                );
                Ok(Prediction { features, result })
            }
            Err(e) => {
                advance(&mut stage, Stage::PredictionFailed);
                error!("Classifier {} failed: {}", self.classifier.name(), e);
                Err(e)
            }
        }
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug_assert!(stage.can_advance_to(next), "illegal transition {:?} -> {:?}", stage, next);
    debug!(from = ?*stage, to = ?next, "request stage");
    *stage = next;
}
