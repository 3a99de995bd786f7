//! Logistic win model stored as JSON.
//!
//! Categorical columns are one-hot: each known category carries its own
//! weight. The artifact must cover every team and city the caller can send;
//! a model trained on a different vocabulary is refused at load time.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use super::WinClassifier;
use crate::error::{ChaseError, ModelFault};
use crate::features::{names, FeatureRecord};
use crate::match_state::{City, Team};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub version: String,
    /// Seasons or date range of the training data
    pub trained_on: String,
    pub n_samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub metadata: ModelMetadata,
    pub intercept: f64,
    /// Coefficient per numeric column
    pub numeric: BTreeMap<String, f64>,
    /// Column -> category -> weight
    pub categorical: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LogisticModel {
    /// Load and check an artifact from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChaseError> {
        let path = path.as_ref();
        let unavailable = |fault: ModelFault, reason: String| ChaseError::ModelUnavailable {
            path: path.display().to_string(),
            fault,
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            let fault = if e.kind() == ErrorKind::NotFound {
                ModelFault::Missing
            } else {
                ModelFault::Unusable
            };
            unavailable(fault, format!("failed to read {}: {}", path.display(), e))
        })?;
        let model = Self::from_json(&raw)
            .map_err(|e| unavailable(ModelFault::Unusable, format!("{:#}", e)))?;

        info!(
            "Loaded win model {} ({} samples, trained on {})",
            model.metadata.version, model.metadata.n_samples, model.metadata.trained_on
        );
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let model: LogisticModel =
            serde_json::from_str(raw).context("model artifact is not valid JSON")?;
        model.check_schema()?;
        Ok(model)
    }

    /// The artifact must score exactly our columns and know every category
    /// we can send it.
    pub fn check_schema(&self) -> Result<()> {
        if !self.intercept.is_finite() {
            bail!("intercept is not finite");
        }

        let expected: BTreeSet<&str> = names::NUMERIC.into_iter().collect();
        let found: BTreeSet<&str> = self.numeric.keys().map(String::as_str).collect();
        if expected != found {
            bail!("numeric columns {:?} do not match expected {:?}", found, expected);
        }
        if let Some((k, _)) = self.numeric.iter().find(|(_, w)| !w.is_finite()) {
            bail!("coefficient for {} is not finite", k);
        }

        let expected: BTreeSet<&str> = names::CATEGORICAL.into_iter().collect();
        let found: BTreeSet<&str> = self.categorical.keys().map(String::as_str).collect();
        if expected != found {
            bail!("categorical columns {:?} do not match expected {:?}", found, expected);
        }

        let team_names: Vec<&str> = Team::ALL.iter().map(|t| t.name()).collect();
        let city_names: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
        for (column, vocabulary) in [
            (names::BATTING_TEAM, &team_names),
            (names::BOWLING_TEAM, &team_names),
            (names::VENUE_CITY, &city_names),
        ] {
            let weights = &self.categorical[column];
            for category in vocabulary {
                match weights.get(*category) {
                    Some(w) if w.is_finite() => {}
                    Some(_) => bail!("weight for {} = {:?} is not finite", column, category),
                    None => bail!("model was not trained on {} = {:?}", column, category),
                }
            }
        }
        Ok(())
    }

    fn logit(&self, record: &FeatureRecord) -> Result<f64> {
        let mut z = self.intercept;

        for (column, coef) in &self.numeric {
            let value = record
                .get(column)
                .and_then(|v| v.as_number())
                .with_context(|| format!("missing numeric feature {}", column))?;
            z += coef * value;
        }

        for (column, weights) in &self.categorical {
            let category = record
                .get(column)
                .and_then(|v| v.as_category())
                .with_context(|| format!("missing categorical feature {}", column))?;
            let weight = weights
                .get(category)
                .with_context(|| format!("unseen category {:?} for {}", category, column))?;
            z += weight;
        }

        if !z.is_finite() {
            bail!("logit is not finite");
        }
        Ok(z)
    }
}

impl WinClassifier for LogisticModel {
    fn predict_proba(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        let p = sigmoid(self.logit(record)?);
        Ok(vec![1.0 - p, p])
    }

    fn name(&self) -> &str {
        &self.metadata.version
    }
}

/// Logistic sigmoid, split by sign so neither branch overflows.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}
