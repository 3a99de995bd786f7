pub mod logistic;
pub mod result;

pub use logistic::{LogisticModel, ModelMetadata};
pub use result::{PredictionResult, LOSS_COLUMN, PROBABILITY_TOLERANCE, WIN_COLUMN};

use anyhow::Result;

use crate::features::FeatureRecord;

/// A pre-trained binary win/loss classifier.
///
/// Implementations are read-only once built and shared across requests.
pub trait WinClassifier: Send + Sync {
    /// Class probabilities for a single row, in column order
    /// `[loss (bowling side wins), win (batting side wins)]`.
    fn predict_proba(&self, record: &FeatureRecord) -> Result<Vec<f64>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
