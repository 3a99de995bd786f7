//! In-play win probability for a side chasing a target in a 20-over match.
//!
//! A request goes through three steps:
//! 1. [`match_state::validate`] checks the entered figures describe a live chase
//! 2. [`features::derive`] turns them into the classifier's feature row
//! 3. a [`classifier::WinClassifier`] scores the row
//!
//! [`engine::ChasePredictor`] runs all three. Each request is independent.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod match_state;

pub use classifier::{LogisticModel, PredictionResult, WinClassifier};
pub use engine::{ChasePredictor, Prediction, Stage};
pub use error::ChaseError;
pub use features::{FeatureRecord, FeatureValue, FeatureVector};
pub use match_state::{City, MatchState, Overs, Team};
