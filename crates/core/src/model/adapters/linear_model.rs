//! Linear scoring model.
//!
//! Computes `score = bias + sum(weight * feature)` over the configured
//! features and labels the input `1` when the score reaches the threshold.

use crate::model::base::{Model, ModelError};
use async_trait::async_trait;
use mp_protocol::config_models::LinearModelConfig;
use mp_protocol::record::{Record, Value};
use std::path::Path;
use tracing::debug;

/// Key under which the raw score is reported next to the label.
pub const SCORE_KEY: &str = "score";

pub struct LinearModel {
    config: LinearModelConfig,
}

impl LinearModel {
    pub fn new(config: LinearModelConfig) -> Self {
        Self { config }
    }

    /// Load the model parameters from a JSON resource file.
    ///
    /// The file holds a serialized [`LinearModelConfig`]:
    ///
    /// ```json
    /// { "weights": { "feature1": 0.05, "feature2": 0.05 }, "bias": -1.0 }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Load` if the file cannot be read or parsed, or if
    /// the parameters fail [`LinearModelConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: LinearModelConfig =
            serde_json::from_str(&content).map_err(|e| ModelError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate().map_err(|reason| ModelError::Load {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!(path = %path.display(), features = config.weights.len(), "loaded linear model");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &LinearModelConfig {
        &self.config
    }

    fn score(&self, input: &Record) -> Result<f64, ModelError> {
        let mut score = self.config.bias;
        for (feature, weight) in &self.config.weights {
            let value = input
                .get(feature)
                .ok_or_else(|| ModelError::MissingFeature(feature.clone()))?;
            let x = value
                .as_f64()
                .ok_or_else(|| ModelError::NonNumericFeature(feature.clone()))?;
            score += weight * x;
        }
        Ok(score)
    }
}

#[async_trait]
impl Model for LinearModel {
    fn name(&self) -> &str {
        "linear"
    }

    async fn predict(&self, input: &Record) -> Result<Record, ModelError> {
        if input.is_empty() {
            return Err(ModelError::EmptyInput);
        }

        let score = self.score(input)?;
        let label = if score >= self.config.threshold { 1 } else { 0 };

        Ok(Record::new()
            .with(self.config.output_key.clone(), Value::Int(label))
            .with(SCORE_KEY, Value::Float(score)))
    }
}
