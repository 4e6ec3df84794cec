//! Global configuration models for `.model-pipeline/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! selects and parameterizes the inference model.

use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::record::Record;

/// Represents global settings from `.model-pipeline/config.toml`.
///
/// # Example
///
/// ```toml
/// # .model-pipeline/config.toml
/// [model]
/// kind = "linear"
/// bias = -1.0
///
/// [model.weights]
/// feature1 = 0.05
/// feature2 = 0.05
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GlobalConfig {
    /// The model the controller runs input through.
    ///
    /// When the `[model]` table is absent the default linear model is used.
    #[serde(default)]
    pub model: ModelConfig,
}

/// Selects which model implementation is built at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelConfig {
    /// A linear scorer with inline parameters.
    Linear(LinearModelConfig),

    /// Returns the same output record for every non-empty input.
    Constant { output: Record },

    /// A linear scorer whose parameters live in a JSON resource file.
    ///
    /// Relative paths are resolved against the `.model-pipeline/` directory.
    Resource { path: PathBuf },
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig::Linear(LinearModelConfig::default())
    }
}

/// Parameters of a linear scorer.
///
/// The model computes `score = bias + sum(weight * input[feature])` and
/// reports `1` under `output_key` when `score >= threshold`, `0` otherwise.
///
/// Omitted `bias` and `threshold` fields default to `0.0` when parsed; the
/// [`Default`] impl is the built-in demo model instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinearModelConfig {
    /// Weight per input feature. Every listed feature must be present in the
    /// input record.
    pub weights: BTreeMap<String, f64>,

    #[serde(default)]
    pub bias: f64,

    #[serde(default)]
    pub threshold: f64,

    /// Key of the class label in the output record.
    #[serde(default = "default_output_key")]
    pub output_key: String,
}

impl LinearModelConfig {
    /// Check that the parameters can produce a usable output record.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.output_key.is_empty() {
            return Err("output_key must not be empty".to_string());
        }
        if !self.bias.is_finite() || !self.threshold.is_finite() {
            return Err("bias and threshold must be finite".to_string());
        }
        if let Some((feature, _)) = self.weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(format!("weight for {feature} must be finite"));
        }
        Ok(())
    }
}

fn default_output_key() -> String {
    "result".to_string()
}

impl Default for LinearModelConfig {
    fn default() -> Self {
        Self {
            weights: BTreeMap::from([
                ("feature1".to_string(), 0.05),
                ("feature2".to_string(), 0.05),
            ]),
            bias: -1.0,
            threshold: 0.0,
            output_key: default_output_key(),
        }
    }
}
