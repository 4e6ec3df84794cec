//! Base Model trait and supporting types.

use async_trait::async_trait;
use mp_protocol::record::{InputRecord, OutputRecord};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Input record is empty")]
    EmptyInput,
    #[error("Missing input feature: {0}")]
    MissingFeature(String),
    #[error("Input feature is not numeric: {0}")]
    NonNumericFeature(String),
    #[error("Prediction failed: {0}")]
    Prediction(String),
    #[error("Failed to load model from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
}

/// An inference model that turns an input record into an output record.
///
/// Implementations are opaque to the controller: it only sees the output
/// record or the error.
#[async_trait]
pub trait Model: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &str;

    async fn predict(&self, input: &InputRecord) -> Result<OutputRecord, ModelError>;
}
