//! Mock model implementation for testing.

use crate::model::base::{Model, ModelError};
use async_trait::async_trait;
use mp_protocol::record::Record;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A model that returns a canned response and counts how often it was asked.
///
/// Clones share the call counter.
#[derive(Clone)]
pub struct MockModel {
    response: Result<Record, ModelError>,
    calls: Arc<AtomicUsize>,
}

impl MockModel {
    pub fn new(response: Result<Record, ModelError>) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn success(output: Record) -> Self {
        Self::new(Ok(output))
    }

    pub fn failing() -> Self {
        Self::new(Err(ModelError::Prediction("Mock failure".to_string())))
    }

    /// Number of `predict` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Model for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn predict(&self, _input: &Record) -> Result<Record, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
