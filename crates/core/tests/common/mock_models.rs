//! Mock model implementations for deterministic testing.

use async_trait::async_trait;
use mp_core::model::{Model, ModelError};
use mp_protocol::record::{Record, Value};
use std::time::Duration;

/// A model that copies the input and tags it with the sum of its numeric
/// fields, after an optional delay.
#[allow(dead_code)]
pub struct SummingModel {
    pub delay_ms: u64,
}

#[async_trait]
impl Model for SummingModel {
    fn name(&self) -> &str {
        "summing"
    }

    async fn predict(&self, input: &Record) -> Result<Record, ModelError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        let sum: f64 = input.iter().filter_map(|(_, v)| v.as_f64()).sum();
        Ok(input.clone().with("sum", Value::Float(sum)))
    }
}

/// A model that fails whenever the input has a field named `poison`.
#[allow(dead_code)]
pub struct PickyModel;

#[async_trait]
impl Model for PickyModel {
    fn name(&self) -> &str {
        "picky"
    }

    async fn predict(&self, input: &Record) -> Result<Record, ModelError> {
        if input.contains_key("poison") {
            return Err(ModelError::Prediction("poisoned input".to_string()));
        }
        Ok(Record::new().with("result", 1))
    }
}
