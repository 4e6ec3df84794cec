//! Model that answers every input with the same record.

use crate::model::base::{Model, ModelError};
use async_trait::async_trait;
use mp_protocol::record::Record;

pub struct ConstantModel {
    output: Record,
}

impl ConstantModel {
    pub fn new(output: Record) -> Self {
        Self { output }
    }
}

#[async_trait]
impl Model for ConstantModel {
    fn name(&self) -> &str {
        "constant"
    }

    async fn predict(&self, input: &Record) -> Result<Record, ModelError> {
        if input.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        Ok(self.output.clone())
    }
}
