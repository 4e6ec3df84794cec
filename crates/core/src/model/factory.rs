//! Model factory for creating model instances from configuration.

use crate::model::adapters::{ConstantModel, LinearModel};
use crate::model::base::Model;
use anyhow::{Context, Result};
use mp_protocol::config_models::ModelConfig;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Factory for creating model instances based on configuration.
pub struct ModelFactory;

impl ModelFactory {
    /// Create a model instance from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The `[model]` section of `config.toml`
    /// * `base_dir` - Directory that relative resource paths are resolved against
    ///
    /// # Behavior
    ///
    /// - `linear` → `LinearModel` with the inline parameters
    /// - `constant` → `ConstantModel`
    /// - `resource` → `LinearModel` loaded from the JSON file at `path`
    ///
    /// # Examples
    ///
    /// ```
    /// use mp_core::model::ModelFactory;
    /// use mp_protocol::config_models::ModelConfig;
    /// use std::path::Path;
    ///
    /// let model = ModelFactory::create(&ModelConfig::default(), Path::new(".")).unwrap();
    /// assert_eq!(model.name(), "linear");
    /// ```
    pub fn create(config: &ModelConfig, base_dir: &Path) -> Result<Arc<dyn Model>> {
        let model: Arc<dyn Model> = match config {
            ModelConfig::Linear(linear) => Arc::new(LinearModel::new(linear.clone())),
            ModelConfig::Constant { output } => Arc::new(ConstantModel::new(output.clone())),
            ModelConfig::Resource { path } => {
                let path = base_dir.join(path);
                let model = LinearModel::from_file(&path)
                    .with_context(|| format!("Failed to load model resource {}", path.display()))?;
                Arc::new(model)
            }
        };

        info!(model = model.name(), "model ready");
        Ok(model)
    }
}
