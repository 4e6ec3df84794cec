//! Configuration file loader for the `.model-pipeline/` directory.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::{AppConfig, CONFIG_DIR};
use mp_protocol::config_models::{GlobalConfig, ModelConfig};
use std::path::Path;
use tracing::debug;

/// Loads configuration from `<root>/.model-pipeline/config.toml`.
///
/// # Returns
///
/// An `AppConfig`. If the directory or the file is missing, the default
/// configuration is returned rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file is not valid TOML or does not match the schema
/// - The model parameters are unusable (empty output key, non-finite numbers)
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_dir = root.join(CONFIG_DIR);

    if !config_dir.exists() {
        debug!(path = %config_dir.display(), "no config directory, using defaults");
        return Ok(AppConfig::default_for(root));
    }

    let global = load_global_config(&config_dir)?;

    Ok(AppConfig { global, config_dir })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(config_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    validate(&config, &config_path)?;
    debug!(path = %config_path.display(), "loaded config");

    Ok(config)
}

fn validate(config: &GlobalConfig, path: &Path) -> ConfigResult<()> {
    let invalid = |reason: String| ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };

    match &config.model {
        ModelConfig::Linear(linear) => {
            linear
                .validate()
                .map_err(|reason| invalid(format!("model: {reason}")))?;
        }
        ModelConfig::Constant { output } => {
            if output.is_empty() {
                return Err(invalid("model.output must not be empty".to_string()));
            }
        }
        ModelConfig::Resource { path } => {
            if path.as_os_str().is_empty() {
                return Err(invalid("model.path must not be empty".to_string()));
            }
        }
    }

    Ok(())
}
