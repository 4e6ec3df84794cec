//! Loaded application configuration.

use mp_protocol::config_models::GlobalConfig;
use std::path::PathBuf;

/// Name of the configuration directory under the project root.
pub const CONFIG_DIR: &str = ".model-pipeline";

/// Unified application configuration loaded from `.model-pipeline/`.
///
/// # Example
///
/// ```rust,no_run
/// use mp_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Model: {:?}", config.global.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// The `.model-pipeline/` directory. Model resource paths are resolved
    /// against it.
    pub config_dir: PathBuf,
}

impl AppConfig {
    /// Default configuration rooted at `root`.
    pub fn default_for(root: &std::path::Path) -> Self {
        Self {
            global: GlobalConfig::default(),
            config_dir: root.join(CONFIG_DIR),
        }
    }
}
