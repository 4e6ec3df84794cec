//! Configuration loading and management.
//!
//! This module loads and validates `.model-pipeline/config.toml`.

pub mod error;
pub mod loader;
pub mod models;
