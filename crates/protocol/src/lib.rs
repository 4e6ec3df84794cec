//! # mp-protocol
//!
//! Core data model definitions for model-pipeline.
//!
//! This crate defines all shared data structures used for:
//! - Records exchanged with the inference model
//! - Pipeline state
//! - Events emitted while the pipeline runs
//! - Configuration file parsing (`config.toml`)
//!
//! ## Modules
//!
//! - [`record`]: Structured key/value records and their scalar values
//! - [`pipeline_models`]: Pipeline lifecycle state
//! - [`ipc`]: Events emitted by the pipeline and controller
//! - [`config_models`]: Global configuration from config.toml
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and uuid
//! - Independent compilation: No dependencies on other model-pipeline crates

pub mod config_models;
pub mod ipc;
pub mod pipeline_models;
pub mod record;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use pipeline_models::*;
pub use record::*;
