//! # mp-core
//!
//! Core data pipeline engine for model-pipeline.
//!
//! This crate provides:
//! - Configuration loading from the `.model-pipeline/` directory
//! - Model abstraction layer and adapter implementations
//! - A single-worker FIFO work queue
//! - The pipeline state machine
//! - The controller that connects model output to the pipeline
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management
//! - [`model`]: Model trait, adapters and factory
//! - [`queue`]: Work queue that runs pipeline side effects
//! - [`pipeline`]: Pipeline state machine
//! - [`controller`]: Input → model → pipeline dispatch

pub mod config;
pub mod controller;
pub mod model;
pub mod pipeline;
pub mod queue;
