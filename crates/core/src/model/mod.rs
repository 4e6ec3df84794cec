//! Inference model abstraction.
//!
//! This module provides the `Model` trait (Adapter Pattern), concrete
//! model adapters and the `ModelFactory` that builds one from configuration.

pub mod adapters;
pub mod base;
pub mod factory;

pub use adapters::{ConstantModel, LinearModel, MockModel};
pub use base::{Model, ModelError};
pub use factory::ModelFactory;
