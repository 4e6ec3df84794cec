//! Model adapter implementations.

mod constant_model;
mod linear_model;
pub mod mock_model;

pub use constant_model::ConstantModel;
pub use linear_model::LinearModel;
pub use mock_model::MockModel;
