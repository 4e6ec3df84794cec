//! Common test utilities shared by the integration tests.
//!
//! - Fixtures for building a wired controller
//! - Event assertions
//! - Log capture
//! - Mock models

pub mod assertions;
pub mod fixtures;
pub mod logs;
pub mod mock_models;

pub use assertions::*;
pub use fixtures::*;
pub use logs::*;
#[allow(unused_imports)]
pub use mock_models::*;
