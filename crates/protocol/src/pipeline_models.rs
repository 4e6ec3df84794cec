//! Pipeline lifecycle state.
//!
//! This module defines the closed set of states a data pipeline moves
//! through while the controller feeds it model output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the current lifecycle state of a data pipeline.
///
/// Normal progression:
/// Idle -> Running <-> Paused
///
/// Special states:
/// - Failed: reachable from any state via `fail()`, never left again
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    /// Pipeline has been created but has not received data yet.
    #[default]
    Idle,

    /// Pipeline is accepting data.
    Running,

    /// Pipeline has been paused and will be resumed on the next input.
    Paused,

    /// Pipeline has failed. Input is dropped from here on.
    Failed,
}

impl PipelineState {
    /// Upper-case name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineState::Idle => "IDLE",
            PipelineState::Running => "RUNNING",
            PipelineState::Paused => "PAUSED",
            PipelineState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
