//! Events emitted while the pipeline runs.
//!
//! The pipeline and controller publish these on an optional
//! `tokio::sync::mpsc` channel so that callers can observe state changes
//! and processed data without polling.
//!
//! Uses tagged enum serialization:
//! ```json
//! {
//!   "type": "stateChanged",
//!   "payload": {
//!     "pipeline_id": "uuid-here",
//!     "from": "IDLE",
//!     "to": "RUNNING"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline_models::PipelineState;
use crate::record::Record;

/// Notifications published by the pipeline and its controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// The pipeline moved from one state to another.
    ///
    /// Emitted on every transition call, including ones where `from == to`.
    StateChanged {
        pipeline_id: Uuid,
        from: PipelineState,
        to: PipelineState,
    },

    /// A submitted work item has run on the work queue.
    DataProcessed { pipeline_id: Uuid, record: Record },

    /// Input was dropped because the pipeline is in a state that cannot
    /// accept data.
    DataRejected {
        pipeline_id: Uuid,
        state: PipelineState,
    },
}

impl Event {
    /// The pipeline the event belongs to.
    pub fn pipeline_id(&self) -> Uuid {
        match self {
            Event::StateChanged { pipeline_id, .. }
            | Event::DataProcessed { pipeline_id, .. }
            | Event::DataRejected { pipeline_id, .. } => *pipeline_id,
        }
    }
}
