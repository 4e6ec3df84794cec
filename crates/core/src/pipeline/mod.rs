//! Data pipeline state machine.
//!
//! A `Pipeline` holds its lifecycle state and a handle to the shared work
//! queue. State changes only happen through the transition methods below;
//! data is handed to the queue with [`Pipeline::pass_data`].
//!
//! | From    | Method     | To      |
//! |---------|------------|---------|
//! | Idle    | `start()`  | Running |
//! | Running | `pause()`  | Paused  |
//! | Paused  | `resume()` | Running |
//! | any     | `fail()`   | Failed  |
//!
//! Transitions are unconditional: calling one from an unexpected state
//! overwrites the state anyway.
//!
//! Events are published with `try_send`; a full observer channel drops
//! events instead of blocking transitions or the work queue.

use crate::queue::WorkQueue;
use mp_protocol::ipc::Event;
use mp_protocol::pipeline_models::PipelineState;
use mp_protocol::record::Record;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;
use tracing::{debug, info};
use uuid::Uuid;

pub struct Pipeline {
    id: Uuid,
    state: PipelineState,
    queue: WorkQueue,
    events_tx: Option<Sender<Event>>,
}

impl Pipeline {
    /// Create a new pipeline in the Idle state.
    ///
    /// # Arguments
    ///
    /// * `queue` - Shared work queue that `pass_data` submits to
    pub fn new(queue: WorkQueue) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: PipelineState::Idle,
            queue,
            events_tx: None,
        }
    }

    /// Publish state changes and processed records on `events_tx`.
    pub fn with_events(mut self, events_tx: Sender<Event>) -> Self {
        self.events_tx = Some(events_tx);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn start(&mut self) {
        self.transition(PipelineState::Running);
    }

    pub fn pause(&mut self) {
        self.transition(PipelineState::Paused);
    }

    pub fn resume(&mut self) {
        self.transition(PipelineState::Running);
    }

    /// Move to the terminal Failed state.
    ///
    /// Nothing in the controller calls this; it is exposed for callers that
    /// decide the pipeline can no longer accept data.
    pub fn fail(&mut self) {
        self.transition(PipelineState::Failed);
    }

    /// Submit `data` to the work queue for processing.
    ///
    /// Returns immediately. The queued task logs the record and emits
    /// `Event::DataProcessed`; nothing is reported back to the caller.
    /// Submitting the same record twice produces two independent tasks.
    pub fn pass_data(&self, data: Record) {
        let pipeline_id = self.id;
        let events_tx = self.events_tx.clone();

        self.queue.submit(async move {
            info!(pipeline_id = %pipeline_id, "Processing data: {data}");
            if let Some(tx) = events_tx {
                publish(
                    &tx,
                    Event::DataProcessed {
                        pipeline_id,
                        record: data,
                    },
                );
            }
        });
    }

    /// Emit an event on the pipeline's channel, if one is attached.
    pub(crate) fn emit(&self, event: Event) {
        if let Some(tx) = &self.events_tx {
            publish(tx, event);
        }
    }

    fn transition(&mut self, to: PipelineState) {
        let from = self.state;
        self.state = to;
        debug!(pipeline_id = %self.id, %from, %to, "pipeline state changed");

        self.emit(Event::StateChanged {
            pipeline_id: self.id,
            from,
            to,
        });
    }
}

/// Send without waiting. Observers that fall behind miss events; neither
/// the caller nor the work queue is held up by them.
fn publish(tx: &Sender<Event>, event: Event) {
    match tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            debug!(pipeline_id = %event.pipeline_id(), "event channel full, dropping event");
        }
        Err(TrySendError::Closed(_)) => {}
    }
}
