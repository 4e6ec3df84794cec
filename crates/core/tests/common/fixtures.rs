//! Test fixtures for wiring a controller to a queue and event channel.

use mp_core::controller::Controller;
use mp_core::model::Model;
use mp_core::pipeline::Pipeline;
use mp_core::queue::WorkQueue;
use mp_protocol::ipc::Event;
use mp_protocol::pipeline_models::PipelineState;
use mp_protocol::record::Record;
use std::sync::Arc;
use tokio::sync::mpsc;

/// A controller plus the handles a test needs to observe it.
pub struct Harness {
    pub controller: Controller,
    pub queue: WorkQueue,
    pub events_rx: mpsc::Receiver<Event>,
}

impl Harness {
    pub fn new(model: Arc<dyn Model>) -> Self {
        let (queue, _worker) = WorkQueue::spawn();
        let (events_tx, events_rx) = mpsc::channel(100);
        let pipeline = Pipeline::new(queue.clone()).with_events(events_tx);

        Self {
            controller: Controller::new(model, pipeline),
            queue,
            events_rx,
        }
    }

    /// Move the pipeline into `state` and discard the transition events.
    pub async fn put_in_state(&mut self, state: PipelineState) {
        let pipeline = self.controller.pipeline_mut();
        match state {
            PipelineState::Idle => {}
            PipelineState::Running => pipeline.start(),
            PipelineState::Paused => {
                pipeline.start();
                pipeline.pause();
            }
            PipelineState::Failed => pipeline.fail(),
        }
        self.drain_events().await;
    }

    /// Wait for queued work to finish and collect every event emitted so far.
    pub async fn drain_events(&mut self) -> Vec<Event> {
        self.queue.flush().await;

        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// The literal input the binary feeds through the pipeline.
pub fn smoke_input() -> Record {
    Record::new().with("feature1", 10).with("feature2", 20)
}
