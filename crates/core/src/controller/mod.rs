//! Controller that runs input through the model and drives the pipeline.
//!
//! The Controller owns one model and one pipeline. For each input it asks
//! the model for a prediction and, depending on the pipeline's state,
//! starts or resumes the pipeline before handing it the model output.

use crate::model::base::Model;
use crate::pipeline::Pipeline;
use mp_protocol::ipc::Event;
use mp_protocol::pipeline_models::PipelineState;
use mp_protocol::record::{InputRecord, OutputRecord};
use std::sync::Arc;
use tracing::{error, warn};

pub struct Controller {
    model: Arc<dyn Model>,
    pipeline: Pipeline,
}

impl Controller {
    /// Create a new Controller.
    ///
    /// # Arguments
    ///
    /// * `model` - The inference model every input is run through
    /// * `pipeline` - The pipeline that receives model output
    pub fn new(model: Arc<dyn Model>, pipeline: Pipeline) -> Self {
        Self { model, pipeline }
    }

    pub fn model(&self) -> &Arc<dyn Model> {
        &self.model
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Mutable access for callers that drive transitions themselves, such as
    /// pausing or failing the pipeline.
    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    /// Run `input` through the model.
    ///
    /// Prediction errors are logged and turned into `None`; they never reach
    /// the caller.
    pub async fn process_input_data(&self, input: &InputRecord) -> Option<OutputRecord> {
        match self.model.predict(input).await {
            Ok(output) => Some(output),
            Err(e) => {
                error!(model = self.model.name(), error = %e, "Error processing input data");
                None
            }
        }
    }

    /// Predict on `input` and forward the output to the pipeline.
    ///
    /// - Idle: start, then pass the data
    /// - Running: pass the data
    /// - Paused: resume, then pass the data
    /// - Failed: log and drop the input
    ///
    /// If the prediction fails nothing happens: no state change and no
    /// submission.
    pub async fn control_data_pipeline(&mut self, input: &InputRecord) {
        let Some(processed) = self.process_input_data(input).await else {
            return;
        };

        match self.pipeline.state() {
            PipelineState::Idle => {
                self.pipeline.start();
                self.pipeline.pass_data(processed);
            }
            PipelineState::Running => {
                self.pipeline.pass_data(processed);
            }
            PipelineState::Paused => {
                self.pipeline.resume();
                self.pipeline.pass_data(processed);
            }
            PipelineState::Failed => {
                warn!(pipeline_id = %self.pipeline.id(), "Data pipeline failed. Cannot process data.");
                self.pipeline
                    .emit(Event::DataRejected {
                        pipeline_id: self.pipeline.id(),
                        state: PipelineState::Failed,
                    });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MockModel;
    use crate::queue::WorkQueue;
    use mp_protocol::record::Record;
    use tokio::sync::mpsc;

    fn smoke_input() -> Record {
        Record::new().with("feature1", 10).with("feature2", 20)
    }

    #[tokio::test]
    async fn test_process_input_data_success() {
        let (queue, _worker) = WorkQueue::spawn();
        let model = MockModel::success(Record::new().with("result", 1));
        let controller = Controller::new(Arc::new(model), Pipeline::new(queue));

        let output = controller.process_input_data(&smoke_input()).await;
        assert_eq!(output, Some(Record::new().with("result", 1)));
    }

    #[tokio::test]
    async fn test_process_input_data_failure_returns_none() {
        let (queue, _worker) = WorkQueue::spawn();
        let controller = Controller::new(Arc::new(MockModel::failing()), Pipeline::new(queue));

        assert_eq!(controller.process_input_data(&smoke_input()).await, None);
    }

    #[tokio::test]
    async fn test_control_from_idle_starts_pipeline() {
        let (queue, _worker) = WorkQueue::spawn();
        let (tx, mut rx) = mpsc::channel(100);
        let model = MockModel::success(Record::new().with("result", 1));
        let mut controller =
            Controller::new(Arc::new(model), Pipeline::new(queue.clone()).with_events(tx));

        controller.control_data_pipeline(&smoke_input()).await;
        queue.flush().await;

        assert_eq!(controller.pipeline().state(), PipelineState::Running);
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::StateChanged {
                to: PipelineState::Running,
                ..
            }
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::DataProcessed { .. }
        ));
    }

    #[tokio::test]
    async fn test_control_skips_pipeline_when_prediction_fails() {
        let (queue, _worker) = WorkQueue::spawn();
        let (tx, mut rx) = mpsc::channel(100);
        let mut controller = Controller::new(
            Arc::new(MockModel::failing()),
            Pipeline::new(queue.clone()).with_events(tx),
        );

        controller.control_data_pipeline(&smoke_input()).await;
        queue.flush().await;

        assert_eq!(controller.pipeline().state(), PipelineState::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_pipeline_mut_allows_external_fail() {
        let (queue, _worker) = WorkQueue::spawn();
        let model = MockModel::success(Record::new().with("result", 1));
        let mut controller = Controller::new(Arc::new(model), Pipeline::new(queue));

        controller.pipeline_mut().fail();
        assert_eq!(controller.pipeline().state(), PipelineState::Failed);
    }
}
