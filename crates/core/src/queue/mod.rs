//! Single-worker FIFO work queue.
//!
//! A `WorkQueue` is the one asynchronous execution context the pipeline
//! submits its side effects to. Submission never blocks: tasks are pushed on
//! an unbounded channel and a single background worker runs them one at a
//! time, in submission order.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

type Task = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Shared handle for submitting work to the queue.
///
/// Cloning the handle does not create a new queue; every clone feeds the
/// same worker. The worker exits once all handles are dropped.
#[derive(Clone)]
pub struct WorkQueue {
    tx: mpsc::UnboundedSender<Task>,
    pending: Arc<AtomicUsize>,
}

/// Handle to the background worker task of a [`WorkQueue`].
pub struct QueueWorker {
    handle: JoinHandle<()>,
}

impl WorkQueue {
    /// Create a queue and spawn its worker on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn() -> (Self, QueueWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));

        let handle = tokio::spawn(run_worker(rx, Arc::clone(&pending)));

        (Self { tx, pending }, QueueWorker { handle })
    }

    /// Submit a task. Fire-and-forget: the caller gets no completion or
    /// error signal.
    ///
    /// If the worker has already stopped the task is dropped and a warning
    /// is logged.
    pub fn submit<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(Box::pin(task)).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            warn!("work queue worker has stopped, dropping task");
        }
    }

    /// Wait until every task submitted before this call has run.
    ///
    /// Returns immediately if the worker has stopped.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        self.submit(async move {
            let _ = done_tx.send(());
        });
        let _ = done_rx.await;
    }

    /// Number of submitted tasks that have not started yet.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl QueueWorker {
    /// Wait for the worker to exit.
    ///
    /// The worker only exits after every `WorkQueue` handle has been dropped
    /// and the remaining tasks have run.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            error!(error = %e, "work queue worker terminated abnormally");
        }
    }
}

async fn run_worker(mut rx: mpsc::UnboundedReceiver<Task>, pending: Arc<AtomicUsize>) {
    while let Some(task) = rx.recv().await {
        pending.fetch_sub(1, Ordering::SeqCst);

        // Each task runs in its own tokio task so a panic stays contained.
        if let Err(e) = tokio::spawn(task).await {
            error!(error = %e, "work item failed");
        }
    }
    debug!("work queue closed");
}
