//! Background task management for backend operations.
//!
//! Adapted bookkeeping around `tokio::spawn`: every fetch or commit runs
//! on its own task, results come back as [`Action`]s over an unbounded
//! channel, and finished handles are swept once per loop iteration.
//! Dropping the manager aborts anything still running.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::{Action, Notification};
use crate::backend::AttendanceBackend;
use crate::committer::{TransitionCommitter, TransitionRequest};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Fetch the record collection in the background. Used for both the
    /// initial load and every manual/post-commit refresh; a failed fetch
    /// surfaces as a single error notification and leaves the previous
    /// collection in place.
    pub fn spawn_fetch(&mut self, backend: Arc<dyn AttendanceBackend>) -> TaskId {
        let action_sender = self.action_sender.clone();

        self.spawn("Fetching records".to_string(), async move {
            match backend.fetch_records().await {
                Ok(records) => {
                    let _ = action_sender.send(Action::RecordsLoaded(records));
                }
                Err(e) => {
                    warn!("Record fetch failed: {e}");
                    let _ = action_sender.send(Action::Notify(Notification::error(
                        "Error",
                        format!("Failed to load records: {e}"),
                    )));
                }
            }
            let _ = action_sender.send(Action::FetchFinished);
        })
    }

    /// Run one commit cycle in the background.
    pub fn spawn_commit(
        &mut self,
        backend: Arc<dyn AttendanceBackend>,
        request: TransitionRequest,
    ) -> TaskId {
        let committer = TransitionCommitter::new(backend, self.action_sender.clone());
        let description = format!("Committing move: {} -> {}", request.record_id, request.to);

        self.spawn(description, async move {
            committer.commit(request).await;
        })
    }

    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Sweep finished tasks out of the bookkeeping map.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
