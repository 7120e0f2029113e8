//! Transition committer: applies an approved status change against the
//! backend and re-synchronizes the record store.
//!
//! One commit cycle is strictly ordered: the backend update completes
//! (success or failure) before the refetch is attempted, the refetch
//! completes before the cycle finishes, and `CommitFinished` is always
//! the last action sent so the UI can clear its busy state and gesture
//! markers no matter what happened.

use std::sync::Arc;

use log::{error, info};
use tokio::sync::mpsc;

use crate::backend::AttendanceBackend;
use crate::records::AttendanceStatus;
use crate::ui::core::actions::{Action, Notification};

/// One approved status change, ready for the backend.
///
/// `reason` is empty unless the target status is gated, in which case
/// the transition gate has already validated it as non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub record_id: String,
    pub from: AttendanceStatus,
    pub to: AttendanceStatus,
    pub reason: String,
}

pub struct TransitionCommitter {
    backend: Arc<dyn AttendanceBackend>,
    actions: mpsc::UnboundedSender<Action>,
}

impl TransitionCommitter {
    pub fn new(backend: Arc<dyn AttendanceBackend>, actions: mpsc::UnboundedSender<Action>) -> Self {
        Self { backend, actions }
    }

    /// Execute one commit cycle. Never returns an error: every outcome
    /// is reported through the action channel as a notification.
    pub async fn commit(&self, request: TransitionRequest) {
        info!(
            "Committing status change: {} {} -> {}",
            request.record_id, request.from, request.to
        );

        match self
            .backend
            .update_status(&request.record_id, request.to, &request.reason)
            .await
        {
            Ok(()) => match self.backend.fetch_records().await {
                Ok(records) => {
                    let _ = self.actions.send(Action::RecordsLoaded(records));
                    let _ = self.actions.send(Action::Notify(Notification::success(
                        "Success",
                        format!("Status updated to {}", request.to.title()),
                    )));
                }
                Err(e) => {
                    // The last good collection stays on screen.
                    error!("Refresh after update failed: {e}");
                    let _ = self.actions.send(Action::Notify(Notification::error(
                        "Error",
                        format!("Failed to refresh data: {e}"),
                    )));
                }
            },
            Err(e) => {
                error!("Status update failed: {e}");
                let _ = self.actions.send(Action::Notify(Notification::error(
                    "Error",
                    format!("Failed to update status: {e}"),
                )));
            }
        }

        let _ = self.actions.send(Action::CommitFinished);
    }
}
