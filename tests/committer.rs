use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use presentist::backend::{AttendanceBackend, BackendError};
use presentist::committer::{TransitionCommitter, TransitionRequest};
use presentist::records::{AttendanceStatus, Record};
use presentist::ui::core::{Action, Severity};

/// Scripted backend recording every call in order.
struct MockBackend {
    records: Mutex<Vec<Record>>,
    fail_update: bool,
    fail_fetch: bool,
    calls: Mutex<Vec<String>>,
}

impl MockBackend {
    fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_update: false,
            fail_fetch: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendanceBackend for MockBackend {
    async fn fetch_records(&self) -> Result<Vec<Record>, BackendError> {
        self.calls.lock().unwrap().push("fetch".to_string());
        if self.fail_fetch {
            return Err(BackendError::Io("disk offline".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update_status(
        &self,
        record_id: &str,
        new_status: AttendanceStatus,
        reason: &str,
    ) -> Result<(), BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("update {record_id} {new_status} '{reason}'"));
        if self.fail_update {
            return Err(BackendError::Other("rejected by server".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| BackendError::NotFound(record_id.to_string()))?;
        record.status = new_status;
        Ok(())
    }
}

fn sample_records() -> Vec<Record> {
    vec![Record::new(
        "1".to_string(),
        "Anna".to_string(),
        AttendanceStatus::Present,
    )]
}

fn request(to: AttendanceStatus, reason: &str) -> TransitionRequest {
    TransitionRequest {
        record_id: "1".to_string(),
        from: AttendanceStatus::Present,
        to,
        reason: reason.to_string(),
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

#[tokio::test]
async fn test_successful_commit_updates_then_refreshes_then_finishes() {
    let backend = Arc::new(MockBackend::new(sample_records()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let committer = TransitionCommitter::new(backend.clone(), tx);

    committer.commit(request(AttendanceStatus::Unexcused, "")).await;

    // The backend update always completes before the refetch starts
    assert_eq!(
        backend.calls(),
        vec!["update 1 unexcused ''".to_string(), "fetch".to_string()]
    );

    let actions = drain(&mut rx);
    assert_eq!(actions.len(), 3);

    match &actions[0] {
        Action::RecordsLoaded(records) => {
            assert_eq!(records[0].status, AttendanceStatus::Unexcused);
        }
        other => panic!("expected RecordsLoaded first, got {other:?}"),
    }
    match &actions[1] {
        Action::Notify(n) => {
            assert_eq!(n.severity, Severity::Success);
            assert!(n.message.contains("Unexcused"));
        }
        other => panic!("expected success notification, got {other:?}"),
    }
    assert!(matches!(actions[2], Action::CommitFinished));
}

#[tokio::test]
async fn test_gated_commit_passes_reason_to_backend() {
    let backend = Arc::new(MockBackend::new(sample_records()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let committer = TransitionCommitter::new(backend.clone(), tx);

    committer.commit(request(AttendanceStatus::Excused, "sick")).await;

    assert_eq!(backend.calls()[0], "update 1 excused 'sick'");
    let actions = drain(&mut rx);
    assert!(matches!(actions.last(), Some(Action::CommitFinished)));
}

#[tokio::test]
async fn test_failed_update_skips_refresh_and_notifies() {
    let backend = Arc::new(MockBackend::new(sample_records()).failing_update());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let committer = TransitionCommitter::new(backend.clone(), tx);

    committer.commit(request(AttendanceStatus::Unexcused, "")).await;

    // No refetch after a rejected update
    assert_eq!(backend.calls(), vec!["update 1 unexcused ''".to_string()]);

    let actions = drain(&mut rx);
    assert_eq!(actions.len(), 2);
    match &actions[0] {
        Action::Notify(n) => {
            assert_eq!(n.severity, Severity::Error);
            assert!(n.message.contains("rejected by server"));
        }
        other => panic!("expected error notification, got {other:?}"),
    }
    // Loading is cleared even on the error path
    assert!(matches!(actions[1], Action::CommitFinished));
}

#[tokio::test]
async fn test_failed_refresh_keeps_last_collection_and_finishes() {
    let backend = Arc::new(MockBackend::new(sample_records()).failing_fetch());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let committer = TransitionCommitter::new(backend.clone(), tx);

    committer.commit(request(AttendanceStatus::Unexcused, "")).await;

    assert_eq!(
        backend.calls(),
        vec!["update 1 unexcused ''".to_string(), "fetch".to_string()]
    );

    let actions = drain(&mut rx);
    assert_eq!(actions.len(), 2);
    // No RecordsLoaded: the previously displayed collection stays
    match &actions[0] {
        Action::Notify(n) => {
            assert_eq!(n.severity, Severity::Error);
            assert!(n.message.contains("Failed to refresh"));
        }
        other => panic!("expected error notification, got {other:?}"),
    }
    assert!(matches!(actions[1], Action::CommitFinished));
}
