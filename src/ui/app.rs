//! Application state and the action loop.
//!
//! `App` owns every piece of board state: the record store, the gesture
//! normalizer, the transition gate, board view state, and the toast /
//! overlay flags. Background fetch and commit tasks report back as
//! [`Action`]s, drained once per loop iteration.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::info;
use tokio::sync::mpsc;

use crate::backend::AttendanceBackend;
use crate::committer::TransitionRequest;
use crate::config::Config;
use crate::constants::TOAST_TTL;
use crate::logger::Logger;
use crate::store::RecordStore;
use crate::ui::components::board::BoardView;
use crate::ui::core::{Action, Notification, Severity, TaskManager};
use crate::ui::gate::{GateOutcome, GatePolicy, TransitionGate};
use crate::ui::gesture::{GestureNormalizer, MoveIntent};

/// The most recent notification, shown until its TTL runs out.
pub struct ActiveToast {
    pub notification: Notification,
    shown_at: Instant,
}

pub struct App {
    /// Route mouse input through the touch adapter instead of the
    /// pointer adapter.
    pub touch_input: bool,
    pub store: RecordStore,
    pub gestures: GestureNormalizer,
    pub gate: TransitionGate,
    pub board: BoardView,
    pub toast: Option<ActiveToast>,
    pub show_help: bool,
    pub show_logs: bool,
    pub should_quit: bool,
    pub logger: Logger,
    backend: Arc<dyn AttendanceBackend>,
    task_manager: TaskManager,
    background_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: &Config, backend: Arc<dyn AttendanceBackend>) -> Result<Self> {
        let policy = GatePolicy::from_statuses(config.gated_statuses()?);
        let (task_manager, background_rx) = TaskManager::new();

        Ok(Self {
            touch_input: config.ui.touch_input,
            store: RecordStore::new(),
            gestures: GestureNormalizer::new(),
            gate: TransitionGate::new(policy),
            board: BoardView::new(),
            toast: None,
            show_help: false,
            show_logs: false,
            should_quit: false,
            logger: Logger::new(),
            backend,
            task_manager,
            background_rx,
        })
    }

    /// Reload the collection from the backend. Never fails from the
    /// caller's point of view; a failed fetch becomes an error
    /// notification when the background task reports back.
    pub fn refresh_data(&mut self) {
        self.logger.log("Refreshing records".to_string());
        self.store.set_loading(true);
        self.task_manager.spawn_fetch(self.backend.clone());
    }

    /// Route a normalized move through the gate: either spawn a commit
    /// right away or leave the modal open for the user.
    pub fn submit_intent(&mut self, intent: MoveIntent) {
        self.logger.log(format!(
            "Move intent: {} {} -> {}",
            intent.record_id, intent.from, intent.to
        ));
        match self.gate.submit(intent) {
            GateOutcome::Commit(request) => self.commit(request),
            GateOutcome::ModalOpened => {
                self.logger.log("Reason modal opened".to_string());
            }
            GateOutcome::ValidationFailed | GateOutcome::Inactive => {}
        }
    }

    /// Confirm the reason modal. A blank reason raises a validation
    /// error and leaves the modal open.
    pub fn confirm_modal(&mut self) {
        let target = self.gate.modal().pending.as_ref().map(|i| i.to);
        match self.gate.confirm() {
            GateOutcome::Commit(request) => self.commit(request),
            GateOutcome::ValidationFailed => {
                let lane = target.map(|s| s.title()).unwrap_or("this lane");
                self.notify(Notification::error(
                    "Error",
                    format!("Please provide a reason for marking as {lane}"),
                ));
            }
            GateOutcome::ModalOpened | GateOutcome::Inactive => {}
        }
    }

    /// Close the reason modal and discard the pending move. Also runs
    /// the gesture cleanup: a cancel can arrive mid-touch-gesture and
    /// must not leave orphaned markers behind.
    pub fn cancel_modal(&mut self) {
        self.gate.cancel();
        self.gestures.cleanup();
        self.logger.log("Reason modal cancelled".to_string());
    }

    fn commit(&mut self, request: TransitionRequest) {
        self.store.set_loading(true);
        self.task_manager.spawn_commit(self.backend.clone(), request);
    }

    /// Raise a user-visible notification.
    pub fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Error => log::error!("{}: {}", notification.title, notification.message),
            _ => info!("{}: {}", notification.title, notification.message),
        }
        self.logger
            .log(format!("{}: {}", notification.title, notification.message));
        self.toast = Some(ActiveToast {
            notification,
            shown_at: Instant::now(),
        });
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::RecordsLoaded(records) => {
                self.logger.log(format!("Loaded {} records", records.len()));
                self.store.replace(records);
            }
            Action::FetchFinished => {
                self.store.set_loading(false);
            }
            Action::CommitFinished => {
                // Gesture state must not outlive its commit cycle.
                self.store.set_loading(false);
                self.gestures.cleanup();
            }
            Action::Notify(notification) => self.notify(notification),
        }
    }

    /// Drain background results and sweep finished task handles.
    pub fn process_background_actions(&mut self) {
        while let Ok(action) = self.background_rx.try_recv() {
            self.apply_action(action);
        }
        self.task_manager.cleanup_finished_tasks();
    }

    /// Periodic housekeeping: expire the toast.
    pub fn tick(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= TOAST_TTL {
                self.toast = None;
            }
        }
    }
}
