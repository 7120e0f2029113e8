//! Transition gate: decides whether a move commits immediately or must
//! first collect a justification through the reason modal.
//!
//! The gating rule is a data-driven [`GatePolicy`] (status → requires
//! reason) built from config rather than a hardcoded special case, so
//! it can be tested in isolation and extended without touching the
//! state machine. The gate owns the whole [`ModalState`], including the
//! reason text buffer and its cursor.

use log::debug;

use crate::committer::TransitionRequest;
use crate::records::AttendanceStatus;
use crate::ui::gesture::MoveIntent;

/// Which target statuses require a justification before committing.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    gated: Vec<AttendanceStatus>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            gated: vec![AttendanceStatus::Excused],
        }
    }
}

impl GatePolicy {
    pub fn from_statuses(gated: Vec<AttendanceStatus>) -> Self {
        Self { gated }
    }

    pub fn requires_reason(&self, status: AttendanceStatus) -> bool {
        self.gated.contains(&status)
    }
}

/// The reason modal. Owned exclusively by the gate; reset on open,
/// confirm, and cancel.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub visible: bool,
    pub reason_text: String,
    pub cursor: usize,
    pub pending: Option<MoveIntent>,
}

/// What a gate operation decided.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Forward this request to the committer now.
    Commit(TransitionRequest),
    /// The move is suspended until the user confirms a reason.
    ModalOpened,
    /// Empty or whitespace-only reason; the modal stays open.
    ValidationFailed,
    /// No pending move; nothing to do.
    Inactive,
}

pub struct TransitionGate {
    policy: GatePolicy,
    modal: ModalState,
}

impl TransitionGate {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            modal: ModalState::default(),
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.visible
    }

    /// Route a normalized move: gated targets suspend into the modal,
    /// everything else commits immediately with an empty reason.
    pub fn submit(&mut self, intent: MoveIntent) -> GateOutcome {
        if self.policy.requires_reason(intent.to) {
            debug!("move to {} requires a reason, opening modal", intent.to);
            self.modal = ModalState {
                visible: true,
                reason_text: String::new(),
                cursor: 0,
                pending: Some(intent),
            };
            GateOutcome::ModalOpened
        } else {
            GateOutcome::Commit(TransitionRequest {
                record_id: intent.record_id,
                from: intent.from,
                to: intent.to,
                reason: String::new(),
            })
        }
    }

    /// Validate and forward the pending move. A blank reason keeps the
    /// modal open; success closes and clears it.
    pub fn confirm(&mut self) -> GateOutcome {
        if !self.modal.visible {
            return GateOutcome::Inactive;
        }
        if self.modal.reason_text.trim().is_empty() {
            return GateOutcome::ValidationFailed;
        }
        let Some(intent) = self.modal.pending.take() else {
            return GateOutcome::Inactive;
        };
        let request = TransitionRequest {
            record_id: intent.record_id,
            from: intent.from,
            to: intent.to,
            reason: self.modal.reason_text.clone(),
        };
        self.modal = ModalState::default();
        GateOutcome::Commit(request)
    }

    /// Close the modal and discard the pending move. The caller must
    /// also run the gesture cleanup, since a cancel can arrive
    /// mid-touch-gesture.
    pub fn cancel(&mut self) {
        self.modal = ModalState::default();
    }

    /// Replace the whole reason buffer (the reason-text-changed entry
    /// point); the cursor moves to the end.
    pub fn set_reason_text(&mut self, text: impl Into<String>) {
        self.modal.reason_text = text.into();
        self.modal.cursor = self.modal.reason_text.chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos: usize = self
            .modal
            .reason_text
            .chars()
            .take(self.modal.cursor)
            .map(|ch| ch.len_utf8())
            .sum();
        self.modal.reason_text.insert(byte_pos, c);
        self.modal.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.modal.cursor == 0 {
            return;
        }
        let byte_pos: usize = self
            .modal
            .reason_text
            .chars()
            .take(self.modal.cursor)
            .map(|ch| ch.len_utf8())
            .sum();
        let prev_char_len = self
            .modal
            .reason_text
            .chars()
            .nth(self.modal.cursor - 1)
            .map(|ch| ch.len_utf8())
            .unwrap_or(1);
        self.modal.reason_text.remove(byte_pos - prev_char_len);
        self.modal.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        let char_count = self.modal.reason_text.chars().count();
        if self.modal.cursor < char_count {
            let byte_pos: usize = self
                .modal
                .reason_text
                .chars()
                .take(self.modal.cursor)
                .map(|ch| ch.len_utf8())
                .sum();
            self.modal.reason_text.remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.modal.cursor > 0 {
            self.modal.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.modal.reason_text.chars().count();
        if self.modal.cursor < char_count {
            self.modal.cursor += 1;
        }
    }
}
