//! Gesture normalizer: turns raw pointer-drag and touch-sequence input
//! into one canonical [`MoveIntent`].
//!
//! Two adapters feed the same state machine:
//!
//! - the **pointer** protocol is event-target based. The press captures
//!   the hit card and serializes a [`DragPayload`]; the drop consults
//!   that payload rather than the live session, so it works even when
//!   session state was torn down between press and release.
//! - the **touch** protocol is coordinate based. Every move hit-tests
//!   the raw point against the last-rendered lane rectangles, and the
//!   release resolves the lane under the final point.
//!
//! The gate and committer downstream never learn which adapter produced
//! an intent. At most one [`DragSession`] exists at a time; a new
//! gesture-start always overwrites the previous session.

use log::debug;
use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};

use crate::records::AttendanceStatus;
use crate::store::RecordStore;

/// Canonical, modality-independent "move record X from lane A to lane B".
#[derive(Debug, Clone, PartialEq)]
pub struct MoveIntent {
    pub record_id: String,
    pub from: AttendanceStatus,
    pub to: AttendanceStatus,
}

/// Which adapter started the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Pointer,
    Touch,
}

/// One in-flight gesture. Coordinates are only tracked on the touch
/// path; the pointer path carries its context in the serialized payload.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub record_id: String,
    pub from: AttendanceStatus,
    pub modality: Modality,
    pub position: Option<(u16, u16)>,
    pub is_dragging: bool,
}

/// The pointer drop reads this instead of [`DragSession`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DragPayload {
    record_id: String,
    from: AttendanceStatus,
}

/// On-screen bounds of one rendered card.
#[derive(Debug, Clone)]
pub struct CardBounds {
    pub record_id: String,
    pub status: AttendanceStatus,
    pub area: Rect,
}

/// Last-rendered board layout, rebuilt every frame and hit-tested by
/// both adapters.
#[derive(Debug, Clone, Default)]
pub struct BoardGeometry {
    pub lanes: Vec<(AttendanceStatus, Rect)>,
    pub cards: Vec<CardBounds>,
}

impl BoardGeometry {
    pub fn lane_at(&self, x: u16, y: u16) -> Option<AttendanceStatus> {
        let point = Position::new(x, y);
        self.lanes
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(status, _)| *status)
    }

    pub fn card_at(&self, x: u16, y: u16) -> Option<&CardBounds> {
        let point = Position::new(x, y);
        self.cards.iter().find(|card| card.area.contains(point))
    }
}

#[derive(Default)]
pub struct GestureNormalizer {
    session: Option<DragSession>,
    payload: Option<String>,
    highlighted: Option<AttendanceStatus>,
}

impl GestureNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Lane currently carrying the drag-over highlight, if any.
    pub fn highlighted_lane(&self) -> Option<AttendanceStatus> {
        self.highlighted
    }

    /// Whether the given card carries the lifted marker.
    pub fn is_lifted(&self, record_id: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.record_id == record_id)
    }

    /// While a touch drag is active, scroll input is swallowed so the
    /// lanes do not scroll under the finger.
    pub fn suppress_scroll(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_dragging)
    }

    /// Ghost card rect centered on the touch point, clipped to `frame`.
    /// Purely derived from the current coordinates.
    pub fn ghost_rect(&self, frame: Rect, width: u16, height: u16) -> Option<Rect> {
        let session = self.session.as_ref()?;
        if session.modality != Modality::Touch || !session.is_dragging {
            return None;
        }
        let (x, y) = session.position?;
        let ghost = Rect::new(
            x.saturating_sub(width / 2),
            y.saturating_sub(height / 2),
            width,
            height,
        );
        let clipped = ghost.intersection(frame);
        (!clipped.is_empty()).then_some(clipped)
    }

    // ── Pointer protocol ────────────────────────────────────────────

    /// Pointer press on a card: open a session, lift the card, and
    /// serialize the payload the drop handler will read.
    pub fn drag_start(&mut self, record_id: &str, from: AttendanceStatus) {
        debug!("drag_start: {record_id} from {from}");
        self.session = Some(DragSession {
            record_id: record_id.to_string(),
            from,
            modality: Modality::Pointer,
            position: None,
            is_dragging: false,
        });
        self.payload = serde_json::to_string(&DragPayload {
            record_id: record_id.to_string(),
            from,
        })
        .ok();
        self.highlighted = None;
    }

    /// Pointer moved while dragging: fire enter/leave transitions so
    /// exactly one lane (or none) is highlighted.
    pub fn drag_over(&mut self, lane: Option<AttendanceStatus>) {
        if self.session.is_none() {
            return;
        }
        if lane != self.highlighted {
            if let Some(prev) = self.highlighted {
                self.drag_leave(prev);
            }
            if let Some(next) = lane {
                self.drag_enter(next);
            }
        }
    }

    pub fn drag_enter(&mut self, lane: AttendanceStatus) {
        self.highlighted = Some(lane);
    }

    pub fn drag_leave(&mut self, lane: AttendanceStatus) {
        if self.highlighted == Some(lane) {
            self.highlighted = None;
        }
    }

    /// Pointer release over a lane. Reads the serialized payload, not
    /// the session, and re-validates the origin status against the
    /// live store, so a collection refreshed mid-drag cannot produce a
    /// stale comparison. Dropping a record onto its own lane, or onto a
    /// record that no longer exists, yields nothing.
    pub fn drop_on(&mut self, lane: AttendanceStatus, store: &RecordStore) -> Option<MoveIntent> {
        self.highlighted = None;
        let payload = self.payload.take()?;
        let payload: DragPayload = serde_json::from_str(&payload).ok()?;

        let from = store.find(&payload.record_id)?.status;
        if from != payload.from {
            debug!(
                "stale payload for {}: captured {}, live {}",
                payload.record_id, payload.from, from
            );
        }
        if from == lane {
            debug!("drop on source lane, no move");
            return None;
        }
        Some(MoveIntent {
            record_id: payload.record_id,
            from,
            to: lane,
        })
    }

    /// Pointer released, wherever it landed: always drop the lifted
    /// marker and the session. Guards against abandoned drags.
    pub fn drag_end(&mut self) {
        self.session = None;
        self.payload = None;
        self.highlighted = None;
    }

    // ── Touch protocol ──────────────────────────────────────────────

    /// First touch point: locate the card under it and open a session.
    /// A touch that lands outside every card starts nothing.
    pub fn touch_start(&mut self, x: u16, y: u16, geometry: &BoardGeometry) {
        let Some(card) = geometry.card_at(x, y) else {
            return;
        };
        debug!("touch_start: {} from {}", card.record_id, card.status);
        self.session = Some(DragSession {
            record_id: card.record_id.clone(),
            from: card.status,
            modality: Modality::Touch,
            position: Some((x, y)),
            is_dragging: false,
        });
        self.payload = None;
        self.highlighted = None;
    }

    /// Touch moved: track the point, mark the session as dragging, and
    /// highlight exactly the lane under the point (or none). A move with
    /// no active session is a stray event and does nothing.
    pub fn touch_move(&mut self, x: u16, y: u16, geometry: &BoardGeometry) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.position = Some((x, y));
        session.is_dragging = true;
        self.highlighted = geometry.lane_at(x, y);
    }

    /// Final touch point: resolve the lane under it and emit an intent
    /// when it differs from the origin. Cleanup happens on every path,
    /// intent or not. A release with no active session does nothing.
    pub fn touch_end(
        &mut self,
        x: u16,
        y: u16,
        geometry: &BoardGeometry,
        store: &RecordStore,
    ) -> Option<MoveIntent> {
        let session = self.session.take()?;
        self.cleanup();

        let lane = geometry.lane_at(x, y)?;
        let from = store.find(&session.record_id)?.status;
        if from == lane {
            return None;
        }
        Some(MoveIntent {
            record_id: session.record_id,
            from,
            to: lane,
        })
    }

    /// Full reset: session, payload, and every lifted/highlight marker.
    /// Runs after each commit cycle and on modal cancel so gesture state
    /// never outlives the gesture.
    pub fn cleanup(&mut self) {
        self.session = None;
        self.payload = None;
        self.highlighted = None;
    }
}
