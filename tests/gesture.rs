use ratatui::layout::Rect;

use presentist::records::{AttendanceStatus, Record};
use presentist::store::RecordStore;
use presentist::ui::gesture::{BoardGeometry, CardBounds, GestureNormalizer, MoveIntent};

/// Three 20-column lanes side by side, with one card in each of the
/// first two lanes.
fn geometry() -> BoardGeometry {
    BoardGeometry {
        lanes: vec![
            (AttendanceStatus::Unexcused, Rect::new(0, 0, 20, 20)),
            (AttendanceStatus::Present, Rect::new(20, 0, 20, 20)),
            (AttendanceStatus::Excused, Rect::new(40, 0, 20, 20)),
        ],
        cards: vec![
            CardBounds {
                record_id: "2".to_string(),
                status: AttendanceStatus::Unexcused,
                area: Rect::new(1, 1, 18, 3),
            },
            CardBounds {
                record_id: "1".to_string(),
                status: AttendanceStatus::Present,
                area: Rect::new(21, 1, 18, 3),
            },
        ],
    }
}

fn store() -> RecordStore {
    let mut store = RecordStore::new();
    store.replace(vec![
        Record::new("1".to_string(), "Anna".to_string(), AttendanceStatus::Present),
        Record::new("2".to_string(), "Jonas".to_string(), AttendanceStatus::Unexcused),
    ]);
    store
}

#[test]
fn test_geometry_hit_testing() {
    let geometry = geometry();
    assert_eq!(geometry.lane_at(5, 5), Some(AttendanceStatus::Unexcused));
    assert_eq!(geometry.lane_at(25, 5), Some(AttendanceStatus::Present));
    assert_eq!(geometry.lane_at(45, 5), Some(AttendanceStatus::Excused));
    assert_eq!(geometry.lane_at(70, 5), None);

    assert_eq!(geometry.card_at(2, 2).map(|c| c.record_id.as_str()), Some("2"));
    assert_eq!(geometry.card_at(25, 2).map(|c| c.record_id.as_str()), Some("1"));
    assert!(geometry.card_at(45, 2).is_none());
}

// ── Pointer protocol ────────────────────────────────────────────────

#[test]
fn test_pointer_drag_emits_intent_on_foreign_lane() {
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.drag_start("1", AttendanceStatus::Present);
    assert!(gestures.is_lifted("1"));
    assert!(!gestures.is_lifted("2"));

    gestures.drag_over(Some(AttendanceStatus::Unexcused));
    assert_eq!(gestures.highlighted_lane(), Some(AttendanceStatus::Unexcused));

    let intent = gestures.drop_on(AttendanceStatus::Unexcused, &store);
    assert_eq!(
        intent,
        Some(MoveIntent {
            record_id: "1".to_string(),
            from: AttendanceStatus::Present,
            to: AttendanceStatus::Unexcused,
        })
    );
    // Drop clears the lane highlight
    assert_eq!(gestures.highlighted_lane(), None);

    gestures.drag_end();
    assert!(gestures.session().is_none());
    assert!(!gestures.is_lifted("1"));
}

#[test]
fn test_pointer_drop_on_source_lane_is_noop() {
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.drag_start("1", AttendanceStatus::Present);
    assert!(gestures.drop_on(AttendanceStatus::Present, &store).is_none());
}

#[test]
fn test_pointer_drop_without_drag_is_noop() {
    let store = store();
    let mut gestures = GestureNormalizer::new();
    assert!(gestures.drop_on(AttendanceStatus::Excused, &store).is_none());
}

#[test]
fn test_pointer_drag_end_clears_abandoned_drag() {
    let mut gestures = GestureNormalizer::new();

    gestures.drag_start("1", AttendanceStatus::Present);
    gestures.drag_over(Some(AttendanceStatus::Excused));
    gestures.drag_end();

    assert!(gestures.session().is_none());
    assert_eq!(gestures.highlighted_lane(), None);
    // A later drop must find nothing to act on
    assert!(gestures.drop_on(AttendanceStatus::Excused, &store()).is_none());
}

#[test]
fn test_pointer_enter_leave_keeps_single_highlight() {
    let mut gestures = GestureNormalizer::new();
    gestures.drag_start("1", AttendanceStatus::Present);

    gestures.drag_over(Some(AttendanceStatus::Unexcused));
    gestures.drag_over(Some(AttendanceStatus::Excused));
    assert_eq!(gestures.highlighted_lane(), Some(AttendanceStatus::Excused));

    gestures.drag_over(None);
    assert_eq!(gestures.highlighted_lane(), None);
}

#[test]
fn test_pointer_drop_revalidates_against_live_store() {
    let mut gestures = GestureNormalizer::new();
    gestures.drag_start("1", AttendanceStatus::Present);

    // A refresh lands mid-drag and record 1 is now already Unexcused
    let mut refreshed = RecordStore::new();
    refreshed.replace(vec![Record::new(
        "1".to_string(),
        "Anna".to_string(),
        AttendanceStatus::Unexcused,
    )]);

    // The captured payload says Present, but the live status equals the
    // target lane, so no move is emitted
    assert!(gestures.drop_on(AttendanceStatus::Unexcused, &refreshed).is_none());
}

#[test]
fn test_pointer_drop_for_vanished_record_is_noop() {
    let mut gestures = GestureNormalizer::new();
    gestures.drag_start("99", AttendanceStatus::Present);
    assert!(gestures.drop_on(AttendanceStatus::Excused, &store()).is_none());
}

#[test]
fn test_new_drag_start_overwrites_previous_session() {
    let mut gestures = GestureNormalizer::new();

    gestures.drag_start("1", AttendanceStatus::Present);
    gestures.drag_start("2", AttendanceStatus::Unexcused);

    assert!(!gestures.is_lifted("1"));
    assert!(gestures.is_lifted("2"));
}

// ── Touch protocol ──────────────────────────────────────────────────

#[test]
fn test_touch_sequence_emits_intent() {
    // Touch-start on card 2 (Unexcused), move over the Present lane,
    // release still over Present
    let geometry = geometry();
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    let session = gestures.session().expect("session should be open");
    assert_eq!(session.record_id, "2");
    assert_eq!(session.from, AttendanceStatus::Unexcused);
    assert!(!session.is_dragging);

    gestures.touch_move(25, 5, &geometry);
    assert_eq!(gestures.highlighted_lane(), Some(AttendanceStatus::Present));
    assert!(gestures.suppress_scroll());

    let intent = gestures.touch_end(25, 5, &geometry, &store);
    assert_eq!(
        intent,
        Some(MoveIntent {
            record_id: "2".to_string(),
            from: AttendanceStatus::Unexcused,
            to: AttendanceStatus::Present,
        })
    );

    // Full cleanup regardless of outcome
    assert!(gestures.session().is_none());
    assert_eq!(gestures.highlighted_lane(), None);
    assert!(!gestures.suppress_scroll());
}

#[test]
fn test_touch_start_outside_cards_opens_no_session() {
    let mut gestures = GestureNormalizer::new();
    gestures.touch_start(45, 10, &geometry());
    assert!(gestures.session().is_none());
}

#[test]
fn test_stray_touch_events_are_noops() {
    let geometry = geometry();
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_move(25, 5, &geometry);
    assert_eq!(gestures.highlighted_lane(), None);
    assert!(!gestures.suppress_scroll());

    assert!(gestures.touch_end(25, 5, &geometry, &store).is_none());
}

#[test]
fn test_touch_move_highlights_exactly_one_lane() {
    let geometry = geometry();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    gestures.touch_move(5, 5, &geometry);
    assert_eq!(gestures.highlighted_lane(), Some(AttendanceStatus::Unexcused));

    gestures.touch_move(45, 5, &geometry);
    assert_eq!(gestures.highlighted_lane(), Some(AttendanceStatus::Excused));

    // Off the board: no lane highlighted at all
    gestures.touch_move(70, 5, &geometry);
    assert_eq!(gestures.highlighted_lane(), None);
}

#[test]
fn test_touch_release_on_source_lane_is_noop_with_cleanup() {
    let geometry = geometry();
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    gestures.touch_move(5, 5, &geometry);

    assert!(gestures.touch_end(5, 5, &geometry, &store).is_none());
    assert!(gestures.session().is_none());
    assert_eq!(gestures.highlighted_lane(), None);
}

#[test]
fn test_touch_release_outside_lanes_is_noop_with_cleanup() {
    let geometry = geometry();
    let store = store();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    gestures.touch_move(70, 5, &geometry);

    assert!(gestures.touch_end(70, 5, &geometry, &store).is_none());
    assert!(gestures.session().is_none());
}

#[test]
fn test_ghost_tracks_touch_point() {
    let frame = Rect::new(0, 0, 80, 24);
    let geometry = geometry();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    // Not dragging yet: no ghost
    assert!(gestures.ghost_rect(frame, 10, 3).is_none());

    gestures.touch_move(30, 10, &geometry);
    let ghost = gestures.ghost_rect(frame, 10, 3).expect("ghost while dragging");
    assert_eq!(ghost, Rect::new(25, 9, 10, 3));

    gestures.cleanup();
    assert!(gestures.ghost_rect(frame, 10, 3).is_none());
}

#[test]
fn test_pointer_drag_has_no_ghost() {
    let frame = Rect::new(0, 0, 80, 24);
    let mut gestures = GestureNormalizer::new();
    gestures.drag_start("1", AttendanceStatus::Present);
    assert!(gestures.ghost_rect(frame, 10, 3).is_none());
}

#[test]
fn test_cleanup_clears_everything() {
    let geometry = geometry();
    let mut gestures = GestureNormalizer::new();

    gestures.touch_start(2, 2, &geometry);
    gestures.touch_move(25, 5, &geometry);
    gestures.cleanup();

    assert!(gestures.session().is_none());
    assert_eq!(gestures.highlighted_lane(), None);
    assert!(!gestures.suppress_scroll());
}
