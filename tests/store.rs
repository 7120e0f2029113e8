use presentist::records::{AttendanceStatus, Record};
use presentist::store::RecordStore;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("1".to_string(), "Anna".to_string(), AttendanceStatus::Present),
        Record::new("2".to_string(), "Jonas".to_string(), AttendanceStatus::Unexcused),
        Record::new("3".to_string(), "Lena".to_string(), AttendanceStatus::Excused),
        Record::new("4".to_string(), "Max".to_string(), AttendanceStatus::Present),
    ]
}

#[test]
fn test_every_record_appears_in_exactly_one_lane() {
    let mut store = RecordStore::new();
    store.replace(sample_records());

    let mut seen = 0;
    for record in store.records() {
        let lanes_containing: usize = AttendanceStatus::ALL
            .iter()
            .filter(|status| store.lane(**status).iter().any(|r| r.id == record.id))
            .count();
        assert_eq!(lanes_containing, 1, "record {} must be in exactly one lane", record.id);
        seen += 1;
    }
    assert_eq!(seen, 4);

    // Lane partitions are disjoint and their union is the collection
    let total: usize = AttendanceStatus::ALL
        .iter()
        .map(|status| store.lane_count(*status))
        .sum();
    assert_eq!(total, store.len());
}

#[test]
fn test_lane_views_follow_status_field() {
    let mut store = RecordStore::new();
    store.replace(sample_records());

    assert_eq!(store.lane_count(AttendanceStatus::Present), 2);
    assert_eq!(store.lane_count(AttendanceStatus::Unexcused), 1);
    assert_eq!(store.lane_count(AttendanceStatus::Excused), 1);

    let present = store.lane(AttendanceStatus::Present);
    assert_eq!(present[0].id, "1");
    assert_eq!(present[1].id, "4");
}

#[test]
fn test_lane_views_recompute_on_replace() {
    let mut store = RecordStore::new();
    store.replace(sample_records());

    let mut updated = sample_records();
    updated[1].status = AttendanceStatus::Present;
    store.replace(updated);

    assert_eq!(store.lane_count(AttendanceStatus::Present), 3);
    assert_eq!(store.lane_count(AttendanceStatus::Unexcused), 0);
}

#[test]
fn test_empty_state_accounts_for_loading() {
    let mut store = RecordStore::new();

    store.set_loading(true);
    assert!(!store.lane_is_empty(AttendanceStatus::Present));

    store.set_loading(false);
    assert!(store.lane_is_empty(AttendanceStatus::Present));

    store.replace(sample_records());
    assert!(!store.lane_is_empty(AttendanceStatus::Present));
}

#[test]
fn test_find_by_id() {
    let mut store = RecordStore::new();
    store.replace(sample_records());

    assert_eq!(store.find("3").map(|r| r.status), Some(AttendanceStatus::Excused));
    assert!(store.find("99").is_none());
}
