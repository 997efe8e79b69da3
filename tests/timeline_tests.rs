//! Timeline aggregation tests
mod common;

use common::{create_counsel, create_visit};
use pastoral_care::care::{TimelineKind, TimelineOptions, filter_timeline};
use pastoral_care::{CareData, MemoRecord, PrayerRecord, TimelineFilter};

fn sample_data() -> CareData {
    CareData {
        visits: vec![
            create_visit("v1", "m1", "2025-01-02", None),
            create_visit("v2", "m2", "2025-02-03", None),
            create_visit("v3", "m1", "2025-03-01", None),
        ],
        counsels: vec![
            create_counsel("c1", "m1", "2025-03-01", None),
            create_counsel("c2", "m1", "2025-01-15", None),
        ],
        prayers: vec![PrayerRecord {
            id: "p1".to_string(),
            member_id: "m1".to_string(),
            text: "가족의 건강을 위해".to_string(),
            date: "2025-02-20".to_string(),
            category: "health".to_string(),
            ..Default::default()
        }],
        memos: vec![MemoRecord {
            id: "memo1".to_string(),
            member_id: "m2".to_string(),
            text: "주소 변경".to_string(),
            date: "2025-03-01".to_string(),
            category: "admin".to_string(),
        }],
        ..Default::default()
    }
}

#[test]
fn test_member_timeline_completeness() {
    let data = sample_data();
    for member in ["m1", "m2", "nobody"] {
        let timeline = data.timeline(&TimelineOptions::for_member(member));
        let visits = data.visits.iter().filter(|v| v.member_id == member).count();
        let counsels = data.counsels.iter().filter(|c| c.member_id == member).count();
        assert_eq!(timeline.len(), visits + counsels);
    }
}

#[test]
fn test_congregation_timeline_descending() {
    let data = sample_data();
    let timeline = data.timeline(&TimelineOptions::default());
    let dates: Vec<_> = timeline.iter().map(|e| e.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[test]
fn test_ties_keep_kind_then_insertion_order() {
    let data = sample_data();
    let options = TimelineOptions {
        include_prayers: true,
        include_memos: true,
        member_id: None,
    };
    let ids: Vec<_> = data.timeline(&options).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["v3", "c1", "memo1", "p1", "v2", "c2", "v1"]);
}

#[test]
fn test_kind_filter_does_not_reorder() {
    let data = sample_data();
    let timeline = data.timeline(&TimelineOptions::for_member("m1"));

    let counsels = filter_timeline(timeline.clone(), TimelineFilter::counsel);
    assert!(counsels.iter().all(|e| e.kind == TimelineKind::counsel));
    let ids: Vec<_> = counsels.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);

    assert_eq!(filter_timeline(timeline, TimelineFilter::all).len(), 4);
}
