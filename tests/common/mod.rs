//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use pastoral_care::care::{CounselType, VisitType};
use pastoral_care::{CareData, CounselingRecord, Member, PastoralCareHandler, Storage, VisitRecord};
use pastoral_care::FixedClock;
use tempfile::NamedTempFile;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a visit with an optional follow-up date
pub fn create_visit(id: &str, member_id: &str, date: &str, follow_up: Option<&str>) -> VisitRecord {
    VisitRecord {
        id: id.to_string(),
        member_id: member_id.to_string(),
        visit_type: VisitType::regular,
        date: date.to_string(),
        time: "14:00".to_string(),
        location: "자택".to_string(),
        summary: format!("visit {}", id),
        follow_up_date: follow_up.map(str::to_string),
        ..Default::default()
    }
}

/// Create a counseling session with an optional follow-up date
pub fn create_counsel(
    id: &str,
    member_id: &str,
    date: &str,
    follow_up: Option<&str>,
) -> CounselingRecord {
    CounselingRecord {
        id: id.to_string(),
        member_id: member_id.to_string(),
        counsel_type: CounselType::family,
        date: date.to_string(),
        summary: format!("counsel {}", id),
        follow_up_date: follow_up.map(str::to_string),
        ..Default::default()
    }
}

pub fn create_member(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Write `data` to a temporary file and open a handler on it with a fixed "today"
pub fn get_test_handler(data: &CareData, today: NaiveDate) -> (PastoralCareHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap();
    Storage::new(path).save(data).unwrap();
    let handler = PastoralCareHandler::with_clock(path, Box::new(FixedClock(today))).unwrap();
    (handler, temp_file)
}
