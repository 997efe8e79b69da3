//! Monthly dashboard counts
//!
//! Read-only consumer of the record snapshot: bucket records into a month with
//! [`month_membership`] and report the follow-up queue's current shape.

use super::care_data::CareData;
use super::dates::month_membership;
use super::follow_up::BucketCounts;
use super::records::{PrayerStatus, VisitStatus};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    /// First day of the summarized month
    pub month: NaiveDate,
    pub visits: usize,
    pub completed_visits: usize,
    pub counsels: usize,
    pub prayers: usize,
    pub answered_prayers: usize,
    pub memos: usize,
    /// Follow-up due-states as of the day the summary was taken
    pub follow_ups: BucketCounts,
}

pub fn month_summary(data: &CareData, reference_month: NaiveDate, today: NaiveDate) -> MonthSummary {
    let in_month = |date: &str| month_membership(date, reference_month);

    let visits: Vec<_> = data.visits.iter().filter(|v| in_month(&v.date)).collect();
    let prayers: Vec<_> = data.prayers.iter().filter(|p| in_month(&p.date)).collect();

    MonthSummary {
        month: reference_month.with_day(1).unwrap_or(reference_month),
        visits: visits.len(),
        completed_visits: visits
            .iter()
            .filter(|v| v.status == VisitStatus::completed)
            .count(),
        counsels: data.counsels.iter().filter(|c| in_month(&c.date)).count(),
        prayers: prayers.len(),
        answered_prayers: prayers
            .iter()
            .filter(|p| p.status == PrayerStatus::answered)
            .count(),
        memos: data.memos.iter().filter(|m| in_month(&m.date)).count(),
        follow_ups: data.follow_up_queue(today).counts(),
    }
}
