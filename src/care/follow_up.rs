//! Follow-up obligations derived from visit and counseling records
//!
//! Obligations are never stored. [`extract_follow_ups`] recomputes them from
//! the record snapshot on every read, so `done` always mirrors the source
//! record's `follow_up_done` and clearing a follow-up date simply makes the
//! obligation disappear.

use super::dates::{canonical_date, day_offset};
use super::records::{CounselingRecord, VisitRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which record collection an obligation comes from
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpKind {
    visit,
    counsel,
}

impl FollowUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpKind::visit => "visit",
            FollowUpKind::counsel => "counsel",
        }
    }
}

impl FromStr for FollowUpKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visit" => Ok(FollowUpKind::visit),
            "counsel" | "counseling" => Ok(FollowUpKind::counsel),
            _ => Err(format!(
                "Invalid follow-up kind '{}'. Valid options are: visit, counsel",
                s
            )),
        }
    }
}

/// A pending or completed pastoral follow-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowUpObligation {
    pub kind: FollowUpKind,
    /// Id of the visit or counseling record this was derived from
    pub ref_id: String,
    pub member_id: String,
    /// Canonical due date (YYYY-MM-DD), or the raw text if it does not parse
    pub due_date: String,
    pub note: String,
    pub done: bool,
    /// Date of the originating visit or session
    pub origin_date: String,
    /// Lookup key of the originating record's type (e.g. "sick", "family")
    pub origin_type: &'static str,
}

impl FollowUpObligation {
    fn from_visit(visit: &VisitRecord, due: &str) -> Self {
        Self {
            kind: FollowUpKind::visit,
            ref_id: visit.id.clone(),
            member_id: visit.member_id.clone(),
            due_date: canonical_date(due),
            note: visit.follow_up_note.clone().unwrap_or_default(),
            done: visit.follow_up_done,
            origin_date: canonical_date(&visit.date),
            origin_type: visit.visit_type.as_str(),
        }
    }

    fn from_counsel(counsel: &CounselingRecord, due: &str) -> Self {
        Self {
            kind: FollowUpKind::counsel,
            ref_id: counsel.id.clone(),
            member_id: counsel.member_id.clone(),
            due_date: canonical_date(due),
            note: counsel.follow_up_note.clone().unwrap_or_default(),
            done: counsel.follow_up_done,
            origin_date: canonical_date(&counsel.date),
            origin_type: counsel.counsel_type.as_str(),
        }
    }

    /// Due-state of this obligation on `today`
    pub fn due_state(&self, today: NaiveDate) -> DueState {
        if self.done {
            return DueState::done;
        }
        match day_offset(&self.due_date, today) {
            Some(n) if n < 0 => DueState::overdue,
            Some(0) => DueState::today,
            // unparseable due dates are treated as far-future
            _ => DueState::upcoming,
        }
    }
}

/// Derive one obligation per record that has a non-blank follow-up date
///
/// Visits come before counseling sessions, each in source order, and the
/// result is then stably sorted by ascending due date.
pub fn extract_follow_ups(
    visits: &[VisitRecord],
    counsels: &[CounselingRecord],
) -> Vec<FollowUpObligation> {
    let mut obligations: Vec<FollowUpObligation> = visits
        .iter()
        .filter_map(|v| v.follow_up().map(|due| FollowUpObligation::from_visit(v, due)))
        .chain(
            counsels
                .iter()
                .filter_map(|c| c.follow_up().map(|due| FollowUpObligation::from_counsel(c, due))),
        )
        .collect();

    obligations.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    obligations
}

/// Urgency of an obligation relative to today
///
/// Only `done` is backed by stored state; the other three are recomputed
/// from the due date on every call.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DueState {
    overdue,
    today,
    upcoming,
    done,
}

/// Queue view selector
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpTab {
    #[default]
    all,
    overdue,
    today,
    upcoming,
    done,
}

impl FollowUpTab {
    /// Whether an obligation in `state` is shown under this tab
    pub fn admits(&self, state: DueState) -> bool {
        match self {
            FollowUpTab::all => true,
            FollowUpTab::overdue => state == DueState::overdue,
            FollowUpTab::today => state == DueState::today,
            FollowUpTab::upcoming => state == DueState::upcoming,
            FollowUpTab::done => state == DueState::done,
        }
    }
}

impl FromStr for FollowUpTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FollowUpTab::all),
            "overdue" => Ok(FollowUpTab::overdue),
            "today" => Ok(FollowUpTab::today),
            "upcoming" => Ok(FollowUpTab::upcoming),
            "done" => Ok(FollowUpTab::done),
            _ => Err(format!(
                "Invalid tab '{}'. Valid options are: all, overdue, today, upcoming, done",
                s
            )),
        }
    }
}

/// Number of obligations in each due-state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub overdue: usize,
    pub today: usize,
    pub upcoming: usize,
    pub done: usize,
}

impl BucketCounts {
    /// Obligations that still need attention
    pub fn pending(&self) -> usize {
        self.overdue + self.today + self.upcoming
    }

    pub fn total(&self) -> usize {
        self.pending() + self.done
    }
}

/// Obligations classified against a single sampled "today"
#[derive(Debug, Clone)]
pub struct FollowUpQueue {
    obligations: Vec<FollowUpObligation>,
    today: NaiveDate,
}

impl FollowUpQueue {
    /// Build the queue straight from the record collections
    pub fn from_records(
        visits: &[VisitRecord],
        counsels: &[CounselingRecord],
        today: NaiveDate,
    ) -> Self {
        Self {
            obligations: extract_follow_ups(visits, counsels),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn obligations(&self) -> &[FollowUpObligation] {
        &self.obligations
    }

    pub fn state_of(&self, obligation: &FollowUpObligation) -> DueState {
        obligation.due_state(self.today)
    }

    /// Obligations shown under `tab`, keeping ascending due-date order
    pub fn filter(&self, tab: FollowUpTab) -> Vec<&FollowUpObligation> {
        self.obligations
            .iter()
            .filter(|o| tab.admits(self.state_of(o)))
            .collect()
    }

    pub fn counts(&self) -> BucketCounts {
        let mut counts = BucketCounts::default();
        for obligation in &self.obligations {
            match self.state_of(obligation) {
                DueState::overdue => counts.overdue += 1,
                DueState::today => counts.today += 1,
                DueState::upcoming => counts.upcoming += 1,
                DueState::done => counts.done += 1,
            }
        }
        counts
    }
}
