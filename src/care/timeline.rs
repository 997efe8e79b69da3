//! Merged, date-descending history across pastoral record kinds

use super::dates::{canonical_date, parse_date};
use super::records::{
    CounselType, CounselingRecord, MemoRecord, PrayerRecord, PrayerStatus, VisitRecord, VisitStatus,
    VisitType,
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

/// Record kind of a timeline entry
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineKind {
    visit,
    counsel,
    prayer,
    memo,
}

impl TimelineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineKind::visit => "visit",
            TimelineKind::counsel => "counsel",
            TimelineKind::prayer => "prayer",
            TimelineKind::memo => "memo",
        }
    }
}

/// Kind-specific lookup keys carried by each entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineDetail {
    Visit {
        visit_type: VisitType,
        status: VisitStatus,
    },
    Counsel {
        counsel_type: CounselType,
        confidential: bool,
    },
    Prayer {
        category: String,
        status: PrayerStatus,
    },
    Memo {
        category: String,
    },
}

/// One row of a member or congregation timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub kind: TimelineKind,
    /// Canonical date (YYYY-MM-DD), or the raw text if it does not parse
    pub date: String,
    pub member_id: String,
    /// Full, untruncated summary or request text
    pub summary: String,
    pub detail: TimelineDetail,
}

impl TimelineEntry {
    /// Counseling confidentiality flag; always false for other kinds
    pub fn confidential(&self) -> bool {
        matches!(
            self.detail,
            TimelineDetail::Counsel {
                confidential: true,
                ..
            }
        )
    }
}

impl From<&VisitRecord> for TimelineEntry {
    fn from(visit: &VisitRecord) -> Self {
        Self {
            id: visit.id.clone(),
            kind: TimelineKind::visit,
            date: canonical_date(&visit.date),
            member_id: visit.member_id.clone(),
            summary: visit.summary.clone(),
            detail: TimelineDetail::Visit {
                visit_type: visit.visit_type,
                status: visit.status,
            },
        }
    }
}

impl From<&CounselingRecord> for TimelineEntry {
    fn from(counsel: &CounselingRecord) -> Self {
        Self {
            id: counsel.id.clone(),
            kind: TimelineKind::counsel,
            date: canonical_date(&counsel.date),
            member_id: counsel.member_id.clone(),
            summary: counsel.summary.clone(),
            detail: TimelineDetail::Counsel {
                counsel_type: counsel.counsel_type,
                confidential: counsel.confidential,
            },
        }
    }
}

impl From<&PrayerRecord> for TimelineEntry {
    fn from(prayer: &PrayerRecord) -> Self {
        Self {
            id: prayer.id.clone(),
            kind: TimelineKind::prayer,
            date: canonical_date(&prayer.date),
            member_id: prayer.member_id.clone(),
            summary: prayer.text.clone(),
            detail: TimelineDetail::Prayer {
                category: prayer.category.clone(),
                status: prayer.status,
            },
        }
    }
}

impl From<&MemoRecord> for TimelineEntry {
    fn from(memo: &MemoRecord) -> Self {
        Self {
            id: memo.id.clone(),
            kind: TimelineKind::memo,
            date: canonical_date(&memo.date),
            member_id: memo.member_id.clone(),
            summary: memo.text.clone(),
            detail: TimelineDetail::Memo {
                category: memo.category.clone(),
            },
        }
    }
}

/// Kind filter applied after merging
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineFilter {
    #[default]
    all,
    visit,
    counsel,
    prayer,
    memo,
}

impl TimelineFilter {
    pub fn admits(&self, kind: TimelineKind) -> bool {
        match self {
            TimelineFilter::all => true,
            TimelineFilter::visit => kind == TimelineKind::visit,
            TimelineFilter::counsel => kind == TimelineKind::counsel,
            TimelineFilter::prayer => kind == TimelineKind::prayer,
            TimelineFilter::memo => kind == TimelineKind::memo,
        }
    }
}

impl FromStr for TimelineFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimelineFilter::all),
            "visit" => Ok(TimelineFilter::visit),
            "counsel" | "counseling" => Ok(TimelineFilter::counsel),
            "prayer" => Ok(TimelineFilter::prayer),
            "memo" => Ok(TimelineFilter::memo),
            _ => Err(format!(
                "Invalid timeline kind '{}'. Valid options are: all, visit, counsel, prayer, memo",
                s
            )),
        }
    }
}

/// Scope and optional kinds for [`build_timeline`]
#[derive(Debug, Clone, Default)]
pub struct TimelineOptions {
    /// Restrict to one member; `None` means the whole congregation
    pub member_id: Option<String>,
    pub include_prayers: bool,
    pub include_memos: bool,
}

impl TimelineOptions {
    pub fn for_member(member_id: impl Into<String>) -> Self {
        Self {
            member_id: Some(member_id.into()),
            ..Default::default()
        }
    }

    fn in_scope(&self, member_id: &str) -> bool {
        self.member_id.as_deref().is_none_or(|m| m == member_id)
    }
}

/// Merge records into one list, newest first
///
/// Entries are gathered visits, counseling, prayers, memos (each in source
/// order) and then stably sorted by descending date, so records sharing a
/// date keep that kind-then-insertion order. Entries whose date does not
/// parse go last, in gather order.
pub fn build_timeline(
    visits: &[VisitRecord],
    counsels: &[CounselingRecord],
    prayers: &[PrayerRecord],
    memos: &[MemoRecord],
    options: &TimelineOptions,
) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = Vec::new();

    entries.extend(
        visits
            .iter()
            .filter(|v| options.in_scope(&v.member_id))
            .map(TimelineEntry::from),
    );
    entries.extend(
        counsels
            .iter()
            .filter(|c| options.in_scope(&c.member_id))
            .map(TimelineEntry::from),
    );
    if options.include_prayers {
        entries.extend(
            prayers
                .iter()
                .filter(|p| options.in_scope(&p.member_id))
                .map(TimelineEntry::from),
        );
    }
    if options.include_memos {
        entries.extend(
            memos
                .iter()
                .filter(|m| options.in_scope(&m.member_id))
                .map(TimelineEntry::from),
        );
    }

    entries.sort_by_key(|e| Reverse(parse_date(&e.date)));
    entries
}

/// Keep only entries admitted by `filter`, without re-sorting
pub fn filter_timeline(entries: Vec<TimelineEntry>, filter: TimelineFilter) -> Vec<TimelineEntry> {
    entries
        .into_iter()
        .filter(|e| filter.admits(e.kind))
        .collect()
}
