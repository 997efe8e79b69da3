//! Pastoral-care domain models and business logic
//!
//! This module contains the record types and the derived views built on them.
//! It is split into submodules for better organization:
//! - `dates`: calendar-day arithmetic and the injectable clock
//! - `records`: visit, counseling, prayer and memo records as stored
//! - `care_data`: the record snapshot and its two mutations
//! - `follow_up`: obligation extraction and the due-state queue
//! - `timeline`: merged, date-descending history across record kinds
//! - `summary`: monthly dashboard counts

mod care_data;
pub mod dates;
mod follow_up;
mod records;
mod summary;
mod timeline;

// Re-export all public types
pub use care_data::CareData;
pub use dates::{Clock, FixedClock, SystemClock};
pub use follow_up::{
    BucketCounts, DueState, FollowUpKind, FollowUpObligation, FollowUpQueue, FollowUpTab,
    extract_follow_ups,
};
pub use records::{
    CounselType, CounselingRecord, DELETED_MEMBER_LABEL, Member, MemoRecord, PrayerRecord,
    PrayerStatus, VisitRecord, VisitStatus, VisitType,
};
pub use summary::{MonthSummary, month_summary};
pub use timeline::{
    TimelineDetail, TimelineEntry, TimelineFilter, TimelineKind, TimelineOptions, build_timeline,
    filter_timeline,
};
