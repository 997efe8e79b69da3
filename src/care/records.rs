//! Pastoral record types as supplied by the record stores
//!
//! Dates are kept as the raw strings the store hands us. Parsing happens in
//! [`super::dates`] so a single corrupt value never prevents a snapshot from
//! loading.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display name used when a record points at a member that no longer exists
pub const DELETED_MEMBER_LABEL: &str = "(삭제됨)";

/// A congregation member referenced by pastoral records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub id: String,
    pub name: String,
}

/// Purpose of a pastoral visit
///
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitType {
    /// Hospital or sickbed visit
    sick,
    /// Welcoming a newly registered family
    new_family,
    /// Scheduled household visit
    #[default]
    regular,
    /// Emergency or crisis response
    crisis,
    /// Birth, wedding, anniversary and similar
    celebration,
    /// Informal check-in
    routine,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::sick => "sick",
            VisitType::new_family => "new_family",
            VisitType::regular => "regular",
            VisitType::crisis => "crisis",
            VisitType::celebration => "celebration",
            VisitType::routine => "routine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitType::sick => "병문안",
            VisitType::new_family => "새가족",
            VisitType::regular => "대심방",
            VisitType::crisis => "위기",
            VisitType::celebration => "축하",
            VisitType::routine => "일반",
        }
    }
}

impl FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sick" => Ok(VisitType::sick),
            "new_family" => Ok(VisitType::new_family),
            "regular" => Ok(VisitType::regular),
            "crisis" => Ok(VisitType::crisis),
            "celebration" => Ok(VisitType::celebration),
            "routine" => Ok(VisitType::routine),
            _ => Err(format!(
                "Invalid visit type '{}'. Valid options are: sick, new_family, regular, crisis, celebration, routine",
                s
            )),
        }
    }
}

/// Lifecycle of a visit appointment
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitStatus {
    #[default]
    scheduled,
    completed,
    pending,
    cancelled,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::scheduled => "scheduled",
            VisitStatus::completed => "completed",
            VisitStatus::pending => "pending",
            VisitStatus::cancelled => "cancelled",
        }
    }
}

impl FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(VisitStatus::scheduled),
            "completed" => Ok(VisitStatus::completed),
            "pending" => Ok(VisitStatus::pending),
            "cancelled" => Ok(VisitStatus::cancelled),
            _ => Err(format!(
                "Invalid visit status '{}'. Valid options are: scheduled, completed, pending, cancelled",
                s
            )),
        }
    }
}

/// Topic of a counseling session
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounselType {
    family,
    faith,
    career,
    health,
    finance,
    #[default]
    other,
}

impl CounselType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounselType::family => "family",
            CounselType::faith => "faith",
            CounselType::career => "career",
            CounselType::health => "health",
            CounselType::finance => "finance",
            CounselType::other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounselType::family => "가정",
            CounselType::faith => "신앙",
            CounselType::career => "진로",
            CounselType::health => "건강",
            CounselType::finance => "재정",
            CounselType::other => "기타",
        }
    }
}

impl FromStr for CounselType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "family" => Ok(CounselType::family),
            "faith" => Ok(CounselType::faith),
            "career" => Ok(CounselType::career),
            "health" => Ok(CounselType::health),
            "finance" => Ok(CounselType::finance),
            "other" => Ok(CounselType::other),
            _ => Err(format!(
                "Invalid counseling type '{}'. Valid options are: family, faith, career, health, finance, other",
                s
            )),
        }
    }
}

/// Whether a prayer request is still being prayed for
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerStatus {
    #[default]
    active,
    answered,
}

impl PrayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerStatus::active => "active",
            PrayerStatus::answered => "answered",
        }
    }
}

/// A pastoral visit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitRecord {
    pub id: String,
    pub member_id: String,
    #[serde(rename = "type")]
    pub visit_type: VisitType,
    /// Visit date (YYYY-MM-DD)
    pub date: String,
    /// Free-form time of day (e.g. "14:00")
    pub time: String,
    pub location: String,
    pub status: VisitStatus,
    pub summary: String,
    pub prayer_note: String,
    /// Deferred follow-up date (YYYY-MM-DD); blank means no follow-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_note: Option<String>,
    pub follow_up_done: bool,
}

/// A counseling session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounselingRecord {
    pub id: String,
    pub member_id: String,
    #[serde(rename = "type")]
    pub counsel_type: CounselType,
    /// Session date (YYYY-MM-DD)
    pub date: String,
    pub summary: String,
    /// Marks the session content as confidential
    pub confidential: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_note: Option<String>,
    pub follow_up_done: bool,
}

/// A prayer request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerRecord {
    pub id: String,
    pub member_id: String,
    pub text: String,
    pub date: String,
    pub category: String,
    pub status: PrayerStatus,
}

/// An administrative memo about a member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoRecord {
    pub id: String,
    pub member_id: String,
    pub text: String,
    pub date: String,
    pub category: String,
}

/// The follow-up date if one is set and non-blank
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|d| !d.trim().is_empty())
}

impl VisitRecord {
    /// Follow-up date when this visit carries a pending or completed follow-up
    pub fn follow_up(&self) -> Option<&str> {
        non_blank(&self.follow_up_date)
    }
}

impl CounselingRecord {
    /// Follow-up date when this session carries a pending or completed follow-up
    pub fn follow_up(&self) -> Option<&str> {
        non_blank(&self.follow_up_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_type_round_trip_through_str() {
        for s in ["sick", "new_family", "regular", "crisis", "celebration", "routine"] {
            let parsed = VisitType::from_str(s).unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert!(VisitType::from_str("hospital").is_err());
    }

    #[test]
    fn test_counsel_type_rejects_unknown() {
        let err = CounselType::from_str("legal").unwrap_err();
        assert!(err.contains("family, faith, career"));
    }

    #[test]
    fn test_blank_follow_up_is_absent() {
        let mut visit = VisitRecord {
            follow_up_date: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(visit.follow_up(), None);

        visit.follow_up_date = Some("2025-03-01".to_string());
        assert_eq!(visit.follow_up(), Some("2025-03-01"));

        visit.follow_up_date = None;
        assert_eq!(visit.follow_up(), None);
    }

    #[test]
    fn test_deserialize_uses_type_key_and_defaults() {
        let toml_str = r#"
            id = "c1"
            member_id = "m1"
            type = "faith"
            date = "2025-02-02"
            confidential = true
        "#;
        let record: CounselingRecord = toml::from_str(toml_str).unwrap();
        assert_eq!(record.counsel_type, CounselType::faith);
        assert!(record.confidential);
        assert!(!record.follow_up_done);
        assert_eq!(record.follow_up(), None);
    }
}
