//! Formatting helper functions for the pastoral-care MCP server
//!
//! This module renders queue and timeline views as plain text for tool output.

use crate::care::{
    CareData, FollowUpKind, FollowUpQueue, FollowUpTab, MonthSummary, TimelineDetail,
    TimelineEntry, dates,
};
use chrono::NaiveDate;

fn kind_label(kind: FollowUpKind) -> &'static str {
    match kind {
        FollowUpKind::visit => "심방",
        FollowUpKind::counsel => "상담",
    }
}

/// Format the follow-up queue for one tab
///
/// # Arguments
/// * `queue` - Queue classified against today
/// * `tab` - Which bucket to show
/// * `data` - Snapshot used to resolve member names
pub fn format_follow_ups(queue: &FollowUpQueue, tab: FollowUpTab, data: &CareData) -> String {
    let counts = queue.counts();
    let mut result = format!(
        "Follow-ups as of {} (overdue: {}, today: {}, upcoming: {}, done: {})\n",
        dates::format_date(queue.today()),
        counts.overdue,
        counts.today,
        counts.upcoming,
        counts.done
    );

    let shown = queue.filter(tab);
    if shown.is_empty() {
        result.push_str("No follow-ups found");
        return result;
    }

    result.push_str(&format!("Showing {} item(s) [{:?}]:\n\n", shown.len(), tab));
    for obligation in shown {
        let relative = dates::relative_label(&obligation.due_date, queue.today());
        result.push_str(&format!(
            "- [{}:{}] {} {} (due: {}{}, state: {:?})\n",
            obligation.kind.as_str(),
            obligation.ref_id,
            data.member_name(&obligation.member_id),
            kind_label(obligation.kind),
            obligation.due_date,
            if relative.is_empty() {
                String::new()
            } else {
                format!(", {}", relative)
            },
            queue.state_of(obligation)
        ));
        result.push_str(&format!(
            "  From: {} on {}\n",
            obligation.origin_type, obligation.origin_date
        ));
        if !obligation.note.is_empty() {
            result.push_str(&format!("  Note: {}\n", obligation.note));
        }
    }

    result
}

fn detail_line(entry: &TimelineEntry) -> String {
    match &entry.detail {
        TimelineDetail::Visit { visit_type, status } => {
            format!("{} / {}", visit_type.label(), status.as_str())
        }
        TimelineDetail::Counsel {
            counsel_type,
            confidential,
        } => {
            if *confidential {
                format!("{} / confidential", counsel_type.label())
            } else {
                counsel_type.label().to_string()
            }
        }
        TimelineDetail::Prayer { category, status } => {
            format!("{} / {}", category, status.as_str())
        }
        TimelineDetail::Memo { category } => category.clone(),
    }
}

/// Format timeline entries into a display string
pub fn format_timeline(entries: &[TimelineEntry], data: &CareData) -> String {
    if entries.is_empty() {
        return "No timeline entries found".to_string();
    }

    let mut result = format!("Found {} entr(ies):\n\n", entries.len());
    for entry in entries {
        result.push_str(&format!(
            "- {} [{}:{}] {} ({})\n",
            entry.date,
            entry.kind.as_str(),
            entry.id,
            data.member_name(&entry.member_id),
            detail_line(entry)
        ));
        if !entry.summary.is_empty() {
            result.push_str(&format!("  {}\n", entry.summary));
        }
    }

    result
}

/// Format a monthly summary
pub fn format_summary(summary: &MonthSummary, today: NaiveDate) -> String {
    format!(
        "Summary for {}\n\
         Visits: {} ({} completed)\n\
         Counseling: {}\n\
         Prayer requests: {} ({} answered)\n\
         Memos: {}\n\
         Follow-ups as of {}: {} pending (overdue: {}, today: {}, upcoming: {}), {} done\n",
        summary.month.format("%Y-%m"),
        summary.visits,
        summary.completed_visits,
        summary.counsels,
        summary.prayers,
        summary.answered_prayers,
        summary.memos,
        dates::format_date(today),
        summary.follow_ups.pending(),
        summary.follow_ups.overdue,
        summary.follow_ups.today,
        summary.follow_ups.upcoming,
        summary.follow_ups.done
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::{CounselingRecord, Member, TimelineOptions, VisitRecord};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CareData {
        CareData {
            members: vec![Member {
                id: "m1".to_string(),
                name: "박믿음".to_string(),
            }],
            visits: vec![VisitRecord {
                id: "v1".to_string(),
                member_id: "m1".to_string(),
                date: "2025-01-03".to_string(),
                summary: "병원 방문".to_string(),
                follow_up_date: Some("2025-01-05".to_string()),
                follow_up_note: Some("퇴원 확인".to_string()),
                ..Default::default()
            }],
            counsels: vec![CounselingRecord {
                id: "c1".to_string(),
                member_id: "ghost".to_string(),
                date: "2025-01-04".to_string(),
                confidential: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_follow_ups_shows_label_and_name() {
        let data = sample();
        let queue = data.follow_up_queue(ymd(2025, 1, 10));
        let text = format_follow_ups(&queue, FollowUpTab::overdue, &data);
        assert!(text.contains("overdue: 1"));
        assert!(text.contains("[visit:v1] 박믿음"));
        assert!(text.contains("5일 전"));
        assert!(text.contains("Note: 퇴원 확인"));
    }

    #[test]
    fn test_format_follow_ups_empty_tab() {
        let data = sample();
        let queue = data.follow_up_queue(ymd(2025, 1, 10));
        let text = format_follow_ups(&queue, FollowUpTab::today, &data);
        assert!(text.ends_with("No follow-ups found"));
    }

    #[test]
    fn test_format_timeline_uses_placeholder_for_missing_member() {
        let data = sample();
        let entries = data.timeline(&TimelineOptions::default());
        let text = format_timeline(&entries, &data);
        assert!(text.contains("[counsel:c1] (삭제됨)"));
        assert!(text.contains("confidential"));
        assert!(text.contains("병원 방문"));
        assert_eq!(format_timeline(&[], &data), "No timeline entries found");
    }
}
