use super::dates::format_date;
use super::follow_up::{FollowUpKind, FollowUpObligation, FollowUpQueue, extract_follow_ups};
use super::records::{
    CounselingRecord, DELETED_MEMBER_LABEL, Member, MemoRecord, PrayerRecord, VisitRecord,
};
use super::timeline::{TimelineEntry, TimelineOptions, build_timeline};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of every record collection the pastoral-care views read
///
/// Each collection is a Vec so source order is preserved; that order is the
/// tie-break for both the follow-up queue and the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CareData {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,
    pub members: Vec<Member>,
    pub visits: Vec<VisitRecord>,
    pub counsels: Vec<CounselingRecord>,
    pub prayers: Vec<PrayerRecord>,
    pub memos: Vec<MemoRecord>,
}

impl Default for CareData {
    fn default() -> Self {
        Self {
            format_version: 1,
            members: Vec::new(),
            visits: Vec::new(),
            counsels: Vec::new(),
            prayers: Vec::new(),
            memos: Vec::new(),
        }
    }
}

impl CareData {
    /// Create a new empty CareData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for a member id, or the deleted-member placeholder
    pub fn member_name(&self, member_id: &str) -> &str {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| m.name.as_str())
            .unwrap_or(DELETED_MEMBER_LABEL)
    }

    pub fn find_visit(&self, id: &str) -> Option<&VisitRecord> {
        self.visits.iter().find(|v| v.id == id)
    }

    pub fn find_counsel(&self, id: &str) -> Option<&CounselingRecord> {
        self.counsels.iter().find(|c| c.id == id)
    }

    /// All follow-up obligations, ascending by due date
    pub fn follow_ups(&self) -> Vec<FollowUpObligation> {
        extract_follow_ups(&self.visits, &self.counsels)
    }

    /// Follow-up queue classified against `today`
    pub fn follow_up_queue(&self, today: NaiveDate) -> FollowUpQueue {
        FollowUpQueue::from_records(&self.visits, &self.counsels, today)
    }

    /// Merged timeline for the given scope
    pub fn timeline(&self, options: &TimelineOptions) -> Vec<TimelineEntry> {
        build_timeline(
            &self.visits,
            &self.counsels,
            &self.prayers,
            &self.memos,
            options,
        )
    }

    /// Flip the follow-up completion flag on one source record
    ///
    /// # Returns
    /// The new `follow_up_done` value, or `None` when no record of `kind` has
    /// id `ref_id` (nothing is changed in that case)
    pub fn toggle_follow_up(&mut self, kind: FollowUpKind, ref_id: &str) -> Option<bool> {
        let done = match kind {
            FollowUpKind::visit => {
                let visit = self.visits.iter_mut().find(|v| v.id == ref_id)?;
                visit.follow_up_done = !visit.follow_up_done;
                visit.follow_up_done
            }
            FollowUpKind::counsel => {
                let counsel = self.counsels.iter_mut().find(|c| c.id == ref_id)?;
                counsel.follow_up_done = !counsel.follow_up_done;
                counsel.follow_up_done
            }
        };
        Some(done)
    }

    /// Set or clear the follow-up fields on one source record
    ///
    /// A `None` date clears both date and note, which removes the obligation
    /// on the next read. Giving a date to a record with no follow-up starts a
    /// new, pending one; moving an existing date keeps `follow_up_done`.
    ///
    /// # Returns
    /// `Some(())` if the record was found and updated, `None` otherwise
    pub fn set_follow_up(
        &mut self,
        kind: FollowUpKind,
        ref_id: &str,
        due_date: Option<NaiveDate>,
        note: Option<String>,
    ) -> Option<()> {
        let (date_slot, note_slot, done_slot) = match kind {
            FollowUpKind::visit => {
                let visit = self.visits.iter_mut().find(|v| v.id == ref_id)?;
                (
                    &mut visit.follow_up_date,
                    &mut visit.follow_up_note,
                    &mut visit.follow_up_done,
                )
            }
            FollowUpKind::counsel => {
                let counsel = self.counsels.iter_mut().find(|c| c.id == ref_id)?;
                (
                    &mut counsel.follow_up_date,
                    &mut counsel.follow_up_note,
                    &mut counsel.follow_up_done,
                )
            }
        };

        match due_date {
            Some(date) => {
                let was_scheduled = date_slot.as_deref().is_some_and(|d| !d.trim().is_empty());
                if !was_scheduled {
                    *done_slot = false;
                }
                *date_slot = Some(format_date(date));
                if note.is_some() {
                    *note_slot = note;
                }
            }
            None => {
                *date_slot = None;
                *note_slot = None;
            }
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::follow_up::{DueState, FollowUpTab};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CareData {
        CareData {
            members: vec![Member {
                id: "m1".to_string(),
                name: "김은혜".to_string(),
            }],
            visits: vec![VisitRecord {
                id: "v1".to_string(),
                member_id: "m1".to_string(),
                date: "2025-01-10".to_string(),
                follow_up_date: Some("2025-01-05".to_string()),
                ..Default::default()
            }],
            counsels: vec![CounselingRecord {
                id: "c1".to_string(),
                member_id: "m-gone".to_string(),
                date: "2025-01-08".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_member_name_placeholder() {
        let data = sample();
        assert_eq!(data.member_name("m1"), "김은혜");
        assert_eq!(data.member_name("m-gone"), DELETED_MEMBER_LABEL);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut data = sample();
        assert_eq!(data.toggle_follow_up(FollowUpKind::visit, "v1"), Some(true));
        assert!(data.follow_ups()[0].done);
        assert_eq!(data.toggle_follow_up(FollowUpKind::visit, "v1"), Some(false));
        assert!(!data.follow_ups()[0].done);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut data = sample();
        let before = data.clone();
        assert_eq!(data.toggle_follow_up(FollowUpKind::counsel, "v1"), None);
        assert_eq!(data.toggle_follow_up(FollowUpKind::visit, "missing"), None);
        assert_eq!(data.visits, before.visits);
        assert_eq!(data.counsels, before.counsels);
    }

    #[test]
    fn test_overdue_scenario() {
        let data = sample();
        let today = ymd(2025, 1, 10);
        let queue = data.follow_up_queue(today);
        let overdue = queue.filter(FollowUpTab::overdue);
        assert_eq!(overdue.len(), 1);
        assert_eq!(queue.state_of(overdue[0]), DueState::overdue);
        assert_eq!(
            crate::care::dates::relative_label(&overdue[0].due_date, today),
            "5일 전"
        );
    }

    #[test]
    fn test_set_and_clear_follow_up() {
        let mut data = sample();
        let today = ymd(2025, 1, 10);

        data.set_follow_up(
            FollowUpKind::counsel,
            "c1",
            Some(today),
            Some("call back".to_string()),
        )
        .unwrap();
        let queue = data.follow_up_queue(today);
        let due_today = queue.filter(FollowUpTab::today);
        assert_eq!(due_today.len(), 1);
        assert_eq!(due_today[0].ref_id, "c1");
        assert_eq!(due_today[0].note, "call back");

        data.set_follow_up(FollowUpKind::visit, "v1", None, None).unwrap();
        let queue = data.follow_up_queue(today);
        assert!(queue.obligations().iter().all(|o| o.ref_id != "v1"));
        assert_eq!(queue.counts().total(), 1);

        assert!(data.set_follow_up(FollowUpKind::visit, "nope", None, None).is_none());
    }

    #[test]
    fn test_rescheduling_after_clear_starts_pending() {
        let mut data = sample();
        let today = ymd(2025, 1, 10);

        // moving a completed follow-up keeps it done
        data.toggle_follow_up(FollowUpKind::visit, "v1").unwrap();
        data.set_follow_up(FollowUpKind::visit, "v1", Some(ymd(2025, 1, 20)), None)
            .unwrap();
        assert!(data.find_visit("v1").unwrap().follow_up_done);

        // clearing and then scheduling again is a new follow-up
        data.set_follow_up(FollowUpKind::visit, "v1", None, None).unwrap();
        data.set_follow_up(FollowUpKind::visit, "v1", Some(ymd(2025, 1, 20)), None)
            .unwrap();
        let queue = data.follow_up_queue(today);
        assert!(queue.filter(FollowUpTab::done).is_empty());
        assert_eq!(queue.filter(FollowUpTab::upcoming).len(), 1);
    }
}
