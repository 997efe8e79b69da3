//! Pastoral Care MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for the
//! pastoral-care side of a church operations suite: follow-up obligations
//! derived from visit and counseling records, and merged per-member or
//! congregation-wide care timelines.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `PastoralCareHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `care` module - Records, follow-up queue, timeline
//! - **Persistence Layer**: `storage` module - TOML snapshot of the record collections
//!
//! Follow-up obligations are never stored. Every read recomputes them from
//! the records, classified against the date the injected [`Clock`] reports
//! at call time.
//!
//! # Example
//!
//! ```no_run
//! use pastoral_care::PastoralCareHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = PastoralCareHandler::new("care.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod care;
mod formatting;
mod handlers;
pub mod logging;
mod storage;
mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use care::{
    CareData, Clock, CounselingRecord, FixedClock, FollowUpKind, FollowUpObligation, FollowUpTab,
    Member, MemoRecord, PrayerRecord, SystemClock, TimelineEntry, TimelineFilter, VisitRecord,
};
pub use storage::Storage;

/// MCP Server handler for pastoral-care follow-ups and timelines
///
/// Holds the record snapshot in memory. Mutations are a single
/// read-modify-write under the lock followed by a save of the whole
/// snapshot; concurrent edits resolve as last-writer-wins.
pub struct PastoralCareHandler {
    pub(crate) data: Mutex<CareData>,
    pub(crate) storage: Storage,
    pub(crate) clock: Box<dyn Clock>,
}

impl PastoralCareHandler {
    /// Create a new handler backed by a TOML data file, using the local wall clock
    ///
    /// # Arguments
    /// * `storage_path` - Path to the care data file (TOML format)
    ///
    /// # Returns
    /// Result containing the handler or an error
    pub fn new(storage_path: &str) -> Result<Self> {
        Self::with_clock(storage_path, Box::new(SystemClock))
    }

    /// Create a new handler with an explicit clock
    ///
    /// # Example
    /// ```no_run
    /// # use pastoral_care::{FixedClock, PastoralCareHandler};
    /// # use chrono::NaiveDate;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    /// let handler = PastoralCareHandler::with_clock("care.toml", Box::new(FixedClock(today)))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_clock(storage_path: &str, clock: Box<dyn Clock>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            clock,
        })
    }

    /// Apply `edit` to a copy of the snapshot, save it, then publish it
    ///
    /// The lock is held for the whole read-modify-write. If `edit` returns
    /// `None` nothing is saved; if the save fails the in-memory snapshot is
    /// left exactly as it was.
    fn update_data<T>(&self, edit: impl FnOnce(&mut CareData) -> Option<T>) -> Result<Option<T>> {
        let mut data = self.data.lock().unwrap();
        let mut updated = data.clone();
        let Some(outcome) = edit(&mut updated) else {
            return Ok(None);
        };
        self.storage.save(&updated)?;
        *data = updated;
        Ok(Some(outcome))
    }
}

/// Pastoral-care follow-up and timeline server for clergy and staff.
///
/// Visit and counseling records may carry a follow-up date. Each such record
/// yields one follow-up obligation, classified by its due date against today:
/// - **overdue**: due date has passed and the follow-up is not done
/// - **today**: due today and not done
/// - **upcoming**: due later (or the due date is unreadable)
/// - **done**: marked complete on the source record
///
/// Record IDs are the IDs used in the data file (e.g. "v-2025-014").
/// Kinds: "visit" for pastoral visits, "counsel" for counseling sessions.
#[mcp_server]
impl McpServer for PastoralCareHandler {
    /// **Follow-up queue**: List pastoral follow-ups by urgency. Start each day here.
    /// **Tabs**: all (default), overdue, today, upcoming, done.
    #[tool]
    async fn follow_ups(
        &self,
        /// Tab: all/overdue/today/upcoming/done. Empty=all.
        tab: Option<String>,
    ) -> McpResult<String> {
        self.handle_follow_ups(tab).await
    }

    /// **Complete/Reopen**: Toggle whether a follow-up is done. Calling it twice restores the original state.
    /// **Note**: An unknown record ID changes nothing and is not an error.
    #[tool]
    async fn toggle_follow_up(
        &self,
        /// Kind: visit/counsel
        kind: String,
        /// ID of the visit or counseling record
        ref_id: String,
    ) -> McpResult<String> {
        self.handle_toggle_follow_up(kind, ref_id).await
    }

    /// **Schedule follow-up**: Set, move, or clear the follow-up date of a visit or counseling record.
    /// **Tip**: due_date="" clears the follow-up, which removes it from every tab.
    #[tool]
    async fn set_follow_up(
        &self,
        /// Kind: visit/counsel
        kind: String,
        /// ID of the visit or counseling record
        ref_id: String,
        /// Due date YYYY-MM-DD, ""=clear
        due_date: String,
        /// Follow-up note (optional, kept when omitted)
        note: Option<String>,
    ) -> McpResult<String> {
        self.handle_set_follow_up(kind, ref_id, due_date, note).await
    }

    /// **Care timeline**: Merged history of visits and counseling (optionally prayer requests and memos), newest first.
    /// **Use**: member_id for one person, omit for the whole congregation.
    #[tool]
    async fn timeline(
        &self,
        /// Member ID (optional, omit for everyone)
        member_id: Option<String>,
        /// Kind filter: all/visit/counsel/prayer/memo. Empty=all.
        kind: Option<String>,
        /// Include prayer requests (default false)
        include_prayers: Option<bool>,
        /// Include administrative memos (default false)
        include_memos: Option<bool>,
    ) -> McpResult<String> {
        self.handle_timeline(member_id, kind, include_prayers, include_memos)
            .await
    }

    /// **Monthly summary**: Record counts for a month plus the current follow-up backlog.
    #[tool]
    async fn summary(
        &self,
        /// Month YYYY-MM (optional, defaults to the current month)
        month: Option<String>,
    ) -> McpResult<String> {
        self.handle_summary(month).await
    }
}
