//! Timeline handler for the pastoral-care MCP server

use crate::PastoralCareHandler;
use crate::care::{TimelineOptions, filter_timeline};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl PastoralCareHandler {
    /// Merges records for one member (or everyone), newest first, then applies the kind filter.
    pub async fn handle_timeline(
        &self,
        member_id: Option<String>,
        kind: Option<String>,
        include_prayers: Option<bool>,
        include_memos: Option<bool>,
    ) -> McpResult<String> {
        let filter = validation::parse_timeline_filter(kind.as_deref())?;
        let options = TimelineOptions {
            member_id: member_id
                .map(|m| validation::normalize_id(&m))
                .filter(|m| !m.is_empty()),
            include_prayers: include_prayers.unwrap_or(false),
            include_memos: include_memos.unwrap_or(false),
        };

        let data = self.data.lock().unwrap();
        let entries = filter_timeline(data.timeline(&options), filter);
        let text = formatting::format_timeline(&entries, &data);
        drop(data);

        tracing::debug!(member = ?options.member_id, ?filter, count = entries.len(), "built timeline");
        Ok(text)
    }
}
