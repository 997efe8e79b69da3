//! Follow-up edit handler for the pastoral-care MCP server

use crate::PastoralCareHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl PastoralCareHandler {
    /// Sets, moves, or clears the follow-up date on a source record.
    ///
    /// Obligations are never created or deleted directly; they appear and
    /// disappear with the record's follow-up date.
    pub async fn handle_set_follow_up(
        &self,
        kind: String,
        ref_id: String,
        due_date: String,
        note: Option<String>,
    ) -> McpResult<String> {
        let kind = validation::parse_kind(&kind)?;
        let ref_id = validation::normalize_id(&ref_id);
        let due = validation::parse_optional_date(&due_date)?;

        match self.update_data(|data| data.set_follow_up(kind, &ref_id, due, note)) {
            Ok(Some(())) => {}
            Ok(None) => {
                bail_public!(_, "{} record '{}' not found", kind.as_str(), ref_id);
            }
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }

        match due {
            Some(date) => {
                tracing::info!(kind = kind.as_str(), %ref_id, %date, "set follow-up");
                Ok(format!(
                    "Follow-up for {} {} set to {}",
                    kind.as_str(),
                    ref_id,
                    date
                ))
            }
            None => {
                tracing::info!(kind = kind.as_str(), %ref_id, "cleared follow-up");
                Ok(format!("Follow-up for {} {} cleared", kind.as_str(), ref_id))
            }
        }
    }
}
