//! Follow-up completion toggle handler for the pastoral-care MCP server

use crate::PastoralCareHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl PastoralCareHandler {
    /// Flips `follow_up_done` on one visit or counseling record.
    ///
    /// An unknown record is not an error: it may have been deleted while the
    /// caller was still looking at an older queue.
    pub async fn handle_toggle_follow_up(&self, kind: String, ref_id: String) -> McpResult<String> {
        let kind = validation::parse_kind(&kind)?;
        let ref_id = validation::normalize_id(&ref_id);

        let done = match self.update_data(|data| data.toggle_follow_up(kind, &ref_id)) {
            Ok(Some(done)) => done,
            Ok(None) => {
                tracing::warn!(kind = kind.as_str(), %ref_id, "toggle requested for unknown record");
                return Ok(format!(
                    "No {} record '{}' found; nothing changed",
                    kind.as_str(),
                    ref_id
                ));
            }
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        };

        tracing::info!(kind = kind.as_str(), %ref_id, done, "toggled follow-up");
        Ok(format!(
            "Follow-up for {} {} marked as {}",
            kind.as_str(),
            ref_id,
            if done { "done" } else { "pending" }
        ))
    }
}
