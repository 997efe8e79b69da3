//! Follow-up queue handler for the pastoral-care MCP server

use crate::PastoralCareHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl PastoralCareHandler {
    /// Recomputes obligations from the current snapshot and renders one tab.
    pub async fn handle_follow_ups(&self, tab: Option<String>) -> McpResult<String> {
        let tab = validation::parse_tab(tab.as_deref())?;
        let today = self.clock.today();

        let data = self.data.lock().unwrap();
        let queue = data.follow_up_queue(today);
        let text = formatting::format_follow_ups(&queue, tab, &data);
        drop(data);

        tracing::debug!(?tab, %today, total = queue.obligations().len(), "listed follow-ups");
        Ok(text)
    }
}
