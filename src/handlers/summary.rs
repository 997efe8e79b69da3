//! Monthly summary handler for the pastoral-care MCP server

use crate::PastoralCareHandler;
use crate::care::month_summary;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl PastoralCareHandler {
    /// Counts records in a month (default: the current one) plus the follow-up buckets.
    pub async fn handle_summary(&self, month: Option<String>) -> McpResult<String> {
        let today = self.clock.today();
        let reference_month = match month.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(m) => validation::parse_month(m)?,
        };

        let data = self.data.lock().unwrap();
        let summary = month_summary(&data, reference_month, today);
        drop(data);

        Ok(formatting::format_summary(&summary, today))
    }
}
