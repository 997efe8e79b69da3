//! Validation helper functions for the pastoral-care MCP server
//!
//! This module turns raw tool parameters into domain values and maps parse
//! failures to `INVALID_PARAMS` errors.

use crate::care::{FollowUpKind, FollowUpTab, TimelineFilter, dates};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use std::str::FromStr;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

fn parse_param<T: FromStr<Err = String>>(raw: &str) -> McpResult<T> {
    raw.trim().parse::<T>().map_err(invalid_params)
}

/// Parse a follow-up kind ("visit" or "counsel")
pub fn parse_kind(raw: &str) -> McpResult<FollowUpKind> {
    parse_param(raw)
}

/// Parse an optional queue tab, defaulting to `all`
pub fn parse_tab(raw: Option<&str>) -> McpResult<FollowUpTab> {
    match raw {
        None => Ok(FollowUpTab::all),
        Some(s) if s.trim().is_empty() => Ok(FollowUpTab::all),
        Some(s) => parse_param(s),
    }
}

/// Parse an optional timeline kind filter, defaulting to `all`
pub fn parse_timeline_filter(raw: Option<&str>) -> McpResult<TimelineFilter> {
    match raw {
        None => Ok(TimelineFilter::all),
        Some(s) if s.trim().is_empty() => Ok(TimelineFilter::all),
        Some(s) => parse_param(s),
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), dates::DATE_FORMAT).map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Parse a follow-up date where "" means "clear"
pub fn parse_optional_date(date_str: &str) -> McpResult<Option<NaiveDate>> {
    if date_str.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(date_str).map(Some)
    }
}

/// Parse a `YYYY-MM` month into its first day
pub fn parse_month(month_str: &str) -> McpResult<NaiveDate> {
    dates::parse_month(month_str).ok_or_else(|| {
        invalid_params(format!(
            "Invalid month format '{}'. Use YYYY-MM (e.g., '2025-03')",
            month_str
        ))
    })
}

/// Normalize a record ID by trimming surrounding whitespace
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind(" visit ").unwrap(), FollowUpKind::visit);
        assert!(parse_kind("memo").is_err());
    }

    #[test]
    fn test_parse_tab_defaults_to_all() {
        assert_eq!(parse_tab(None).unwrap(), FollowUpTab::all);
        assert_eq!(parse_tab(Some("")).unwrap(), FollowUpTab::all);
        assert_eq!(parse_tab(Some("overdue")).unwrap(), FollowUpTab::overdue);
        assert!(parse_tab(Some("late")).is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("").unwrap(), None);
        assert_eq!(
            parse_optional_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert!(parse_optional_date("03/01/2025").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(parse_month("2025").is_err());
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("  v-12 "), "v-12");
    }
}
