//! Calendar-day arithmetic for follow-ups and timelines
//!
//! All functions take "today" as an argument instead of reading the wall
//! clock themselves. Callers sample a [`Clock`] once per request, so the same
//! snapshot read on a later day reclassifies itself without any migration.

use chrono::{Datelike, Local, NaiveDate};

/// Canonical date format used everywhere a date leaves this crate
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weeks per month used by [`week_bucket`] (52 weeks spread over 12 months)
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// The current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        local_date_today()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a stored date string
///
/// Accepts `YYYY-MM-DD`, ignoring surrounding whitespace and a trailing time
/// component (`2025-01-05T10:30`, `2025-01-05 10:30`).
///
/// # Returns
/// `None` when the string does not start with a valid calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }

    let head = trimmed.get(..10)?;
    let rest = &trimmed[10..];
    if !(rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Format a date in the canonical `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Canonical form of a stored date string
///
/// Parseable dates come back as `YYYY-MM-DD`; anything else is returned
/// trimmed but otherwise untouched so it still shows up somewhere.
pub fn canonical_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_date(date),
        None => raw.trim().to_string(),
    }
}

/// Days from `today` to `raw` (today = 0, yesterday = -1)
///
/// # Returns
/// `None` when `raw` is not a parseable date
pub fn day_offset(raw: &str, today: NaiveDate) -> Option<i64> {
    parse_date(raw).map(|date| (date - today).num_days())
}

/// Relative Korean label for a date ("오늘", "내일", "어제", "3일 전", "2일 후")
///
/// Returns an empty string for unparseable input.
pub fn relative_label(raw: &str, today: NaiveDate) -> String {
    match day_offset(raw, today) {
        None => String::new(),
        Some(0) => "오늘".to_string(),
        Some(1) => "내일".to_string(),
        Some(-1) => "어제".to_string(),
        Some(n) if n < -1 => format!("{}일 전", -n),
        Some(n) => format!("{}일 후", n),
    }
}

/// Whether `raw` falls in the same year and month as `reference_month`
///
/// Only year and month are compared; the day of `reference_month` is ignored.
pub fn month_membership(raw: &str, reference_month: NaiveDate) -> bool {
    parse_date(raw).is_some_and(|date| {
        date.year() == reference_month.year() && date.month() == reference_month.month()
    })
}

/// Parse a `YYYY-MM` month into its first day
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), DATE_FORMAT).ok()
}

/// Approximate month index (0-based) for a 1-based week-of-year number
///
/// Computed as `floor((week_number - 1) / 4.33)`. This is not calendar
/// accurate and is not clamped: week 53 maps to 12 and week 0 to -1.
pub fn week_bucket(week_number: i64) -> i64 {
    ((week_number - 1) as f64 / WEEKS_PER_MONTH).floor() as i64
}
