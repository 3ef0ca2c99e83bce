use chrono::{Local, NaiveDate};

/// Render a calendar date as the canonical `YYYY-MM-DD` storage key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [`format_date_key`]. Malformed keys yield `None` rather than
/// a garbage date; callers at trusted boundaries may default, the CLI
/// boundary rejects.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    format_date_key(today())
}

/// Ordinal day within Ramadan: 1 on the start date itself. Values below 1
/// mean Ramadan has not started; values above 30 are possible and left
/// uncapped for dates past the month.
pub fn ramadan_day_number(date: NaiveDate, start: NaiveDate) -> i64 {
    date.signed_duration_since(start).num_days() + 1
}
