//! Date formatting and month-range helpers.
//!
//! Dates are rendered the way zh-TW locales show them (`2024/3/5`,
//! `2024/3/5 下午3:04:05`). "Now" always means the local time zone.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, Timelike};

const ISO_DATE: &str = "%Y-%m-%d";

/// How much of a timestamp to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateMode {
    /// Date only.
    #[default]
    Short,
    /// Date and time.
    Full,
}

impl DateMode {
    /// `"short"` selects [`DateMode::Short`]; anything else is [`DateMode::Full`].
    pub fn parse(mode: &str) -> Self {
        if mode == "short" { Self::Short } else { Self::Full }
    }
}

/// Parse a server or form timestamp into local wall-clock time.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS[.f]`, `YYYY-MM-DDTHH:MM:SS[.f]`
/// (read as local) and RFC 3339 (converted to local).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, ISO_DATE).ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render `dt` in zh-TW style.
pub fn format_local(dt: NaiveDateTime, mode: DateMode) -> String {
    let date = format!("{}/{}/{}", dt.year(), dt.month(), dt.day());
    match mode {
        DateMode::Short => date,
        DateMode::Full => {
            let (pm, hour) = dt.hour12();
            let period = if pm { "下午" } else { "上午" };
            format!("{date} {period}{hour}:{:02}:{:02}", dt.minute(), dt.second())
        }
    }
}

/// Format a timestamp string; `None` when it cannot be parsed.
pub fn format_date(value: &str, mode: DateMode) -> Option<String> {
    parse_timestamp(value).map(|dt| format_local(dt, mode))
}

/// First day of the month containing `date`.
pub fn month_start_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn month_end_of(date: NaiveDate) -> NaiveDate {
    month_start_of(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`.
pub fn today() -> String {
    iso(local_today())
}

/// First day of the current month as `YYYY-MM-DD`.
pub fn month_start() -> String {
    iso(month_start_of(local_today()))
}

/// Last day of the current month as `YYYY-MM-DD`.
pub fn month_end() -> String {
    iso(month_end_of(local_today()))
}
