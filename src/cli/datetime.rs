//! Date/time parsing for shell input
//!
//! Accepted forms:
//! - `Oct 05 2025 at 12:30`
//! - `2025-10-05 12:30` (seconds optional, `T` separator allowed)
//! - `Oct 05 2025` or `2025-10-05` (a whole day)

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{BuddyError, BuddyResult};

const DATETIME_FORMATS: &[&str] = &[
    "%b %d %Y at %H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%b %d %Y", "%Y-%m-%d"];

/// Which end of a day a date-only value stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEdge {
    Start,
    End,
}

impl DayEdge {
    fn time(self) -> NaiveTime {
        match self {
            DayEdge::Start => NaiveTime::MIN,
            DayEdge::End => NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
        }
    }
}

fn parse_at(text: &str, edge: DayEdge) -> Option<NaiveDateTime> {
    let text = text.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .map(|date| date.and_time(edge.time()))
        })
}

/// Parse a timestamp; a bare date means midnight
pub fn parse(text: &str) -> BuddyResult<NaiveDateTime> {
    parse_bound(text, DayEdge::Start)
}

/// Parse a range bound; a bare date covers the start or the end of that day
pub fn parse_bound(text: &str, edge: DayEdge) -> BuddyResult<NaiveDateTime> {
    parse_at(text, edge).ok_or_else(|| {
        BuddyError::invalid_input(format!(
            "Could not read time '{}'. Use a form like 'Oct 05 2025 at 12:30' or '2025-10-05 12:30'",
            text.trim()
        ))
    })
}

/// Current local time, truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
