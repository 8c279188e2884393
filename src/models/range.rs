//! Timestamp range used to filter expense listings

use chrono::NaiveDateTime;

/// An inclusive timestamp range; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    /// A range with no bounds
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a range; `None` leaves that side open
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Check if neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check if a timestamp falls inside the range, bounds included
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start.map_or(true, |start| timestamp >= start)
            && self.end.map_or(true, |end| timestamp <= end)
    }
}
