//! Per-day resolution of a stored schedule entry
//!
//! Crossing rule: an entry whose close is earlier than its open closes on the
//! following calendar day. `open == close` is an empty day.

use chrono::Weekday;
use serde::Serialize;
use shared::models::{ClosedFlag, DayCell, TimeValue, WeeklySchedule};

use super::clock::TimeOfDay;

/// Why a day entry could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MalformedDay {
    /// Day slot is not an object
    NotAnEntry(String),
    /// `closed` is neither a boolean nor null
    InvalidClosedFlag(String),
    MissingOpen,
    MissingClose,
    UnparseableOpen(String),
    UnparseableClose(String),
    /// `open` was `24:00`
    OpenAtEndOfDay,
}

impl std::fmt::Display for MalformedDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedDay::NotAnEntry(v) => write!(f, "day entry {v} is not an object"),
            MalformedDay::InvalidClosedFlag(v) => write!(f, "closed flag {v} is not a boolean"),
            MalformedDay::MissingOpen => write!(f, "open time missing"),
            MalformedDay::MissingClose => write!(f, "close time missing"),
            MalformedDay::UnparseableOpen(v) => write!(f, "open time {v:?} is not a time of day"),
            MalformedDay::UnparseableClose(v) => write!(f, "close time {v:?} is not a time of day"),
            MalformedDay::OpenAtEndOfDay => write!(f, "open time 24:00 is not allowed"),
        }
    }
}

/// Resolved hours of one weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayHours {
    Closed,
    Open { open: TimeOfDay, close: TimeOfDay },
    /// Treated as closed, but distinguishable for diagnostics
    Malformed(MalformedDay),
}

impl DayHours {
    pub fn is_open_day(&self) -> bool {
        matches!(self, DayHours::Open { .. })
    }

    pub fn crosses_midnight(&self) -> bool {
        matches!(self, DayHours::Open { open, close } if close < open)
    }

    /// Open at `t` on this entry's own calendar day
    pub fn covers_same_day(&self, t: TimeOfDay) -> bool {
        match self {
            DayHours::Open { open, close } if close < open => t >= *open,
            DayHours::Open { open, close } => *open <= t && t < *close,
            _ => false,
        }
    }

    /// Open at `t` on the calendar day after this entry's day
    pub fn covers_next_day(&self, t: TimeOfDay) -> bool {
        match self {
            DayHours::Open { open, close } if close < open => t < *close,
            _ => false,
        }
    }
}

/// Resolve the entry for `day`. A missing or null entry is a closed day.
pub fn resolve_day(schedule: &WeeklySchedule, day: Weekday) -> DayHours {
    let entry = match schedule.cell(day) {
        None => return DayHours::Closed,
        Some(DayCell::Other(value)) => return DayHours::Malformed(MalformedDay::NotAnEntry(value.to_string())),
        Some(DayCell::Entry(entry)) => entry,
    };
    match &entry.closed {
        Some(ClosedFlag::Flag(true)) => return DayHours::Closed,
        Some(ClosedFlag::Other(value)) => {
            return DayHours::Malformed(MalformedDay::InvalidClosedFlag(value.to_string()));
        }
        Some(ClosedFlag::Flag(false)) | None => {}
    }

    let open = match &entry.open {
        None => return DayHours::Malformed(MalformedDay::MissingOpen),
        Some(value) => match TimeOfDay::parse(value) {
            Some(t) => t,
            None => return DayHours::Malformed(MalformedDay::UnparseableOpen(describe(value))),
        },
    };
    let close = match &entry.close {
        None => return DayHours::Malformed(MalformedDay::MissingClose),
        Some(value) => match TimeOfDay::parse(value) {
            Some(t) => t,
            None => return DayHours::Malformed(MalformedDay::UnparseableClose(describe(value))),
        },
    };

    if open.is_end_of_day() {
        return DayHours::Malformed(MalformedDay::OpenAtEndOfDay);
    }
    if open == close {
        return DayHours::Closed;
    }
    DayHours::Open { open, close }
}

fn describe(value: &TimeValue) -> String {
    match value {
        TimeValue::Minutes(m) => m.to_string(),
        TimeValue::Text(s) => s.clone(),
        TimeValue::Other(v) => v.to_string(),
    }
}
