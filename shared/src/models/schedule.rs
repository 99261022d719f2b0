//! Weekly Schedule Model
//!
//! Opening hours as stored in the restaurant database: an object keyed by
//! lowercase day name, each entry `{open, close, closed}`.
//!
//! ```json
//! {
//!   "monday": { "open": "10:30", "close": "20:00", "closed": false },
//!   "friday": { "open": "22:00", "close": "02:00" },
//!   "sunday": { "closed": true }
//! }
//! ```
//!
//! The records are kept exactly as stored. Interpreting the values (time
//! parsing, midnight crossing, malformed entries) is the evaluator's job, so
//! deserialization accepts any JSON value in a day slot.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Raw time value of a schedule entry
///
/// Either `"HH:MM"` (optionally `"HH:MM:SS"`) or whole minutes since midnight.
/// Anything else is kept verbatim so a bad cell never fails the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Minutes(i64),
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Text(value.to_string())
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        TimeValue::Minutes(value)
    }
}

/// Raw `closed` flag: a boolean, or anything else kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClosedFlag {
    Flag(bool),
    Other(serde_json::Value),
}

/// One day of a weekly schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub open: Option<TimeValue>,
    #[serde(default)]
    pub close: Option<TimeValue>,
    /// `true` ignores `open`/`close`; absent or null means not closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<ClosedFlag>,
}

impl DayEntry {
    pub fn hours(open: impl Into<TimeValue>, close: impl Into<TimeValue>) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
            closed: None,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: None,
            close: None,
            closed: Some(ClosedFlag::Flag(true)),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.closed, Some(ClosedFlag::Flag(true)))
    }
}

/// Stored value of one day slot
///
/// An object is a [`DayEntry`]; any other value (`"closed"`, a number, an
/// array) is kept as `Other` and resolves to a malformed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayCell {
    Entry(DayEntry),
    Other(serde_json::Value),
}

impl From<DayEntry> for DayCell {
    fn from(entry: DayEntry) -> Self {
        DayCell::Entry(entry)
    }
}

/// Weekly opening hours. A missing day is a closed day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayCell>,
}

/// Days in display order (Monday first)
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl WeeklySchedule {
    /// Stored slot of `day`, whatever its shape
    pub fn cell(&self, day: Weekday) -> Option<&DayCell> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Entry of `day` when the slot holds an object
    pub fn entry(&self, day: Weekday) -> Option<&DayEntry> {
        match self.cell(day)? {
            DayCell::Entry(entry) => Some(entry),
            DayCell::Other(_) => None,
        }
    }

    pub fn set(&mut self, day: Weekday, cell: Option<DayCell>) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = cell;
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, day: Weekday, entry: DayEntry) -> Self {
        self.set(day, Some(entry.into()));
        self
    }

    /// Same hours on every day of the week
    pub fn every_day(open: &str, close: &str) -> Self {
        WEEK.iter().fold(Self::default(), |schedule, day| {
            schedule.with(*day, DayEntry::hours(open, close))
        })
    }
}

/// Service kind: each may have its own weekly schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Walk-in opening hours
    General,
    Pickup,
    Delivery,
}

/// Online ordering service requested by a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingService {
    Pickup,
    Delivery,
}

impl OrderingService {
    pub const ALL: [OrderingService; 2] = [OrderingService::Pickup, OrderingService::Delivery];
}

impl From<OrderingService> for ServiceKind {
    fn from(service: OrderingService) -> Self {
        match service {
            OrderingService::Pickup => ServiceKind::Pickup,
            OrderingService::Delivery => ServiceKind::Delivery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_database_hours() {
        let json = r#"{
            "monday": {"open": "10:30", "close": "20:00", "closed": false},
            "tuesday": {"open": 600, "close": 1200},
            "sunday": {"closed": true},
            "holiday_note": "ignored"
        }"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();

        let monday = schedule.entry(Weekday::Mon).unwrap();
        assert_eq!(monday.open, Some(TimeValue::from("10:30")));
        assert_eq!(monday.closed, Some(ClosedFlag::Flag(false)));
        assert!(!monday.is_closed());
        assert_eq!(
            schedule.entry(Weekday::Tue).and_then(|e| e.open.clone()),
            Some(TimeValue::Minutes(600))
        );
        assert!(schedule.entry(Weekday::Sun).is_some_and(|e| e.is_closed()));
        assert!(schedule.entry(Weekday::Wed).is_none());
    }

    #[test]
    fn test_garbage_cell_does_not_fail_record() {
        let json = r#"{"monday": {"open": [1, 2], "close": null}}"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
        let monday = schedule.entry(Weekday::Mon).unwrap();
        assert!(matches!(monday.open, Some(TimeValue::Other(_))));
        assert_eq!(monday.close, None);
    }

    #[test]
    fn test_bad_day_slots_keep_other_days() {
        let json = r#"{
            "monday": {"open": "10:00", "close": "20:00", "closed": null},
            "tuesday": "closed",
            "wednesday": {"open": "10:00", "close": "20:00", "closed": "true"},
            "thursday": {"open": "10:00", "close": "20:00"},
            "friday": null
        }"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();

        let monday = schedule.entry(Weekday::Mon).unwrap();
        assert_eq!(monday.closed, None);
        assert_eq!(
            schedule.cell(Weekday::Tue),
            Some(&DayCell::Other(serde_json::json!("closed")))
        );
        assert!(schedule.entry(Weekday::Tue).is_none());
        assert_eq!(
            schedule.entry(Weekday::Wed).and_then(|e| e.closed.clone()),
            Some(ClosedFlag::Other(serde_json::json!("true")))
        );
        assert_eq!(
            schedule.entry(Weekday::Thu),
            Some(&DayEntry::hours("10:00", "20:00"))
        );
        assert!(schedule.cell(Weekday::Fri).is_none());
    }

    #[test]
    fn test_every_day_builder() {
        let schedule = WeeklySchedule::every_day("11:00", "21:00");
        for day in WEEK {
            assert_eq!(schedule.entry(day), Some(&DayEntry::hours("11:00", "21:00")));
        }
    }
}
