//! Time-of-day primitive
//!
//! Minutes since local midnight, `0..=1440`. `24:00` (1440) is only
//! meaningful as a closing time.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use serde::{Serialize, Serializer};
use shared::models::TimeValue;
use std::fmt;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    pub fn is_end_of_day(self) -> bool {
        self.0 == MINUTES_PER_DAY
    }

    /// Local time of day of an instant, truncated to the minute
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self((instant.hour() * 60 + instant.minute()) as u16)
    }

    /// `NaiveTime` for this value; `24:00` has none
    pub fn to_naive(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
    }

    /// Parse a stored schedule value
    pub fn parse(value: &TimeValue) -> Option<Self> {
        match value {
            TimeValue::Minutes(m) => u16::try_from(*m).ok().and_then(Self::from_minutes),
            TimeValue::Text(s) => Self::parse_str(s),
            TimeValue::Other(_) => None,
        }
    }

    /// Parse `H:MM`, `HH:MM` or `HH:MM:SS` (seconds ignored)
    pub fn parse_str(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':');
        let hour = parse_component(parts.next()?)?;
        let minute = parse_component(parts.next()?)?;
        if let Some(seconds) = parts.next() {
            if parse_component(seconds)? >= 60 {
                return None;
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Self::from_hm(hour, minute)
    }
}

fn parse_component(part: &str) -> Option<u16> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
