//! 营业时间展示 - localized weekly hours and next-opening labels

use chrono::Weekday;
use serde::Serialize;
use shared::Language;
use shared::models::{WEEK, WeeklySchedule};

use super::day::{DayHours, resolve_day};
use super::evaluator::NextOpening;

/// One row of the opening hours table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHoursLine {
    pub day: String,
    pub hours: String,
}

pub fn day_name(day: Weekday, language: Language) -> &'static str {
    match language {
        Language::Fi => match day {
            Weekday::Mon => "Maanantai",
            Weekday::Tue => "Tiistai",
            Weekday::Wed => "Keskiviikko",
            Weekday::Thu => "Torstai",
            Weekday::Fri => "Perjantai",
            Weekday::Sat => "Lauantai",
            Weekday::Sun => "Sunnuntai",
        },
        Language::En => match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
    }
}

fn closed_label(language: Language) -> &'static str {
    match language {
        Language::Fi => "Suljettu",
        Language::En => "Closed",
    }
}

/// Seven rows, Monday first. Malformed days show as closed.
pub fn format_weekly_hours(schedule: &WeeklySchedule, language: Language) -> Vec<DayHoursLine> {
    WEEK.iter()
        .map(|day| {
            let hours = match resolve_day(schedule, *day) {
                DayHours::Open { open, close } => format!("{open} - {close}"),
                DayHours::Closed | DayHours::Malformed(_) => closed_label(language).to_string(),
            };
            DayHoursLine {
                day: day_name(*day, language).to_string(),
                hours,
            }
        })
        .collect()
}

impl NextOpening {
    /// "Opens Friday 10:00" / "Avautuu perjantai klo 10:00"
    pub fn label(&self, language: Language) -> String {
        match language {
            Language::Fi => format!(
                "Avautuu {} klo {}",
                day_name(self.day, language).to_lowercase(),
                self.time
            ),
            Language::En => format!("Opens {} {}", day_name(self.day, language), self.time),
        }
    }
}
