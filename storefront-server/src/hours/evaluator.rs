//! Business hours evaluator
//!
//! Pure functions of `(schedule, now, zone)`. The zone is always an explicit
//! argument; the application default lives in [`Config`](crate::core::Config).

use chrono::{DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{WEEK, WeeklySchedule};

use super::clock::TimeOfDay;
use super::day::{DayHours, MalformedDay, resolve_day};

/// Forward search horizon of [`next_opening_after`], in days after today
pub const SEARCH_HORIZON_DAYS: u64 = 7;

/// Longest DST gap searched past, in minutes
const MAX_GAP_MINUTES: i64 = 180;

/// Open/closed state at an instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OpenState {
    Open,
    Closed,
    /// Closed because today's entry could not be interpreted
    Degraded { day: Weekday, reason: MalformedDay },
}

impl OpenState {
    pub fn is_open(&self) -> bool {
        matches!(self, OpenState::Open)
    }
}

/// Next scheduled opening
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextOpening {
    /// Local weekday of the opening
    pub day: Weekday,
    /// Local time of the opening
    pub time: TimeOfDay,
    pub at: DateTime<Utc>,
}

/// Evaluate `schedule` at `now`, seen in `tz`.
///
/// Open if today's entry covers the local time of day, or yesterday's entry
/// crosses midnight and has not closed yet.
pub fn open_state_at(schedule: &WeeklySchedule, now: DateTime<Utc>, tz: Tz) -> OpenState {
    let local = now.with_timezone(&tz);
    let t = TimeOfDay::of(&local);
    let today = local.weekday();

    let today_hours = resolve_day(schedule, today);
    if today_hours.covers_same_day(t) || resolve_day(schedule, today.pred()).covers_next_day(t) {
        return OpenState::Open;
    }

    match today_hours {
        DayHours::Malformed(reason) => OpenState::Degraded { day: today, reason },
        _ => OpenState::Closed,
    }
}

pub fn is_open_at(schedule: &WeeklySchedule, now: DateTime<Utc>, tz: Tz) -> bool {
    open_state_at(schedule, now, tz).is_open()
}

/// First scheduled opening strictly after `now`.
///
/// Scans today and the following [`SEARCH_HORIZON_DAYS`] days. `None` when the
/// schedule has no open day. An opening inside a DST gap is reported at the
/// first local minute after the gap; `time` is the local time actually reached.
pub fn next_opening_after(schedule: &WeeklySchedule, now: DateTime<Utc>, tz: Tz) -> Option<NextOpening> {
    let today = now.with_timezone(&tz).date_naive();

    (0..=SEARCH_HORIZON_DAYS).find_map(|offset| {
        let date = today.checked_add_days(Days::new(offset))?;
        let hours = resolve_day(schedule, date.weekday());
        let DayHours::Open { open, .. } = hours else {
            return None;
        };
        let local = opening_instant(date, open, tz, now)?;
        let time = TimeOfDay::of(&local);
        // 整段营业时间都落在跳变区间内
        if local.date_naive() != date || !hours.covers_same_day(time) {
            return None;
        }
        Some(NextOpening {
            day: date.weekday(),
            time,
            at: local.with_timezone(&Utc),
        })
    })
}

/// Malformed days of a schedule, Monday first
pub fn schedule_issues(schedule: &WeeklySchedule) -> Vec<(Weekday, MalformedDay)> {
    WEEK.iter()
        .filter_map(|day| match resolve_day(schedule, *day) {
            DayHours::Malformed(reason) => Some((*day, reason)),
            _ => None,
        })
        .collect()
}

/// Local date + time → first matching instant after `now`.
///
/// In a DST fold the earlier instant is taken unless it has already passed.
/// Inside a DST gap the first valid local minute after the gap is taken.
fn opening_instant(date: NaiveDate, time: TimeOfDay, tz: Tz, now: DateTime<Utc>) -> Option<DateTime<Tz>> {
    let naive = date.and_time(time.to_naive()?);
    let local = (0..=MAX_GAP_MINUTES).find_map(|minutes| {
        match tz.from_local_datetime(&(naive + Duration::minutes(minutes))) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earlier, later) => {
                Some(if earlier.with_timezone(&Utc) > now { earlier } else { later })
            }
            LocalResult::None => None,
        }
    })?;
    (local.with_timezone(&Utc) > now).then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Helsinki;
    use shared::models::DayEntry;

    /// Helsinki local wall-clock time → UTC instant. 2026-10-16 is a Friday.
    fn at(date: &str, time: &str) -> DateTime<Utc> {
        let naive = chrono::NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
            .unwrap();
        Helsinki
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn weekday_schedule() -> WeeklySchedule {
        WeeklySchedule::default()
            .with(Weekday::Mon, DayEntry::hours("10:00", "20:00"))
            .with(Weekday::Tue, DayEntry::hours("10:00", "20:00"))
            .with(Weekday::Wed, DayEntry::hours("10:00", "20:00"))
            .with(Weekday::Thu, DayEntry::hours("10:00", "20:00"))
            .with(Weekday::Fri, DayEntry::hours("10:00", "22:00"))
            .with(Weekday::Sat, DayEntry::hours("12:00", "22:00"))
            .with(Weekday::Sun, DayEntry::closed())
    }

    #[test]
    fn test_open_within_hours() {
        let schedule = weekday_schedule();
        assert!(is_open_at(&schedule, at("2026-10-16", "10:00"), Helsinki));
        assert!(is_open_at(&schedule, at("2026-10-16", "21:59"), Helsinki));
        assert!(!is_open_at(&schedule, at("2026-10-16", "22:00"), Helsinki));
        assert!(!is_open_at(&schedule, at("2026-10-16", "09:59"), Helsinki));
        assert!(!is_open_at(&schedule, at("2026-10-18", "12:00"), Helsinki));
    }

    #[test]
    fn test_zone_is_respected() {
        let schedule = weekday_schedule();
        // 08:30 UTC is 11:30 in Helsinki (UTC+3 in October)
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        assert!(is_open_at(&schedule, now, Helsinki));
        assert!(!is_open_at(&schedule, now, chrono_tz::America::New_York));
    }

    #[test]
    fn test_midnight_crossing_round_trip() {
        let schedule = WeeklySchedule::default().with(Weekday::Fri, DayEntry::hours("22:00", "02:00"));

        assert!(is_open_at(&schedule, at("2026-10-16", "23:30"), Helsinki));
        assert!(is_open_at(&schedule, at("2026-10-17", "01:30"), Helsinki));
        assert!(!is_open_at(&schedule, at("2026-10-17", "03:00"), Helsinki));
        // Friday's own early morning belongs to Thursday, which is closed
        assert!(!is_open_at(&schedule, at("2026-10-16", "01:30"), Helsinki));
    }

    #[test]
    fn test_degraded_day_is_closed_but_distinguishable() {
        let schedule = WeeklySchedule::default().with(Weekday::Fri, DayEntry::hours("10:00", "late"));
        let state = open_state_at(&schedule, at("2026-10-16", "12:00"), Helsinki);

        assert!(!state.is_open());
        assert_eq!(
            state,
            OpenState::Degraded {
                day: Weekday::Fri,
                reason: MalformedDay::UnparseableClose("late".to_string()),
            }
        );
        assert_eq!(
            open_state_at(&WeeklySchedule::default(), at("2026-10-16", "12:00"), Helsinki),
            OpenState::Closed
        );
    }

    #[test]
    fn test_next_opening_later_today() {
        let next = next_opening_after(&weekday_schedule(), at("2026-10-16", "08:00"), Helsinki).unwrap();
        assert_eq!(next.day, Weekday::Fri);
        assert_eq!(next.time.to_string(), "10:00");
        assert_eq!(next.at, at("2026-10-16", "10:00"));
    }

    #[test]
    fn test_next_opening_skips_closed_days() {
        // Saturday night after closing → Sunday closed → Monday 10:00
        let next = next_opening_after(&weekday_schedule(), at("2026-10-17", "23:00"), Helsinki).unwrap();
        assert_eq!(next.day, Weekday::Mon);
        assert_eq!(next.at, at("2026-10-19", "10:00"));
    }

    #[test]
    fn test_next_opening_same_weekday_next_week() {
        let schedule = WeeklySchedule::default().with(Weekday::Fri, DayEntry::hours("10:00", "12:00"));
        let next = next_opening_after(&schedule, at("2026-10-16", "13:00"), Helsinki).unwrap();
        assert_eq!(next.at, at("2026-10-23", "10:00"));
    }

    #[test]
    fn test_next_opening_none_for_closed_schedule() {
        let schedule = WeeklySchedule::default()
            .with(Weekday::Mon, DayEntry::closed())
            .with(Weekday::Tue, DayEntry::hours("x", "y"));
        assert_eq!(next_opening_after(&schedule, at("2026-10-16", "12:00"), Helsinki), None);
    }

    #[test]
    fn test_next_opening_agrees_with_is_open() {
        let schedules = [
            weekday_schedule(),
            WeeklySchedule::default().with(Weekday::Fri, DayEntry::hours("22:00", "02:00")),
            WeeklySchedule::default()
                .with(Weekday::Wed, DayEntry::hours("23:00", "01:00"))
                .with(Weekday::Thu, DayEntry::hours("00:30", "03:00"))
                .with(Weekday::Sun, DayEntry::hours("18:00", "24:00")),
            WeeklySchedule::every_day("11:15", "14:45"),
            // Sunday opening inside the spring gap and the autumn fold
            WeeklySchedule::default()
                .with(Weekday::Sat, DayEntry::hours("22:00", "03:15"))
                .with(Weekday::Sun, DayEntry::hours("03:30", "10:00")),
        ];
        // A plain week, the week ending with 2026-03-29 (EET → EEST) and the
        // week ending with 2026-10-25 (EEST → EET)
        let weeks = [
            at("2026-10-12", "00:00"),
            at("2026-03-23", "00:00"),
            at("2026-10-19", "00:00"),
        ];

        for start in weeks {
            for schedule in &schedules {
                // Every 15 minutes over one week
                for step in 0..(7 * 24 * 4) {
                    let now = start + Duration::minutes(15 * step);
                    if is_open_at(schedule, now, Helsinki) {
                        continue;
                    }
                    let Some(next) = next_opening_after(schedule, now, Helsinki) else {
                        panic!("schedule has open days but no next opening at {now}");
                    };
                    assert!(next.at > now);
                    assert!(is_open_at(schedule, next.at, Helsinki), "not open at {}", next.at);

                    // Nothing open between now and the reported opening; every
                    // boundary in these schedules sits on a quarter hour
                    let mut check = now + Duration::minutes(15);
                    while check < next.at {
                        assert!(!is_open_at(schedule, check, Helsinki), "open earlier at {check}");
                        check += Duration::minutes(15);
                    }
                }
            }
        }
    }

    #[test]
    fn test_opening_inside_spring_gap() {
        // 2026-03-29: Helsinki clocks jump from 03:00 to 04:00
        let schedule = WeeklySchedule::default().with(Weekday::Sun, DayEntry::hours("03:30", "10:00"));
        let next = next_opening_after(&schedule, at("2026-03-29", "02:00"), Helsinki).unwrap();

        assert_eq!(next.day, Weekday::Sun);
        assert_eq!(next.time.to_string(), "04:00");
        assert_eq!(next.at, at("2026-03-29", "04:00"));
        assert!(is_open_at(&schedule, next.at, Helsinki));
        assert!(!is_open_at(&schedule, next.at - Duration::minutes(1), Helsinki));
    }

    #[test]
    fn test_opening_inside_autumn_fold() {
        // 2026-10-25: Helsinki wall clock runs 03:00-04:00 twice
        let schedule = WeeklySchedule::default().with(Weekday::Sun, DayEntry::hours("03:30", "03:45"));
        let first = next_opening_after(&schedule, at("2026-10-25", "02:00"), Helsinki).unwrap();
        assert_eq!(first.at, Utc.with_ymd_and_hms(2026, 10, 25, 0, 30, 0).unwrap());

        // After the first pass closes, the repeated hour opens again
        let second = next_opening_after(&schedule, first.at + Duration::minutes(20), Helsinki).unwrap();
        assert_eq!(second.at, Utc.with_ymd_and_hms(2026, 10, 25, 1, 30, 0).unwrap());
        assert_eq!(second.time.to_string(), "03:30");
    }

    #[test]
    fn test_opening_lost_in_gap_is_skipped() {
        let schedule = WeeklySchedule::default().with(Weekday::Sun, DayEntry::hours("03:10", "03:40"));
        let next = next_opening_after(&schedule, at("2026-03-29", "02:00"), Helsinki).unwrap();
        assert_eq!(next.at, at("2026-04-05", "03:10"));
    }

    #[test]
    fn test_schedule_issues() {
        let schedule = WeeklySchedule::default()
            .with(Weekday::Tue, DayEntry::hours("10:00", "20:00"))
            .with(Weekday::Thu, DayEntry { open: None, close: Some("20:00".into()), closed: None });
        assert_eq!(
            schedule_issues(&schedule),
            vec![(Weekday::Thu, MalformedDay::MissingOpen)]
        );
    }
}
