//! Effective restaurant status
//!
//! Merges the administrative override and busy flag with the computed
//! schedule state.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{RestaurantOverride, RestaurantSettings, ServiceKind, WeeklySchedule};
use shared::types::Language;

use crate::hours::{
    BranchAvailability, NextOpening, earliest_next_opening, get_restaurant_status,
    is_any_branch_open, is_any_branch_ordering_available, is_open_at,
};
use crate::snapshot::StorefrontSnapshot;
use crate::utils::time::local_clock;

/// Where the schedule-based signal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSource {
    /// Branch list aggregate
    Branches,
    /// Inline schedules of the settings row (no branches configured)
    Settings,
    /// No snapshot loaded yet; configured default
    Default,
}

/// Status shown to customers
#[derive(Debug, Clone, Serialize)]
pub struct StorefrontStatus {
    pub is_open: bool,
    pub is_ordering_open: bool,
    pub is_busy: bool,
    pub source: StatusSource,
    pub branches_open: BranchAvailability,
    pub branches_ordering: BranchAvailability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening: Option<NextOpening>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_ordering: Option<NextOpening>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_buffet_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_message: Option<String>,
    /// Local wall clock in the business zone (HH:MM)
    pub local_time: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Schedule-only signals before the override merge
struct Computed {
    source: StatusSource,
    branches_open: BranchAvailability,
    branches_ordering: BranchAvailability,
    is_open: bool,
    is_ordering_open: bool,
    next_opening: Option<NextOpening>,
    next_ordering: Option<NextOpening>,
    lunch_buffet_open: Option<bool>,
}

impl Computed {
    fn unknown(default_open: bool) -> Self {
        Self {
            source: StatusSource::Default,
            branches_open: BranchAvailability::Unknown,
            branches_ordering: BranchAvailability::Unknown,
            is_open: default_open,
            is_ordering_open: default_open,
            next_opening: None,
            next_ordering: None,
            lunch_buffet_open: None,
        }
    }
}

/// 计算对外展示的营业状态
///
/// `snapshot` 为 None 表示数据尚未加载；没有分店也没有任何营业时间配置时同样
/// 视为未知。两种情况都使用 `default_open`。
pub fn compute_status(
    snapshot: Option<&StorefrontSnapshot>,
    now: DateTime<Utc>,
    tz: Tz,
    default_open: bool,
    language: Language,
) -> StorefrontStatus {
    let computed = match snapshot {
        Some(snapshot) => compute_from_snapshot(snapshot, now, tz, default_open),
        None => Computed::unknown(default_open),
    };

    let flags = snapshot
        .map(|s| s.settings.override_flags())
        .unwrap_or_default();
    let is_open = effective_open(flags, computed.is_open);
    let is_ordering_open = effective_ordering(flags, computed.is_ordering_open);

    // 手动关闭时没有可预期的开门时间
    let next_opening = if is_open || flags.is_open == Some(false) {
        None
    } else {
        computed.next_opening
    };
    let next_ordering = if is_ordering_open { None } else { computed.next_ordering };

    StorefrontStatus {
        is_open,
        is_ordering_open,
        is_busy: flags.is_busy,
        source: computed.source,
        branches_open: computed.branches_open,
        branches_ordering: computed.branches_ordering,
        next_opening_label: next_opening.as_ref().map(|n| n.label(language)),
        next_opening,
        next_ordering,
        lunch_buffet_open: computed.lunch_buffet_open,
        special_message: snapshot
            .and_then(|s| s.settings.special_message(language))
            .map(str::to_string),
        local_time: local_clock(now, tz),
        evaluated_at: now,
    }
}

/// Administrative toggle wins over the schedule
pub fn effective_open(flags: RestaurantOverride, computed: bool) -> bool {
    flags.is_open.unwrap_or(computed)
}

/// Busy pauses ordering regardless of the schedule
pub fn effective_ordering(flags: RestaurantOverride, computed: bool) -> bool {
    !flags.is_busy && computed
}

fn compute_from_snapshot(
    snapshot: &StorefrontSnapshot,
    now: DateTime<Utc>,
    tz: Tz,
    default_open: bool,
) -> Computed {
    let branches_open = is_any_branch_open(&snapshot.branches, now, tz);
    let branches_ordering = is_any_branch_ordering_available(&snapshot.branches, None, now, tz);
    if !branches_open.is_known() {
        if !has_inline_schedule(&snapshot.settings) {
            return Computed::unknown(default_open);
        }
        let inline = get_restaurant_status(&snapshot.settings, now, tz);
        return Computed {
            source: StatusSource::Settings,
            branches_open,
            branches_ordering,
            is_open: inline.is_open,
            is_ordering_open: inline.is_ordering_open,
            next_opening: inline.next_opening,
            next_ordering: inline.next_ordering,
            lunch_buffet_open: inline.is_lunch_buffet_served,
        };
    }

    let is_open = branches_open.resolve(false);
    let is_ordering_open = branches_ordering.resolve(false);
    Computed {
        source: StatusSource::Branches,
        branches_open,
        branches_ordering,
        is_open,
        is_ordering_open,
        next_opening: if is_open {
            None
        } else {
            earliest_next_opening(&snapshot.branches, &[ServiceKind::General], now, tz)
        },
        next_ordering: if is_ordering_open {
            None
        } else {
            earliest_next_opening(
                &snapshot.branches,
                &[ServiceKind::Pickup, ServiceKind::Delivery],
                now,
                tz,
            )
        },
        lunch_buffet_open: snapshot
            .settings
            .lunch_buffet_hours
            .as_ref()
            .map(|hours| is_open_at(hours, now, tz)),
    }
}

/// Settings carry at least one configured day
fn has_inline_schedule(settings: &RestaurantSettings) -> bool {
    let empty = WeeklySchedule::default();
    settings.opening_hours != empty
        || settings.pickup_hours.as_ref().is_some_and(|h| *h != empty)
        || settings.delivery_hours.as_ref().is_some_and(|h| *h != empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};
    use chrono_tz::Europe::Helsinki;
    use shared::models::{Branch, DayEntry};

    /// 2026-10-16 is a Friday
    fn friday(hour: u32, minute: u32) -> DateTime<Utc> {
        Helsinki
            .with_ymd_and_hms(2026, 10, 16, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn branch(id: i64, hours: WeeklySchedule) -> Branch {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Branch {id}"),
            "opening_hours": hours,
        }))
        .unwrap()
    }

    fn snapshot_with_branches(branches: Vec<Branch>) -> StorefrontSnapshot {
        StorefrontSnapshot {
            branches,
            ..Default::default()
        }
    }

    #[test]
    fn test_not_loaded_uses_default() {
        let status = compute_status(None, friday(12, 0), Helsinki, true, Language::Fi);
        assert_eq!(status.source, StatusSource::Default);
        assert!(status.is_open);
        assert!(status.is_ordering_open);
        assert_eq!(status.branches_open, BranchAvailability::Unknown);

        let status = compute_status(None, friday(12, 0), Helsinki, false, Language::Fi);
        assert!(!status.is_open);
        assert!(!status.is_ordering_open);
    }

    #[test]
    fn test_branches_drive_status() {
        let snapshot = snapshot_with_branches(vec![
            branch(1, WeeklySchedule::every_day("10:00", "14:00")),
            branch(2, WeeklySchedule::every_day("16:00", "22:00")),
        ]);

        let status = compute_status(Some(&snapshot), friday(12, 0), Helsinki, false, Language::En);
        assert_eq!(status.source, StatusSource::Branches);
        assert!(status.is_open);
        assert!(status.is_ordering_open);
        assert!(status.next_opening.is_none());
        assert_eq!(status.local_time, "12:00");

        let status = compute_status(Some(&snapshot), friday(15, 0), Helsinki, true, Language::En);
        assert!(!status.is_open);
        let next = status.next_opening.unwrap();
        assert_eq!(next.day, Weekday::Fri);
        assert_eq!(next.time.to_string(), "16:00");
        assert_eq!(status.next_opening_label.as_deref(), Some("Opens Friday 16:00"));
    }

    #[test]
    fn test_empty_branches_fall_back_to_settings() {
        let snapshot = StorefrontSnapshot {
            settings: RestaurantSettings {
                opening_hours: WeeklySchedule::every_day("10:00", "20:00"),
                ..Default::default()
            },
            ..Default::default()
        };
        let status = compute_status(Some(&snapshot), friday(12, 0), Helsinki, false, Language::Fi);
        assert_eq!(status.source, StatusSource::Settings);
        assert_eq!(status.branches_open, BranchAvailability::Unknown);
        assert!(status.is_open);
        assert!(status.is_ordering_open);
    }

    #[test]
    fn test_no_hours_anywhere_uses_default() {
        let snapshot = StorefrontSnapshot::default();
        let open = compute_status(Some(&snapshot), friday(12, 0), Helsinki, true, Language::Fi);
        assert_eq!(open.source, StatusSource::Default);
        assert!(open.is_open);

        let closed = compute_status(Some(&snapshot), friday(12, 0), Helsinki, false, Language::Fi);
        assert!(!closed.is_ordering_open);
    }

    #[test]
    fn test_override_and_busy() {
        let mut snapshot = snapshot_with_branches(vec![branch(
            1,
            WeeklySchedule::every_day("10:00", "20:00"),
        )]);
        snapshot.settings.is_open = Some(false);
        snapshot.settings.is_busy = true;

        let status = compute_status(Some(&snapshot), friday(12, 0), Helsinki, true, Language::Fi);
        assert!(!status.is_open);
        assert!(!status.is_ordering_open);
        assert!(status.is_busy);
        assert!(status.next_opening.is_none());

        snapshot.settings.is_open = Some(true);
        snapshot.settings.is_busy = false;
        let status = compute_status(Some(&snapshot), friday(23, 0), Helsinki, false, Language::Fi);
        assert!(status.is_open);
        assert!(!status.is_ordering_open);
        assert!(status.next_ordering.is_some());
    }

    #[test]
    fn test_midnight_crossing_branch() {
        let hours = WeeklySchedule::default().with(Weekday::Fri, DayEntry::hours("22:00", "02:00"));
        let snapshot = snapshot_with_branches(vec![branch(1, hours)]);

        let saturday_early = Helsinki
            .with_ymd_and_hms(2026, 10, 17, 1, 30, 0)
            .unwrap()
            .with_timezone(&Utc);
        let status = compute_status(Some(&snapshot), saturday_early, Helsinki, false, Language::Fi);
        assert!(status.is_open);
    }

    #[test]
    fn test_special_message_language() {
        let mut snapshot = StorefrontSnapshot::default();
        snapshot.settings.special_message = Some("Tervetuloa".to_string());
        snapshot.settings.special_message_en = Some("Welcome".to_string());

        let fi = compute_status(Some(&snapshot), friday(12, 0), Helsinki, true, Language::Fi);
        let en = compute_status(Some(&snapshot), friday(12, 0), Helsinki, true, Language::En);
        assert_eq!(fi.special_message.as_deref(), Some("Tervetuloa"));
        assert_eq!(en.special_message.as_deref(), Some("Welcome"));
    }
}
