//! Per-branch status list

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{Branch, OrderingService, ServiceKind};
use shared::types::Language;

use crate::hours::{
    BranchAvailability, NextOpening, OpenState, branch_next_opening, is_any_branch_open,
    is_any_branch_ordering_available, is_branch_ordering_available, open_state_at,
};
use crate::snapshot::StorefrontSnapshot;

/// 单个分店的当前状态
#[derive(Debug, Clone, Serialize)]
pub struct BranchStatus {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub is_open: bool,
    /// Degraded when today's entry is malformed
    pub state: OpenState,
    pub is_pickup_open: bool,
    pub is_delivery_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening: Option<NextOpening>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening_label: Option<String>,
}

/// 分店列表 + 汇总
#[derive(Debug, Clone, Serialize)]
pub struct BranchStatusList {
    pub any_open: BranchAvailability,
    pub any_ordering: BranchAvailability,
    pub branches: Vec<BranchStatus>,
}

pub fn branch_status(branch: &Branch, now: DateTime<Utc>, tz: Tz, language: Language) -> BranchStatus {
    let state = open_state_at(branch.schedule(ServiceKind::General), now, tz);
    if let OpenState::Degraded { day, reason } = &state {
        tracing::warn!(branch_id = branch.id, day = %day, reason = %reason, "Branch treated as closed: malformed hours");
    }
    let is_open = state.is_open();
    let next_opening = if is_open {
        None
    } else {
        branch_next_opening(branch, now, tz)
    };

    BranchStatus {
        id: branch.id,
        name: branch.display_name(language).to_string(),
        city: branch.city.clone(),
        is_open,
        state,
        is_pickup_open: is_branch_ordering_available(branch, OrderingService::Pickup, now, tz),
        is_delivery_open: is_branch_ordering_available(branch, OrderingService::Delivery, now, tz),
        next_opening_label: next_opening.as_ref().map(|n| n.label(language)),
        next_opening,
    }
}

/// Active branches ordered by display_order, with the aggregate over all of them
pub fn branch_statuses(
    snapshot: &StorefrontSnapshot,
    now: DateTime<Utc>,
    tz: Tz,
    language: Language,
) -> BranchStatusList {
    BranchStatusList {
        any_open: is_any_branch_open(&snapshot.branches, now, tz),
        any_ordering: is_any_branch_ordering_available(&snapshot.branches, None, now, tz),
        branches: snapshot
            .active_branches()
            .into_iter()
            .map(|branch| branch_status(branch, now, tz, language))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};
    use chrono_tz::Europe::Helsinki;

    fn snapshot() -> StorefrontSnapshot {
        serde_json::from_value(serde_json::json!({
            "branches": [
                {
                    "id": 1,
                    "name": "Keskusta",
                    "name_en": "City Centre",
                    "display_order": 2,
                    "opening_hours": {"friday": {"open": "10:00", "close": "20:00"}},
                    "delivery_hours": {"friday": {"open": "11:00", "close": "19:00"}}
                },
                {
                    "id": 2,
                    "name": "Kamppi",
                    "display_order": 1,
                    "opening_hours": {"friday": {"open": "oops", "close": "20:00"}}
                },
                {
                    "id": 3,
                    "name": "Suljettu",
                    "is_active": false,
                    "opening_hours": {"friday": {"open": "00:00", "close": "24:00"}}
                }
            ]
        }))
        .unwrap()
    }

    fn friday(hour: u32) -> DateTime<Utc> {
        Helsinki
            .with_ymd_and_hms(2026, 10, 16, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_branch_statuses_order_and_aggregate() {
        let list = branch_statuses(&snapshot(), friday(10), Helsinki, Language::En);
        assert_eq!(list.any_open, BranchAvailability::Open);
        let ids: Vec<i64> = list.branches.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let centre = &list.branches[1];
        assert_eq!(centre.name, "City Centre");
        assert!(centre.is_open);
        assert!(centre.is_pickup_open);
        assert!(!centre.is_delivery_open);
    }

    #[test]
    fn test_malformed_branch_is_degraded() {
        let list = branch_statuses(&snapshot(), friday(12), Helsinki, Language::Fi);
        let kamppi = &list.branches[0];
        assert!(!kamppi.is_open);
        assert!(matches!(kamppi.state, OpenState::Degraded { day: Weekday::Fri, .. }));
    }

    #[test]
    fn test_inactive_branch_not_counted() {
        let list = branch_statuses(&snapshot(), friday(22), Helsinki, Language::Fi);
        assert_eq!(list.any_open, BranchAvailability::Closed);
        assert!(list.branches.iter().all(|b| b.id != 3));
        // 下周五 10:00
        let next = list.branches[1].next_opening.as_ref().unwrap();
        assert_eq!(next.day, Weekday::Fri);
    }

    #[test]
    fn test_empty_list_unknown() {
        let list = branch_statuses(&StorefrontSnapshot::default(), friday(12), Helsinki, Language::Fi);
        assert_eq!(list.any_open, BranchAvailability::Unknown);
        assert!(list.branches.is_empty());
    }
}
