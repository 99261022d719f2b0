//! Branch-level hours and aggregation across branches

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{Branch, OrderingService, ServiceKind};

use super::evaluator::{NextOpening, is_open_at, next_opening_after};

/// Aggregate state over a branch list
///
/// `Unknown` means there was nothing to evaluate (empty list). It is never
/// folded into `Closed`; the caller decides what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchAvailability {
    Open,
    Closed,
    Unknown,
}

impl BranchAvailability {
    pub fn from_bool(open: bool) -> Self {
        if open {
            BranchAvailability::Open
        } else {
            BranchAvailability::Closed
        }
    }

    pub fn is_known(self) -> bool {
        self != BranchAvailability::Unknown
    }

    /// Collapse to a bool, using `when_unknown` for `Unknown`
    pub fn resolve(self, when_unknown: bool) -> bool {
        match self {
            BranchAvailability::Open => true,
            BranchAvailability::Closed => false,
            BranchAvailability::Unknown => when_unknown,
        }
    }
}

/// Walk-in open state (general schedule)
pub fn is_branch_open(branch: &Branch, now: DateTime<Utc>, tz: Tz) -> bool {
    is_open_at(branch.schedule(ServiceKind::General), now, tz)
}

/// Online ordering state for one service, independent of the general schedule
pub fn is_branch_ordering_available(
    branch: &Branch,
    service: OrderingService,
    now: DateTime<Utc>,
    tz: Tz,
) -> bool {
    is_open_at(branch.schedule(service.into()), now, tz)
}

/// Ordering open for pickup or delivery
pub fn is_branch_accepting_orders(branch: &Branch, now: DateTime<Utc>, tz: Tz) -> bool {
    OrderingService::ALL
        .iter()
        .any(|service| is_branch_ordering_available(branch, *service, now, tz))
}

/// Any active branch open (general schedule)
pub fn is_any_branch_open(branches: &[Branch], now: DateTime<Utc>, tz: Tz) -> BranchAvailability {
    aggregate(branches, |branch| is_branch_open(branch, now, tz))
}

/// Any active branch accepting orders for `service` (`None` = pickup or delivery)
pub fn is_any_branch_ordering_available(
    branches: &[Branch],
    service: Option<OrderingService>,
    now: DateTime<Utc>,
    tz: Tz,
) -> BranchAvailability {
    aggregate(branches, |branch| match service {
        Some(service) => is_branch_ordering_available(branch, service, now, tz),
        None => is_branch_accepting_orders(branch, now, tz),
    })
}

fn aggregate(branches: &[Branch], is_open: impl Fn(&Branch) -> bool) -> BranchAvailability {
    if branches.is_empty() {
        return BranchAvailability::Unknown;
    }
    BranchAvailability::from_bool(branches.iter().filter(|b| b.is_active).any(is_open))
}

/// Next walk-in opening of one branch
pub fn branch_next_opening(branch: &Branch, now: DateTime<Utc>, tz: Tz) -> Option<NextOpening> {
    next_opening_after(branch.schedule(ServiceKind::General), now, tz)
}

/// Earliest next opening among active branches for the given service kinds
pub fn earliest_next_opening(
    branches: &[Branch],
    kinds: &[ServiceKind],
    now: DateTime<Utc>,
    tz: Tz,
) -> Option<NextOpening> {
    branches
        .iter()
        .filter(|b| b.is_active)
        .flat_map(|b| kinds.iter().filter_map(move |kind| next_opening_after(b.schedule(*kind), now, tz)))
        .min_by_key(|next| next.at)
}
