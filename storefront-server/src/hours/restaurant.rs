//! Single-location status
//!
//! Used when the deployment models its one location inline in the
//! restaurant settings instead of through the branch list.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{OrderingService, RestaurantSettings, ServiceKind};

use super::evaluator::{NextOpening, is_open_at, next_opening_after};

/// Computed status of a single location
///
/// Schedule-only: the administrative override and busy flag are merged by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantStatus {
    pub is_open: bool,
    /// Pickup or delivery accepting orders
    pub is_ordering_open: bool,
    /// Next general opening, only while closed
    pub next_opening: Option<NextOpening>,
    /// Next pickup/delivery opening, only while ordering is closed
    pub next_ordering: Option<NextOpening>,
    /// `None` when no lunch buffet schedule is configured
    pub is_lunch_buffet_served: Option<bool>,
}

pub fn get_restaurant_status(settings: &RestaurantSettings, now: DateTime<Utc>, tz: Tz) -> RestaurantStatus {
    let general = settings.schedule(ServiceKind::General);
    let is_open = is_open_at(general, now, tz);

    let is_ordering_open = OrderingService::ALL
        .iter()
        .any(|service| is_open_at(settings.schedule((*service).into()), now, tz));

    let next_opening = if is_open {
        None
    } else {
        next_opening_after(general, now, tz)
    };

    let next_ordering = if is_ordering_open {
        None
    } else {
        OrderingService::ALL
            .iter()
            .filter_map(|service| next_opening_after(settings.schedule((*service).into()), now, tz))
            .min_by_key(|next| next.at)
    };

    RestaurantStatus {
        is_open,
        is_ordering_open,
        next_opening,
        next_ordering,
        is_lunch_buffet_served: settings
            .lunch_buffet_hours
            .as_ref()
            .map(|hours| is_open_at(hours, now, tz)),
    }
}
