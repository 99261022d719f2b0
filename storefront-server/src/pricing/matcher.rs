//! Promotion Matcher
//!
//! Logic for matching promotions to menu items and checking time validity.

use chrono::{DateTime, Utc};
use shared::models::Promotion;

/// What a promotion is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromotionTarget {
    /// Category of the item being priced
    pub category_id: Option<i64>,
    /// Branch the customer selected, if any
    pub branch_id: Option<i64>,
}

/// Check if a promotion is active at `now` (`start_date..=end_date`)
pub fn is_time_valid(promotion: &Promotion, now: DateTime<Utc>) -> bool {
    promotion.is_active && promotion.start_date <= now && now <= promotion.end_date
}

/// Unscoped promotions match every category
pub fn matches_category(promotion: &Promotion, category_id: Option<i64>) -> bool {
    match promotion.category_id {
        None => true,
        Some(target) => category_id == Some(target),
    }
}

/// Unscoped promotions match every branch; with no branch selected, every
/// branch-scoped promotion matches too
pub fn matches_branch(promotion: &Promotion, branch_id: Option<i64>) -> bool {
    match (promotion.branch_id, branch_id) {
        (None, _) | (_, None) => true,
        (Some(target), Some(selected)) => target == selected,
    }
}

pub fn is_applicable(promotion: &Promotion, target: PromotionTarget, now: DateTime<Utc>) -> bool {
    is_time_valid(promotion, now)
        && matches_category(promotion, target.category_id)
        && matches_branch(promotion, target.branch_id)
}
