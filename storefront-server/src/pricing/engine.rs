//! Promotion Engine
//!
//! Selects the single best promotion for an item and attaches the resulting
//! price fields. Promotions never stack.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{MenuItem, PricedMenuItem, Promotion};

use super::calculator::{PromotionIssue, evaluate_discount, to_decimal, to_f64, validate_promotion};
use super::matcher::{PromotionTarget, is_applicable, is_time_valid};

/// Number of promotions shown in the hero banner rotation
pub const HERO_PROMOTION_LIMIT: usize = 5;

/// Sort promotions by discount value (higher first); ties keep list order
pub fn sort_by_discount_value(promotions: &mut [&Promotion]) {
    promotions.sort_by(|a, b| b.discount_value.total_cmp(&a.discount_value));
}

/// Best applicable promotion for `target`.
///
/// Invalid promotions are skipped: they would contribute no discount.
pub fn select_best_promotion<'a>(
    promotions: &'a [Promotion],
    target: PromotionTarget,
    now: DateTime<Utc>,
) -> Option<&'a Promotion> {
    let mut candidates: Vec<&Promotion> = promotions
        .iter()
        .filter(|p| validate_promotion(p).is_ok())
        .filter(|p| is_applicable(p, target, now))
        .collect();
    sort_by_discount_value(&mut candidates);
    candidates.into_iter().next()
}

/// Attach promotion fields to a menu item.
///
/// Menu prices carry no order total, so promotions with a minimum order do
/// not show up here.
pub fn price_menu_item(
    item: &MenuItem,
    promotions: &[Promotion],
    branch_id: Option<i64>,
    now: DateTime<Utc>,
) -> PricedMenuItem {
    let target = PromotionTarget {
        category_id: item.category_id,
        branch_id,
    };
    let Some(promotion) = select_best_promotion(promotions, target, now) else {
        return PricedMenuItem::unpromoted(item.clone());
    };

    let base_price = item.base_price();
    let discount = evaluate_discount(base_price, promotion, None).amount;
    if discount <= 0.0 {
        return PricedMenuItem::unpromoted(item.clone());
    }

    let base = to_decimal(base_price);
    let amount = to_decimal(discount);
    let percentage = (amount / base * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32();

    PricedMenuItem {
        item: item.clone(),
        promotional_price: Some(to_f64(base - amount)),
        promotion_discount: Some(discount),
        promotion_percentage: percentage,
        active_promotion: Some(promotion.clone()),
    }
}

/// Price a menu for the selected branch; items sold elsewhere are left out
pub fn price_menu(
    items: &[MenuItem],
    promotions: &[Promotion],
    branch_id: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<PricedMenuItem> {
    items
        .iter()
        .filter(|item| item.is_sold_at(branch_id))
        .map(|item| price_menu_item(item, promotions, branch_id, now))
        .collect()
}

/// Currently valid promotions for the hero banner, biggest first
pub fn hero_promotions(promotions: &[Promotion], now: DateTime<Utc>, limit: usize) -> Vec<&Promotion> {
    let mut active: Vec<&Promotion> = promotions
        .iter()
        .filter(|p| validate_promotion(p).is_ok() && is_time_valid(p, now))
        .collect();
    sort_by_discount_value(&mut active);
    active.truncate(limit);
    active
}

/// Invalid promotions of a list, for diagnostics
pub fn promotion_issues(promotions: &[Promotion]) -> Vec<(i64, PromotionIssue)> {
    promotions
        .iter()
        .filter_map(|p| validate_promotion(p).err().map(|issue| (p.id, issue)))
        .collect()
}
