//! Promotion Discount Calculator
//!
//! Discount amount of one promotion on one price.
//! Uses rust_decimal for precise calculations, returns f64.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{DiscountType, Promotion};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Why a promotion contributes no discount although it was evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionIssue {
    /// `discount_value` below zero
    NegativeValue,
    /// `discount_value` missing, not a number, or infinite
    NonFiniteValue,
    /// `discount_type` not recognised
    UnknownDiscountType,
}

impl std::fmt::Display for PromotionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionIssue::NegativeValue => write!(f, "negative discount value"),
            PromotionIssue::NonFiniteValue => write!(f, "discount value is not a finite number"),
            PromotionIssue::UnknownDiscountType => write!(f, "unknown discount type"),
        }
    }
}

/// Check the fields the calculation depends on
pub fn validate_promotion(promotion: &Promotion) -> Result<(), PromotionIssue> {
    if promotion.discount_type == DiscountType::Unknown {
        return Err(PromotionIssue::UnknownDiscountType);
    }
    if !promotion.discount_value.is_finite() {
        return Err(PromotionIssue::NonFiniteValue);
    }
    if promotion.discount_value < 0.0 {
        return Err(PromotionIssue::NegativeValue);
    }
    Ok(())
}

/// Discount of one promotion on one price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountResult {
    /// Amount to subtract from the price, `0..=price`
    pub amount: f64,
    /// Set when the promotion was invalid and therefore ignored
    pub issue: Option<PromotionIssue>,
}

impl DiscountResult {
    fn none() -> Self {
        Self {
            amount: 0.0,
            issue: None,
        }
    }

    fn invalid(issue: PromotionIssue) -> Self {
        Self {
            amount: 0.0,
            issue: Some(issue),
        }
    }
}

/// Optional monetary threshold: absent, non-finite or `<= 0` means unset
fn threshold(value: Option<f64>) -> Option<Decimal> {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(to_decimal)
}

/// Discount `promotion` gives on `price`.
///
/// 1. Minimum order: when set, an order total below it (or no order total at
///    all) does not qualify.
/// 2. Percentage: `price * value / 100`; fixed: `value`.
/// 3. Capped by `max_discount_amount`, then by the price itself.
///
/// Invalid promotions yield zero with an issue attached; this never fails.
pub fn evaluate_discount(price: f64, promotion: &Promotion, order_total: Option<f64>) -> DiscountResult {
    if let Err(issue) = validate_promotion(promotion) {
        return DiscountResult::invalid(issue);
    }
    if !price.is_finite() || price <= 0.0 {
        return DiscountResult::none();
    }

    if let Some(minimum) = threshold(promotion.min_order_amount) {
        let qualifies = order_total
            .filter(|total| total.is_finite())
            .is_some_and(|total| to_decimal(total) >= minimum);
        if !qualifies {
            return DiscountResult::none();
        }
    }

    let price = to_decimal(price);
    let value = to_decimal(promotion.discount_value);

    let mut discount = match promotion.discount_type {
        DiscountType::Percentage => price * value / Decimal::ONE_HUNDRED,
        DiscountType::Fixed => value,
        DiscountType::Unknown => Decimal::ZERO,
    };

    if let Some(cap) = threshold(promotion.max_discount_amount) {
        discount = discount.min(cap);
    }
    // Never below zero effective price
    discount = discount.min(price);

    DiscountResult {
        amount: to_f64(discount),
        issue: None,
    }
}

/// Discount amount only; see [`evaluate_discount`]
pub fn calculate_discount(price: f64, promotion: &Promotion, order_total: Option<f64>) -> f64 {
    evaluate_discount(price, promotion, order_total).amount
}
