//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::promotion::Promotion;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Item only sold at this branch (None = every branch)
    #[serde(default)]
    pub branch_id: Option<i64>,
    pub price: f64,
    /// Standing offer price, takes precedence over `price`
    #[serde(default)]
    pub offer_price: Option<f64>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Price promotions are computed from
    pub fn base_price(&self) -> f64 {
        self.offer_price.filter(|p| *p > 0.0).unwrap_or(self.price)
    }

    /// Whether the item is sold at the selected branch
    pub fn is_sold_at(&self, branch_id: Option<i64>) -> bool {
        match (self.branch_id, branch_id) {
            (Some(item_branch), Some(selected)) => item_branch == selected,
            _ => true,
        }
    }
}

/// Menu item with its promotion fields attached
///
/// The promotion fields are only present when a promotion yields a positive
/// discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_discount: Option<f64>,
    /// Discount relative to the base price, whole percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_promotion: Option<Promotion>,
}

impl PricedMenuItem {
    pub fn unpromoted(item: MenuItem) -> Self {
        Self {
            item,
            promotional_price: None,
            promotion_discount: None,
            promotion_percentage: None,
            active_promotion: None,
        }
    }
}
