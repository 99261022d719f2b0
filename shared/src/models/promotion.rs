//! Promotion Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::Language;

/// Discount type enum
///
/// Unrecognised values deserialize to `Unknown`; such a promotion is invalid
/// and contributes no discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
    #[serde(other)]
    Unknown,
}

/// Promotion entity (促销)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub discount_type: DiscountType,
    /// Percentage: 20 = 20%; fixed: 5.00 = €5
    ///
    /// Numbers and numeric strings are accepted. Missing or other values
    /// load as NaN, which validation rejects.
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub discount_value: f64,
    /// Restrict to one menu category
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Restrict to one branch
    #[serde(default)]
    pub branch_id: Option<i64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub min_order_amount: Option<f64>,
    #[serde(default)]
    pub max_discount_amount: Option<f64>,
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

impl Promotion {
    pub fn display_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_en.as_deref())
    }
}
