//! Branch Model

use serde::{Deserialize, Serialize};

use super::schedule::{ServiceKind, WeeklySchedule};
use crate::types::Language;

/// Branch entity (one physical restaurant location)
///
/// Read-only for the storefront: rows come from the data store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// General (walk-in) opening hours
    #[serde(default)]
    pub opening_hours: WeeklySchedule,
    /// Pickup hours; falls back to `opening_hours` when absent
    #[serde(default)]
    pub pickup_hours: Option<WeeklySchedule>,
    /// Delivery hours; falls back to `opening_hours` when absent
    #[serde(default)]
    pub delivery_hours: Option<WeeklySchedule>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

fn default_true() -> bool {
    true
}

impl Branch {
    /// Schedule for a service kind, with the general schedule as fallback
    pub fn schedule(&self, kind: ServiceKind) -> &WeeklySchedule {
        match kind {
            ServiceKind::General => &self.opening_hours,
            ServiceKind::Pickup => self.pickup_hours.as_ref().unwrap_or(&self.opening_hours),
            ServiceKind::Delivery => self.delivery_hours.as_ref().unwrap_or(&self.opening_hours),
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_en.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_row_defaults() {
        let branch: Branch = serde_json::from_str(r#"{"id": 7, "name": "Keskusta"}"#).unwrap();
        assert!(branch.is_active);
        assert_eq!(branch.display_order, 0);
        assert_eq!(branch.opening_hours, WeeklySchedule::default());
    }

    #[test]
    fn test_service_schedule_fallback() {
        let mut branch: Branch = serde_json::from_str(r#"{"id": 1, "name": "A"}"#).unwrap();
        branch.opening_hours = WeeklySchedule::every_day("10:00", "20:00");
        branch.delivery_hours = Some(WeeklySchedule::every_day("11:00", "19:00"));

        assert_eq!(branch.schedule(ServiceKind::Pickup), &branch.opening_hours);
        assert_eq!(
            branch.schedule(ServiceKind::Delivery),
            &WeeklySchedule::every_day("11:00", "19:00")
        );
    }
}
