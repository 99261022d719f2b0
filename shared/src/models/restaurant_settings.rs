//! Restaurant Settings Model

use serde::{Deserialize, Serialize};

use super::schedule::{ServiceKind, WeeklySchedule};
use crate::types::Language;

/// Restaurant settings entity (singleton row)
///
/// Holds the inline schedules of a single-location deployment and the
/// administrative toggles (`is_open`, `is_busy`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantSettings {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub opening_hours: WeeklySchedule,
    #[serde(default)]
    pub pickup_hours: Option<WeeklySchedule>,
    #[serde(default)]
    pub delivery_hours: Option<WeeklySchedule>,
    #[serde(default)]
    pub lunch_buffet_hours: Option<WeeklySchedule>,
    /// Administrative open/closed toggle; overrides the computed general state
    #[serde(default)]
    pub is_open: Option<bool>,
    /// Kitchen is overloaded: online ordering is paused
    #[serde(default)]
    pub is_busy: bool,
    #[serde(default)]
    pub special_message: Option<String>,
    #[serde(default)]
    pub special_message_en: Option<String>,
}

/// Administrative override taken from the settings row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantOverride {
    pub is_open: Option<bool>,
    pub is_busy: bool,
}

impl RestaurantSettings {
    /// Schedule for a service kind, with the general schedule as fallback
    pub fn schedule(&self, kind: ServiceKind) -> &WeeklySchedule {
        match kind {
            ServiceKind::General => &self.opening_hours,
            ServiceKind::Pickup => self.pickup_hours.as_ref().unwrap_or(&self.opening_hours),
            ServiceKind::Delivery => self.delivery_hours.as_ref().unwrap_or(&self.opening_hours),
        }
    }

    pub fn override_flags(&self) -> RestaurantOverride {
        RestaurantOverride {
            is_open: self.is_open,
            is_busy: self.is_busy,
        }
    }

    /// Special message in the given language; blank messages count as absent
    pub fn special_message(&self, language: Language) -> Option<&str> {
        let fi = self.special_message.as_deref().filter(|m| !m.trim().is_empty());
        let en = self.special_message_en.as_deref();
        match fi {
            Some(fi) => Some(language.pick(fi, en)),
            None => en.filter(|m| !m.trim().is_empty()),
        }
    }
}
