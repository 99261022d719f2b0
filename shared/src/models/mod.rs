//! Data models
//!
//! Rows of the restaurant data store, shared between the storefront server
//! and the frontend (via API).

pub mod branch;
pub mod menu_item;
pub mod promotion;
pub mod restaurant_settings;
pub mod schedule;

// Re-exports
pub use branch::*;
pub use menu_item::*;
pub use promotion::*;
pub use restaurant_settings::*;
pub use schedule::*;
