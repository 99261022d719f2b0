//! Shared types for the storefront
//!
//! Records read from the restaurant data store (branches, settings,
//! promotions, menu items) and the output shapes handed to the frontend.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::Language;
