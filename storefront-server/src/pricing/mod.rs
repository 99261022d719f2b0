//! Promotion Engine Module
//!
//! Discount calculation and best-promotion selection for menu pricing.
//! Pure functions; invalid promotion data resolves to "no discount".

mod calculator;
mod engine;
pub mod matcher;

pub use calculator::*;
pub use engine::*;
pub use matcher::*;
