//! Business hours
//!
//! Open/closed evaluation of weekly schedules, per branch and across
//! branches. Everything here is a pure function of its inputs: no I/O, no
//! logging, no clock reads. Callers pass `now` and the business time zone.
//!
//! # 模块结构
//!
//! - [`clock`] - `TimeOfDay` 解析
//! - [`day`] - 单日营业时间解析 (跨午夜规则)
//! - [`evaluator`] - `is_open_at` / `next_opening_after`
//! - [`branch`] - 门店级别与多门店聚合
//! - [`restaurant`] - 单店 (inline settings) 状态
//! - [`format`] - 本地化展示

pub mod branch;
pub mod clock;
pub mod day;
pub mod evaluator;
pub mod format;
pub mod restaurant;

pub use branch::*;
pub use clock::TimeOfDay;
pub use day::{DayHours, MalformedDay, resolve_day};
pub use evaluator::*;
pub use format::{DayHoursLine, day_name, format_weekly_hours};
pub use restaurant::{RestaurantStatus, get_restaurant_status};
