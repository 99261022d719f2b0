//! 时间工具函数 - 业务时区
//!
//! 业务时区只在应用边界 (配置) 解析一次，之后作为参数显式传入
//! `hours` 模块的每一个调用。

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 默认业务时区
pub const DEFAULT_TIMEZONE: &str = "Europe/Helsinki";

/// 解析 IANA 时区名称 (如 "Europe/Helsinki")
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::validation(format!("Invalid time zone: {}", name)))
}

/// 当前时间 (UTC)，供调用方传给求值函数
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// 当前业务时区的本地时间字符串 (HH:MM)，用于状态展示
pub fn local_clock(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%H:%M").to_string()
}
