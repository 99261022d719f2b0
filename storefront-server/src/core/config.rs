use chrono_tz::Tz;
use std::time::Duration;

use crate::core::ServerError;
use crate::utils::time::{DEFAULT_TIMEZONE, parse_timezone};

/// 服务器配置 - 店面服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | BUSINESS_TIMEZONE | Europe/Helsinki | 营业时间求值所用时区 |
/// | SNAPSHOT_PATH | data/storefront.json | 数据快照文件 |
/// | SNAPSHOT_REFRESH_SECS | 60 | 快照刷新间隔(秒) |
/// | DEFAULT_OPEN_WHEN_UNKNOWN | true | 没有任何营业时间信息时是否视为营业 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// BUSINESS_TIMEZONE=Europe/Stockholm HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 业务时区 (所有营业时间求值显式传入)
    pub business_timezone: Tz,
    /// 数据快照文件路径
    pub snapshot_path: String,
    /// 快照刷新间隔
    pub snapshot_refresh: Duration,
    /// 状态未知 (无营业时间信息) 时的默认值
    pub default_open_when_unknown: bool,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值；时区无效时返回错误
    pub fn from_env() -> Result<Self, ServerError> {
        let timezone_name =
            std::env::var("BUSINESS_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.into());
        let business_timezone = parse_timezone(&timezone_name)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            business_timezone,
            snapshot_path: std::env::var("SNAPSHOT_PATH")
                .unwrap_or_else(|_| "data/storefront.json".into()),
            snapshot_refresh: Duration::from_secs(
                std::env::var("SNAPSHOT_REFRESH_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|secs: &u64| *secs > 0)
                    .unwrap_or(60),
            ),
            default_open_when_unknown: std::env::var("DEFAULT_OPEN_WHEN_UNKNOWN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(snapshot_path: impl Into<String>, business_timezone: Tz) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            business_timezone,
            ..Self::default()
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            business_timezone: chrono_tz::Europe::Helsinki,
            snapshot_path: "data/storefront.json".into(),
            snapshot_refresh: Duration::from_secs(60),
            default_open_when_unknown: true,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
