//! Storefront Server - 餐厅在线店面的营业时间与促销服务
//!
//! # 架构概述
//!
//! - **营业时间** (`hours`): 跨午夜的营业时间求值、分店汇总、下次营业时间
//! - **促销** (`pricing`): 折扣计算、最佳促销选择、菜单价格
//! - **快照** (`snapshot`): 调用方持有的数据快照，定时刷新
//! - **状态** (`status`): 管理端开关与计算状态合并
//! - **HTTP API** (`api`): 只读 JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、后台任务、服务器
//! ├── hours/         # 营业时间求值 (纯函数)
//! ├── pricing/       # 促销引擎 (纯函数)
//! ├── snapshot/      # 数据快照
//! ├── status/        # 展示层状态
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、时区
//! ```

pub mod api;
pub mod core;
pub mod hours;
pub mod pricing;
pub mod snapshot;
pub mod status;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use snapshot::{SnapshotStore, StorefrontSnapshot};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、初始化日志、读取配置
pub fn setup_environment() -> Result<Config, ServerError> {
    // .env 不存在不是错误
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
