//! 数据快照模块
//!
//! 店面数据 (设置、分店、促销、菜单) 由调用方持有，定时从数据源刷新。
//!
//! # 模块结构
//!
//! - [`StorefrontSnapshot`] - 快照数据
//! - [`SnapshotSource`] - 数据源接口 (文件、内存)
//! - [`SnapshotStore`] - 最新快照的共享句柄
//! - [`run_refresher`] - 后台刷新循环

mod model;
mod refresh;
mod source;
mod store;

pub use model::StorefrontSnapshot;
pub use refresh::{refresh_once, run_refresher};
pub use source::{FileSnapshotSource, SnapshotSource, StaticSnapshotSource};
pub use store::{LoadedSnapshot, SnapshotStore};
