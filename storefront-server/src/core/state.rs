use std::sync::Arc;

use crate::core::Config;
use crate::core::tasks::BackgroundTasks;
use crate::snapshot::{
    FileSnapshotSource, LoadedSnapshot, SnapshotSource, SnapshotStore, refresh_once, run_refresher,
};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有共享组件
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | snapshots | SnapshotStore | 最新数据快照 |
/// | source | Arc<dyn SnapshotSource> | 快照数据源 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub snapshots: SnapshotStore,
    pub source: Arc<dyn SnapshotSource>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .field("loaded", &self.snapshots.is_loaded())
            .finish()
    }
}

impl ServerState {
    pub fn new(config: Config, source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            config,
            snapshots: SnapshotStore::new(),
            source,
        }
    }

    /// 初始化服务器状态
    ///
    /// 使用配置中的快照文件作为数据源，并尝试首次加载。
    /// 首次加载失败不阻止启动：状态接口返回默认值，刷新任务稍后重试。
    pub async fn initialize(config: &Config) -> Self {
        let source: Arc<dyn SnapshotSource> =
            Arc::new(FileSnapshotSource::new(&config.snapshot_path));
        let state = Self::new(config.clone(), source);

        match refresh_once(state.source.as_ref(), &state.snapshots).await {
            Ok(loaded) => tracing::info!(
                branches = loaded.data.branches.len(),
                promotions = loaded.data.promotions.len(),
                menu_items = loaded.data.menu.len(),
                "Initial snapshot loaded"
            ),
            Err(e) => tracing::warn!(error = %e, "Initial snapshot load failed, serving defaults until refresh succeeds"),
        }

        state
    }

    /// 启动后台任务
    ///
    /// - 快照刷新 (Periodic)
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();
        let token = tasks.shutdown_token();
        let source = self.source.clone();
        let store = self.snapshots.clone();
        let interval = self.config.snapshot_refresh;
        tasks.spawn("snapshot_refresher", async move {
            run_refresher(source, store, interval, token).await;
        });
        tasks
    }

    /// 当前快照；尚未加载时返回 503
    pub fn snapshot(&self) -> AppResult<Arc<LoadedSnapshot>> {
        self.snapshots
            .current()
            .ok_or_else(|| AppError::unavailable("Storefront data has not been loaded yet"))
    }
}
