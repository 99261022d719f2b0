use async_trait::async_trait;
use std::path::PathBuf;

use super::StorefrontSnapshot;
use crate::utils::{AppError, AppResult};

/// 快照数据源
///
/// 存储层的只读接口。实现方负责读取并解析一份完整快照。
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// 数据源描述 (用于日志)
    fn describe(&self) -> String;

    async fn load(&self) -> AppResult<StorefrontSnapshot>;
}

/// JSON 文件数据源
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn load(&self) -> AppResult<StorefrontSnapshot> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| AppError::snapshot(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::snapshot(format!("{}: {}", self.path.display(), e)))
    }
}

/// 内存数据源 (测试和嵌入场景)
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    snapshot: StorefrontSnapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: StorefrontSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn load(&self) -> AppResult<StorefrontSnapshot> {
        Ok(self.snapshot.clone())
    }
}
