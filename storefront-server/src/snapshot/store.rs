use std::sync::Arc;
use tokio::sync::watch;

use super::StorefrontSnapshot;
use shared::types::Timestamp;
use shared::util::now_millis;

/// 已加载的快照及其元数据
#[derive(Debug)]
pub struct LoadedSnapshot {
    pub data: StorefrontSnapshot,
    /// 加载时间 (Unix 毫秒)
    pub loaded_at: Timestamp,
}

/// 快照存储 - 最新快照的共享句柄
///
/// 读者拿到 `Arc` 后不受后续刷新影响；刷新整体替换，不会出现半新半旧的数据。
/// Clone 成本极低 (内部为 Arc)。
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Option<Arc<LoadedSnapshot>>>>,
}

impl SnapshotStore {
    /// 创建空存储 (尚未加载)
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// 以现成的快照创建存储
    pub fn with_snapshot(snapshot: StorefrontSnapshot) -> Self {
        let store = Self::new();
        store.publish(snapshot);
        store
    }

    /// 当前快照；从未加载成功时为 None
    pub fn current(&self) -> Option<Arc<LoadedSnapshot>> {
        self.tx.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// 发布新快照，替换旧快照
    pub fn publish(&self, snapshot: StorefrontSnapshot) -> Arc<LoadedSnapshot> {
        let loaded = Arc::new(LoadedSnapshot {
            data: snapshot,
            loaded_at: now_millis(),
        });
        self.tx.send_replace(Some(loaded.clone()));
        loaded
    }

    /// 订阅快照变更
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<LoadedSnapshot>>> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = SnapshotStore::new();
        assert!(!store.is_loaded());
        assert!(store.current().is_none());

        let store = SnapshotStore::with_snapshot(StorefrontSnapshot::default());
        assert!(store.is_loaded());
    }

    #[test]
    fn test_publish_replaces_and_keeps_old_readers() {
        let store = SnapshotStore::new();
        let first = store.publish(StorefrontSnapshot::default());
        assert!(first.loaded_at > 0);

        let held = store.current().unwrap();
        let mut next = StorefrontSnapshot::default();
        next.settings.is_busy = true;
        store.publish(next);

        assert!(!held.data.settings.is_busy);
        assert!(store.current().unwrap().data.settings.is_busy);
    }

    #[tokio::test]
    async fn test_subscribe_sees_publish() {
        let store = SnapshotStore::new();
        let mut rx = store.subscribe();
        let clone = store.clone();
        clone.publish(StorefrontSnapshot::default());
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());
    }
}
