use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::{LoadedSnapshot, SnapshotSource, SnapshotStore, StorefrontSnapshot};
use crate::hours::schedule_issues;
use crate::pricing::promotion_issues;
use crate::utils::AppResult;

/// 加载一次并发布
///
/// 失败时不替换旧快照，错误返回给调用方。
pub async fn refresh_once(
    source: &dyn SnapshotSource,
    store: &SnapshotStore,
) -> AppResult<Arc<LoadedSnapshot>> {
    let snapshot = source.load().await?;
    log_data_issues(&snapshot);
    let loaded = store.publish(snapshot);
    tracing::debug!(
        source = %source.describe(),
        branches = loaded.data.branches.len(),
        promotions = loaded.data.promotions.len(),
        menu_items = loaded.data.menu.len(),
        "Snapshot published"
    );
    Ok(loaded)
}

/// 定时刷新循环，直到收到取消信号
///
/// 第一次 tick 立即触发。加载失败只记录警告，继续提供上一份快照。
pub async fn run_refresher(
    source: Arc<dyn SnapshotSource>,
    store: SnapshotStore,
    interval: Duration,
    shutdown: CancellationToken,
) {
    tracing::info!(
        source = %source.describe(),
        interval_secs = interval.as_secs(),
        "Snapshot refresher started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("Snapshot refresher stopped");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = refresh_once(source.as_ref(), &store).await {
                    tracing::warn!(
                        error = %e,
                        has_previous = store.is_loaded(),
                        "Snapshot refresh failed, keeping previous data"
                    );
                }
            }
        }
    }
}

/// 记录数据问题 (格式错误的营业时间、无效促销)
fn log_data_issues(snapshot: &StorefrontSnapshot) {
    for (day, reason) in schedule_issues(&snapshot.settings.opening_hours) {
        tracing::warn!(day = %day, reason = %reason, "Malformed restaurant hours entry");
    }
    for branch in &snapshot.branches {
        let schedules = [
            Some(&branch.opening_hours),
            branch.pickup_hours.as_ref(),
            branch.delivery_hours.as_ref(),
        ];
        for schedule in schedules.into_iter().flatten() {
            for (day, reason) in schedule_issues(schedule) {
                tracing::warn!(branch_id = branch.id, day = %day, reason = %reason, "Malformed branch hours entry");
            }
        }
    }
    for (id, issue) in promotion_issues(&snapshot.promotions) {
        tracing::warn!(promotion_id = id, issue = %issue, "Invalid promotion ignored");
    }
}
