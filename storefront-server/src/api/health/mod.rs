//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 + 快照状态 |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "snapshot_loaded": true,
//!   "snapshot_loaded_at": 1760605200000,
//!   "timezone": "Europe/Helsinki"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use shared::types::Timestamp;

use crate::core::ServerState;
use crate::utils::{AppResponse, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded (快照未加载)
    status: &'static str,
    version: &'static str,
    snapshot_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_loaded_at: Option<Timestamp>,
    timezone: String,
}

/// GET /health
async fn health(State(state): State<ServerState>) -> Json<AppResponse<HealthResponse>> {
    let loaded_at = state.snapshots.current().map(|s| s.loaded_at);
    ok(HealthResponse {
        status: if loaded_at.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        snapshot_loaded: loaded_at.is_some(),
        snapshot_loaded_at: loaded_at,
        timezone: state.config.business_timezone.to_string(),
    })
}
