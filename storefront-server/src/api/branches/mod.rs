//! Branch API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/branches", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/status", get(handler::list_status))
        .route("/{id}/hours", get(handler::hours))
}
