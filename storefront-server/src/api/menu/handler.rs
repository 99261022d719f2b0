//! Menu API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::PricedMenuItem;

use crate::core::ServerState;
use crate::pricing::price_menu;
use crate::utils::time::now;
use crate::utils::{AppError, AppResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub branch_id: Option<i64>,
}

/// GET /api/menu?branch_id= - 菜单 (附促销价格)
///
/// 不传 branch_id 时返回所有分店的商品，分店限定的促销同样适用。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<AppResponse<Vec<PricedMenuItem>>>> {
    let loaded = state.snapshot()?;
    if let Some(branch_id) = query.branch_id
        && loaded.data.find_branch(branch_id).is_none()
    {
        return Err(AppError::not_found(format!("Branch {}", branch_id)));
    }

    let items = price_menu(&loaded.data.menu, &loaded.data.promotions, query.branch_id, now());
    tracing::debug!(branch_id = ?query.branch_id, count = items.len(), "Menu priced");
    Ok(ok(items))
}
