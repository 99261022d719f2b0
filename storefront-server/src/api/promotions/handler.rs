//! Promotion API Handlers

use axum::{Json, extract::State};
use shared::models::Promotion;

use crate::core::ServerState;
use crate::pricing::{HERO_PROMOTION_LIMIT, hero_promotions};
use crate::utils::time::now;
use crate::utils::{AppResponse, AppResult, ok};

/// GET /api/promotions/hero - 首页轮播促销 (折扣值最高的 5 个)
pub async fn hero(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Promotion>>>> {
    let loaded = state.snapshot()?;
    let promotions = hero_promotions(&loaded.data.promotions, now(), HERO_PROMOTION_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    Ok(ok(promotions))
}
