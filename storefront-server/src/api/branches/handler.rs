//! Branch API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use shared::models::ServiceKind;

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::hours::{DayHoursLine, format_weekly_hours};
use crate::status::{BranchStatusList, branch_statuses};
use crate::utils::time::now;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// GET /api/branches/status - 各分店状态 + 汇总
pub async fn list_status(
    State(state): State<ServerState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AppResponse<BranchStatusList>>> {
    let language = query.language()?;
    let loaded = state.snapshot()?;
    Ok(ok(branch_statuses(
        &loaded.data,
        now(),
        state.config.business_timezone,
        language,
    )))
}

#[derive(Debug, Serialize)]
pub struct BranchHours {
    pub branch_id: i64,
    pub name: String,
    pub opening_hours: Vec<DayHoursLine>,
    pub pickup_hours: Vec<DayHoursLine>,
    pub delivery_hours: Vec<DayHoursLine>,
}

/// GET /api/branches/{id}/hours - 分店营业时间表
pub async fn hours(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AppResponse<BranchHours>>> {
    let language = query.language()?;
    let loaded = state.snapshot()?;
    let branch = loaded
        .data
        .find_branch(id)
        .ok_or_else(|| AppError::not_found(format!("Branch {}", id)))?;

    Ok(ok(BranchHours {
        branch_id: branch.id,
        name: branch.display_name(language).to_string(),
        opening_hours: format_weekly_hours(branch.schedule(ServiceKind::General), language),
        pickup_hours: format_weekly_hours(branch.schedule(ServiceKind::Pickup), language),
        delivery_hours: format_weekly_hours(branch.schedule(ServiceKind::Delivery), language),
    }))
}
