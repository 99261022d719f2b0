//! Status API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::api::LangQuery;
use crate::core::ServerState;
use crate::hours::{DayHoursLine, format_weekly_hours};
use crate::status::{StorefrontStatus, compute_status};
use crate::utils::time::now;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::ServiceKind;

/// GET /api/status - 当前营业状态 (快照未加载时返回默认值)
pub async fn status(
    State(state): State<ServerState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AppResponse<StorefrontStatus>>> {
    let language = query.language()?;
    let loaded = state.snapshots.current();
    let status = compute_status(
        loaded.as_ref().map(|s| &s.data),
        now(),
        state.config.business_timezone,
        state.config.default_open_when_unknown,
        language,
    );
    Ok(ok(status))
}

#[derive(Debug, Serialize)]
pub struct RestaurantHours {
    pub opening_hours: Vec<DayHoursLine>,
    pub pickup_hours: Vec<DayHoursLine>,
    pub delivery_hours: Vec<DayHoursLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_buffet_hours: Option<Vec<DayHoursLine>>,
}

/// GET /api/hours - 餐厅设置中的营业时间
pub async fn hours(
    State(state): State<ServerState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<AppResponse<RestaurantHours>>> {
    let language = query.language()?;
    let loaded = state.snapshot()?;
    let settings = &loaded.data.settings;
    Ok(ok(RestaurantHours {
        opening_hours: format_weekly_hours(settings.schedule(ServiceKind::General), language),
        pickup_hours: format_weekly_hours(settings.schedule(ServiceKind::Pickup), language),
        delivery_hours: format_weekly_hours(settings.schedule(ServiceKind::Delivery), language),
        lunch_buffet_hours: settings
            .lunch_buffet_hours
            .as_ref()
            .map(|hours| format_weekly_hours(hours, language)),
    }))
}
