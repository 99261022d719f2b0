//! API 路由模块
//!
//! 只读接口，统一使用 `{code, message, data}` 响应结构。
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`status`] - 营业状态、营业时间
//! - [`branches`] - 分店状态、分店营业时间
//! - [`menu`] - 菜单 (含促销价格)
//! - [`promotions`] - 促销展示

pub mod branches;
pub mod health;
pub mod menu;
pub mod promotions;
pub mod status;

use axum::{Router, middleware};
use serde::Deserialize;
use shared::types::Language;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// HTTP request logging middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Routes without state
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(status::router())
        .merge(branches::router())
        .merge(menu::router())
        .merge(promotions::router())
}

/// Build the Axum app bound to `state`
pub fn build_app(state: ServerState) -> Router {
    routes()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}

/// `?lang=fi|en` (缺省 fi)
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> AppResult<Language> {
        match self.lang.as_deref().map(str::trim) {
            None | Some("") => Ok(Language::default()),
            Some(code) => Language::from_code(code)
                .ok_or_else(|| AppError::validation(format!("Unsupported language: {}", code))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_query() {
        let q = |lang: Option<&str>| LangQuery {
            lang: lang.map(str::to_string),
        };
        assert_eq!(q(None).language().unwrap(), Language::Fi);
        assert_eq!(q(Some("")).language().unwrap(), Language::Fi);
        assert_eq!(q(Some("en")).language().unwrap(), Language::En);
        assert!(matches!(q(Some("sv")).language(), Err(AppError::Validation(_))));
    }
}
