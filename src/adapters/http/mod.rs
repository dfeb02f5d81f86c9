pub mod handlers;

use crate::core::FranchiseService;
use crate::utils::error::FranchiseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Shared application state.
pub type AppState = Arc<FranchiseService>;

/// Build the franchise API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/franchises",
            post(handlers::create_franchise).get(handlers::list_franchises),
        )
        .route(
            "/franchises/{franchise_id}",
            get(handlers::get_franchise).delete(handlers::delete_franchise),
        )
        .route(
            "/franchises/{franchise_id}/name",
            put(handlers::rename_franchise),
        )
        .route(
            "/franchises/{franchise_id}/branches",
            post(handlers::add_branch).get(handlers::list_branches),
        )
        .route(
            "/franchises/{franchise_id}/products/max-stock",
            get(handlers::max_stock_products),
        )
        .route(
            "/franchises/{franchise_id}/branches/{branch_id}/name",
            put(handlers::rename_branch),
        )
        .route(
            "/franchises/{franchise_id}/branches/{branch_id}/products/{product_id}",
            delete(handlers::delete_product),
        )
        .route(
            "/franchises/{franchise_id}/branches/{branch_id}/products/{product_id}/name",
            put(handlers::rename_product),
        )
        .route(
            "/franchises/{franchise_id}/branches/{branch_id}/products/{product_id}/stock",
            put(handlers::modify_product_stock),
        )
        .with_state(state)
}

/// Standard API error response body: `{"code": "...", "message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(&self)).into_response()
    }
}

// 巢狀查找失敗一律回 500，錯誤碼區分是哪一層找不到
impl From<FranchiseError> for ApiError {
    fn from(err: FranchiseError) -> Self {
        if err.severity() >= crate::utils::error::ErrorSeverity::High {
            tracing::error!("Request failed: {} ({:?})", err, err.category());
        } else {
            tracing::warn!("Request failed: {}", err);
        }
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}
