use super::{ApiError, AppState};
use crate::domain::model::{Branch, Franchise, Product, ProductWithBranch};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockParams {
    pub new_stock: i32,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn create_franchise(
    State(svc): State<AppState>,
    Json(franchise): Json<Franchise>,
) -> Result<(StatusCode, Json<Franchise>), ApiError> {
    let created = svc.create_franchise(franchise).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_franchise(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
) -> Result<Json<Franchise>, ApiError> {
    svc.get_franchise(&franchise_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("franchise '{}' not found", franchise_id)))
}

pub async fn list_franchises(State(svc): State<AppState>) -> Result<Json<Vec<Franchise>>, ApiError> {
    Ok(Json(svc.list_franchises().await?))
}

pub async fn delete_franchise(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    svc.delete_franchise(&franchise_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_branch(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
    Json(branch): Json<Branch>,
) -> Result<Json<Franchise>, ApiError> {
    Ok(Json(svc.add_branch(&franchise_id, branch).await?))
}

pub async fn list_branches(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
) -> Result<Json<Vec<Branch>>, ApiError> {
    Ok(Json(svc.list_branches(&franchise_id).await?))
}

pub async fn max_stock_products(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
) -> Result<Json<Vec<ProductWithBranch>>, ApiError> {
    Ok(Json(svc.max_stock_products(&franchise_id).await?))
}

pub async fn rename_franchise(
    State(svc): State<AppState>,
    Path(franchise_id): Path<String>,
    Query(params): Query<RenameParams>,
) -> Result<Json<Franchise>, ApiError> {
    Ok(Json(svc.rename_franchise(&franchise_id, &params.new_name).await?))
}

pub async fn rename_branch(
    State(svc): State<AppState>,
    Path((franchise_id, branch_id)): Path<(String, String)>,
    Query(params): Query<RenameParams>,
) -> Result<Json<Branch>, ApiError> {
    Ok(Json(
        svc.rename_branch(&franchise_id, &branch_id, &params.new_name)
            .await?,
    ))
}

pub async fn rename_product(
    State(svc): State<AppState>,
    Path((franchise_id, branch_id, product_id)): Path<(String, String, String)>,
    Query(params): Query<RenameParams>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(
        svc.rename_product(&franchise_id, &branch_id, &product_id, &params.new_name)
            .await?,
    ))
}

pub async fn modify_product_stock(
    State(svc): State<AppState>,
    Path((franchise_id, branch_id, product_id)): Path<(String, String, String)>,
    Query(params): Query<StockParams>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(
        svc.modify_product_stock(&franchise_id, &branch_id, &product_id, params.new_stock)
            .await?,
    ))
}

pub async fn delete_product(
    State(svc): State<AppState>,
    Path((franchise_id, branch_id, product_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    svc.delete_product(&franchise_id, &branch_id, &product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
