use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{FundAllocation, FundOverlap, MutualFund, MutualFundInput, NewFundOverlap, SectorWeight},
};

fn fund_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Fund {} not found", id))
}

#[utoipa::path(get, path = "/api/v1/mutual-funds", responses((status = 200, body = [MutualFund])))]
pub async fn list_funds(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MutualFund>>> {
    let funds = state.fund_service.get_funds()?;
    Ok(Json(funds.into_iter().map(MutualFund::from).collect()))
}

#[utoipa::path(get, path = "/api/v1/mutual-funds/{id}", responses((status = 200, body = MutualFund), (status = 404)))]
pub async fn get_fund(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MutualFund>> {
    let fund = state.fund_service.get_fund(id)?.ok_or_else(|| fund_not_found(id))?;
    Ok(Json(MutualFund::from(fund)))
}

#[utoipa::path(post, path = "/api/v1/mutual-funds", request_body = MutualFundInput, responses((status = 200, body = MutualFund), (status = 409)))]
pub async fn create_fund(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MutualFundInput>,
) -> ApiResult<Json<MutualFund>> {
    let created = state.fund_service.create_fund(payload.into()).await?;
    Ok(Json(MutualFund::from(created)))
}

#[utoipa::path(put, path = "/api/v1/mutual-funds/{id}", request_body = MutualFundInput, responses((status = 200, body = MutualFund), (status = 404)))]
pub async fn update_fund(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MutualFundInput>,
) -> ApiResult<Json<MutualFund>> {
    let updated = state
        .fund_service
        .update_fund(id, payload.into())
        .await?
        .ok_or_else(|| fund_not_found(id))?;
    Ok(Json(MutualFund::from(updated)))
}

#[utoipa::path(delete, path = "/api/v1/mutual-funds/{id}", responses((status = 204), (status = 404), (status = 409)))]
pub async fn delete_fund(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.fund_service.delete_fund(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(fund_not_found(id))
    }
}

#[utoipa::path(get, path = "/api/v1/mutual-funds/{id}/allocations", responses((status = 200, body = [FundAllocation]), (status = 404)))]
pub async fn get_allocations(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FundAllocation>>> {
    let rows = state
        .fund_service
        .get_allocations(id)?
        .ok_or_else(|| fund_not_found(id))?;
    Ok(Json(rows.into_iter().map(FundAllocation::from).collect()))
}

#[utoipa::path(put, path = "/api/v1/mutual-funds/{id}/allocations", request_body = [SectorWeight], responses((status = 200, body = [FundAllocation]), (status = 400), (status = 404)))]
pub async fn replace_allocations(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Vec<SectorWeight>>,
) -> ApiResult<Json<Vec<FundAllocation>>> {
    let weights = payload.into_iter().map(Into::into).collect();
    let rows = state
        .fund_service
        .replace_allocations(id, weights)
        .await?
        .ok_or_else(|| fund_not_found(id))?;
    Ok(Json(rows.into_iter().map(FundAllocation::from).collect()))
}

#[utoipa::path(get, path = "/api/v1/fund-overlaps", responses((status = 200, body = [FundOverlap])))]
pub async fn list_overlaps(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FundOverlap>>> {
    let rows = state.fund_service.get_overlaps()?;
    Ok(Json(rows.into_iter().map(FundOverlap::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/fund-overlaps", request_body = NewFundOverlap, responses((status = 200, body = FundOverlap), (status = 400), (status = 404)))]
pub async fn create_overlap(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewFundOverlap>,
) -> ApiResult<Json<FundOverlap>> {
    let created = state.fund_service.create_overlap(payload.into()).await?;
    Ok(Json(FundOverlap::from(created)))
}

/// Catalog reads, open to anonymous callers.
pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mutual-funds", get(list_funds))
        .route("/mutual-funds/{id}", get(get_fund))
        .route("/mutual-funds/{id}/allocations", get(get_allocations))
        .route("/fund-overlaps", get(list_overlaps))
}

/// Catalog writes; mounted behind `require_jwt`.
pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mutual-funds", post(create_fund))
        .route("/mutual-funds/{id}", put(update_fund).delete(delete_fund))
        .route("/mutual-funds/{id}/allocations", put(replace_allocations))
        .route("/fund-overlaps", post(create_overlap))
}
