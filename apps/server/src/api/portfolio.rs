use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use fundfolio_core::portfolio::{
    FundOverlapAnalysis, HistoryPeriod, PortfolioOverview, SectorAllocation, ValueHistory,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
pub struct PeriodQuery {
    period: Option<String>,
}

#[utoipa::path(get, path = "/api/v1/portfolio", responses((status = 200, description = "Portfolio overview"), (status = 404, description = "User not found")))]
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<PortfolioOverview>> {
    let overview = state
        .portfolio_service
        .get_overview(&user.username)?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(overview))
}

#[utoipa::path(get, path = "/api/v1/portfolio/sector-allocation", responses((status = 200, description = "Invested amount per sector")))]
pub async fn get_sector_allocation(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<SectorAllocation>> {
    let allocation = state
        .portfolio_service
        .get_sector_allocation(&user.username)?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(allocation))
}

#[utoipa::path(get, path = "/api/v1/portfolio/stock-allocation", params(("period" = Option<String>, Query, description = "1M, 3M, 6M, 1Y, 3Y or MAX")), responses((status = 200, description = "Investment value history"), (status = 400, description = "Unknown period")))]
pub async fn get_value_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<ValueHistory>> {
    let period = match query.period.as_deref() {
        Some(raw) => raw.parse::<HistoryPeriod>()?,
        None => HistoryPeriod::default(),
    };
    let history = state
        .portfolio_service
        .get_value_history(&user.username, period)?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(history))
}

#[utoipa::path(get, path = "/api/v1/portfolio/overlap", responses((status = 200, description = "Fund overlap analysis")))]
pub async fn get_fund_overlap(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<FundOverlapAnalysis>> {
    let analysis = state
        .portfolio_service
        .get_fund_overlap(&user.username)?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(analysis))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_overview))
        .route("/portfolio/sector-allocation", get(get_sector_allocation))
        .route("/portfolio/stock-allocation", get(get_value_history))
        .route("/portfolio/overlap", get(get_fund_overlap))
}
