use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Investment, NewInvestment},
};

#[utoipa::path(get, path = "/api/v1/investments", responses((status = 200, body = [Investment]), (status = 401)))]
pub async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Investment>>> {
    let rows = state
        .investment_service
        .get_user_investments(&user.username)?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(rows.into_iter().map(Investment::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/investments", request_body = NewInvestment, responses((status = 200, body = Investment), (status = 400), (status = 404)))]
pub async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let created = state
        .investment_service
        .record_investment(&user.username, payload.into())
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(Investment::from(created)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/investments", get(list_investments).post(create_investment))
}
