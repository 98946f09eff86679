use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    auth::{self, require_jwt, Credentials, LoginResponse, SignupResponse},
    config::Config,
    main_lib::AppState,
    models::{
        FundAllocation, FundOverlap, Investment, MutualFund, MutualFundInput, NewFundOverlap,
        NewInvestment, SectorWeight,
    },
};

pub mod funds;
pub mod investments;
pub mod portfolio;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready"), (status = 503, description = "Database unavailable")))]
pub async fn readyz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match fundfolio_storage_sqlite::ping(&state.db_pool) {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        auth::signup,
        auth::login,
        funds::list_funds,
        funds::get_fund,
        funds::create_fund,
        funds::update_fund,
        funds::delete_fund,
        funds::get_allocations,
        funds::replace_allocations,
        funds::list_overlaps,
        funds::create_overlap,
        investments::list_investments,
        investments::create_investment,
        portfolio::get_overview,
        portfolio::get_sector_allocation,
        portfolio::get_value_history,
        portfolio::get_fund_overlap,
    ),
    components(schemas(
        Credentials,
        SignupResponse,
        LoginResponse,
        MutualFund,
        MutualFundInput,
        FundAllocation,
        SectorWeight,
        FundOverlap,
        NewFundOverlap,
        Investment,
        NewInvestment,
    ))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let protected = Router::new()
        .merge(funds::protected_router())
        .merge(investments::router())
        .merge(portfolio::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .merge(funds::public_router())
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
