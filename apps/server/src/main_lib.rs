use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, Argon2PasswordHasher, AuthConfig, AuthManager},
    config::Config,
    seed,
};
use fundfolio_core::{
    funds::{FundService, FundServiceTrait},
    investments::{InvestmentService, InvestmentServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    users::{UserService, UserServiceTrait},
};
use fundfolio_storage_sqlite::{
    db::{self, DbPool},
    FundRepository, InvestmentRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub fund_service: Arc<dyn FundServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub db_pool: Arc<DbPool>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let fund_repository = Arc::new(FundRepository::new(pool.clone(), writer.clone()));
    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        Arc::new(Argon2PasswordHasher),
    ));
    let fund_service = Arc::new(FundService::new(fund_repository.clone()));
    let investment_service = Arc::new(InvestmentService::new(
        user_repository.clone(),
        fund_repository.clone(),
        investment_repository.clone(),
    ));
    let portfolio_service = Arc::new(PortfolioService::new(
        user_repository,
        investment_repository,
        fund_repository,
    ));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: decode_secret_key(&config.jwt_secret)?,
        access_token_ttl: config.access_token_ttl,
    }));

    let state = Arc::new(AppState {
        user_service,
        fund_service,
        investment_service,
        portfolio_service,
        db_pool: pool,
        auth,
    });

    if config.seed_demo_data {
        if seed::seed_demo_data(&state).await? {
            tracing::info!("Seeded demo users, funds and investments");
        } else {
            tracing::info!("Database already has users; skipping demo seed");
        }
    }

    Ok(state)
}
