use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub jwt_secret: String,
    /// `None` issues tokens without an expiry claim.
    pub access_token_ttl: Option<Duration>,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FF_LISTEN_ADDR")?;
        let db_path = std::env::var("FF_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("FF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("FF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let jwt_secret =
            std::env::var("FF_JWT_SECRET").context("FF_JWT_SECRET must be set")?;
        let ttl_minutes: u64 = std::env::var("FF_ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .context("Invalid FF_ACCESS_TOKEN_TTL_MINUTES")?;
        let access_token_ttl = (ttl_minutes > 0).then(|| Duration::from_secs(ttl_minutes * 60));
        let seed_demo_data = std::env::var("FF_SEED_DEMO_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            access_token_ttl,
            seed_demo_data,
        })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
