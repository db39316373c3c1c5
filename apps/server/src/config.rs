use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Upper bound on `timeHorizonYears`; `0` leaves only the engine's own limit.
    pub max_horizon_years: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SF_LISTEN_ADDR")?;
        let cors_allow = std::env::var("SF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let max_horizon_years: u32 = std::env::var("SF_MAX_HORIZON_YEARS")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .unwrap_or(50);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            max_horizon_years,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            max_horizon_years: 50,
        }
    }
}
