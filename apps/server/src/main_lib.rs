use std::sync::Arc;

use crate::config::Config;
use smartfolio_core::{
    constants::MAX_TIME_HORIZON_YEARS, ScoringService, ScoringServiceTrait, SimulationService,
    SimulationServiceTrait,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub scoring_service: Arc<dyn ScoringServiceTrait>,
    pub simulation_service: Arc<dyn SimulationServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub fn build_state(config: &Config) -> Arc<AppState> {
    let simulation_service = match config.max_horizon_years {
        0 => SimulationService::new(),
        max => SimulationService::with_max_horizon(max),
    };
    tracing::info!(
        "Simulation horizon cap: {} years",
        simulation_service
            .max_horizon_years()
            .unwrap_or(MAX_TIME_HORIZON_YEARS)
    );

    Arc::new(AppState {
        scoring_service: Arc::new(ScoringService::new()),
        simulation_service: Arc::new(simulation_service),
    })
}
