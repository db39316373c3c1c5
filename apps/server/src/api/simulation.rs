use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{SimulateRequest, Simulation},
};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

/// Projects the effect of adding one holding to a previously analyzed portfolio.
#[utoipa::path(
    post,
    path = "/api/v1/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, body = Simulation),
        (status = 400, description = "Invalid simulation input")
    )
)]
pub async fn simulate_holding(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> ApiResult<Json<Simulation>> {
    let Json(request) = payload?;
    let (baseline, input) = request.into_parts()?;
    let result = state.simulation_service.run(&baseline, &input)?;
    tracing::info!(
        years = input.time_horizon_years,
        improvement = result.improvement,
        "Simulation completed"
    );
    Ok(Json(Simulation::from(result)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/simulate", post(simulate_holding))
}
