use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Analysis, PortfolioInput},
};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use smartfolio_core::Portfolio;

/// Scores a portfolio and returns the analysis.
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = PortfolioInput,
    responses(
        (status = 200, body = Analysis),
        (status = 400, description = "Invalid portfolio")
    )
)]
pub async fn analyze_portfolio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PortfolioInput>, JsonRejection>,
) -> ApiResult<Json<Analysis>> {
    let Json(input) = payload?;
    let portfolio = Portfolio::try_from(input)?;
    let analysis = state.scoring_service.analyze(&portfolio)?;
    tracing::info!(
        holdings = portfolio.holding_count(),
        total_score = analysis.total_score,
        "Portfolio analyzed"
    );
    Ok(Json(Analysis::from(analysis)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze_portfolio))
}
