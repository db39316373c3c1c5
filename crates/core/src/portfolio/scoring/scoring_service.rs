use log::{debug, warn};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::portfolio::holdings::Portfolio;
use crate::utils::math_utils::round_to;

use super::factors::{evaluate_factors, FactorContext};
use super::scoring_model::{AllocationSlice, PortfolioAnalysis, ScoreBreakdown, ScoreGrade};
use super::scoring_traits::ScoringServiceTrait;
use super::suggestions::{generate_suggestions, SuggestionContext};

/// Scores a portfolio.
///
/// Fails with a validation error for an empty holdings list or any invalid
/// field; no partial analysis is ever returned.
///
/// The total is taken from the raw factor values. The stored breakdown holds
/// each component rounded to a whole point.
pub fn score(portfolio: &Portfolio) -> Result<PortfolioAnalysis> {
    let ctx = FactorContext::from_portfolio(portfolio)?;

    let raw_breakdown = ScoreBreakdown::from_scores(&evaluate_factors(&ctx));
    let total_score = raw_breakdown.total_score();
    let total_investment = portfolio.total_investment();

    let suggestions = generate_suggestions(&SuggestionContext {
        total_score,
        holding_count: ctx.holding_count,
        age: ctx.age,
        risk_appetite: ctx.risk_appetite,
    });

    let allocation = portfolio
        .investments
        .iter()
        .map(|h| AllocationSlice::from_holding(h, total_investment))
        .collect();

    Ok(PortfolioAnalysis {
        portfolio: portfolio.clone(),
        total_score,
        breakdown: raw_breakdown.rounded(),
        total_investment,
        avg_return: round_to(ctx.avg_return, DISPLAY_DECIMAL_PRECISION),
        suggestions,
        grade: ScoreGrade::from_score(total_score),
        allocation,
    })
}

/// Service wrapper around [`score`].
#[derive(Debug, Clone, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }
}

impl ScoringServiceTrait for ScoringService {
    fn analyze(&self, portfolio: &Portfolio) -> Result<PortfolioAnalysis> {
        match score(portfolio) {
            Ok(analysis) => {
                debug!(
                    "Scored portfolio with {} holdings: total={} avg_return={}",
                    analysis.holding_count(),
                    analysis.total_score,
                    analysis.avg_return
                );
                Ok(analysis)
            }
            Err(e) => {
                warn!("Rejected portfolio for scoring: {}", e);
                Err(e)
            }
        }
    }
}
