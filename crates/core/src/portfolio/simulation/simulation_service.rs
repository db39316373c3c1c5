use log::{debug, warn};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::portfolio::scoring::{
    diversification_score, profitability_score, ScoreBreakdown, ScoreFactor,
};
use crate::utils::math_utils::{round_half_up, round_to};

use super::simulation_model::{
    ComparisonPoint, PortfolioComparison, ProjectionPoint, SimulationBaseline, SimulationInput,
    SimulationResult,
};
use super::simulation_traits::SimulationServiceTrait;

/// Projects the effect of adding `input.new_holding` to the baseline portfolio.
///
/// Only profitability and diversification are recomputed. Consistency, risk
/// alignment and the age-adjusted score are carried over from the baseline.
pub fn simulate(baseline: &SimulationBaseline, input: &SimulationInput) -> Result<SimulationResult> {
    baseline.validate()?;
    input.validate()?;

    let proposal = &input.new_holding;
    let new_total = baseline.total_investment + proposal.amount;
    let weighted_return = (baseline.avg_return * baseline.total_investment
        + proposal.return_rate * proposal.amount)
        / new_total;

    let mut new_breakdown: ScoreBreakdown = baseline.breakdown;
    new_breakdown.set(ScoreFactor::Profitability, profitability_score(weighted_return));
    new_breakdown.set(
        ScoreFactor::Diversification,
        diversification_score(baseline.holding_count + 1),
    );
    let new_total_score = new_breakdown.total_score();

    let projection = project_growth(baseline, new_total, weighted_return, input.time_horizon_years);

    Ok(SimulationResult {
        new_total_score,
        new_total_investment: new_total,
        new_avg_return: round_to(weighted_return, DISPLAY_DECIMAL_PRECISION),
        improvement: new_total_score - baseline.total_score,
        new_breakdown,
        projection,
        comparison: PortfolioComparison {
            current: ComparisonPoint {
                score: baseline.total_score,
                investment: baseline.total_investment,
            },
            simulated: ComparisonPoint {
                score: new_total_score,
                investment: new_total,
            },
        },
    })
}

/// Year-by-year values for years `1..=years`.
///
/// The simulated series compounds iteratively from `new_total`; the current
/// series is the closed form `principal * (1 + r)^year`.
fn project_growth(
    baseline: &SimulationBaseline,
    new_total: f64,
    weighted_return: f64,
    years: u32,
) -> Vec<ProjectionPoint> {
    let simulated_growth = 1.0 + weighted_return / 100.0;
    let current_growth = 1.0 + baseline.avg_return / 100.0;

    let mut simulated_value = new_total;
    (1..=years)
        .map(|year| {
            simulated_value *= simulated_growth;
            let current_value = baseline.total_investment * current_growth.powf(f64::from(year));
            ProjectionPoint {
                year,
                simulated_value: round_half_up(simulated_value),
                current_value: round_half_up(current_value),
            }
        })
        .collect()
}

/// Service wrapper around [`simulate`] with an optional horizon cap.
#[derive(Debug, Clone, Default)]
pub struct SimulationService {
    max_horizon_years: Option<u32>,
}

impl SimulationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_horizon(max_horizon_years: u32) -> Self {
        Self {
            max_horizon_years: Some(max_horizon_years),
        }
    }

    pub fn max_horizon_years(&self) -> Option<u32> {
        self.max_horizon_years
    }
}

impl SimulationServiceTrait for SimulationService {
    fn run(&self, baseline: &SimulationBaseline, input: &SimulationInput) -> Result<SimulationResult> {
        if let Some(max) = self.max_horizon_years {
            if input.time_horizon_years > max {
                let err = Error::invalid_field(
                    "timeHorizonYears",
                    format!("must not exceed {} years", max),
                );
                warn!("Rejected simulation: {}", err);
                return Err(err);
            }
        }

        match simulate(baseline, input) {
            Ok(result) => {
                debug!(
                    "Simulated {} over {} years: score {} -> {} ({:+})",
                    input.new_holding.investment_type,
                    input.time_horizon_years,
                    baseline.total_score,
                    result.new_total_score,
                    result.improvement
                );
                Ok(result)
            }
            Err(e) => {
                warn!("Rejected simulation: {}", e);
                Err(e)
            }
        }
    }
}
