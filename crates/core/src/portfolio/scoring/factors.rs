//! Scoring factor table.
//!
//! Each factor is a named pure function over a [`FactorContext`]. The engine
//! evaluates [`SCORING_FACTORS`] in order and averages over the table length,
//! so a new factor is one more row here (plus its breakdown field).

use crate::constants::*;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::{Portfolio, RiskLevel};
use crate::utils::math_utils::{clamp_score, mean, population_std_dev};

use super::scoring_model::ScoreFactor;

/// Aggregates derived once from a validated portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorContext {
    pub age: u32,
    pub risk_appetite: RiskLevel,
    pub holding_count: usize,
    /// Unrounded mean of the holding return rates.
    pub avg_return: f64,
    pub return_std_dev: f64,
    pub mean_risk_ordinal: f64,
}

impl FactorContext {
    /// Validates the portfolio and computes the shared aggregates.
    ///
    /// Fails before any division when the holdings list is empty.
    pub fn from_portfolio(portfolio: &Portfolio) -> Result<Self> {
        portfolio.validate()?;

        let rates = portfolio.return_rates();
        let empty = || Error::invalid_field("investments", "at least one holding is required");
        let avg_return = mean(&rates).ok_or_else(empty)?;
        let return_std_dev = population_std_dev(&rates).ok_or_else(empty)?;
        let mean_risk_ordinal = mean(&portfolio.risk_ordinals()).ok_or_else(empty)?;

        Ok(Self {
            age: portfolio.age,
            risk_appetite: portfolio.risk_appetite,
            holding_count: portfolio.holding_count(),
            avg_return,
            return_std_dev,
            mean_risk_ordinal,
        })
    }
}

/// One row of the factor table.
#[derive(Clone, Copy)]
pub struct ScoringFactor {
    pub factor: ScoreFactor,
    pub evaluate: fn(&FactorContext) -> f64,
}

impl std::fmt::Debug for ScoringFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringFactor")
            .field("factor", &self.factor)
            .finish()
    }
}

pub const SCORING_FACTORS: [ScoringFactor; 5] = [
    ScoringFactor {
        factor: ScoreFactor::Profitability,
        evaluate: |ctx| profitability_score(ctx.avg_return),
    },
    ScoringFactor {
        factor: ScoreFactor::Diversification,
        evaluate: |ctx| diversification_score(ctx.holding_count),
    },
    ScoringFactor {
        factor: ScoreFactor::Consistency,
        evaluate: |ctx| consistency_score(ctx.return_std_dev),
    },
    ScoringFactor {
        factor: ScoreFactor::RiskAlignment,
        evaluate: |ctx| risk_alignment_score(ctx.risk_appetite, ctx.mean_risk_ordinal),
    },
    ScoringFactor {
        factor: ScoreFactor::AgeAdjusted,
        evaluate: |ctx| age_adjusted_score(ctx.age, ctx.avg_return),
    },
];

/// Evaluates every factor in table order.
pub fn evaluate_factors(ctx: &FactorContext) -> Vec<(ScoreFactor, f64)> {
    SCORING_FACTORS
        .iter()
        .map(|row| (row.factor, (row.evaluate)(ctx)))
        .collect()
}

/// 5% average return scores 0; each extra point adds 10, saturating at 15%.
pub fn profitability_score(avg_return: f64) -> f64 {
    clamp_score((avg_return - PROFITABILITY_BASELINE_RETURN) * PROFITABILITY_POINTS_PER_PERCENT)
}

/// Counts holdings, not distinct types.
pub fn diversification_score(holding_count: usize) -> f64 {
    clamp_score(holding_count as f64 * DIVERSIFICATION_POINTS_PER_HOLDING)
}

pub fn consistency_score(return_std_dev: f64) -> f64 {
    clamp_score(SCORE_CEILING - return_std_dev * CONSISTENCY_PENALTY_PER_STD_DEV)
}

pub fn risk_alignment_score(risk_appetite: RiskLevel, mean_risk_ordinal: f64) -> f64 {
    let distance = (f64::from(risk_appetite.ordinal()) - mean_risk_ordinal).abs();
    clamp_score(SCORE_CEILING - distance * RISK_ALIGNMENT_PENALTY_PER_STEP)
}

/// Capped at 100 but never floored: a negative average return yields a
/// negative contribution to the total.
pub fn age_adjusted_score(age: u32, avg_return: f64) -> f64 {
    let multiplier = if age < YOUNG_INVESTOR_AGE_LIMIT {
        YOUNG_INVESTOR_MULTIPLIER
    } else if age < MID_CAREER_AGE_LIMIT {
        MID_CAREER_MULTIPLIER
    } else {
        LATE_CAREER_MULTIPLIER
    };
    (avg_return * multiplier).min(SCORE_CEILING)
}
