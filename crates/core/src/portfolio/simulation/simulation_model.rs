//! Simulation domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SIMULATION_AMOUNT, DEFAULT_SIMULATION_RETURN_RATE, DEFAULT_TIME_HORIZON_YEARS,
    MAX_TIME_HORIZON_YEARS,
};
use crate::errors::{Error, Result};
use crate::portfolio::holdings::{Holding, InvestmentType, RiskLevel};
use crate::portfolio::scoring::{PortfolioAnalysis, ScoreBreakdown};

/// A hypothetical holding to add to an analyzed portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedHolding {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub amount: f64,
    pub return_rate: f64,
    pub risk_level: RiskLevel,
}

impl ProposedHolding {
    pub fn new(
        investment_type: InvestmentType,
        amount: f64,
        return_rate: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            investment_type,
            amount,
            return_rate,
            risk_level,
        }
    }

    /// Materializes the proposal as a regular holding.
    pub fn into_holding(self, start_date: Option<NaiveDate>) -> Holding {
        Holding {
            investment_type: self.investment_type,
            amount: self.amount,
            return_rate: self.return_rate,
            start_date,
            risk_level: self.risk_level,
        }
    }
}

impl Default for ProposedHolding {
    fn default() -> Self {
        Self {
            investment_type: InvestmentType::MutualFund,
            amount: DEFAULT_SIMULATION_AMOUNT,
            return_rate: DEFAULT_SIMULATION_RETURN_RATE,
            risk_level: RiskLevel::Medium,
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub new_holding: ProposedHolding,
    pub time_horizon_years: u32,
}

impl SimulationInput {
    pub fn new(new_holding: ProposedHolding, time_horizon_years: u32) -> Self {
        Self {
            new_holding,
            time_horizon_years,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_horizon_years < 1 {
            return Err(Error::invalid_field(
                "timeHorizonYears",
                "must be at least one year",
            ));
        }
        if self.time_horizon_years > MAX_TIME_HORIZON_YEARS {
            return Err(Error::invalid_field(
                "timeHorizonYears",
                format!("must not exceed {} years", MAX_TIME_HORIZON_YEARS),
            ));
        }
        let holding = &self.new_holding;
        if !holding.amount.is_finite() || holding.amount <= 0.0 {
            return Err(Error::invalid_field(
                "newHolding.amount",
                "must be a positive number",
            ));
        }
        if !holding.return_rate.is_finite() {
            return Err(Error::invalid_field(
                "newHolding.returnRate",
                "must be a finite percentage",
            ));
        }
        Ok(())
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            new_holding: ProposedHolding::default(),
            time_horizon_years: DEFAULT_TIME_HORIZON_YEARS,
        }
    }
}

/// The figures of a prior analysis a simulation is derived from.
///
/// Clients that only kept part of a [`PortfolioAnalysis`] can send this
/// directly instead of the full record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationBaseline {
    pub total_score: i32,
    pub total_investment: f64,
    pub avg_return: f64,
    pub breakdown: ScoreBreakdown,
    pub holding_count: usize,
}

impl SimulationBaseline {
    pub fn validate(&self) -> Result<()> {
        if !self.total_investment.is_finite() || self.total_investment <= 0.0 {
            return Err(Error::invalid_field(
                "analysis.totalInvestment",
                "must be a positive number",
            ));
        }
        if self.holding_count == 0 {
            return Err(Error::invalid_field(
                "analysis.holdingCount",
                "must be at least one",
            ));
        }
        if !self.avg_return.is_finite() {
            return Err(Error::invalid_field(
                "analysis.avgReturn",
                "must be a finite percentage",
            ));
        }
        if self.breakdown.values().iter().any(|v| !v.is_finite()) {
            return Err(Error::invalid_field(
                "analysis.breakdown",
                "all components must be finite",
            ));
        }
        Ok(())
    }
}

impl From<&PortfolioAnalysis> for SimulationBaseline {
    fn from(analysis: &PortfolioAnalysis) -> Self {
        Self {
            total_score: analysis.total_score,
            total_investment: analysis.total_investment,
            avg_return: analysis.avg_return,
            breakdown: analysis.breakdown,
            holding_count: analysis.holding_count(),
        }
    }
}

/// Projected value of both portfolios at the end of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub simulated_value: f64,
    pub current_value: f64,
}

/// Score and principal of one side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
    pub score: i32,
    pub investment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioComparison {
    pub current: ComparisonPoint,
    pub simulated: ComparisonPoint,
}

/// Outcome of one simulation run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub new_total_score: i32,
    pub new_total_investment: f64,
    /// Value-weighted return, rounded to two decimals.
    pub new_avg_return: f64,
    /// `new_total_score - baseline.total_score`; may be negative.
    pub improvement: i32,
    pub new_breakdown: ScoreBreakdown,
    pub projection: Vec<ProjectionPoint>,
    pub comparison: PortfolioComparison,
}
