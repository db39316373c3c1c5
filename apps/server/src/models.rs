use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use smartfolio_core as domain;
use smartfolio_core::{errors::Error as CoreError, InvestmentType, RiskLevel};

// =============================================================================
// Requests
// =============================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Investment type code (`MUTUAL_FUND`) or label (`Mutual Fund`).
    #[serde(rename = "type")]
    pub investment_type: String,
    pub amount: f64,
    /// Expected annual return in percent.
    pub return_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `low`, `medium` or `high`.
    pub risk_level: String,
}

impl TryFrom<Holding> for domain::Holding {
    type Error = CoreError;

    fn try_from(h: Holding) -> Result<Self, Self::Error> {
        let holding = domain::Holding::new(
            h.investment_type.parse::<InvestmentType>()?,
            h.amount,
            h.return_rate,
            h.risk_level.parse::<RiskLevel>()?,
        );
        match h.start_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => Ok(holding
                .with_start_date(NaiveDate::parse_from_str(date, "%Y-%m-%d")?)),
            _ => Ok(holding),
        }
    }
}

impl From<domain::Holding> for Holding {
    fn from(h: domain::Holding) -> Self {
        Self {
            investment_type: h.investment_type.as_str().to_string(),
            amount: h.amount,
            return_rate: h.return_rate,
            start_date: h.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            risk_level: h.risk_level.as_str().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInput {
    pub age: u32,
    pub risk_appetite: String,
    pub investments: Vec<Holding>,
}

impl TryFrom<PortfolioInput> for domain::Portfolio {
    type Error = CoreError;

    fn try_from(p: PortfolioInput) -> Result<Self, Self::Error> {
        let investments = p
            .investments
            .into_iter()
            .map(domain::Holding::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(domain::Portfolio::new(
            p.age,
            p.risk_appetite.parse::<RiskLevel>()?,
            investments,
        ))
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProposedHolding {
    #[serde(rename = "type")]
    pub investment_type: String,
    pub amount: f64,
    pub return_rate: f64,
    pub risk_level: String,
}

impl TryFrom<ProposedHolding> for domain::ProposedHolding {
    type Error = CoreError;

    fn try_from(h: ProposedHolding) -> Result<Self, Self::Error> {
        Ok(domain::ProposedHolding::new(
            h.investment_type.parse::<InvestmentType>()?,
            h.amount,
            h.return_rate,
            h.risk_level.parse::<RiskLevel>()?,
        ))
    }
}

/// The subset of an [`Analysis`] a simulation starts from.
///
/// Clients usually post back the analysis they received; unknown fields are
/// ignored. When `holdingCount` is absent it is taken from `investments`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBaseline {
    pub total_score: i32,
    pub total_investment: f64,
    pub avg_return: f64,
    pub breakdown: ScoreBreakdown,
    #[serde(default)]
    pub holding_count: Option<usize>,
    #[serde(default)]
    pub investments: Option<Vec<Holding>>,
}

impl TryFrom<AnalysisBaseline> for domain::SimulationBaseline {
    type Error = CoreError;

    fn try_from(a: AnalysisBaseline) -> Result<Self, Self::Error> {
        let holding_count = a
            .holding_count
            .or_else(|| a.investments.as_ref().map(Vec::len))
            .ok_or_else(|| {
                CoreError::invalid_field(
                    "analysis.holdingCount",
                    "required when investments are not supplied",
                )
            })?;
        Ok(domain::SimulationBaseline {
            total_score: a.total_score,
            total_investment: a.total_investment,
            avg_return: a.avg_return,
            breakdown: a.breakdown.into(),
            holding_count,
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub analysis: AnalysisBaseline,
    pub new_holding: ProposedHolding,
    pub time_horizon_years: u32,
}

impl SimulateRequest {
    pub fn into_parts(
        self,
    ) -> Result<(domain::SimulationBaseline, domain::SimulationInput), CoreError> {
        let baseline = domain::SimulationBaseline::try_from(self.analysis)?;
        let input =
            domain::SimulationInput::new(self.new_holding.try_into()?, self.time_horizon_years);
        Ok((baseline, input))
    }
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub profitability: f64,
    pub diversification: f64,
    pub consistency: f64,
    pub risk_alignment: f64,
    pub age_adjusted: f64,
}

impl From<domain::ScoreBreakdown> for ScoreBreakdown {
    fn from(b: domain::ScoreBreakdown) -> Self {
        Self {
            profitability: b.profitability,
            diversification: b.diversification,
            consistency: b.consistency,
            risk_alignment: b.risk_alignment,
            age_adjusted: b.age_adjusted,
        }
    }
}

impl From<ScoreBreakdown> for domain::ScoreBreakdown {
    fn from(b: ScoreBreakdown) -> Self {
        Self {
            profitability: b.profitability,
            diversification: b.diversification,
            consistency: b.consistency,
            risk_alignment: b.risk_alignment,
            age_adjusted: b.age_adjusted,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    #[serde(rename = "type")]
    pub investment_type: String,
    pub label: String,
    pub amount: f64,
    pub return_rate: f64,
    pub share_pct: f64,
}

impl From<domain::AllocationSlice> for AllocationSlice {
    fn from(s: domain::AllocationSlice) -> Self {
        Self {
            investment_type: s.investment_type.as_str().to_string(),
            label: s.label,
            amount: s.amount,
            return_rate: s.return_rate,
            share_pct: s.share_pct,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub age: u32,
    pub risk_appetite: String,
    pub investments: Vec<Holding>,
    pub holding_count: usize,
    pub total_score: i32,
    pub breakdown: ScoreBreakdown,
    pub total_investment: f64,
    pub avg_return: f64,
    pub suggestions: Vec<String>,
    /// `EXCELLENT`, `GOOD` or `NEEDS_IMPROVEMENT`.
    pub grade: String,
    pub allocation: Vec<AllocationSlice>,
}

impl From<domain::PortfolioAnalysis> for Analysis {
    fn from(a: domain::PortfolioAnalysis) -> Self {
        let holding_count = a.holding_count();
        let grade = match a.grade {
            domain::ScoreGrade::Excellent => "EXCELLENT",
            domain::ScoreGrade::Good => "GOOD",
            domain::ScoreGrade::NeedsImprovement => "NEEDS_IMPROVEMENT",
        };
        Self {
            age: a.portfolio.age,
            risk_appetite: a.portfolio.risk_appetite.as_str().to_string(),
            investments: a.portfolio.investments.into_iter().map(Holding::from).collect(),
            holding_count,
            total_score: a.total_score,
            breakdown: a.breakdown.into(),
            total_investment: a.total_investment,
            avg_return: a.avg_return,
            suggestions: a.suggestions,
            grade: grade.to_string(),
            allocation: a.allocation.into_iter().map(AllocationSlice::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub simulated_value: f64,
    pub current_value: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
    pub score: i32,
    pub investment: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub current: ComparisonPoint,
    pub simulated: ComparisonPoint,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub new_total_score: i32,
    pub new_total_investment: f64,
    pub new_avg_return: f64,
    pub improvement: i32,
    pub new_breakdown: ScoreBreakdown,
    pub projection: Vec<ProjectionPoint>,
    pub comparison: Comparison,
}

impl From<domain::SimulationResult> for Simulation {
    fn from(r: domain::SimulationResult) -> Self {
        let point = |p: domain::ComparisonPoint| ComparisonPoint {
            score: p.score,
            investment: p.investment,
        };
        Self {
            new_total_score: r.new_total_score,
            new_total_investment: r.new_total_investment,
            new_avg_return: r.new_avg_return,
            improvement: r.improvement,
            new_breakdown: r.new_breakdown.into(),
            projection: r
                .projection
                .into_iter()
                .map(|p| ProjectionPoint {
                    year: p.year,
                    simulated_value: p.simulated_value,
                    current_value: p.current_value,
                })
                .collect(),
            comparison: Comparison {
                current: point(r.comparison.current),
                simulated: point(r.comparison.simulated),
            },
        }
    }
}
