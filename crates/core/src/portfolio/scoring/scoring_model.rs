//! Scoring domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, EXCELLENT_SCORE_THRESHOLD, GOOD_SCORE_THRESHOLD};
use crate::portfolio::holdings::{Holding, InvestmentType, Portfolio};
use crate::utils::math_utils::{mean, round_half_up, round_to};

// =============================================================================
// Score Factor
// =============================================================================

/// The named components of the composite score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreFactor {
    Profitability,
    Diversification,
    Consistency,
    RiskAlignment,
    AgeAdjusted,
}

impl ScoreFactor {
    pub const ALL: [ScoreFactor; 5] = [
        ScoreFactor::Profitability,
        ScoreFactor::Diversification,
        ScoreFactor::Consistency,
        ScoreFactor::RiskAlignment,
        ScoreFactor::AgeAdjusted,
    ];

    /// Returns the key used in serialized breakdowns.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreFactor::Profitability => "profitability",
            ScoreFactor::Diversification => "diversification",
            ScoreFactor::Consistency => "consistency",
            ScoreFactor::RiskAlignment => "riskAlignment",
            ScoreFactor::AgeAdjusted => "ageAdjusted",
        }
    }

    /// Returns a human-friendly label for this factor.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreFactor::Profitability => "Profitability",
            ScoreFactor::Diversification => "Diversification",
            ScoreFactor::Consistency => "Consistency",
            ScoreFactor::RiskAlignment => "Risk Alignment",
            ScoreFactor::AgeAdjusted => "Age Adjusted",
        }
    }

    /// Whether the factor is bounded to `[0, 100]`. Age-adjusted has no floor.
    pub fn is_clamped(&self) -> bool {
        !matches!(self, ScoreFactor::AgeAdjusted)
    }
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Score Breakdown
// =============================================================================

/// Five independently computed sub-scores.
///
/// An analysis stores whole-point components. A simulation carries those
/// forward and keeps its two recomputed components fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub profitability: f64,
    pub diversification: f64,
    pub consistency: f64,
    pub risk_alignment: f64,
    pub age_adjusted: f64,
}

impl ScoreBreakdown {
    /// Builds a breakdown from `(factor, value)` pairs; factors not listed stay 0.
    pub fn from_scores(scores: &[(ScoreFactor, f64)]) -> Self {
        let mut breakdown = Self::default();
        for (factor, value) in scores {
            breakdown.set(*factor, *value);
        }
        breakdown
    }

    pub fn get(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::Profitability => self.profitability,
            ScoreFactor::Diversification => self.diversification,
            ScoreFactor::Consistency => self.consistency,
            ScoreFactor::RiskAlignment => self.risk_alignment,
            ScoreFactor::AgeAdjusted => self.age_adjusted,
        }
    }

    pub fn set(&mut self, factor: ScoreFactor, value: f64) {
        match factor {
            ScoreFactor::Profitability => self.profitability = value,
            ScoreFactor::Diversification => self.diversification = value,
            ScoreFactor::Consistency => self.consistency = value,
            ScoreFactor::RiskAlignment => self.risk_alignment = value,
            ScoreFactor::AgeAdjusted => self.age_adjusted = value,
        }
    }

    /// Values in [`ScoreFactor::ALL`] order.
    pub fn values(&self) -> Vec<f64> {
        ScoreFactor::ALL.iter().map(|f| self.get(*f)).collect()
    }

    /// Unweighted mean of the components, rounded half-up to an integer.
    pub fn total_score(&self) -> i32 {
        let avg = mean(&self.values()).unwrap_or_default();
        round_half_up(avg) as i32
    }

    /// Components rounded half-up to whole points.
    pub fn rounded(&self) -> Self {
        let mut rounded = *self;
        for factor in ScoreFactor::ALL {
            rounded.set(factor, round_half_up(self.get(factor)));
        }
        rounded
    }
}

// =============================================================================
// Score Grade
// =============================================================================

/// Qualitative band for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreGrade {
    pub fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_SCORE_THRESHOLD {
            ScoreGrade::Excellent
        } else if score >= GOOD_SCORE_THRESHOLD {
            ScoreGrade::Good
        } else {
            ScoreGrade::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Share of the portfolio held in one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub label: String,
    pub amount: f64,
    pub return_rate: f64,
    pub share_pct: f64,
}

impl AllocationSlice {
    pub fn from_holding(holding: &Holding, total_investment: f64) -> Self {
        let share = if total_investment > 0.0 {
            holding.amount / total_investment * 100.0
        } else {
            0.0
        };
        Self {
            investment_type: holding.investment_type,
            label: holding.investment_type.label().to_string(),
            amount: holding.amount,
            return_rate: holding.return_rate,
            share_pct: round_to(share, DISPLAY_DECIMAL_PRECISION),
        }
    }
}

// =============================================================================
// Portfolio Analysis
// =============================================================================

/// Result of scoring one portfolio. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub total_score: i32,
    pub breakdown: ScoreBreakdown,
    pub total_investment: f64,
    /// Mean holding return, rounded to two decimals.
    pub avg_return: f64,
    pub suggestions: Vec<String>,
    pub grade: ScoreGrade,
    pub allocation: Vec<AllocationSlice>,
}

impl PortfolioAnalysis {
    pub fn holding_count(&self) -> usize {
        self.portfolio.holding_count()
    }
}
