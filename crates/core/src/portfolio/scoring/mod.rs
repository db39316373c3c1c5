//! Scoring engine.
//!
//! Turns a [`Portfolio`](crate::portfolio::holdings::Portfolio) into a
//! [`PortfolioAnalysis`]:
//!
//! ```text
//! Portfolio → FactorContext → [SCORING_FACTORS] → ScoreBreakdown → total score
//!                                                      ↓
//!                                             [SUGGESTION_RULES] → suggestions
//! ```
//!
//! - **Models** (`scoring_model.rs`) - ScoreFactor, ScoreBreakdown, ScoreGrade, PortfolioAnalysis
//! - **Factors** (`factors.rs`) - the ordered table of scoring functions
//! - **Suggestions** (`suggestions.rs`) - the ordered `(condition, messages)` rules
//! - **Service** (`scoring_service.rs`) - `score` and its injectable wrapper

pub mod factors;
mod scoring_model;
mod scoring_service;
mod scoring_traits;
pub mod suggestions;

#[cfg(test)]
mod scoring_service_tests;

pub use factors::{
    age_adjusted_score, consistency_score, diversification_score, evaluate_factors,
    profitability_score, risk_alignment_score, FactorContext, ScoringFactor, SCORING_FACTORS,
};
pub use scoring_model::{AllocationSlice, PortfolioAnalysis, ScoreBreakdown, ScoreFactor, ScoreGrade};
pub use scoring_service::{score, ScoringService};
pub use scoring_traits::ScoringServiceTrait;
pub use suggestions::{generate_suggestions, SuggestionContext, SuggestionRule, SUGGESTION_RULES};
