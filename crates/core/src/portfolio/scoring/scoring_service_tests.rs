//! Unit tests for the scoring engine.

use super::*;
use crate::portfolio::holdings::{Holding, InvestmentType, Portfolio, RiskLevel};
use crate::portfolio::scoring::suggestions::{
    ADD_INVESTMENT_TYPES, DIVERSIFY_ASSET_CLASSES, REDUCE_RISK_NEAR_RETIREMENT, REVIEW_STRATEGY,
};

fn holding(
    investment_type: InvestmentType,
    amount: f64,
    return_rate: f64,
    risk_level: RiskLevel,
) -> Holding {
    Holding::new(investment_type, amount, return_rate, risk_level)
}

fn reference_portfolio() -> Portfolio {
    Portfolio::new(
        25,
        RiskLevel::Medium,
        vec![
            holding(InvestmentType::MutualFund, 100_000.0, 10.0, RiskLevel::Medium),
            holding(InvestmentType::Stocks, 50_000.0, 12.0, RiskLevel::High),
        ],
    )
}

#[test]
fn test_reference_scenario() {
    let analysis = score(&reference_portfolio()).unwrap();

    assert_eq!(analysis.avg_return, 11.0);
    assert_eq!(analysis.total_investment, 150_000.0);
    assert_eq!(analysis.breakdown.profitability, 60.0);
    assert_eq!(analysis.breakdown.diversification, 30.0);
    assert_eq!(analysis.breakdown.consistency, 80.0);
    assert_eq!(analysis.breakdown.risk_alignment, 85.0);
    assert_eq!(analysis.breakdown.age_adjusted, 88.0);
    assert_eq!(analysis.total_score, 69);
    assert_eq!(analysis.grade, ScoreGrade::Good);
    assert_eq!(analysis.suggestions, vec![ADD_INVESTMENT_TYPES]);
}

#[test]
fn test_empty_portfolio_is_rejected_not_nan() {
    let portfolio = Portfolio::new(25, RiskLevel::Medium, vec![]);
    let err = score(&portfolio).unwrap_err();
    assert!(err.is_invalid_input());

    let err = ScoringService::new().analyze(&portfolio).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_non_positive_amount_is_rejected() {
    let portfolio = Portfolio::new(
        25,
        RiskLevel::Medium,
        vec![holding(InvestmentType::Bonds, -10.0, 5.0, RiskLevel::Low)],
    );
    assert!(score(&portfolio).unwrap_err().is_invalid_input());
}

#[test]
fn test_identical_returns_score_full_consistency() {
    let portfolio = Portfolio::new(
        40,
        RiskLevel::Low,
        vec![
            holding(InvestmentType::FixedDeposit, 1_000.0, 7.0, RiskLevel::Low),
            holding(InvestmentType::Bonds, 99_000.0, 7.0, RiskLevel::Low),
            holding(InvestmentType::Ppf, 12.5, 7.0, RiskLevel::Low),
        ],
    );
    let analysis = score(&portfolio).unwrap();
    assert_eq!(analysis.breakdown.consistency, 100.0);
    assert_eq!(analysis.breakdown.risk_alignment, 100.0);
}

#[test]
fn test_same_type_holdings_count_independently() {
    let holdings = (0..7)
        .map(|_| holding(InvestmentType::Stocks, 1_000.0, 9.0, RiskLevel::High))
        .collect();
    let analysis = score(&Portfolio::new(33, RiskLevel::High, holdings)).unwrap();
    assert_eq!(analysis.breakdown.diversification, 100.0);
}

#[test]
fn test_negative_returns_pull_total_below_floor() {
    let portfolio = Portfolio::new(
        25,
        RiskLevel::Medium,
        vec![holding(InvestmentType::Cryptocurrency, 5_000.0, -60.0, RiskLevel::Medium)],
    );
    let analysis = score(&portfolio).unwrap();

    assert_eq!(analysis.breakdown.profitability, 0.0);
    assert_eq!(analysis.breakdown.diversification, 15.0);
    assert_eq!(analysis.breakdown.consistency, 100.0);
    assert_eq!(analysis.breakdown.risk_alignment, 100.0);
    assert_eq!(analysis.breakdown.age_adjusted, -480.0);
    // (0 + 15 + 100 + 100 - 480) / 5 = -53
    assert_eq!(analysis.total_score, -53);
    assert_eq!(analysis.grade, ScoreGrade::NeedsImprovement);
    assert_eq!(
        analysis.suggestions,
        vec![DIVERSIFY_ASSET_CLASSES, REVIEW_STRATEGY, ADD_INVESTMENT_TYPES]
    );
}

#[test]
fn test_avg_return_is_rounded_to_two_decimals() {
    let portfolio = Portfolio::new(
        45,
        RiskLevel::Medium,
        vec![
            holding(InvestmentType::Sip, 1_000.0, 10.0, RiskLevel::Medium),
            holding(InvestmentType::Sip, 1_000.0, 10.0, RiskLevel::Medium),
            holding(InvestmentType::Sip, 1_000.0, 12.0, RiskLevel::Medium),
        ],
    );
    let analysis = score(&portfolio).unwrap();
    assert_eq!(analysis.avg_return, 10.67);
    assert_eq!(analysis.breakdown.age_adjusted, 64.0);
}

fn fractional_portfolio() -> Portfolio {
    Portfolio::new(
        35,
        RiskLevel::Medium,
        [0.0, 5.1, 12.7]
            .iter()
            .map(|r| holding(InvestmentType::MutualFund, 10_000.0, *r, RiskLevel::Medium))
            .collect(),
    )
}

#[test]
fn test_breakdown_is_stored_in_whole_points() {
    let analysis = score(&fractional_portfolio()).unwrap();

    // raw components: 9.33, 45, 0, 100, 35.6
    assert_eq!(analysis.breakdown.profitability, 9.0);
    assert_eq!(analysis.breakdown.diversification, 45.0);
    assert_eq!(analysis.breakdown.consistency, 0.0);
    assert_eq!(analysis.breakdown.risk_alignment, 100.0);
    assert_eq!(analysis.breakdown.age_adjusted, 36.0);
    assert_eq!(analysis.avg_return, 5.93);
}

#[test]
fn test_total_score_uses_raw_components() {
    let portfolio = fractional_portfolio();
    let analysis = score(&portfolio).unwrap();

    let ctx = FactorContext::from_portfolio(&portfolio).unwrap();
    let raw = ScoreBreakdown::from_scores(&evaluate_factors(&ctx));
    assert_eq!(analysis.total_score, raw.total_score());
    assert_eq!(analysis.breakdown, raw.rounded());
    // (9.33 + 45 + 0 + 100 + 35.6) / 5 = 37.99
    assert_eq!(analysis.total_score, 38);
}

#[test]
fn test_retirement_suggestion() {
    let holdings = (0..6)
        .map(|i| holding(InvestmentType::Stocks, 10_000.0, 14.0 + i as f64, RiskLevel::High))
        .collect();
    let analysis = score(&Portfolio::new(58, RiskLevel::High, holdings)).unwrap();
    assert!(analysis
        .suggestions
        .contains(&REDUCE_RISK_NEAR_RETIREMENT.to_string()));
    assert!(!analysis.suggestions.contains(&ADD_INVESTMENT_TYPES.to_string()));
}

#[test]
fn test_allocation_follows_input_order() {
    let analysis = score(&reference_portfolio()).unwrap();
    let shares: Vec<f64> = analysis.allocation.iter().map(|s| s.share_pct).collect();
    assert_eq!(shares, vec![66.67, 33.33]);
    assert_eq!(analysis.allocation[0].investment_type, InvestmentType::MutualFund);
    assert_eq!(analysis.portfolio, reference_portfolio());
}

#[test]
fn test_analysis_serializes_flat_camel_case() {
    let analysis = score(&reference_portfolio()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["age"], 25);
    assert_eq!(json["riskAppetite"], "medium");
    assert_eq!(json["investments"].as_array().unwrap().len(), 2);
    assert_eq!(json["totalScore"], 69);
    assert_eq!(json["totalInvestment"], 150_000.0);
    assert_eq!(json["avgReturn"], 11.0);
    assert_eq!(json["breakdown"]["riskAlignment"], 85.0);
    assert_eq!(json["grade"], "GOOD");

    let back: PortfolioAnalysis = serde_json::from_value(json).unwrap();
    assert_eq!(back.total_score, analysis.total_score);
    assert_eq!(back.portfolio, analysis.portfolio);
}
