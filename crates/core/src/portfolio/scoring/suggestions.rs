//! Improvement suggestions as an ordered rule table.

use crate::constants::{LOW_SCORE_THRESHOLD, MIN_RECOMMENDED_HOLDINGS, RETIREMENT_PROXIMITY_AGE};
use crate::portfolio::holdings::RiskLevel;

pub const DIVERSIFY_ASSET_CLASSES: &str =
    "Consider diversifying your portfolio across different asset classes";
pub const REVIEW_STRATEGY: &str =
    "Review your investment strategy to align with your risk appetite";
pub const ADD_INVESTMENT_TYPES: &str = "Add more investment types to improve diversification";
pub const REDUCE_RISK_NEAR_RETIREMENT: &str =
    "Consider reducing risk exposure as you approach retirement";

/// Inputs a suggestion rule may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionContext {
    pub total_score: i32,
    pub holding_count: usize,
    pub age: u32,
    pub risk_appetite: RiskLevel,
}

/// A condition and the messages emitted when it holds.
#[derive(Clone, Copy)]
pub struct SuggestionRule {
    pub id: &'static str,
    pub applies: fn(&SuggestionContext) -> bool,
    pub messages: &'static [&'static str],
}

impl std::fmt::Debug for SuggestionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionRule")
            .field("id", &self.id)
            .field("messages", &self.messages)
            .finish()
    }
}

pub const SUGGESTION_RULES: [SuggestionRule; 3] = [
    SuggestionRule {
        id: "low_total_score",
        applies: |ctx| ctx.total_score < LOW_SCORE_THRESHOLD,
        messages: &[DIVERSIFY_ASSET_CLASSES, REVIEW_STRATEGY],
    },
    SuggestionRule {
        id: "few_holdings",
        applies: |ctx| ctx.holding_count < MIN_RECOMMENDED_HOLDINGS,
        messages: &[ADD_INVESTMENT_TYPES],
    },
    SuggestionRule {
        id: "high_risk_near_retirement",
        applies: |ctx| ctx.age > RETIREMENT_PROXIMITY_AGE && ctx.risk_appetite == RiskLevel::High,
        messages: &[REDUCE_RISK_NEAR_RETIREMENT],
    },
];

/// Evaluates every rule in declaration order and collects their messages.
pub fn generate_suggestions(ctx: &SuggestionContext) -> Vec<String> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .flat_map(|rule| rule.messages.iter().map(|m| m.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(total_score: i32, holding_count: usize, age: u32, risk: RiskLevel) -> SuggestionContext {
        SuggestionContext {
            total_score,
            holding_count,
            age,
            risk_appetite: risk,
        }
    }

    #[test]
    fn test_no_rule_matches() {
        assert!(generate_suggestions(&ctx(75, 6, 40, RiskLevel::High)).is_empty());
    }

    #[test]
    fn test_low_score_emits_both_messages_together() {
        let suggestions = generate_suggestions(&ctx(59, 8, 30, RiskLevel::Low));
        assert_eq!(suggestions, vec![DIVERSIFY_ASSET_CLASSES, REVIEW_STRATEGY]);
    }

    #[test]
    fn test_score_of_sixty_is_not_low() {
        assert!(generate_suggestions(&ctx(60, 8, 30, RiskLevel::Low)).is_empty());
    }

    #[test]
    fn test_few_holdings() {
        assert_eq!(
            generate_suggestions(&ctx(80, 4, 30, RiskLevel::Low)),
            vec![ADD_INVESTMENT_TYPES]
        );
        assert!(generate_suggestions(&ctx(80, 5, 30, RiskLevel::Low)).is_empty());
    }

    #[test]
    fn test_retirement_rule_requires_age_over_fifty() {
        assert!(generate_suggestions(&ctx(80, 6, 50, RiskLevel::High)).is_empty());
        assert_eq!(
            generate_suggestions(&ctx(80, 6, 51, RiskLevel::High)),
            vec![REDUCE_RISK_NEAR_RETIREMENT]
        );
        assert!(generate_suggestions(&ctx(80, 6, 70, RiskLevel::Medium)).is_empty());
    }

    #[test]
    fn test_rules_emit_in_declaration_order() {
        let suggestions = generate_suggestions(&ctx(10, 1, 65, RiskLevel::High));
        assert_eq!(
            suggestions,
            vec![
                DIVERSIFY_ASSET_CLASSES,
                REVIEW_STRATEGY,
                ADD_INVESTMENT_TYPES,
                REDUCE_RISK_NEAR_RETIREMENT
            ]
        );
    }
}
