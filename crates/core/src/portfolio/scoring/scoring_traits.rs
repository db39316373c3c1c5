use crate::errors::Result;
use crate::portfolio::holdings::Portfolio;
use crate::portfolio::scoring::PortfolioAnalysis;

/// Trait for scoring service operations
pub trait ScoringServiceTrait: Send + Sync {
    fn analyze(&self, portfolio: &Portfolio) -> Result<PortfolioAnalysis>;
}
