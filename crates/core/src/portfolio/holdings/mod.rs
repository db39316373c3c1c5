//! Holdings module - portfolio input models.

mod holdings_constants;
mod holdings_model;

#[cfg(test)]
mod holdings_model_tests;

pub use holdings_constants::*;
pub use holdings_model::{Holding, InvestmentType, Portfolio, RiskLevel};
