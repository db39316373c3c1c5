//! Holding and portfolio input models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// Risk classification shared by holdings and the investor's own appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        use super::holdings_constants::*;
        match self {
            RiskLevel::Low => RISK_LEVEL_LOW,
            RiskLevel::Medium => RISK_LEVEL_MEDIUM,
            RiskLevel::High => RISK_LEVEL_HIGH,
        }
    }

    /// Numeric position used for risk-distance calculations (low=1 .. high=3).
    pub fn ordinal(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_field(
                    "riskLevel",
                    format!("unknown risk level '{}' (expected low, medium or high)", s),
                )
            })
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Category of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum InvestmentType {
    Sip,
    MutualFund,
    Stocks,
    Bonds,
    FixedDeposit,
    RealEstate,
    Commodities,
    Cryptocurrency,
    Ppf,
    Elss,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 10] = [
        InvestmentType::Sip,
        InvestmentType::MutualFund,
        InvestmentType::Stocks,
        InvestmentType::Bonds,
        InvestmentType::FixedDeposit,
        InvestmentType::RealEstate,
        InvestmentType::Commodities,
        InvestmentType::Cryptocurrency,
        InvestmentType::Ppf,
        InvestmentType::Elss,
    ];

    pub fn as_str(&self) -> &'static str {
        use super::holdings_constants::*;
        match self {
            InvestmentType::Sip => INVESTMENT_TYPE_SIP,
            InvestmentType::MutualFund => INVESTMENT_TYPE_MUTUAL_FUND,
            InvestmentType::Stocks => INVESTMENT_TYPE_STOCKS,
            InvestmentType::Bonds => INVESTMENT_TYPE_BONDS,
            InvestmentType::FixedDeposit => INVESTMENT_TYPE_FIXED_DEPOSIT,
            InvestmentType::RealEstate => INVESTMENT_TYPE_REAL_ESTATE,
            InvestmentType::Commodities => INVESTMENT_TYPE_COMMODITIES,
            InvestmentType::Cryptocurrency => INVESTMENT_TYPE_CRYPTOCURRENCY,
            InvestmentType::Ppf => INVESTMENT_TYPE_PPF,
            InvestmentType::Elss => INVESTMENT_TYPE_ELSS,
        }
    }

    /// Human-friendly label as shown in the input form.
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::Sip => "SIP (Systematic Investment Plan)",
            InvestmentType::MutualFund => "Mutual Fund",
            InvestmentType::Stocks => "Stocks",
            InvestmentType::Bonds => "Bonds",
            InvestmentType::FixedDeposit => "Fixed Deposit",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Commodities => "Gold/Commodities",
            InvestmentType::Cryptocurrency => "Cryptocurrency",
            InvestmentType::Ppf => "PPF",
            InvestmentType::Elss => "ELSS",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for InvestmentType {
    type Err = Error;

    /// Accepts the serialized code (`MUTUAL_FUND`), the form label
    /// (`Mutual Fund`) or the short simulator label (`SIP`), ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        InvestmentType::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(needle)
                    || kind.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                Error::invalid_field("type", format!("unknown investment type '{}'", s))
            })
    }
}

impl TryFrom<String> for InvestmentType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// One portfolio position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub amount: f64,
    pub return_rate: f64,
    #[serde(default, with = "optional_date_format")]
    pub start_date: Option<NaiveDate>,
    pub risk_level: RiskLevel,
}

impl Holding {
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
            start_date: None,
            risk_level,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Checks the numeric invariants, reporting errors under `field`.
    pub fn validate(&self, field: &str) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::invalid_field(
                format!("{}.amount", field),
                "must be a positive number",
            ));
        }
        if !self.return_rate.is_finite() {
            return Err(Error::invalid_field(
                format!("{}.returnRate", field),
                "must be a finite percentage",
            ));
        }
        Ok(())
    }
}

/// Input to the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub age: u32,
    pub risk_appetite: RiskLevel,
    /// Display order is preserved; scoring ignores it.
    pub investments: Vec<Holding>,
}

impl Portfolio {
    pub fn new(age: u32, risk_appetite: RiskLevel, investments: Vec<Holding>) -> Self {
        Self {
            age,
            risk_appetite,
            investments,
        }
    }

    /// Rejects every input for which a score is undefined.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::invalid_field("age", "must be a positive integer"));
        }
        if self.investments.is_empty() {
            return Err(Error::invalid_field(
                "investments",
                "at least one holding is required",
            ));
        }
        for (index, holding) in self.investments.iter().enumerate() {
            holding.validate(&format!("investments[{}]", index))?;
        }
        Ok(())
    }

    pub fn holding_count(&self) -> usize {
        self.investments.len()
    }

    pub fn total_investment(&self) -> f64 {
        self.investments.iter().map(|h| h.amount).sum()
    }

    pub fn return_rates(&self) -> Vec<f64> {
        self.investments.iter().map(|h| h.return_rate).collect()
    }

    pub fn risk_ordinals(&self) -> Vec<f64> {
        self.investments
            .iter()
            .map(|h| f64::from(h.risk_level.ordinal()))
            .collect()
    }
}

// The input form submits an empty string for an unset date.
mod optional_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
