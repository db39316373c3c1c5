// Investment type codes. Each is the serialized form of one `InvestmentType` variant.

/// Systematic investment plan: recurring contributions into a fund.
pub const INVESTMENT_TYPE_SIP: &str = "SIP";

/// Pooled, professionally managed fund.
pub const INVESTMENT_TYPE_MUTUAL_FUND: &str = "MUTUAL_FUND";

/// Directly held equities.
pub const INVESTMENT_TYPE_STOCKS: &str = "STOCKS";

/// Government or corporate debt.
pub const INVESTMENT_TYPE_BONDS: &str = "BONDS";

/// Term deposit with a fixed interest rate.
pub const INVESTMENT_TYPE_FIXED_DEPOSIT: &str = "FIXED_DEPOSIT";

/// Property held for investment.
pub const INVESTMENT_TYPE_REAL_ESTATE: &str = "REAL_ESTATE";

/// Gold and other commodities.
pub const INVESTMENT_TYPE_COMMODITIES: &str = "COMMODITIES";

/// Crypto assets.
pub const INVESTMENT_TYPE_CRYPTOCURRENCY: &str = "CRYPTOCURRENCY";

/// Long-term retirement fund (public provident fund).
pub const INVESTMENT_TYPE_PPF: &str = "PPF";

/// Tax-saving equity fund.
pub const INVESTMENT_TYPE_ELSS: &str = "ELSS";

// Risk level codes
pub const RISK_LEVEL_LOW: &str = "low";
pub const RISK_LEVEL_MEDIUM: &str = "medium";
pub const RISK_LEVEL_HIGH: &str = "high";
