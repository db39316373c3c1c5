//! Tests for holding and portfolio input models.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{Holding, InvestmentType, Portfolio, RiskLevel};
    use chrono::NaiveDate;

    fn holding(amount: f64, return_rate: f64, risk_level: RiskLevel) -> Holding {
        Holding::new(InvestmentType::MutualFund, amount, return_rate, risk_level)
    }

    // ==================== Enum Parsing Tests ====================

    #[test]
    fn test_risk_level_parsing_ignores_case() {
        assert_eq!("low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!(" HIGH ".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_rejects_unknown_value() {
        let err = "extreme".parse::<RiskLevel>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("riskLevel"));
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn test_risk_level_ordinals() {
        assert_eq!(RiskLevel::Low.ordinal(), 1);
        assert_eq!(RiskLevel::Medium.ordinal(), 2);
        assert_eq!(RiskLevel::High.ordinal(), 3);
    }

    #[test]
    fn test_investment_type_accepts_codes_and_labels() {
        assert_eq!(
            "MUTUAL_FUND".parse::<InvestmentType>().unwrap(),
            InvestmentType::MutualFund
        );
        assert_eq!(
            "Mutual Fund".parse::<InvestmentType>().unwrap(),
            InvestmentType::MutualFund
        );
        assert_eq!(
            "SIP (Systematic Investment Plan)".parse::<InvestmentType>().unwrap(),
            InvestmentType::Sip
        );
        assert_eq!("SIP".parse::<InvestmentType>().unwrap(), InvestmentType::Sip);
        assert_eq!(
            "gold/commodities".parse::<InvestmentType>().unwrap(),
            InvestmentType::Commodities
        );
    }

    #[test]
    fn test_investment_type_rejects_unknown_value() {
        let err = "Lottery Tickets".parse::<InvestmentType>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Lottery Tickets"));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&InvestmentType::FixedDeposit).unwrap(),
            "\"FIXED_DEPOSIT\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_holding_deserializes_form_payload() {
        let json = r#"{
            "type": "Real Estate",
            "amount": 250000,
            "returnRate": 7.5,
            "startDate": "2021-04-01",
            "riskLevel": "low"
        }"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.investment_type, InvestmentType::RealEstate);
        assert_eq!(holding.amount, 250_000.0);
        assert_eq!(holding.return_rate, 7.5);
        assert_eq!(holding.start_date, NaiveDate::from_ymd_opt(2021, 4, 1));
        assert_eq!(holding.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_holding_blank_or_missing_start_date_is_none() {
        let blank = r#"{"type":"STOCKS","amount":1,"returnRate":1,"startDate":"","riskLevel":"high"}"#;
        let missing = r#"{"type":"STOCKS","amount":1,"returnRate":1,"riskLevel":"high"}"#;
        assert_eq!(serde_json::from_str::<Holding>(blank).unwrap().start_date, None);
        assert_eq!(serde_json::from_str::<Holding>(missing).unwrap().start_date, None);
    }

    #[test]
    fn test_holding_rejects_unknown_risk_level_on_deserialize() {
        let json = r#"{"type":"STOCKS","amount":1,"returnRate":1,"riskLevel":"reckless"}"#;
        let err = serde_json::from_str::<Holding>(json).unwrap_err();
        assert!(err.to_string().contains("reckless"));
    }

    #[test]
    fn test_holding_round_trips_start_date_format() {
        let h = holding(1000.0, 5.0, RiskLevel::Low)
            .with_start_date(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap());
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["startDate"], "2020-01-31");
        assert_eq!(json["type"], "MUTUAL_FUND");
        assert_eq!(json["returnRate"], 5.0);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_portfolio_validation_accepts_valid_input() {
        let portfolio = Portfolio::new(35, RiskLevel::Medium, vec![holding(10.0, -3.0, RiskLevel::Low)]);
        assert!(portfolio.validate().is_ok());
    }

    #[test]
    fn test_portfolio_validation_rejects_empty_investments() {
        let portfolio = Portfolio::new(35, RiskLevel::Medium, vec![]);
        let err = portfolio.validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("investments"));
    }

    #[test]
    fn test_portfolio_validation_rejects_zero_age() {
        let portfolio = Portfolio::new(0, RiskLevel::Low, vec![holding(10.0, 3.0, RiskLevel::Low)]);
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("'age'"));
    }

    #[test]
    fn test_portfolio_validation_names_offending_holding() {
        let portfolio = Portfolio::new(
            40,
            RiskLevel::High,
            vec![
                holding(10.0, 3.0, RiskLevel::Low),
                holding(0.0, 3.0, RiskLevel::Low),
            ],
        );
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("investments[1].amount"));

        let portfolio = Portfolio::new(
            40,
            RiskLevel::High,
            vec![holding(10.0, f64::NAN, RiskLevel::Low)],
        );
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("investments[0].returnRate"));
    }

    #[test]
    fn test_portfolio_aggregates() {
        let portfolio = Portfolio::new(
            25,
            RiskLevel::Medium,
            vec![
                holding(100_000.0, 10.0, RiskLevel::Medium),
                holding(50_000.0, 12.0, RiskLevel::High),
            ],
        );
        assert_eq!(portfolio.holding_count(), 2);
        assert_eq!(portfolio.total_investment(), 150_000.0);
        assert_eq!(portfolio.return_rates(), vec![10.0, 12.0]);
        assert_eq!(portfolio.risk_ordinals(), vec![2.0, 3.0]);
    }
}
