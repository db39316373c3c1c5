/// Number of decimal places kept for average returns and allocation shares
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Lower and upper bound of every clamped sub-score
pub const SCORE_FLOOR: f64 = 0.0;
pub const SCORE_CEILING: f64 = 100.0;

/// Average return (percent) at which profitability starts scoring
pub const PROFITABILITY_BASELINE_RETURN: f64 = 5.0;

/// Profitability points per percentage point above the baseline
pub const PROFITABILITY_POINTS_PER_PERCENT: f64 = 10.0;

/// Diversification points per holding
pub const DIVERSIFICATION_POINTS_PER_HOLDING: f64 = 15.0;

/// Consistency points lost per percentage point of return spread
pub const CONSISTENCY_PENALTY_PER_STD_DEV: f64 = 20.0;

/// Risk alignment points lost per unit of ordinal distance
pub const RISK_ALIGNMENT_PENALTY_PER_STEP: f64 = 30.0;

/// Age brackets for the age-adjusted score and their return multipliers
pub const YOUNG_INVESTOR_AGE_LIMIT: u32 = 30;
pub const MID_CAREER_AGE_LIMIT: u32 = 50;
pub const YOUNG_INVESTOR_MULTIPLIER: f64 = 8.0;
pub const MID_CAREER_MULTIPLIER: f64 = 6.0;
pub const LATE_CAREER_MULTIPLIER: f64 = 4.0;

/// Suggestion thresholds
pub const LOW_SCORE_THRESHOLD: i32 = 60;
pub const MIN_RECOMMENDED_HOLDINGS: usize = 5;
pub const RETIREMENT_PROXIMITY_AGE: u32 = 50;

/// Grade thresholds
pub const EXCELLENT_SCORE_THRESHOLD: i32 = 80;
pub const GOOD_SCORE_THRESHOLD: i32 = 60;

/// Simulator defaults
pub const DEFAULT_SIMULATION_AMOUNT: f64 = 50_000.0;
pub const DEFAULT_SIMULATION_RETURN_RATE: f64 = 12.0;
pub const DEFAULT_TIME_HORIZON_YEARS: u32 = 5;

/// Longest projection the simulation engine will build
pub const MAX_TIME_HORIZON_YEARS: u32 = 100;
