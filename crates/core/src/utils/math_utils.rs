//! Small numeric helpers shared by the scoring and simulation engines.

use crate::constants::{SCORE_CEILING, SCORE_FLOOR};

/// Rounds half-way cases toward positive infinity (`-2.5` becomes `-2`).
///
/// The score and projection figures are defined with this rounding mode, so
/// `f64::round` (half away from zero) must not be used for them.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `decimals` places using [`round_half_up`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}

/// Clamps a raw sub-score into `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N). Returns `None` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_half_toward_positive_infinity() {
        assert_eq!(round_half_up(68.6), 69.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(11.0, 2), 11.0);
        assert_eq!(round_to(10.666_666, 2), 10.67);
        assert_eq!(round_to(-3.333_3, 2), -3.33);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-15.0), 0.0);
        assert_eq!(clamp_score(105.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
        assert_eq!(mean(&[10.0, 12.0]), Some(11.0));
        assert_eq!(population_std_dev(&[10.0, 12.0]), Some(1.0));
        assert_eq!(population_std_dev(&[7.0, 7.0, 7.0]), Some(0.0));
    }
}
