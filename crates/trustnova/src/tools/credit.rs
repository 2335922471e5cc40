//! Credit score formulas.
//!
//! Two independent models live here: the five-factor estimator used by the
//! calculator form, and a simpler income/debt formula. Only the latter clamps
//! its output to the 300..=900 band.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BASE_SCORE: f64 = 300.0;
pub const MAX_SCORE: f64 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditMix {
    #[serde(alias = "good", alias = "GOOD")]
    Good,
    #[serde(alias = "fair", alias = "FAIR")]
    Fair,
    #[serde(alias = "poor", alias = "POOR")]
    Poor,
}

impl CreditMix {
    pub fn bonus(&self) -> u32 {
        match self {
            CreditMix::Good => 50,
            CreditMix::Fair => 20,
            CreditMix::Poor => 0,
        }
    }
}

impl fmt::Display for CreditMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditMix::Good => "Good",
            CreditMix::Fair => "Fair",
            CreditMix::Poor => "Poor",
        };
        f.write_str(label)
    }
}

impl FromStr for CreditMix {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(CreditMix::Good),
            "fair" => Ok(CreditMix::Fair),
            "poor" => Ok(CreditMix::Poor),
            other => Err(format!("credit mix must be Good, Fair or Poor (got '{other}')")),
        }
    }
}

/// Inputs to the five-factor estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditFactors {
    pub payment_history_pct: u32,
    pub credit_utilization_pct: u32,
    pub length_of_credit_years: u32,
    pub credit_mix: CreditMix,
    pub new_credit_count: u32,
}

impl CreditFactors {
    pub const MAX_PAYMENT_HISTORY_PCT: u32 = 100;
    pub const MAX_CREDIT_UTILIZATION_PCT: u32 = 100;
    pub const MAX_LENGTH_OF_CREDIT_YEARS: u32 = 30;
    pub const MAX_NEW_CREDIT_COUNT: u32 = 10;

    /// Pins every factor inside the range the calculator form allows.
    pub fn clamped(self) -> Self {
        Self {
            payment_history_pct: self.payment_history_pct.min(Self::MAX_PAYMENT_HISTORY_PCT),
            credit_utilization_pct: self
                .credit_utilization_pct
                .min(Self::MAX_CREDIT_UTILIZATION_PCT),
            length_of_credit_years: self
                .length_of_credit_years
                .min(Self::MAX_LENGTH_OF_CREDIT_YEARS),
            credit_mix: self.credit_mix,
            new_credit_count: self.new_credit_count.min(Self::MAX_NEW_CREDIT_COUNT),
        }
    }
}

impl Default for CreditFactors {
    fn default() -> Self {
        Self {
            payment_history_pct: 80,
            credit_utilization_pct: 30,
            length_of_credit_years: 5,
            credit_mix: CreditMix::Good,
            new_credit_count: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditScoreEstimate {
    pub score: f64,
    /// Score with the fractional part dropped, as shown to applicants.
    pub whole_score: u32,
}

/// `300 + history*0.3 + (100 - utilization)*0.2 + years*5 + new*10 + mix bonus`.
///
/// Not clamped; pass factors through [`CreditFactors::clamped`] to stay within
/// the form's ranges. Computed in tenths of a point so the weights stay exact,
/// saturating at `u32::MAX` tenths for absurd inputs.
pub fn estimate_credit_score(factors: &CreditFactors) -> CreditScoreEstimate {
    let tenths = [
        factors.payment_history_pct.saturating_mul(3),
        100u32.saturating_sub(factors.credit_utilization_pct) * 2,
        factors.length_of_credit_years.saturating_mul(50),
        factors.new_credit_count.saturating_mul(100),
        factors.credit_mix.bonus() * 10,
    ]
    .into_iter()
    .fold(3000u32, u32::saturating_add);

    CreditScoreEstimate {
        score: f64::from(tenths) / 10.0,
        whole_score: tenths / 10,
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreditScoreError {
    #[error("income and debt must be non-negative (income {income}, debt {debt})")]
    InvalidInput { income: f64, debt: f64 },
}

/// `clamp(300 + (income - debt) / 1000, 300, 900)`; rejects negative inputs.
pub fn calculate_credit_score(income: f64, debt: f64) -> Result<f64, CreditScoreError> {
    let valid = |value: f64| value.is_finite() && value >= 0.0;
    if !valid(income) || !valid(debt) {
        return Err(CreditScoreError::InvalidInput { income, debt });
    }

    let score = BASE_SCORE + (income - debt) / 1000.0;
    Ok(score.clamp(BASE_SCORE, MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_matches_calculator_defaults() {
        let estimate = estimate_credit_score(&CreditFactors::default());
        // 300 + 24 + 14 + 25 + 20 + 50
        assert_eq!(estimate.score, 433.0);
        assert_eq!(estimate.whole_score, 433);
    }

    #[test]
    fn estimator_applies_mix_bonus_and_is_not_clamped() {
        let mut factors = CreditFactors {
            payment_history_pct: 100,
            credit_utilization_pct: 0,
            length_of_credit_years: 30,
            credit_mix: CreditMix::Fair,
            new_credit_count: 10,
        };
        // 300 + 30 + 20 + 150 + 100 + 20
        assert_eq!(estimate_credit_score(&factors).score, 620.0);

        factors.credit_mix = CreditMix::Poor;
        assert_eq!(estimate_credit_score(&factors).score, 600.0);

        let floor = CreditFactors {
            payment_history_pct: 0,
            credit_utilization_pct: 100,
            length_of_credit_years: 0,
            credit_mix: CreditMix::Poor,
            new_credit_count: 0,
        };
        assert_eq!(estimate_credit_score(&floor).score, 300.0);
    }

    #[test]
    fn estimator_saturates_instead_of_overflowing() {
        let factors = CreditFactors {
            payment_history_pct: u32::MAX,
            credit_utilization_pct: 0,
            length_of_credit_years: u32::MAX,
            credit_mix: CreditMix::Good,
            new_credit_count: u32::MAX,
        };
        let estimate = estimate_credit_score(&factors);
        assert_eq!(estimate.whole_score, u32::MAX / 10);
        assert!(estimate.score.is_finite());
    }

    #[test]
    fn estimator_keeps_fractional_points() {
        let factors = CreditFactors {
            payment_history_pct: 81,
            credit_utilization_pct: 30,
            length_of_credit_years: 5,
            credit_mix: CreditMix::Good,
            new_credit_count: 2,
        };
        let estimate = estimate_credit_score(&factors);
        assert_eq!(estimate.score, 433.3);
        assert_eq!(estimate.whole_score, 433);
    }

    #[test]
    fn clamped_pins_out_of_range_factors() {
        let factors = CreditFactors {
            payment_history_pct: 140,
            credit_utilization_pct: 250,
            length_of_credit_years: 45,
            credit_mix: CreditMix::Good,
            new_credit_count: 12,
        }
        .clamped();
        assert_eq!(factors.payment_history_pct, 100);
        assert_eq!(factors.credit_utilization_pct, 100);
        assert_eq!(factors.length_of_credit_years, 30);
        assert_eq!(factors.new_credit_count, 10);
    }

    #[test]
    fn credit_mix_parses_case_insensitively() {
        assert_eq!("good".parse::<CreditMix>(), Ok(CreditMix::Good));
        assert_eq!(" FAIR ".parse::<CreditMix>(), Ok(CreditMix::Fair));
        assert!("excellent".parse::<CreditMix>().is_err());
    }

    #[test]
    fn income_debt_formula_scales_and_clamps() {
        assert_eq!(calculate_credit_score(5000.0, 1000.0), Ok(304.0));
        assert_eq!(calculate_credit_score(1000.0, 5000.0), Ok(300.0));
        assert_eq!(calculate_credit_score(2_000_000.0, 0.0), Ok(900.0));
        assert_eq!(calculate_credit_score(0.0, 0.0), Ok(300.0));
    }

    #[test]
    fn income_debt_formula_rejects_negative_inputs() {
        assert_eq!(
            calculate_credit_score(-1.0, 0.0),
            Err(CreditScoreError::InvalidInput {
                income: -1.0,
                debt: 0.0
            })
        );
        assert!(calculate_credit_score(100.0, -5.0).is_err());
        assert!(calculate_credit_score(f64::NAN, 0.0).is_err());
    }
}
