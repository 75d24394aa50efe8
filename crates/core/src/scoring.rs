use crate::domain::instrument::InstrumentRecord;
use crate::domain::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const RISK_ALIGNMENT_WEIGHT: f64 = 30.0;
const RETURNS_WEIGHT: f64 = 25.0;
const DIVERSIFICATION_WEIGHT: f64 = 20.0;
const TIME_HORIZON_WEIGHT: f64 = 15.0;
const INVESTMENT_SIZE_WEIGHT: f64 = 10.0;

/// Which set of sub-scores contributes to an instrument's total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Risk alignment, returns, diversification.
    ThreeFactor,
    /// The three-factor set plus time horizon fit and investment size fit.
    #[default]
    FiveFactor,
}

impl FromStr for ScoringStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "three_factor" | "3" => Ok(Self::ThreeFactor),
            "five_factor" | "5" => Ok(Self::FiveFactor),
            other => anyhow::bail!("unknown scoring strategy: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub risk_alignment: f64,
    pub returns: f64,
    pub diversification: f64,
    pub time_horizon: Option<f64>,
    pub investment_size: Option<f64>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.risk_alignment
            + self.returns
            + self.diversification
            + self.time_horizon.unwrap_or(0.0)
            + self.investment_size.unwrap_or(0.0)
    }
}

pub fn risk_alignment(instrument_risk: f64, profile: &UserProfile) -> f64 {
    RISK_ALIGNMENT_WEIGHT * (1.0 - (instrument_risk - profile.normalized_risk()).abs())
}

pub fn breakdown<T: InstrumentRecord + ?Sized>(
    strategy: ScoringStrategy,
    instrument: &T,
    profile: &UserProfile,
) -> ScoreBreakdown {
    let base = instrument.base();

    let held = profile.held_keys();
    let already_held = instrument
        .diversification_keys()
        .iter()
        .any(|key| held.iter().any(|h| h == &key.trim().to_lowercase()));

    let (time_horizon, investment_size) = match strategy {
        ScoringStrategy::ThreeFactor => (None, None),
        ScoringStrategy::FiveFactor => {
            // Missing hints fall into the favourable branch.
            let horizon_fits = base
                .recommended_horizon_years
                .map_or(true, |h| h <= profile.time_horizon_years);
            let size_fits = base
                .minimum_investment
                .map_or(true, |m| m <= profile.initial_investment);
            (
                Some(TIME_HORIZON_WEIGHT * if horizon_fits { 1.0 } else { 0.5 }),
                Some(INVESTMENT_SIZE_WEIGHT * if size_fits { 1.0 } else { 0.0 }),
            )
        }
    };

    ScoreBreakdown {
        risk_alignment: risk_alignment(base.risk_score, profile),
        returns: RETURNS_WEIGHT * base.expected_returns,
        diversification: DIVERSIFICATION_WEIGHT * if already_held { 0.5 } else { 1.0 },
        time_horizon,
        investment_size,
    }
}

/// Weighted suitability of `instrument` for `profile`; higher is better.
pub fn score<T: InstrumentRecord + ?Sized>(
    strategy: ScoringStrategy,
    instrument: &T,
    profile: &UserProfile,
) -> f64 {
    breakdown(strategy, instrument, profile).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{DebtFund, InstrumentBase};
    use crate::domain::profile::tests::profile;
    use crate::domain::profile::EXT_EXISTING_INVESTMENTS;
    use serde_json::json;

    fn fund(risk_score: f64, expected_returns: f64) -> DebtFund {
        DebtFund {
            base: InstrumentBase {
                name: "Test Gilt".into(),
                kind: "Debt".into(),
                risk_score,
                expected_returns,
                expense_ratio: 0.01,
                tax_efficiency: 0.9,
                recommended_horizon_years: None,
                minimum_investment: None,
            },
            duration: "Long Term".into(),
            credit_rating: "AAA".into(),
            govt_securities_percentage: 80.0,
            corporate_bonds_percentage: 20.0,
        }
    }

    #[test]
    fn risk_alignment_peaks_at_equal_risk() {
        let p = profile(40, 50);
        assert!((risk_alignment(0.5, &p) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn risk_alignment_decreases_with_gap() {
        let p = profile(40, 50);
        let mut previous = risk_alignment(0.5, &p);
        for step in 1..=5 {
            let gap = f64::from(step) * 0.1;
            let above = risk_alignment(0.5 + gap, &p);
            let below = risk_alignment(0.5 - gap, &p);
            assert!(above < previous);
            assert!((above - below).abs() < 1e-12);
            previous = above;
        }
    }

    #[test]
    fn three_factor_total() {
        let p = profile(40, 50);
        let b = breakdown(ScoringStrategy::ThreeFactor, &fund(0.3, 0.08), &p);
        assert_eq!(b.time_horizon, None);
        assert_eq!(b.investment_size, None);
        // 30 * 0.8 + 25 * 0.08 + 20
        assert!((b.total() - 46.0).abs() < 1e-9);
    }

    #[test]
    fn five_factor_defaults_missing_hints_to_favourable() {
        let p = profile(40, 50);
        let three = score(ScoringStrategy::ThreeFactor, &fund(0.3, 0.08), &p);
        let five = score(ScoringStrategy::FiveFactor, &fund(0.3, 0.08), &p);
        assert!((five - three - 25.0).abs() < 1e-9);
    }

    #[test]
    fn five_factor_penalises_long_horizon_and_large_minimum() {
        let mut p = profile(40, 50);
        p.time_horizon_years = 3;
        p.initial_investment = 1_000.0;

        let mut f = fund(0.3, 0.08);
        f.base.recommended_horizon_years = Some(5);
        f.base.minimum_investment = Some(5_000.0);

        let b = breakdown(ScoringStrategy::FiveFactor, &f, &p);
        assert_eq!(b.time_horizon, Some(7.5));
        assert_eq!(b.investment_size, Some(0.0));
    }

    #[test]
    fn held_type_halves_diversification() {
        let mut p = profile(40, 50);
        p.extensions
            .insert(EXT_EXISTING_INVESTMENTS.into(), json!(["debt"]));
        let b = breakdown(ScoringStrategy::ThreeFactor, &fund(0.3, 0.08), &p);
        assert_eq!(b.diversification, 10.0);
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!(
            "three_factor".parse::<ScoringStrategy>().unwrap(),
            ScoringStrategy::ThreeFactor
        );
        assert_eq!(
            "Five-Factor".parse::<ScoringStrategy>().unwrap(),
            ScoringStrategy::FiveFactor
        );
        assert!("seven".parse::<ScoringStrategy>().is_err());
    }
}
