use crate::domain::instrument::{Instrument, InstrumentRecord};
use crate::domain::profile::UserProfile;
use crate::domain::recommendation::{ScoredCandidate, Selection};
use crate::scoring::{self, ScoringStrategy};
use std::cmp::Ordering;

/// Instruments no riskier than the user's normalized tolerance.
pub fn eligible<'a, T: InstrumentRecord>(
    instruments: &'a [T],
    profile: &UserProfile,
) -> impl Iterator<Item = &'a T> {
    let max_risk = profile.normalized_risk();
    instruments
        .iter()
        .filter(move |i| i.risk_score() <= max_risk)
}

/// Scores and orders candidates: score descending, then closest risk to the
/// user's tolerance. Remaining ties keep input order.
pub fn rank<'a, T, I>(
    candidates: I,
    profile: &UserProfile,
    strategy: ScoringStrategy,
) -> Vec<ScoredCandidate<&'a T>>
where
    T: InstrumentRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let target = profile.normalized_risk();
    let mut scored: Vec<ScoredCandidate<&T>> = candidates
        .into_iter()
        .map(|instrument| ScoredCandidate {
            score: scoring::score(strategy, instrument, profile),
            instrument,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score.total_cmp(&a.score).then_with(|| {
            let da = (a.instrument.risk_score() - target).abs();
            let db = (b.instrument.risk_score() - target).abs();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
    });
    scored
}

/// Picks up to `top_k` eligible instruments and splits `bucket_fraction` of the
/// user's initial investment evenly between them.
pub fn select_and_size<T: InstrumentRecord + Clone>(
    instruments: &[T],
    profile: &UserProfile,
    strategy: ScoringStrategy,
    top_k: usize,
    bucket_fraction: f64,
) -> Vec<Selection<T>> {
    let mut ranked = rank(eligible(instruments, profile), profile, strategy);
    ranked.truncate(top_k);

    if ranked.is_empty() {
        return Vec::new();
    }

    let bucket_amount = profile.initial_investment * bucket_fraction;
    let per_instrument = bucket_amount / ranked.len() as f64;

    ranked
        .into_iter()
        .map(|c| Selection {
            instrument: c.instrument.clone(),
            score: c.score,
            investment_amount: per_instrument,
            allocation_percentage: bucket_fraction * 100.0,
        })
        .collect()
}

/// Best `n` instruments across every category, without the eligibility gate.
/// Used as context for narrative generation.
pub fn select_top_candidates(
    instruments: &[Instrument],
    profile: &UserProfile,
    strategy: ScoringStrategy,
    n: usize,
) -> Vec<ScoredCandidate<Instrument>> {
    rank(instruments, profile, strategy)
        .into_iter()
        .take(n)
        .map(|c| ScoredCandidate {
            instrument: c.instrument.clone(),
            score: c.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{InstrumentBase, MutualFund};
    use crate::domain::profile::tests::profile;

    fn fund(name: &str, risk_score: f64, expected_returns: f64) -> MutualFund {
        MutualFund {
            base: InstrumentBase {
                name: name.into(),
                kind: "Equity".into(),
                risk_score,
                expected_returns,
                expense_ratio: 0.02,
                tax_efficiency: 0.8,
                recommended_horizon_years: None,
                minimum_investment: None,
            },
            category: "Large Cap".into(),
            aum: 1000.0,
            fund_manager: "Manager".into(),
            fund_house: "House".into(),
            tracking_error: 2.0,
            benchmark_index: "NIFTY 50".into(),
        }
    }

    #[test]
    fn never_selects_instruments_above_tolerance() {
        let funds = vec![
            fund("a", 0.2, 0.07),
            fund("b", 0.5, 0.20),
            fund("c", 0.51, 0.40),
            fund("d", 0.9, 0.90),
        ];
        for risk in 0..=100u8 {
            let p = profile(40, risk);
            let picks = select_and_size(&funds, &p, ScoringStrategy::FiveFactor, 3, 0.35);
            for pick in &picks {
                assert!(pick.instrument.base.risk_score <= p.normalized_risk());
            }
        }
    }

    #[test]
    fn empty_eligible_set_yields_empty_list() {
        let funds = vec![fund("a", 0.6, 0.1)];
        let p = profile(40, 10);
        let picks = select_and_size(&funds, &p, ScoringStrategy::ThreeFactor, 2, 0.55);
        assert!(picks.is_empty());
    }

    #[test]
    fn sizing_conserves_bucket_amount() {
        let funds = vec![fund("a", 0.2, 0.07), fund("b", 0.3, 0.08), fund("c", 0.4, 0.09)];
        let p = profile(40, 59);
        for k in 1..=4 {
            let picks = select_and_size(&funds, &p, ScoringStrategy::FiveFactor, k, 0.35);
            assert_eq!(picks.len(), k.min(3));
            let total: f64 = picks.iter().map(|s| s.investment_amount).sum();
            assert!((total - 350_000.0).abs() < 1e-6);
            assert!(picks.iter().all(|s| (s.allocation_percentage - 35.0).abs() < 1e-9));
        }
    }

    #[test]
    fn ranks_by_score_then_risk_distance() {
        let p = profile(40, 50);
        // Same returns, symmetric distance: equal scores, equal distance, input order wins.
        let funds = vec![fund("low", 0.4, 0.1), fund("high", 0.6, 0.1), fund("exact", 0.5, 0.1)];
        let ranked = rank(&funds, &p, ScoringStrategy::ThreeFactor);
        let names: Vec<_> = ranked.iter().map(|c| c.instrument.name()).collect();
        assert_eq!(names, vec!["exact", "low", "high"]);
    }

    #[test]
    fn equal_scores_prefer_closer_risk() {
        let p = profile(40, 50);
        // 0.0 risk + 50% returns and 0.25 risk + 20% returns both score 47.5.
        let far = fund("far", 0.0, 0.5);
        let near = fund("near", 0.25, 0.2);
        for funds in [vec![far.clone(), near.clone()], vec![near.clone(), far.clone()]] {
            let ranked = rank(&funds, &p, ScoringStrategy::ThreeFactor);
            assert_eq!(ranked[0].score, ranked[1].score);
            let names: Vec<_> = ranked.iter().map(|c| c.instrument.name()).collect();
            assert_eq!(names, vec!["near", "far"]);
        }
    }

    #[test]
    fn top_candidates_ignores_eligibility_gate() {
        let instruments = vec![
            Instrument::MutualFund(fund("risky", 0.9, 0.9)),
            Instrument::MutualFund(fund("safe", 0.1, 0.05)),
        ];
        let p = profile(40, 20);
        let top = select_top_candidates(&instruments, &p, ScoringStrategy::FiveFactor, 1);
        assert_eq!(top.len(), 1);
        // 9 + 22.5 + 20 + 15 + 10 beats 27 + 1.25 + 20 + 15 + 10.
        assert_eq!(top[0].instrument.name(), "risky");
    }
}
