//! Read-only investment knowledge: the instrument catalog, the principle
//! documents, and a keyword index used for context retrieval.
//!
//! A [`KnowledgeBase`] is built once at startup and shared behind an `Arc`;
//! nothing in it changes for the lifetime of the process.

mod catalog;
pub mod search;

use crate::domain::instrument::{DebtFund, Instrument, MutualFund, Stock};
use crate::domain::portfolio::Category;
use crate::domain::profile::UserProfile;
use crate::domain::recommendation::InvestmentPrinciple;
use serde::{Deserialize, Serialize};

pub use search::{ContextRetriever, KeywordIndex};

/// Document collections that can be searched independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Principle,
    MutualFunds,
    DebtFunds,
    Stocks,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    stocks: Vec<Stock>,
    mutual_funds: Vec<MutualFund>,
    debt_funds: Vec<DebtFund>,
    principles: Vec<InvestmentPrinciple>,
    tax_strategies: Vec<String>,
    index: KeywordIndex,
}

impl KnowledgeBase {
    /// The bundled catalog and principle set.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::new(
            catalog::stocks(),
            catalog::mutual_funds(),
            catalog::debt_funds(),
            catalog::principles(),
            catalog::tax_optimization_strategies(),
        )
    }

    pub fn new(
        stocks: Vec<Stock>,
        mutual_funds: Vec<MutualFund>,
        debt_funds: Vec<DebtFund>,
        principles: Vec<InvestmentPrinciple>,
        tax_strategies: Vec<String>,
    ) -> anyhow::Result<Self> {
        let mut index = KeywordIndex::default();
        index.add_all(StoreKind::Principle, &principles)?;
        index.add_all(StoreKind::Stocks, &stocks)?;
        index.add_all(StoreKind::MutualFunds, &mutual_funds)?;
        index.add_all(StoreKind::DebtFunds, &debt_funds)?;

        tracing::debug!(
            stocks = stocks.len(),
            mutual_funds = mutual_funds.len(),
            debt_funds = debt_funds.len(),
            principles = principles.len(),
            "knowledge base loaded"
        );

        Ok(Self {
            stocks,
            mutual_funds,
            debt_funds,
            principles,
            tax_strategies,
            index,
        })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn mutual_funds(&self) -> &[MutualFund] {
        &self.mutual_funds
    }

    pub fn debt_funds(&self) -> &[DebtFund] {
        &self.debt_funds
    }

    pub fn principles(&self) -> &[InvestmentPrinciple] {
        &self.principles
    }

    pub fn tax_optimization_strategies(&self) -> &[String] {
        &self.tax_strategies
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Every instrument of one category, wrapped for heterogeneous use.
    pub fn instruments(&self, category: Category) -> Vec<Instrument> {
        match category {
            Category::Stocks => self.stocks.iter().cloned().map(Instrument::Stock).collect(),
            Category::MutualFunds => self
                .mutual_funds
                .iter()
                .cloned()
                .map(Instrument::MutualFund)
                .collect(),
            Category::DebtFunds => self
                .debt_funds
                .iter()
                .cloned()
                .map(Instrument::DebtFund)
                .collect(),
        }
    }

    pub fn all_instruments(&self) -> Vec<Instrument> {
        Category::ALL
            .into_iter()
            .flat_map(|c| self.instruments(c))
            .collect()
    }

    /// Principles whose text mentions the profile's risk category or age
    /// bracket. Order follows the principle list; there is no ranking.
    pub fn get_investment_principles(&self, profile: &UserProfile) -> Vec<InvestmentPrinciple> {
        let risk_category = profile.risk_category();
        let age_bracket = profile.age_bracket();

        self.principles
            .iter()
            .filter(|p| {
                let text = serde_json::to_string(p).unwrap_or_default();
                text.contains(risk_category) || text.contains(age_bracket)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::InstrumentRecord;
    use crate::domain::profile::tests::profile;
    use crate::scoring::{score, ScoringStrategy};

    #[test]
    fn builtin_catalog_sizes() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.stocks().len(), 15);
        assert_eq!(kb.mutual_funds().len(), 2);
        assert_eq!(kb.debt_funds().len(), 2);
        assert_eq!(kb.principles().len(), 3);
        assert_eq!(kb.tax_optimization_strategies().len(), 3);
        assert_eq!(kb.all_instruments().len(), 19);
        for i in kb.all_instruments() {
            assert!((0.0..=1.0).contains(&i.risk_score()), "{}", i.name());
        }
    }

    #[test]
    fn builtin_catalog_has_no_horizon_or_minimum_hints() {
        let kb = KnowledgeBase::builtin().unwrap();
        let p = profile(60, 59);
        for i in kb.all_instruments() {
            assert_eq!(i.base().recommended_horizon_years, None, "{}", i.name());
            assert_eq!(i.base().minimum_investment, None, "{}", i.name());
            let three = score(ScoringStrategy::ThreeFactor, &i, &p);
            let five = score(ScoringStrategy::FiveFactor, &i, &p);
            assert!((five - three - 25.0).abs() < 1e-9, "{}", i.name());
        }
    }

    #[test]
    fn principles_match_risk_and_age_labels() {
        let kb = KnowledgeBase::builtin().unwrap();

        let names = |p: &UserProfile| -> Vec<String> {
            kb.get_investment_principles(p)
                .into_iter()
                .map(|p| p.principle)
                .collect()
        };

        assert_eq!(
            names(&profile(60, 59)),
            vec!["Asset Allocation Strategy", "Risk Management"]
        );
        assert_eq!(
            names(&profile(28, 85)),
            vec!["Asset Allocation Strategy", "Risk Management"]
        );
    }
}
