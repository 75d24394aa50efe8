use crate::domain::instrument::{DebtFund, Instrument, MutualFund, Stock};
use crate::domain::portfolio::AllocationPlan;
use crate::domain::profile::UserProfile;
use crate::llm::Provider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An instrument paired with its suitability score for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    pub instrument: T,
    pub score: f64,
}

/// A chosen instrument with the amount sized for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection<T> {
    #[serde(flatten)]
    pub instrument: T,
    pub score: f64,
    pub investment_amount: f64,
    /// Bucket fraction × 100, shared by every selection in the category.
    pub allocation_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPrinciple {
    pub principle: String,
    pub description: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedInvestments {
    pub stocks: Vec<Selection<Stock>>,
    pub mutual_funds: Vec<Selection<MutualFund>>,
    pub debt_funds: Vec<Selection<DebtFund>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_profile: UserProfile,
    pub investment_principles: Vec<InvestmentPrinciple>,
    pub total_investment: f64,
    pub asset_allocation: AllocationPlan,
    pub recommended_investments: RecommendedInvestments,
    pub tax_optimization_strategies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub provider: Provider,
    pub generated_at: DateTime<Utc>,
    pub text: String,
}

/// Structured recommendation plus the LLM-authored narrative and the context
/// it was written from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub semantic_context: Vec<serde_json::Value>,
    pub top_candidates: Vec<ScoredCandidate<Instrument>>,
    pub narrative: Narrative,
}
