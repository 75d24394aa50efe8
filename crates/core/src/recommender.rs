use crate::allocation::determine_asset_allocation;
use crate::domain::portfolio::Category;
use crate::domain::profile::UserProfile;
use crate::domain::recommendation::{
    Narrative, PersonalizedRecommendation, Recommendation, RecommendedInvestments,
};
use crate::knowledge::{ContextRetriever, KnowledgeBase, StoreKind};
use crate::llm::{LlmClient, NarrativeInput};
use crate::scoring::ScoringStrategy;
use crate::selection::{select_and_size, select_top_candidates};
use std::sync::Arc;

const CONTEXT_DOCUMENTS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct RecommenderOptions {
    pub strategy: ScoringStrategy,
    /// Candidates handed to the narrative step.
    pub top_candidates: usize,
}

impl Default for RecommenderOptions {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::default(),
            top_candidates: 5,
        }
    }
}

impl RecommenderOptions {
    pub fn from_settings(settings: &crate::config::Settings) -> Self {
        Self {
            strategy: settings.scoring_strategy,
            top_candidates: settings.top_candidates,
        }
    }
}

/// The structured recommendation survives a failed collaborator call.
#[derive(Debug, thiserror::Error)]
#[error("{stage} failed: {error:#}")]
pub struct NarrativeFailure {
    pub stage: &'static str,
    pub recommendation: Box<Recommendation>,
    pub error: anyhow::Error,
}

#[derive(Debug, Clone)]
pub struct Recommender {
    knowledge: Arc<KnowledgeBase>,
    options: RecommenderOptions,
}

impl Recommender {
    pub fn new(knowledge: Arc<KnowledgeBase>, options: RecommenderOptions) -> Self {
        Self { knowledge, options }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Deterministic recommendation for `profile`: allocation, sized
    /// selections per category, matching principles and tax strategies.
    pub fn generate_comprehensive_recommendation(&self, profile: &UserProfile) -> Recommendation {
        let kb = &self.knowledge;
        let strategy = self.options.strategy;
        let plan = determine_asset_allocation(profile.risk_score);

        let recommended_investments = RecommendedInvestments {
            stocks: select_and_size(
                kb.stocks(),
                profile,
                strategy,
                Category::Stocks.top_k(),
                plan.fraction(Category::Stocks.bucket()),
            ),
            mutual_funds: select_and_size(
                kb.mutual_funds(),
                profile,
                strategy,
                Category::MutualFunds.top_k(),
                plan.fraction(Category::MutualFunds.bucket()),
            ),
            debt_funds: select_and_size(
                kb.debt_funds(),
                profile,
                strategy,
                Category::DebtFunds.top_k(),
                plan.fraction(Category::DebtFunds.bucket()),
            ),
        };

        tracing::info!(
            risk_score = profile.risk_score,
            age = profile.age,
            ?strategy,
            stocks = recommended_investments.stocks.len(),
            mutual_funds = recommended_investments.mutual_funds.len(),
            debt_funds = recommended_investments.debt_funds.len(),
            "generated recommendation"
        );

        Recommendation {
            user_profile: profile.clone(),
            investment_principles: kb.get_investment_principles(profile),
            total_investment: profile.initial_investment,
            asset_allocation: plan,
            recommended_investments,
            tax_optimization_strategies: kb.tax_optimization_strategies().to_vec(),
        }
    }

    /// The structured recommendation wrapped in an LLM-written narrative.
    /// Each collaborator is called once.
    pub async fn generate_personalized_recommendation(
        &self,
        profile: &UserProfile,
        retriever: &dyn ContextRetriever,
        llm: &dyn LlmClient,
    ) -> Result<PersonalizedRecommendation, NarrativeFailure> {
        let recommendation = self.generate_comprehensive_recommendation(profile);

        let query = format!(
            "Investment strategy for {} year old with {} risk tolerance",
            profile.age, profile.risk_score
        );
        let semantic_context = match retriever
            .search(&query, CONTEXT_DOCUMENTS, StoreKind::Principle)
            .await
        {
            Ok(docs) => docs,
            Err(error) => {
                tracing::error!(error = %error, "semantic search failed");
                return Err(NarrativeFailure {
                    stage: "semantic_search",
                    recommendation: Box::new(recommendation),
                    error,
                });
            }
        };

        let top_candidates = select_top_candidates(
            &self.knowledge.all_instruments(),
            profile,
            self.options.strategy,
            self.options.top_candidates,
        );

        let input = NarrativeInput {
            profile: profile.clone(),
            semantic_context: semantic_context.clone(),
            candidates: top_candidates.clone(),
        };

        let provider = llm.provider();
        let text = match llm.generate_narrative(input).await {
            Ok(text) => text,
            Err(error) => {
                tracing::error!(%provider, error = %error, "narrative generation failed");
                return Err(NarrativeFailure {
                    stage: "narrative",
                    recommendation: Box::new(recommendation),
                    error,
                });
            }
        };

        tracing::info!(%provider, chars = text.len(), "narrative attached");

        Ok(PersonalizedRecommendation {
            recommendation,
            semantic_context,
            top_candidates,
            narrative: Narrative {
                provider,
                generated_at: chrono::Utc::now(),
                text,
            },
        })
    }
}
