pub mod anthropic;
pub mod error;
pub mod openai;

use crate::config::Settings;
use crate::domain::instrument::Instrument;
use crate::domain::profile::UserProfile;
use crate::domain::recommendation::ScoredCandidate;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const SYSTEM_PROMPT: &str = "You are a personal financial advisor.";

#[derive(Debug, Clone)]
pub struct NarrativeInput {
    pub profile: UserProfile,
    pub semantic_context: Vec<serde_json::Value>,
    pub candidates: Vec<ScoredCandidate<Instrument>>,
}

impl NarrativeInput {
    pub fn user_context(&self) -> String {
        let p = &self.profile;
        let join_or = |items: Vec<String>, fallback: &str| {
            if items.is_empty() {
                fallback.to_string()
            } else {
                items.join(", ")
            }
        };

        format!(
            "- Age: {}\n\
- Risk Tolerance: {}/100\n\
- Investment Horizon: {} years\n\
- Initial Investment: ₹{:.2}\n\
- Target Amount: ₹{:.2}\n\
- Existing Investments: {}\n\
- Investment Goals: {}",
            p.age,
            p.risk_score,
            p.time_horizon_years,
            p.initial_investment,
            p.target_amount,
            join_or(p.existing_investments(), "None"),
            join_or(p.investment_goals(), "Not specified"),
        )
    }

    pub fn user_prompt(&self) -> anyhow::Result<String> {
        let semantic = serde_json::to_string_pretty(&self.semantic_context)
            .context("failed to encode semantic context")?;
        let candidates = serde_json::to_string_pretty(&self.candidates)
            .context("failed to encode candidate investments")?;

        Ok(format!(
            "User Profile:\n{}\n\n\
Semantic Insights:\n{semantic}\n\n\
Top Potential Investments:\n{candidates}\n\n\
Generate a comprehensive, personalized investment recommendation that includes:\n\
1. Investment allocation strategy\n\
2. Specific investment recommendations\n\
3. Risk management approach\n\
4. Tax optimization strategies\n\
5. Potential growth scenarios\n\n\
The recommendation should be detailed, actionable, and tailored to the user's specific financial profile and goals.",
            self.user_context()
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Anthropic,
    OpenAI,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Anthropic => f.write_str("anthropic"),
            Provider::OpenAI => f.write_str("openai"),
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAI),
            other => anyhow::bail!("unknown LLM provider: {other}"),
        }
    }
}

/// Language-model collaborator that writes the narrative around a structured
/// recommendation. One request per call; failures are returned, not retried.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    fn provider(&self) -> Provider;

    async fn generate_narrative(&self, input: NarrativeInput) -> anyhow::Result<String>;
}

/// Builds the client named by `LLM_PROVIDER` (OpenAI when unset).
pub fn from_settings(settings: &Settings) -> anyhow::Result<Box<dyn LlmClient>> {
    let provider = match settings.llm_provider.as_deref() {
        Some(s) => s.parse::<Provider>()?,
        None => Provider::OpenAI,
    };

    Ok(match provider {
        Provider::Anthropic => Box::new(anthropic::AnthropicClient::from_settings(settings)?),
        Provider::OpenAI => Box::new(openai::OpenAiClient::from_settings(settings)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::tests::profile;
    use crate::domain::profile::{EXT_EXISTING_INVESTMENTS, EXT_INVESTMENT_GOALS};
    use serde_json::json;

    #[test]
    fn user_context_lists_extensions_or_fallbacks() {
        let mut input = NarrativeInput {
            profile: profile(60, 59),
            semantic_context: vec![],
            candidates: vec![],
        };
        let ctx = input.user_context();
        assert!(ctx.contains("- Risk Tolerance: 59/100"));
        assert!(ctx.contains("- Existing Investments: None"));
        assert!(ctx.contains("- Investment Goals: Not specified"));

        input
            .profile
            .extensions
            .insert(EXT_EXISTING_INVESTMENTS.into(), json!(["Equity", "Gold"]));
        input
            .profile
            .extensions
            .insert(EXT_INVESTMENT_GOALS.into(), json!(["Retirement"]));
        let ctx = input.user_context();
        assert!(ctx.contains("- Existing Investments: Equity, Gold"));
        assert!(ctx.contains("- Investment Goals: Retirement"));
    }

    #[test]
    fn provider_round_trips_through_strings() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAI);
        assert_eq!(Provider::Anthropic.to_string(), "anthropic");
        assert!("gemini".parse::<Provider>().is_err());
    }
}
