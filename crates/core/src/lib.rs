pub mod allocation;
pub mod domain;
pub mod knowledge;
pub mod llm;
pub mod recommender;
pub mod scoring;
pub mod selection;

pub mod config {
    use crate::scoring::ScoringStrategy;
    use anyhow::Context;

    const DEFAULT_TOP_CANDIDATES: usize = 5;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub anthropic_api_key: Option<String>,
        pub openai_api_key: Option<String>,
        pub sentry_dsn: Option<String>,
        pub llm_provider: Option<String>,
        pub scoring_strategy: ScoringStrategy,
        pub top_candidates: usize,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let scoring_strategy = match std::env::var("SCORING_STRATEGY") {
                Ok(s) => s
                    .parse::<ScoringStrategy>()
                    .with_context(|| format!("invalid SCORING_STRATEGY: {s}"))?,
                Err(_) => ScoringStrategy::default(),
            };

            let top_candidates =
                parse_top_candidates(std::env::var("TOP_CANDIDATES").ok().as_deref())?;

            Ok(Self {
                anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
                openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                llm_provider: std::env::var("LLM_PROVIDER").ok(),
                scoring_strategy,
                top_candidates,
            })
        }

        pub fn require_anthropic_api_key(&self) -> anyhow::Result<&str> {
            self.anthropic_api_key
                .as_deref()
                .context("ANTHROPIC_API_KEY is required")
        }

        pub fn require_openai_api_key(&self) -> anyhow::Result<&str> {
            self.openai_api_key
                .as_deref()
                .context("OPENAI_API_KEY is required")
        }
    }

    /// Unset means the default; a set value must be a positive integer.
    fn parse_top_candidates(raw: Option<&str>) -> anyhow::Result<usize> {
        let Some(s) = raw else {
            return Ok(DEFAULT_TOP_CANDIDATES);
        };
        let n = s
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid TOP_CANDIDATES: {s}"))?;
        anyhow::ensure!(n > 0, "invalid TOP_CANDIDATES: {s} (must be at least 1)");
        Ok(n)
    }

}
