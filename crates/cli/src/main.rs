use advisor_core::knowledge::KnowledgeBase;
use advisor_core::recommender::{Recommender, RecommenderOptions};
use advisor_core::scoring::ScoringStrategy;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod profile;

#[derive(Debug, Parser)]
#[command(name = "advisor", about = "Investment recommendation for a single investor profile")]
struct Args {
    /// JSON file with age, risk_score, time_horizon, initial_investment,
    /// target_amount and an optional user_profile map.
    #[arg(
        long,
        conflicts_with_all = [
            "age",
            "risk_score",
            "time_horizon",
            "initial_investment",
            "target_amount",
        ]
    )]
    profile: Option<PathBuf>,

    #[arg(long)]
    age: Option<i64>,

    /// Risk tolerance, 0..=100.
    #[arg(long)]
    risk_score: Option<i64>,

    /// Investment horizon in years.
    #[arg(long)]
    time_horizon: Option<i64>,

    #[arg(long)]
    initial_investment: Option<f64>,

    #[arg(long)]
    target_amount: Option<f64>,

    /// Extra profile attribute, e.g. existing_investments=Equity,Banking. Repeatable.
    #[arg(long = "ext", value_name = "KEY=VALUES")]
    extensions: Vec<String>,

    /// Scoring strategy (three_factor or five_factor). Overrides SCORING_STRATEGY.
    #[arg(long)]
    strategy: Option<ScoringStrategy>,

    /// Ask the configured LLM provider for a narrative.
    #[arg(long)]
    narrative: bool,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let user_profile = profile::resolve(
        args.profile.as_deref(),
        profile::ProfileFlags {
            age: args.age,
            risk_score: args.risk_score,
            time_horizon: args.time_horizon,
            initial_investment: args.initial_investment,
            target_amount: args.target_amount,
            extensions: args.extensions,
        },
    )
    .inspect_err(|e| tracing::error!(error = %e, "invalid profile"))?;

    let mut options = RecommenderOptions::from_settings(&settings);
    if let Some(strategy) = args.strategy {
        options.strategy = strategy;
    }

    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    let recommender = Recommender::new(Arc::clone(&knowledge), options);

    let output = if args.narrative {
        let llm = advisor_core::llm::from_settings(&settings)?;
        match recommender
            .generate_personalized_recommendation(&user_profile, knowledge.as_ref(), llm.as_ref())
            .await
        {
            Ok(personalized) => serde_json::to_value(&personalized)?,
            Err(failure) => {
                let err = anyhow::anyhow!("{failure}");
                sentry_anyhow::capture_anyhow(&err);
                if let Some(diag) = failure
                    .error
                    .downcast_ref::<advisor_core::llm::error::LlmDiagnosticsError>()
                {
                    tracing::warn!(
                        provider = %diag.provider,
                        stage = diag.stage,
                        transient = diag.is_transient(),
                        "LLM call failed; emitting structured recommendation only"
                    );
                }
                let mut value = serde_json::to_value(&*failure.recommendation)?;
                if let Some(obj) = value.as_object_mut() {
                    obj.insert(
                        "narrative_error".to_string(),
                        serde_json::Value::String(format!("{:#}", failure.error)),
                    );
                }
                value
            }
        }
    } else {
        serde_json::to_value(recommender.generate_comprehensive_recommendation(&user_profile))?
    };

    let rendered = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");

    Ok(())
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
