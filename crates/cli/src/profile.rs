use advisor_core::domain::contract::ProfileRequest;
use advisor_core::domain::profile::UserProfile;
use anyhow::Context;
use std::path::Path;

/// Profile fields given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ProfileFlags {
    pub age: Option<i64>,
    pub risk_score: Option<i64>,
    pub time_horizon: Option<i64>,
    pub initial_investment: Option<f64>,
    pub target_amount: Option<f64>,
    /// `key=value` pairs for the extension map; comma-separated values become lists.
    pub extensions: Vec<String>,
}

impl ProfileFlags {
    pub fn into_request(self) -> anyhow::Result<ProfileRequest> {
        let mut user_profile = serde_json::Map::new();
        for pair in &self.extensions {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("extension must be key=value (got {pair})"))?;
            let items: Vec<serde_json::Value> = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| serde_json::Value::String(s.to_string()))
                .collect();
            user_profile.insert(key.trim().to_string(), serde_json::Value::Array(items));
        }

        Ok(ProfileRequest {
            age: self.age.context("--age is required without --profile")?,
            risk_score: self
                .risk_score
                .context("--risk-score is required without --profile")?,
            time_horizon: self
                .time_horizon
                .context("--time-horizon is required without --profile")?,
            initial_investment: self
                .initial_investment
                .context("--initial-investment is required without --profile")?,
            target_amount: self
                .target_amount
                .context("--target-amount is required without --profile")?,
            user_profile: (!user_profile.is_empty()).then_some(user_profile),
        })
    }
}

pub fn read_request(path: &Path) -> anyhow::Result<ProfileRequest> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile file {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("profile file {} is not a valid profile", path.display()))
}

pub fn resolve(path: Option<&Path>, flags: ProfileFlags) -> anyhow::Result<UserProfile> {
    let request = match path {
        Some(p) => read_request(p)?,
        None => flags.into_request()?,
    };
    Ok(request.validate_and_into_profile()?)
}
