use crate::domain::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw profile as callers submit it. Field names follow the request schema,
/// not the validated [`UserProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub age: i64,
    pub risk_score: i64,
    pub time_horizon: i64,
    pub initial_investment: f64,
    pub target_amount: f64,
    #[serde(default)]
    pub user_profile: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("age must be between 1 and 120 (got {0})")]
    Age(i64),
    #[error("risk_score must be between 0 and 100 (got {0})")]
    RiskScore(i64),
    #[error("time_horizon must be between 1 and 100 years (got {0})")]
    TimeHorizon(i64),
    #[error("initial_investment must be a positive amount (got {0})")]
    InitialInvestment(f64),
    #[error("target_amount must be a non-negative amount (got {0})")]
    TargetAmount(f64),
}

impl ProfileRequest {
    pub fn validate_and_into_profile(self) -> Result<UserProfile, ProfileError> {
        let age = u32::try_from(self.age)
            .ok()
            .filter(|a| (1..=120).contains(a))
            .ok_or(ProfileError::Age(self.age))?;

        let risk_score = u8::try_from(self.risk_score)
            .ok()
            .filter(|r| *r <= 100)
            .ok_or(ProfileError::RiskScore(self.risk_score))?;

        let time_horizon_years = u32::try_from(self.time_horizon)
            .ok()
            .filter(|h| (1..=100).contains(h))
            .ok_or(ProfileError::TimeHorizon(self.time_horizon))?;

        if !(self.initial_investment.is_finite() && self.initial_investment > 0.0) {
            return Err(ProfileError::InitialInvestment(self.initial_investment));
        }
        if !(self.target_amount.is_finite() && self.target_amount >= 0.0) {
            return Err(ProfileError::TargetAmount(self.target_amount));
        }

        let extensions: BTreeMap<String, serde_json::Value> =
            self.user_profile.unwrap_or_default().into_iter().collect();

        Ok(UserProfile {
            age,
            risk_score,
            time_horizon_years,
            initial_investment: self.initial_investment,
            target_amount: self.target_amount,
            extensions,
        })
    }
}
