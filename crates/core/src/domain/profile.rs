use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extension keys the advisor understands inside `UserProfile::extensions`.
pub const EXT_EXISTING_INVESTMENTS: &str = "existing_investments";
pub const EXT_EXISTING_SECTORS: &str = "existing_sectors";
pub const EXT_INVESTMENT_GOALS: &str = "investment_goals";

/// A validated investor profile. Build one through
/// [`crate::domain::contract::ProfileRequest::validate_and_into_profile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    /// Risk tolerance on a 0..=100 scale.
    pub risk_score: u8,
    pub time_horizon_years: u32,
    pub initial_investment: f64,
    pub target_amount: f64,
    /// Forward-compatible custom attributes supplied by the caller.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    /// Risk tolerance on the same 0..=1 scale as instrument risk scores.
    pub fn normalized_risk(&self) -> f64 {
        f64::from(self.risk_score) / 100.0
    }

    pub fn risk_category(&self) -> &'static str {
        match self.risk_score {
            0..=39 => "low_risk",
            40..=69 => "moderate_risk",
            _ => "high_risk",
        }
    }

    pub fn age_bracket(&self) -> &'static str {
        match self.age {
            0..=34 => "20-35",
            35..=45 => "36-45",
            46..=55 => "46-55",
            _ => "56+",
        }
    }

    pub fn existing_investments(&self) -> Vec<String> {
        self.string_list(EXT_EXISTING_INVESTMENTS)
    }

    pub fn existing_sectors(&self) -> Vec<String> {
        self.string_list(EXT_EXISTING_SECTORS)
    }

    pub fn investment_goals(&self) -> Vec<String> {
        self.string_list(EXT_INVESTMENT_GOALS)
    }

    /// Lowercased union of existing investments and sectors, used by the
    /// diversification sub-score.
    pub fn held_keys(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .existing_investments()
            .into_iter()
            .chain(self.existing_sectors())
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        match self.extensions.get(key) {
            Some(serde_json::Value::Array(values)) => values
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
            // A bare string is accepted as a single-entry list.
            Some(serde_json::Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn profile(age: u32, risk_score: u8) -> UserProfile {
        UserProfile {
            age,
            risk_score,
            time_horizon_years: 10,
            initial_investment: 1_000_000.0,
            target_amount: 10_000_000.0,
            extensions: BTreeMap::new(),
        }
    }

    #[test]
    fn risk_category_boundaries() {
        assert_eq!(profile(30, 0).risk_category(), "low_risk");
        assert_eq!(profile(30, 39).risk_category(), "low_risk");
        assert_eq!(profile(30, 40).risk_category(), "moderate_risk");
        assert_eq!(profile(30, 69).risk_category(), "moderate_risk");
        assert_eq!(profile(30, 70).risk_category(), "high_risk");
        assert_eq!(profile(30, 100).risk_category(), "high_risk");
    }

    #[test]
    fn age_bracket_boundaries() {
        assert_eq!(profile(34, 50).age_bracket(), "20-35");
        assert_eq!(profile(35, 50).age_bracket(), "36-45");
        assert_eq!(profile(45, 50).age_bracket(), "36-45");
        assert_eq!(profile(46, 50).age_bracket(), "46-55");
        assert_eq!(profile(55, 50).age_bracket(), "46-55");
        assert_eq!(profile(56, 50).age_bracket(), "56+");
    }

    #[test]
    fn held_keys_merges_and_normalizes_extensions() {
        let mut p = profile(40, 50);
        p.extensions
            .insert(EXT_EXISTING_INVESTMENTS.into(), json!(["Equity", 7, "Debt"]));
        p.extensions.insert(EXT_EXISTING_SECTORS.into(), json!("Banking"));
        assert_eq!(p.held_keys(), vec!["banking", "debt", "equity"]);
        assert!(p.investment_goals().is_empty());
    }
}
