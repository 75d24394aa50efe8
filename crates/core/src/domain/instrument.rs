use serde::{Deserialize, Serialize};

/// Fields every catalog instrument carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentBase {
    pub name: String,
    /// Kind label such as "Equity", "Hybrid" or "Debt".
    #[serde(rename = "type")]
    pub kind: String,
    /// Riskiness on a 0..=1 scale.
    pub risk_score: f64,
    pub expected_returns: f64,
    pub expense_ratio: f64,
    pub tax_efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_horizon_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_investment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(flatten)]
    pub base: InstrumentBase,
    pub symbol: String,
    pub sector: String,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub dividend_yield: f64,
    pub beta: f64,
    pub key_strengths: Vec<String>,
    pub potential_risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualFund {
    #[serde(flatten)]
    pub base: InstrumentBase,
    pub category: String,
    pub aum: f64,
    pub fund_manager: String,
    pub fund_house: String,
    pub tracking_error: f64,
    pub benchmark_index: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtFund {
    #[serde(flatten)]
    pub base: InstrumentBase,
    pub duration: String,
    pub credit_rating: String,
    pub govt_securities_percentage: f64,
    pub corporate_bonds_percentage: f64,
}

/// Common view over the instrument variants used by scoring and selection.
pub trait InstrumentRecord {
    fn base(&self) -> &InstrumentBase;

    /// Labels compared against the user's holdings for diversification.
    fn diversification_keys(&self) -> Vec<&str> {
        vec![self.base().kind.as_str()]
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn risk_score(&self) -> f64 {
        self.base().risk_score
    }
}

impl InstrumentRecord for Stock {
    fn base(&self) -> &InstrumentBase {
        &self.base
    }

    fn diversification_keys(&self) -> Vec<&str> {
        vec![self.sector.as_str(), self.base.kind.as_str()]
    }
}

impl InstrumentRecord for MutualFund {
    fn base(&self) -> &InstrumentBase {
        &self.base
    }

    fn diversification_keys(&self) -> Vec<&str> {
        vec![self.category.as_str(), self.base.kind.as_str()]
    }
}

impl InstrumentRecord for DebtFund {
    fn base(&self) -> &InstrumentBase {
        &self.base
    }
}

/// Any catalog instrument, for heterogeneous lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument_class", rename_all = "snake_case")]
pub enum Instrument {
    Stock(Stock),
    MutualFund(MutualFund),
    DebtFund(DebtFund),
}

impl InstrumentRecord for Instrument {
    fn base(&self) -> &InstrumentBase {
        match self {
            Instrument::Stock(s) => s.base(),
            Instrument::MutualFund(f) => f.base(),
            Instrument::DebtFund(f) => f.base(),
        }
    }

    fn diversification_keys(&self) -> Vec<&str> {
        match self {
            Instrument::Stock(s) => s.diversification_keys(),
            Instrument::MutualFund(f) => f.diversification_keys(),
            Instrument::DebtFund(f) => f.diversification_keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stock_serializes_flat_with_type_key() {
        let stock = Stock {
            base: InstrumentBase {
                name: "Infosys Limited".into(),
                kind: "Equity".into(),
                risk_score: 0.6,
                expected_returns: 0.15,
                expense_ratio: 0.01,
                tax_efficiency: 0.8,
                recommended_horizon_years: None,
                minimum_investment: None,
            },
            symbol: "INFY".into(),
            sector: "IT".into(),
            market_cap: 750000.0,
            pe_ratio: 23.5,
            dividend_yield: 2.1,
            beta: 0.9,
            key_strengths: vec!["Global client base".into()],
            potential_risks: vec![],
        };

        let value = serde_json::to_value(&stock).unwrap();
        assert_eq!(value["type"], json!("Equity"));
        assert_eq!(value["sector"], json!("IT"));
        assert!(value.get("base").is_none());
        assert!(value.get("minimum_investment").is_none());
        assert_eq!(stock.diversification_keys(), vec!["IT", "Equity"]);

        let tagged = serde_json::to_value(Instrument::Stock(stock)).unwrap();
        assert_eq!(tagged["instrument_class"], json!("stock"));
    }
}
