use crate::domain::instrument::{DebtFund, InstrumentBase, MutualFund, Stock};
use crate::domain::recommendation::InvestmentPrinciple;
use serde_json::json;

fn base(
    name: &str,
    kind: &str,
    risk_score: f64,
    expected_returns: f64,
    expense_ratio: f64,
    tax_efficiency: f64,
) -> InstrumentBase {
    InstrumentBase {
        name: name.to_string(),
        kind: kind.to_string(),
        risk_score,
        expected_returns,
        expense_ratio,
        tax_efficiency,
        recommended_horizon_years: None,
        minimum_investment: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn stock(
    name: &str,
    symbol: &str,
    risk_score: f64,
    expected_returns: f64,
    sector: &str,
    market_cap: f64,
    pe_ratio: f64,
    dividend_yield: f64,
    beta: f64,
    tax_efficiency: f64,
    key_strengths: &[&str],
    potential_risks: &[&str],
) -> Stock {
    Stock {
        base: base(name, "Equity", risk_score, expected_returns, 0.01, tax_efficiency),
        symbol: symbol.to_string(),
        sector: sector.to_string(),
        market_cap,
        pe_ratio,
        dividend_yield,
        beta,
        key_strengths: strings(key_strengths),
        potential_risks: strings(potential_risks),
    }
}

#[rustfmt::skip]
pub(crate) fn stocks() -> Vec<Stock> {
    vec![
        stock("Reliance Industries Limited", "RELIANCE", 0.7, 0.12, "Oil & Gas", 1_628_000.0, 24.5, 1.2, 1.1, 0.8,
            &["Diversified portfolio", "Strong retail and telecom presence"],
            &["Regulatory challenges", "Global oil price volatility"]),
        stock("HDFC Bank Limited", "HDFCBANK", 0.5, 0.14, "Banking", 1_500_000.0, 20.2, 1.8, 1.1, 0.7,
            &["Strong retail banking", "Consistent growth"],
            &["Regulatory changes"]),
        stock("Infosys Limited", "INFY", 0.6, 0.15, "IT", 750_000.0, 23.5, 2.1, 0.9, 0.8,
            &["Digital transformation", "Global client base"],
            &["Tech sector volatility", "Currency fluctuations"]),
        stock("ICICI Bank Limited", "ICICIBANK", 0.55, 0.13, "Banking", 1_400_000.0, 21.0, 1.6, 1.0, 0.75,
            &["Strong retail growth", "Digital innovations"],
            &["Economic slowdown"]),
        stock("Tata Consultancy Services", "TCS", 0.6, 0.14, "IT", 1_300_000.0, 29.3, 1.5, 0.8, 0.85,
            &["Global delivery model", "Robust financials"],
            &["Employee attrition"]),
        stock("ITC Limited", "ITC", 0.5, 0.10, "FMCG", 582_666.49, 24.5, 3.5, 0.8, 0.75,
            &["Diversified product portfolio", "Strong brand recognition"],
            &["Regulatory challenges in tobacco industry"]),
        stock("Axis Bank Limited", "AXISBANK", 0.6, 0.12, "Banking", 352_882.80, 18.7, 1.2, 1.1, 0.70,
            &["Robust retail banking", "Expanding digital services"],
            &["Asset quality concerns"]),
        stock("Larsen & Toubro Limited", "LT", 0.55, 0.11, "Construction", 486_060.70, 20.0, 1.5, 1.0, 0.72,
            &["Strong order book", "Diversified operations"],
            &["Project execution delays"]),
        stock("State Bank of India", "SBIN", 0.6, 0.13, "Banking", 717_584.07, 15.5, 2.0, 1.2, 0.70,
            &["Extensive branch network", "Government backing"],
            &["Non-performing assets"]),
        stock("Bajaj Finance Limited", "BAJFINANCE", 0.65, 0.14, "Financial Services", 405_404.87, 30.0, 0.8, 1.3, 0.68,
            &["Strong retail lending", "Innovative financial products"],
            &["Credit risk exposure"]),
        stock("Asian Paints Limited", "ASIANPAINT", 0.5, 0.10, "Chemicals", 238_060.14, 50.0, 1.0, 0.9, 0.75,
            &["Market leadership", "Strong distribution network"],
            &["Raw material price volatility"]),
        stock("Bharti Airtel Limited", "BHARTIARTL", 0.6, 0.12, "Telecommunications", 884_553.82, 25.0, 1.5, 1.1, 0.70,
            &["Large subscriber base", "Expanding 4G/5G services"],
            &["Intense competition"]),
        stock("HCL Technologies Limited", "HCLTECH", 0.55, 0.11, "IT", 504_565.32, 20.0, 2.5, 0.9, 0.75,
            &["Strong software services", "Global client base"],
            &["Currency fluctuations"]),
        stock("Maruti Suzuki India Limited", "MARUTI", 0.6, 0.12, "Automobile", 346_009.46, 35.0, 1.0, 1.0, 0.70,
            &["Market leader in passenger vehicles", "Extensive dealer network"],
            &["Economic downturns"]),
        stock("Tata Steel Limited", "TATASTEEL", 0.65, 0.13, "Metals", 172_111.50, 10.0, 2.0, 1.2, 0.68,
            &["Integrated steel production", "Global presence"],
            &["Cyclical industry risks"]),
    ]
}

pub(crate) fn mutual_funds() -> Vec<MutualFund> {
    vec![
        MutualFund {
            base: base("HDFC Balanced Advantage Fund", "Hybrid", 0.5, 0.12, 0.02, 0.85),
            category: "Balanced".into(),
            aum: 50_000.0,
            fund_manager: "Fund Manager X".into(),
            fund_house: "HDFC Mutual Fund".into(),
            tracking_error: 2.5,
            benchmark_index: "NIFTY 50".into(),
        },
        MutualFund {
            base: base("SBI Bluechip Fund", "Equity", 0.6, 0.14, 0.018, 0.8),
            category: "Large Cap".into(),
            aum: 75_000.0,
            fund_manager: "Fund Manager Y".into(),
            fund_house: "SBI Mutual Fund".into(),
            tracking_error: 2.0,
            benchmark_index: "NIFTY 50".into(),
        },
    ]
}

pub(crate) fn debt_funds() -> Vec<DebtFund> {
    vec![
        DebtFund {
            base: base("ICICI Prudential Gilt Fund", "Debt", 0.2, 0.07, 0.015, 0.9),
            duration: "Long Term".into(),
            credit_rating: "AAA".into(),
            govt_securities_percentage: 80.0,
            corporate_bonds_percentage: 20.0,
        },
        DebtFund {
            base: base("Axis Short Term Fund", "Debt", 0.3, 0.08, 0.012, 0.85),
            duration: "Short Term".into(),
            credit_rating: "AA".into(),
            govt_securities_percentage: 40.0,
            corporate_bonds_percentage: 60.0,
        },
    ]
}

fn principle(
    principle: &str,
    description: &str,
    details: serde_json::Value,
) -> InvestmentPrinciple {
    let details = match details {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    InvestmentPrinciple {
        principle: principle.to_string(),
        description: description.to_string(),
        details,
    }
}

pub(crate) fn principles() -> Vec<InvestmentPrinciple> {
    vec![
        principle(
            "Asset Allocation Strategy",
            "Dynamic asset allocation based on age, risk tolerance, and financial goals",
            json!({
                "recommended_allocation": {
                    "low_risk": {"equity": "40-50%", "debt": "50-60%", "alternatives": "0-10%"},
                    "moderate_risk": {"equity": "60-70%", "debt": "30-40%", "alternatives": "0-10%"},
                    "high_risk": {"equity": "70-80%", "debt": "20-30%", "alternatives": "0-10%"}
                }
            }),
        ),
        principle(
            "Risk Management",
            "Gradual risk reduction as retirement approaches",
            json!({
                "age_based_strategy": {
                    "20-35": "Aggressive growth",
                    "36-45": "Balanced growth",
                    "46-55": "Conservative growth",
                    "56+": "Capital preservation"
                }
            }),
        ),
        principle(
            "Tax Optimization",
            "Leverage tax-efficient investment vehicles",
            json!({
                "strategies": [
                    "Use ELSS for tax deductions",
                    "Utilize long-term capital gains benefits",
                    "Consider tax-saving mutual funds"
                ]
            }),
        ),
    ]
}

pub(crate) fn tax_optimization_strategies() -> Vec<String> {
    strings(&[
        "Utilize ELSS for tax deductions under Section 80C",
        "Consider long-term capital gains tax benefits",
        "Optimize debt fund investments for tax efficiency",
    ])
}
