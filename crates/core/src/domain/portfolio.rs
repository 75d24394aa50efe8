use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Equity,
    Debt,
    Alternatives,
}

/// Target fractions of the total investment per bucket. Fractions sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub equity: f64,
    pub debt: f64,
    pub alternatives: f64,
}

impl AllocationPlan {
    pub fn fraction(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Equity => self.equity,
            Bucket::Debt => self.debt,
            Bucket::Alternatives => self.alternatives,
        }
    }

    pub fn total(&self) -> f64 {
        self.equity + self.debt + self.alternatives
    }
}

/// Catalog categories a recommendation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Stocks,
    MutualFunds,
    DebtFunds,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Stocks, Category::MutualFunds, Category::DebtFunds];

    /// Bucket whose amount funds this category. Mutual funds are sized from
    /// the debt bucket, the same as debt funds.
    pub fn bucket(self) -> Bucket {
        match self {
            Category::Stocks => Bucket::Equity,
            Category::MutualFunds | Category::DebtFunds => Bucket::Debt,
        }
    }

    /// Maximum number of selections per category.
    pub fn top_k(self) -> usize {
        match self {
            Category::Stocks => 3,
            Category::MutualFunds | Category::DebtFunds => 2,
        }
    }
}
