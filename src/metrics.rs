use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{FinHealthError, Result};
use crate::taxonomy::{Dimension, PnlSide};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub item: String,
    pub amount: f64,
}

/// Revenue or cost bucket, itemized by category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub total: f64,
    pub categories: BTreeMap<String, f64>,
}

impl CategoryBucket {
    /// Adds to the running total. A repeated category keeps only its latest
    /// amount, so `total` can exceed the sum of `categories`.
    pub fn add(&mut self, category: &str, amount: f64) {
        self.total += amount;
        self.categories.insert(category.to_string(), amount);
    }
}

/// Balance dimension bucket with an optional per-item breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailBucket {
    pub total: f64,
    pub details: Vec<DetailItem>,
}

impl DetailBucket {
    pub fn add_item(&mut self, item: &str, amount: f64) {
        self.total += amount;
        self.details.push(DetailItem {
            item: item.to_string(),
            amount,
        });
    }

    pub fn add_total(&mut self, amount: f64) {
        self.total += amount;
    }
}

/// The sole artifact of an extraction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsEnvelope {
    revenue_streams: CategoryBucket,
    cost_structure: CategoryBucket,
    net_profit: f64,
    accounts_receivable: DetailBucket,
    accounts_payable: DetailBucket,
    inventory_levels: DetailBucket,
    loan_obligations: DetailBucket,
    tax_compliance: DetailBucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    industry: Option<String>,
}

impl MetricsEnvelope {
    pub fn revenue_streams(&self) -> &CategoryBucket {
        &self.revenue_streams
    }

    pub fn cost_structure(&self) -> &CategoryBucket {
        &self.cost_structure
    }

    pub fn net_profit(&self) -> f64 {
        self.net_profit
    }

    pub fn accounts_receivable(&self) -> &DetailBucket {
        &self.accounts_receivable
    }

    pub fn accounts_payable(&self) -> &DetailBucket {
        &self.accounts_payable
    }

    pub fn inventory_levels(&self) -> &DetailBucket {
        &self.inventory_levels
    }

    pub fn loan_obligations(&self) -> &DetailBucket {
        &self.loan_obligations
    }

    pub fn tax_compliance(&self) -> &DetailBucket {
        &self.tax_compliance
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn dimension(&self, dim: Dimension) -> &DetailBucket {
        match dim {
            Dimension::Receivable => &self.accounts_receivable,
            Dimension::Payable => &self.accounts_payable,
            Dimension::Inventory => &self.inventory_levels,
            Dimension::Loans => &self.loan_obligations,
            Dimension::Tax => &self.tax_compliance,
        }
    }

    /// Buckets in contract order, keyed by their envelope name.
    pub fn detail_buckets(&self) -> [(&'static str, &DetailBucket); 5] {
        [
            ("accounts_receivable", &self.accounts_receivable),
            ("accounts_payable", &self.accounts_payable),
            ("inventory_levels", &self.inventory_levels),
            ("loan_obligations", &self.loan_obligations),
            ("tax_compliance", &self.tax_compliance),
        ]
    }

    /// False when a running total overflowed; such values serialize as null.
    pub fn is_finite(&self) -> bool {
        self.net_profit.is_finite()
            && self.revenue_streams.total.is_finite()
            && self.cost_structure.total.is_finite()
            && self.detail_buckets().iter().all(|(_, b)| b.total.is_finite())
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| FinHealthError::Other(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Running bucket state for one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct MetricsBuilder {
    revenue_streams: CategoryBucket,
    cost_structure: CategoryBucket,
    accounts_receivable: DetailBucket,
    accounts_payable: DetailBucket,
    inventory_levels: DetailBucket,
    loan_obligations: DetailBucket,
    tax_compliance: DetailBucket,
}

impl MetricsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&mut self, side: PnlSide) -> &mut CategoryBucket {
        match side {
            PnlSide::Revenue => &mut self.revenue_streams,
            PnlSide::Expense => &mut self.cost_structure,
        }
    }

    pub fn dimension(&mut self, dim: Dimension) -> &mut DetailBucket {
        match dim {
            Dimension::Receivable => &mut self.accounts_receivable,
            Dimension::Payable => &mut self.accounts_payable,
            Dimension::Inventory => &mut self.inventory_levels,
            Dimension::Loans => &mut self.loan_obligations,
            Dimension::Tax => &mut self.tax_compliance,
        }
    }

    /// Seals the buckets into an envelope; net profit is derived here only.
    pub fn finish(self, industry: Option<&str>) -> MetricsEnvelope {
        let net_profit = self.revenue_streams.total - self.cost_structure.total;
        let envelope = MetricsEnvelope {
            revenue_streams: self.revenue_streams,
            cost_structure: self.cost_structure,
            net_profit,
            accounts_receivable: self.accounts_receivable,
            accounts_payable: self.accounts_payable,
            inventory_levels: self.inventory_levels,
            loan_obligations: self.loan_obligations,
            tax_compliance: self.tax_compliance,
            industry: industry.map(str::to_string),
        };
        if !envelope.is_finite() {
            warn!(
                revenue = envelope.revenue_streams.total,
                costs = envelope.cost_structure.total,
                "bucket total overflowed; non-finite values serialize as null"
            );
        }
        envelope
    }
}
