use serde::Serialize;

use crate::ledger;
use crate::metrics::MetricsEnvelope;
use crate::models::Table;
use crate::risk;
use crate::taxonomy::{find_column, AMOUNT_COLUMN_MARKERS, CATEGORY_COLUMN_MARKERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    RiskApplicant,
    Ledger,
}

/// Extraction strategy, chosen once per table from column names alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    RiskApplicant,
    RowWise { category: String, amount: String },
    ColumnWise,
}

impl Strategy {
    pub fn key(&self) -> &'static str {
        match self {
            Self::RiskApplicant => "risk_applicant",
            Self::RowWise { .. } => "row_wise",
            Self::ColumnWise => "column_wise",
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::RiskApplicant => Shape::RiskApplicant,
            Self::RowWise { .. } | Self::ColumnWise => Shape::Ledger,
        }
    }

    /// Runs the extractor for this strategy over a normalized table.
    pub fn extract(&self, table: &Table, industry: Option<&str>) -> MetricsEnvelope {
        match self {
            Self::RiskApplicant => risk::extract(table, industry),
            Self::RowWise { category, amount } => {
                ledger::extract_rows(table, category, amount, industry)
            }
            Self::ColumnWise => ledger::extract_columns(table, industry),
        }
    }
}

pub fn detect_shape(table: &Table) -> Shape {
    if risk::SIGNATURE.iter().all(|name| table.has_column(name)) {
        Shape::RiskApplicant
    } else {
        Shape::Ledger
    }
}

/// Expects normalized (lowercased, trimmed) column names.
pub fn detect_strategy(table: &Table) -> Strategy {
    if detect_shape(table) == Shape::RiskApplicant {
        return Strategy::RiskApplicant;
    }
    let category = find_column(table.column_names(), CATEGORY_COLUMN_MARKERS);
    let amount = find_column(table.column_names(), AMOUNT_COLUMN_MARKERS);
    match (category, amount) {
        (Some(category), Some(amount)) => Strategy::RowWise {
            category: category.to_string(),
            amount: amount.to_string(),
        },
        _ => Strategy::ColumnWise,
    }
}
