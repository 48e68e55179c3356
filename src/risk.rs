use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::metrics::{MetricsBuilder, MetricsEnvelope};
use crate::models::{Cell, Column, Table};
use crate::taxonomy::{Dimension, PnlSide};

pub const LOAN_AMOUNT: &str = "loan amount";
pub const INCOME: &str = "income";
pub const RISK_RATING: &str = "risk rating";
pub const EMPLOYMENT_STATUS: &str = "employment status";
pub const LOAN_PURPOSE: &str = "loan purpose";
pub const DEBT_TO_INCOME: &str = "debt-to-income ratio";
pub const CREDIT_SCORE: &str = "credit score";

pub const ESTIMATED_DEBT_SERVICE: &str = "Estimated Debt Service";

/// Column signature of a row-per-applicant dataset.
pub const SIGNATURE: [&str; 3] = [LOAN_AMOUNT, INCOME, RISK_RATING];

fn column_sum(col: Option<&Column>) -> f64 {
    col.map_or(0.0, |c| c.cells.iter().filter_map(Cell::coerce_number).sum())
}

/// Sums `values` grouped by the label of `keys`; rows with a null key or a
/// non-numeric value are left out.
fn grouped_sum(keys: &Column, values: &Column) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for (key, value) in keys.cells.iter().zip(&values.cells) {
        if key.is_null() {
            continue;
        }
        let Some(amount) = value.coerce_number() else {
            continue;
        };
        *groups.entry(key.label()).or_default() += amount;
    }
    groups
}

/// Aggregates an applicant table (names already normalized) into buckets.
pub fn extract(table: &Table, industry: Option<&str>) -> MetricsEnvelope {
    let income = table.column(INCOME);
    let loans = table.column(LOAN_AMOUNT);
    let mut metrics = MetricsBuilder::new();

    // Rows without a group label still count toward the headline totals.
    let revenue = metrics.side(PnlSide::Revenue);
    if let (Some(status), Some(income)) = (table.column(EMPLOYMENT_STATUS), income) {
        for (label, amount) in grouped_sum(status, income) {
            revenue.add(&label, amount);
        }
    }
    revenue.total = column_sum(income);

    let loan_bucket = metrics.dimension(Dimension::Loans);
    if let (Some(purpose), Some(loans)) = (table.column(LOAN_PURPOSE), loans) {
        for (label, amount) in grouped_sum(purpose, loans) {
            loan_bucket.add_item(&label, amount);
        }
    }
    loan_bucket.total = column_sum(loans);

    let debt_service = match (table.column(DEBT_TO_INCOME), income) {
        (Some(dti), Some(income)) => dti
            .cells
            .iter()
            .zip(&income.cells)
            .filter_map(|(r, i)| Some(r.coerce_number()? * i.coerce_number()?))
            .sum(),
        _ => 0.0,
    };
    metrics
        .side(PnlSide::Expense)
        .add(ESTIMATED_DEBT_SERVICE, debt_service);

    let envelope = metrics.finish(industry);
    info!(
        applicants = table.row_count(),
        revenue = envelope.revenue_streams().total,
        loans = envelope.loan_obligations().total,
        debt_service,
        "extracted risk-applicant dataset"
    );
    envelope
}

// ---------------------------------------------------------------------------
// Applicant profile
// ---------------------------------------------------------------------------

/// Informational signals from an applicant table. Never part of the
/// metrics envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub applicants: usize,
    pub risk_counts: BTreeMap<String, usize>,
    pub majority_risk: String,
    pub average_credit_score: Option<f64>,
}

pub fn applicant_profile(table: &Table) -> ApplicantProfile {
    let mut risk_counts: BTreeMap<String, usize> = BTreeMap::new();
    if let Some(col) = table.column(RISK_RATING) {
        for cell in col.cells.iter().filter(|c| !c.is_null()) {
            *risk_counts.entry(cell.label()).or_default() += 1;
        }
    }

    // BTreeMap iterates in label order, so ties keep the smallest label.
    let mut majority: Option<(&String, usize)> = None;
    for (label, &count) in &risk_counts {
        if majority.map_or(true, |(_, best)| count > best) {
            majority = Some((label, count));
        }
    }
    let majority_risk = majority.map_or_else(|| "Unknown".to_string(), |(l, _)| l.clone());

    let average_credit_score = table.column(CREDIT_SCORE).and_then(|col| {
        let scores: Vec<f64> = col.cells.iter().filter_map(Cell::coerce_number).collect();
        (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64)
    });

    ApplicantProfile {
        applicants: table.row_count(),
        risk_counts,
        majority_risk,
        average_credit_score,
    }
}
