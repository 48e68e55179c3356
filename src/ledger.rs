use tracing::{debug, info};

use crate::metrics::{MetricsBuilder, MetricsEnvelope};
use crate::models::Table;
use crate::taxonomy::classify;

// ---------------------------------------------------------------------------
// Row-wise: one row per financial item
// ---------------------------------------------------------------------------

/// Classifies each row's label and files its amount. Rows whose amount does
/// not coerce to a number are skipped without error.
pub fn extract_rows(
    table: &Table,
    category_col: &str,
    amount_col: &str,
    industry: Option<&str>,
) -> MetricsEnvelope {
    let mut metrics = MetricsBuilder::new();
    let (Some(categories), Some(amounts)) = (table.column(category_col), table.column(amount_col))
    else {
        return metrics.finish(industry);
    };

    let mut skipped = 0usize;
    for (idx, (label_cell, amount_cell)) in categories.cells.iter().zip(&amounts.cells).enumerate() {
        let Some(amount) = amount_cell.coerce_number() else {
            debug!(row = idx, value = ?amount_cell, "skipping row with non-numeric amount");
            skipped += 1;
            continue;
        };
        let label = label_cell.label();
        let class = classify(&label);

        if let Some(side) = class.side {
            metrics.side(side).add(&label, amount);
        }
        for dim in class.dimensions {
            metrics.dimension(dim).add_item(&label, amount);
        }
    }

    let envelope = metrics.finish(industry);
    info!(
        rows = table.row_count(),
        skipped,
        category_col,
        amount_col,
        net_profit = envelope.net_profit(),
        "extracted row-wise ledger"
    );
    envelope
}

// ---------------------------------------------------------------------------
// Column-wise: every column is a financial dimension
// ---------------------------------------------------------------------------

/// Sums each numeric column and classifies it by name. Balance dimensions
/// only receive totals here; a whole column is a single item.
pub fn extract_columns(table: &Table, industry: Option<&str>) -> MetricsEnvelope {
    let mut metrics = MetricsBuilder::new();

    for column in table.columns() {
        let total = match column.numeric_sum() {
            Some(total) => total,
            None => {
                debug!(column = %column.name, "column is not summable, treating as zero");
                0.0
            }
        };
        if total == 0.0 {
            continue;
        }

        let class = classify(&column.name);
        if let Some(side) = class.side {
            metrics.side(side).add(&column.name, total);
        }
        for dim in class.dimensions {
            metrics.dimension(dim).add_total(total);
        }
    }

    let envelope = metrics.finish(industry);
    info!(
        columns = table.columns().len(),
        net_profit = envelope.net_profit(),
        "extracted column-wise ledger"
    );
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use crate::taxonomy::Dimension;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn ledger(rows: &[(&str, Cell)]) -> Table {
        Table::from_rows(
            vec!["category".into(), "amount".into()],
            rows.iter().map(|(c, a)| vec![text(c), a.clone()]).collect(),
        )
    }

    #[test]
    fn test_rows_basic_scenario() {
        let table = ledger(&[
            ("Sales", Cell::Number(1000.0)),
            ("Rent", Cell::Number(200.0)),
            ("GST", Cell::Number(50.0)),
        ]);
        let env = extract_rows(&table, "category", "amount", None);
        assert_eq!(env.revenue_streams().total, 1000.0);
        assert_eq!(env.revenue_streams().categories["Sales"], 1000.0);
        assert_eq!(env.cost_structure().total, 200.0);
        assert_eq!(env.cost_structure().categories["Rent"], 200.0);
        assert_eq!(env.tax_compliance().total, 50.0);
        assert_eq!(env.tax_compliance().details.len(), 1);
        assert_eq!(env.tax_compliance().details[0].item, "GST");
        assert_eq!(env.net_profit(), 800.0);
    }

    #[test]
    fn test_rows_skip_non_numeric_amounts() {
        let table = ledger(&[
            ("Sales", text("1,000")),
            ("Sales", text(" 250 ")),
            ("Rent", Cell::Null),
            ("Rent", text("pending")),
        ]);
        let env = extract_rows(&table, "category", "amount", None);
        assert_eq!(env.revenue_streams().total, 250.0);
        assert_eq!(env.cost_structure().total, 0.0);
        assert!(env.cost_structure().categories.is_empty());
    }

    #[test]
    fn test_rows_fill_multiple_dimensions() {
        let table = ledger(&[("Loan tax adjustment", Cell::Number(75.0))]);
        let env = extract_rows(&table, "category", "amount", None);
        assert_eq!(env.loan_obligations().details[0].amount, 75.0);
        assert_eq!(env.tax_compliance().details[0].amount, 75.0);
        assert_eq!(env.loan_obligations().details[0].item, "Loan tax adjustment");
    }

    #[test]
    fn test_rows_repeated_category_last_write_wins() {
        let table = ledger(&[("Sales", Cell::Number(100.0)), ("Sales", Cell::Number(40.0))]);
        let env = extract_rows(&table, "category", "amount", None);
        assert_eq!(env.revenue_streams().total, 140.0);
        assert_eq!(env.revenue_streams().categories["Sales"], 40.0);
    }

    #[test]
    fn test_rows_overflow_does_not_panic() {
        let big: Vec<(&str, Cell)> = (0..4).map(|_| ("Sales", Cell::Number(1e308))).collect();
        let env = extract_rows(&ledger(&big), "category", "amount", None);
        assert!(!env.is_finite());
        assert!(env.net_profit().is_infinite());
    }

    #[test]
    fn test_rows_revenue_and_expense_exclusive() {
        let table = ledger(&[("Sales cost", Cell::Number(10.0))]);
        let env = extract_rows(&table, "category", "amount", None);
        assert_eq!(env.revenue_streams().total, 10.0);
        assert_eq!(env.cost_structure().total, 0.0);
    }

    #[test]
    fn test_columns_basic_scenario() {
        let table = Table::from_rows(
            vec!["sales".into(), "rent".into()],
            vec![
                vec![Cell::Number(3000.0), Cell::Number(600.0)],
                vec![Cell::Number(2000.0), Cell::Number(400.0)],
            ],
        );
        let env = extract_columns(&table, None);
        assert_eq!(env.revenue_streams().total, 5000.0);
        assert_eq!(env.cost_structure().total, 1000.0);
        assert_eq!(env.net_profit(), 4000.0);
        for (_, bucket) in env.detail_buckets() {
            assert!(bucket.details.is_empty());
        }
    }

    #[test]
    fn test_columns_dimensions_are_total_only() {
        let table = Table::from_rows(
            vec!["gst paid".into(), "loan repayments".into(), "stock on hand".into()],
            vec![vec![Cell::Number(50.0), Cell::Number(300.0), Cell::Number(80.0)]],
        );
        let env = extract_columns(&table, None);
        assert_eq!(env.tax_compliance().total, 50.0);
        assert_eq!(env.loan_obligations().total, 300.0);
        assert_eq!(env.dimension(Dimension::Inventory).total, 80.0);
        assert!(env.tax_compliance().details.is_empty());
    }

    #[test]
    fn test_columns_skip_text_and_zero_sums() {
        let table = Table::from_rows(
            vec!["sales".into(), "income notes".into(), "rent".into()],
            vec![
                vec![Cell::Number(100.0), text("good"), Cell::Number(0.0)],
                vec![Cell::Number(-100.0), text("bad"), Cell::Null],
            ],
        );
        let env = extract_columns(&table, None);
        assert_eq!(env.revenue_streams().total, 0.0);
        assert!(env.revenue_streams().categories.is_empty());
        assert!(env.cost_structure().categories.is_empty());
    }
}
