//! Keyword taxonomy driving every classification decision.
//!
//! Matching is case-insensitive substring containment. Revenue and expense
//! form one mutually exclusive axis (revenue is checked first); the five
//! balance dimensions are tested independently, so one label can land in
//! several of them.

/// Side of the profit-and-loss axis a label falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlSide {
    Revenue,
    Expense,
}

/// Independently tested balance dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dimension {
    Receivable,
    Payable,
    Inventory,
    Loans,
    Tax,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Receivable,
        Dimension::Payable,
        Dimension::Inventory,
        Dimension::Loans,
        Dimension::Tax,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Receivable => "receivable",
            Self::Payable => "payable",
            Self::Inventory => "inventory",
            Self::Loans => "loans",
            Self::Tax => "tax",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Receivable => RECEIVABLE,
            Self::Payable => PAYABLE,
            Self::Inventory => INVENTORY,
            Self::Loans => LOANS,
            Self::Tax => TAX,
        }
    }
}

impl PnlSide {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expenses",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Revenue => REVENUE,
            Self::Expense => EXPENSES,
        }
    }
}

const REVENUE: &[&str] = &["revenue", "sales", "income", "receipts"];
const EXPENSES: &[&str] = &["expense", "cost", "salary", "rent", "utilities", "marketing"];
const RECEIVABLE: &[&str] = &["receivable", "due from", "invoice out"];
const PAYABLE: &[&str] = &["payable", "due to", "invoice in", "bill"];
const INVENTORY: &[&str] = &["inventory", "stock", "goods"];
const LOANS: &[&str] = &["loan", "interest", "credit", "debt", "principal", "emi"];
const TAX: &[&str] = &["tax", "gst", "vat", "deduction", "duty"];

/// Column-name markers for the label column of a row-wise ledger.
pub const CATEGORY_COLUMN_MARKERS: &[&str] = &["category", "type", "description", "item"];

/// Column-name markers for the amount column of a row-wise ledger.
pub const AMOUNT_COLUMN_MARKERS: &[&str] = &["amount", "value", "cost", "price", "total"];

/// Every taxonomy entry in evaluation order, for display.
pub fn entries() -> Vec<(&'static str, &'static [&'static str])> {
    let mut out: Vec<(&'static str, &'static [&'static str])> = [PnlSide::Revenue, PnlSide::Expense]
        .iter()
        .map(|s| (s.key(), s.keywords()))
        .collect();
    out.extend(Dimension::ALL.iter().map(|d| (d.key(), d.keywords())));
    out
}

pub fn matches(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub side: Option<PnlSide>,
    pub dimensions: Vec<Dimension>,
}

pub fn classify(label: &str) -> Classification {
    let side = if matches(label, REVENUE) {
        Some(PnlSide::Revenue)
    } else if matches(label, EXPENSES) {
        Some(PnlSide::Expense)
    } else {
        None
    };
    let dimensions = Dimension::ALL
        .iter()
        .copied()
        .filter(|d| matches(label, d.keywords()))
        .collect();
    Classification { side, dimensions }
}

/// First name (in order) containing any of `markers`.
pub fn find_column<'a, I>(names: I, markers: &[&str]) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().find(|n| matches(n, markers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(matches("Product SALES Q1", REVENUE));
        assert!(matches("gst payable", TAX));
        assert!(!matches("Miscellaneous", REVENUE));
    }

    #[test]
    fn test_revenue_wins_over_expense() {
        // "Sales cost" hits both word lists.
        let c = classify("Sales cost");
        assert_eq!(c.side, Some(PnlSide::Revenue));
    }

    #[test]
    fn test_expense_classification() {
        assert_eq!(classify("Office Rent").side, Some(PnlSide::Expense));
        assert_eq!(classify("Unmatched").side, None);
    }

    #[test]
    fn test_dimensions_are_not_exclusive() {
        let c = classify("Loan interest tax");
        assert_eq!(c.side, None);
        assert_eq!(c.dimensions, vec![Dimension::Loans, Dimension::Tax]);
    }

    #[test]
    fn test_side_and_dimension_together() {
        let c = classify("Sales tax");
        assert_eq!(c.side, Some(PnlSide::Revenue));
        assert_eq!(c.dimensions, vec![Dimension::Tax]);
    }

    #[test]
    fn test_find_column_first_match_wins() {
        let names = ["date", "description", "item type", "total value"];
        assert_eq!(find_column(names, CATEGORY_COLUMN_MARKERS), Some("description"));
        assert_eq!(find_column(names, AMOUNT_COLUMN_MARKERS), Some("total value"));
        assert_eq!(find_column(["date"], AMOUNT_COLUMN_MARKERS), None);
    }

    #[test]
    fn test_entries_cover_all_axes() {
        let keys: Vec<&str> = entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["revenue", "expenses", "receivable", "payable", "inventory", "loans", "tax"]
        );
    }
}
