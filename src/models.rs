/// A single decoded cell. Numbers stay numeric and text stays text; nothing
/// is coerced at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Best-effort float conversion used when aggregating amounts.
    pub fn coerce_number(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Native numeric value, without parsing text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text form used as a category key or group label.
    pub fn label(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Null => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    /// A column is numeric when every non-null cell holds a number.
    pub fn is_numeric(&self) -> bool {
        self.cells
            .iter()
            .all(|c| matches!(c, Cell::Number(_) | Cell::Null))
    }

    /// Sum of the numeric cells, or `None` when the column cannot be summed.
    pub fn numeric_sum(&self) -> Option<f64> {
        if !self.is_numeric() {
            return None;
        }
        let total: f64 = self.cells.iter().filter_map(Cell::as_number).sum();
        total.is_finite().then_some(total)
    }
}

/// Rectangular table of named columns. All columns have the same length and
/// no row is null in every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Builds a table from a header and row-major records. Short records are
    /// padded with nulls; rows that are null everywhere are dropped.
    pub fn from_rows(headers: Vec<String>, records: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();

        let mut rows = 0usize;
        for mut record in records {
            record.resize(width, Cell::Null);
            if record.iter().all(Cell::is_null) {
                continue;
            }
            for (column, cell) in columns.iter_mut().zip(record) {
                column.cells.push(cell);
            }
            rows += 1;
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Copy of the table with lowercased, whitespace-trimmed column names.
    pub fn normalized(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.trim().to_lowercase(),
                    cells: c.cells.clone(),
                })
                .collect(),
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_from_rows_drops_all_null_rows() {
        let table = Table::from_rows(
            vec!["a".into(), "b".into()],
            vec![
                vec![Cell::Number(1.0), text("x")],
                vec![Cell::Null, Cell::Null],
                vec![Cell::Null, text("y")],
            ],
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[0].cells, vec![Cell::Number(1.0), Cell::Null]);
        assert_eq!(table.columns()[1].cells, vec![text("x"), text("y")]);
    }

    #[test]
    fn test_from_rows_pads_short_records() {
        let table = Table::from_rows(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![Cell::Number(1.0)]],
        );
        assert_eq!(table.row_count(), 1);
        assert!(table.columns().iter().all(|c| c.cells.len() == 1));
        assert_eq!(table.columns()[2].cells[0], Cell::Null);
    }

    #[test]
    fn test_normalized_lowercases_and_trims() {
        let table = Table::from_rows(vec!["  Loan Amount ".into(), "INCOME".into()], vec![]);
        let normalized = table.normalized();
        let names: Vec<&str> = normalized.column_names().collect();
        assert_eq!(names, vec!["loan amount", "income"]);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(Cell::Number(12.5).coerce_number(), Some(12.5));
        assert_eq!(text(" 42 ").coerce_number(), Some(42.0));
        assert_eq!(text("abc").coerce_number(), None);
        assert_eq!(Cell::Null.coerce_number(), None);
        assert_eq!(text("inf").coerce_number(), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(Cell::Number(5.0).label(), "5");
        assert_eq!(Cell::Number(2.5).label(), "2.5");
        assert_eq!(text("Sales").label(), "Sales");
        assert_eq!(Cell::Null.label(), "");
    }

    #[test]
    fn test_numeric_sum_rejects_mixed_columns() {
        let numeric = Column {
            name: "sales".into(),
            cells: vec![Cell::Number(10.0), Cell::Null, Cell::Number(5.0)],
        };
        assert_eq!(numeric.numeric_sum(), Some(15.0));

        let mixed = Column {
            name: "notes".into(),
            cells: vec![Cell::Number(10.0), text("n/a")],
        };
        assert_eq!(mixed.numeric_sum(), None);
    }
}
