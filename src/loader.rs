use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{FinHealthError, Result};
use crate::models::{Cell, Table};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Markers read as a missing value rather than text. Matched exactly, so a
/// whitespace-only cell stays text.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_na(raw: &str) -> bool {
    NA_MARKERS.contains(&raw)
}

/// Blank headers become `Unnamed: <idx>`; repeated names get `.1`, `.2`, ...
pub fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Csv,
    #[cfg(feature = "xlsx")]
    Spreadsheet,
}

impl FileFormat {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet => "excel",
        }
    }

    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::Csv => &["csv"],
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet => &["xlsx", "xls"],
        }
    }

    pub fn parse(&self, content: &[u8]) -> Result<Table> {
        match self {
            Self::Csv => parse_csv(content),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet => parse_spreadsheet(content),
        }
    }
}

const ALL_FORMATS: &[FileFormat] = &[
    FileFormat::Csv,
    #[cfg(feature = "xlsx")]
    FileFormat::Spreadsheet,
];

pub fn format_for_filename(filename: &str) -> Option<FileFormat> {
    let ext = Path::new(filename).extension()?.to_str()?;
    ALL_FORMATS
        .iter()
        .find(|f| f.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .copied()
}

// ---------------------------------------------------------------------------
// load_table
// ---------------------------------------------------------------------------

/// Decodes an uploaded file into a [`Table`]. The extension picks the decoder.
pub fn load_table(content: &[u8], filename: &str) -> Result<Table> {
    let format = format_for_filename(filename)
        .ok_or_else(|| FinHealthError::UnsupportedFormat(filename.to_string()))?;
    let table = format.parse(content)?;
    debug!(
        filename,
        format = format.key(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "decoded upload"
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

fn parse_csv(content: &[u8]) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(result) => result?,
        None => {
            return Err(FinHealthError::Parse(
                "No columns to parse from file".to_string(),
            ))
        }
    };
    let headers = unique_headers(header.iter().map(|h| h.trim().to_string()).collect());
    let width = headers.len();

    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for result in records {
        let record = result?;
        if record.len() > width {
            let line = record.position().map_or(0, |p| p.line());
            return Err(FinHealthError::Parse(format!(
                "Expected {width} fields in line {line}, saw {}",
                record.len()
            )));
        }
        raw_rows.push(
            record
                .iter()
                .map(|f| (!is_na(f)).then(|| f.to_string()))
                .collect(),
        );
    }

    let numeric: Vec<bool> = (0..width)
        .map(|col| {
            raw_rows.iter().all(|row| match row.get(col) {
                Some(Some(v)) => v.trim().parse::<f64>().is_ok(),
                _ => true,
            })
        })
        .collect();

    let total = raw_rows.len();
    let records: Vec<Vec<Cell>> = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(col, value)| match value {
                    None => Cell::Null,
                    Some(v) if numeric[col] => v
                        .trim()
                        .parse::<f64>()
                        .map(Cell::Number)
                        .unwrap_or(Cell::Text(v)),
                    Some(v) => Cell::Text(v),
                })
                .collect()
        })
        .collect();

    let table = Table::from_rows(headers, records);
    if table.row_count() < total {
        debug!(dropped = total - table.row_count(), "dropped empty rows");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Spreadsheet parser (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "xlsx")]
pub fn cell_from_data(data: &calamine::Data) -> Cell {
    use calamine::Data;
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) if is_na(s) => Cell::Null,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Empty | Data::Error(_) => Cell::Null,
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(feature = "xlsx")]
fn parse_spreadsheet(content: &[u8]) -> Result<Table> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto_from_rs(std::io::Cursor::new(content))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Table::default()),
    };

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };
    let headers = unique_headers(
        header
            .iter()
            .map(|d| cell_from_data(d).label().trim().to_string())
            .collect(),
    );
    let records: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    let total = records.len();
    let table = Table::from_rows(headers, records);
    if table.row_count() < total {
        debug!(dropped = total - table.row_count(), "dropped empty rows");
    }
    Ok(table)
}
