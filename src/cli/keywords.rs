use comfy_table::{Cell, Table};

use finhealth::error::Result;
use finhealth::taxonomy::{entries, AMOUNT_COLUMN_MARKERS, CATEGORY_COLUMN_MARKERS};

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Axis", "Keywords"]);
    for (axis, keywords) in entries() {
        table.add_row(vec![Cell::new(axis), Cell::new(keywords.join(", "))]);
    }
    println!("Keyword Taxonomy\n{table}");
    println!("Category columns: {}", CATEGORY_COLUMN_MARKERS.join(", "));
    println!("Amount columns:   {}", AMOUNT_COLUMN_MARKERS.join(", "));
    Ok(())
}
