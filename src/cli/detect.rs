use finhealth::error::Result;
use finhealth::loader::load_table;
use finhealth::shape::{detect_strategy, Strategy};

use super::read_upload;

pub fn run(file: &str) -> Result<()> {
    let (content, filename) = read_upload(file)?;
    let table = load_table(&content, &filename)?.normalized();
    let strategy = detect_strategy(&table);

    println!("Strategy:  {}", strategy.key());
    if let Strategy::RowWise { category, amount } = &strategy {
        println!("Category:  {category}");
        println!("Amount:    {amount}");
    }
    println!("Rows:      {}", table.row_count());
    println!("Columns:   {}", table.column_names().collect::<Vec<_>>().join(", "));
    Ok(())
}
