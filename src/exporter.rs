use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::fmt::money;
use crate::models::Operation;

/// Budget sheet layout: date, payment type, category, subcategory, cost,
/// a blank column kept for the sheet's own formulas, description.
pub fn to_row(op: &Operation) -> [String; 7] {
    [
        op.date.clone(),
        op.payment_type.as_str().to_string(),
        op.category.clone(),
        op.subcategory.clone(),
        money(op.cost),
        String::new(),
        op.name.replace('"', ""),
    ]
}

/// Write rows as UTF-8, `;`-separated, no header.
pub fn write_rows<W: Write>(out: W, operations: &[Operation]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .from_writer(out);
    for op in operations {
        wtr.write_record(to_row(op))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export(path: &Path, operations: &[Operation]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_rows(file, operations)
}
