//! Statement files: Windows-1251 text, `;`-separated, ragged rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::WINDOWS_1251;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};

use crate::error::{CollectorError, Result};

/// Records of a statement in file order; rows may differ in length.
pub type Grid = Vec<Vec<String>>;

fn statement_reader<R: Read>(source: R) -> csv::Reader<DecodeReaderBytes<R, Vec<u8>>> {
    let decoded = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1251))
        .build(source);
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b';')
        .from_reader(decoded)
}

fn collect_records<R: Read>(rdr: &mut csv::Reader<R>, limit: Option<usize>) -> Result<Grid> {
    let mut grid = Vec::new();
    for result in rdr.records() {
        if limit.is_some_and(|n| grid.len() >= n) {
            break;
        }
        let record = result?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

/// Decode a whole statement from any byte source.
pub fn read_grid<R: Read>(source: R) -> Result<Grid> {
    collect_records(&mut statement_reader(source), None)
}

/// Read every record of the statement at `path`.
pub fn read_statement(path: &Path) -> Result<Grid> {
    let file = File::open(path)?;
    read_grid(file)
}

/// Read the first `rows` records; a shorter file is an error.
pub fn read_statement_head(path: &Path, rows: usize) -> Result<Grid> {
    let file = File::open(path)?;
    let grid = collect_records(&mut statement_reader(file), Some(rows))?;
    if grid.len() < rows {
        return Err(CollectorError::StatementTooShort {
            path: path.to_path_buf(),
            expected: rows,
            found: grid.len(),
        });
    }
    Ok(grid)
}
