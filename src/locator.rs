use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};

use crate::error::{CollectorError, Result};
use crate::period::resolve;
use crate::reader::read_statement_head;

const PERIOD_LABEL: &str = "Период выписки:";

/// Where to look for statements and how much of each to inspect.
#[derive(Debug, Clone)]
pub struct StatementSource {
    pub dir: PathBuf,
    pub extension: String,
    pub header_rows: usize,
    pub skip_short: bool,
}

impl StatementSource {
    /// Candidate files in sorted path order. A missing directory has none.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let matches_ext = path
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str());
            if path.is_file() && matches_ext {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// First candidate whose head declares the `MM.YYYY` period.
    pub fn locate(&self, period: &str) -> Result<PathBuf> {
        let border = resolve(period)?;

        for path in self.candidates()? {
            debug!("checking {}", path.display());
            let head = match read_statement_head(&path, self.header_rows) {
                Ok(head) => head,
                Err(CollectorError::StatementTooShort { found, .. }) if self.skip_short => {
                    warn!("skipping {}: only {found} rows", path.display());
                    continue;
                }
                Err(e) => return Err(e),
            };
            if declares_period(&head, &border) {
                return Ok(path);
            }
        }

        Err(CollectorError::ReportNotFound(border))
    }
}

fn declares_period(head: &[Vec<String>], border: &str) -> bool {
    head.iter().any(|row| {
        row.iter().any(|f| f == PERIOD_LABEL) && row.iter().any(|f| f == border)
    })
}
