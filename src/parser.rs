use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::categorizer::budget_category;
use crate::error::{CollectorError, Result};
use crate::models::{Currency, Operation, PaymentType};

const SECTION_MARKER: &str = "Операции по ........";
const LAST4_SEPARATOR: &str = "........";
const SECTION_TERMINATOR: &str = "Всего по контракту";

const COL_NAME: &str = "Операция";
const COL_AMOUNT: &str = "Сумма";
const COL_DATE: &str = "Дата операции по счету";
const COL_CATEGORY: &str = "Категория операции";

/// Top-ups, interbank transfers and self-transfers. Not expenses.
const EXCLUDED_OPERATIONS: &[&str] = &[
    "CH Payment To Client Contract",
    "BLR MINSK MOBILE BANK",
    "CH Payment BLR MINSK P2P SDBO NO FEE",
    "CH Debit BLR MINSK P2P SDBO NO FEE",
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a statement amount such as `-1 234,56`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let s: String = raw
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let invalid = || CollectorError::InvalidAmount(raw.to_string());
    let unsigned = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s.as_str());
    if !unsigned.chars().any(|c| c.is_ascii_digit())
        || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(invalid());
    }
    Decimal::from_str(&s).map_err(|_| invalid())
}

pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_OPERATIONS.iter().any(|pattern| name.contains(pattern))
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

// ---------------------------------------------------------------------------
// Section discovery
// ---------------------------------------------------------------------------

/// Operations of one card: the column header row and the last operation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub last4: String,
    pub header_index: usize,
    pub last_row_index: usize,
}

enum ScanState {
    Outside,
    Inside { last4: String, header_index: usize },
}

fn section_marker(row: &[String]) -> Option<String> {
    match row {
        [only] if only.contains(SECTION_MARKER) => {
            let last4 = only
                .rsplit_once(LAST4_SEPARATOR)
                .map(|(_, tail)| tail)
                .unwrap_or("");
            Some(last4.to_string())
        }
        _ => None,
    }
}

fn is_terminator(row: &[String]) -> bool {
    row.first()
        .is_some_and(|first| first.contains(SECTION_TERMINATOR))
}

/// Locate every terminated card section, in grid order.
pub fn find_sections(grid: &[Vec<String>]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut state = ScanState::Outside;

    for (i, row) in grid.iter().enumerate() {
        state = match state {
            ScanState::Outside => match section_marker(row) {
                Some(last4) => ScanState::Inside {
                    last4,
                    header_index: i + 1,
                },
                None => ScanState::Outside,
            },
            ScanState::Inside {
                last4,
                header_index,
            } => {
                if is_terminator(row) {
                    debug!("section ........{last4}: rows {}..{}", header_index + 1, i);
                    sections.push(Section {
                        last4,
                        header_index,
                        last_row_index: i - 1,
                    });
                    ScanState::Outside
                } else {
                    ScanState::Inside {
                        last4,
                        header_index,
                    }
                }
            }
        };
    }

    if let ScanState::Inside { last4, .. } = state {
        warn!("section ........{last4} has no terminator, ignored");
    }
    sections
}

// ---------------------------------------------------------------------------
// Operation extraction
// ---------------------------------------------------------------------------

struct Columns {
    name: usize,
    amount: usize,
    date: usize,
    category: usize,
}

impl Columns {
    fn from_header(header: &[String], last4: &str) -> Self {
        let positions: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();
        let lookup = |name: &str| match positions.get(name) {
            Some(&idx) => idx,
            None => {
                warn!("section ........{last4}: column {name:?} missing, reading column 0");
                0
            }
        };
        Self {
            name: lookup(COL_NAME),
            amount: lookup(COL_AMOUNT),
            date: lookup(COL_DATE),
            category: lookup(COL_CATEGORY),
        }
    }
}

/// Expenses of a statement plus the credits that need a manual look.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedStatement {
    pub operations: Vec<Operation>,
    /// Non-excluded rows with a non-negative amount, usually refunds.
    pub refunds: Vec<Operation>,
}

pub fn parse_statement(grid: &[Vec<String>]) -> Result<ParsedStatement> {
    let mut parsed = ParsedStatement::default();

    for section in find_sections(grid) {
        let Some(header) = grid.get(section.header_index) else {
            continue;
        };
        let cols = Columns::from_header(header, &section.last4);

        for row_index in section.header_index + 1..=section.last_row_index {
            let row = &grid[row_index];
            let name = field(row, cols.name);
            let amount = parse_amount(field(row, cols.amount))?;

            if is_excluded(name) {
                debug!("row {row_index}: skipping {name:?}");
                continue;
            }

            let operation = Operation {
                name: name.to_string(),
                date: field(row, cols.date).to_string(),
                payment_type: PaymentType::Card,
                category: budget_category(field(row, cols.category)).to_string(),
                subcategory: String::new(),
                cost: amount.abs(),
                currency: Currency::Byn,
                last4: section.last4.clone(),
                row_index,
            };

            if amount < Decimal::ZERO {
                parsed.operations.push(operation);
            } else {
                parsed.refunds.push(operation);
            }
        }
    }

    Ok(parsed)
}
