use chrono::NaiveDate;

use crate::error::{CollectorError, Result};

const BORDER_DATE_FORMAT: &str = "%d.%m.%Y";

/// First and last day of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl Period {
    /// Parse a `MM.YYYY` period.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || CollectorError::InvalidPeriod(raw.to_string());
        let (mm, yyyy) = raw.trim().split_once('.').ok_or_else(invalid)?;
        if !is_digits(mm, 2) || !is_digits(yyyy, 4) {
            return Err(invalid());
        }
        let month: u32 = mm.parse().map_err(|_| invalid())?;
        let year: i32 = yyyy.parse().map_err(|_| invalid())?;

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { first_day, last_day })
    }

    /// Border form used in statement headers: `01.05.2024-31.05.2024`.
    pub fn border(&self) -> String {
        format!(
            "{}-{}",
            self.first_day.format(BORDER_DATE_FORMAT),
            self.last_day.format(BORDER_DATE_FORMAT)
        )
    }
}

/// Resolve `MM.YYYY` into the statement border string.
pub fn resolve(raw: &str) -> Result<String> {
    Period::parse(raw).map(|p| p.border())
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
