use rust_decimal::Decimal;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Cash,
    Card,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "наличные",
            Self::Card => "карта",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Byn,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Byn => "BYN",
        }
    }
}

/// One posted card operation, normalized for the budget sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Description text as the bank wrote it, quotes included.
    pub name: String,
    /// Posting date, copied from the statement without parsing.
    pub date: String,
    pub payment_type: PaymentType,
    /// Budget category, empty when the bank category has no mapping.
    pub category: String,
    pub subcategory: String,
    /// Absolute value of the statement amount.
    pub cost: Decimal,
    pub currency: Currency,
    pub last4: String,
    /// Index of the source row in the record grid.
    pub row_index: usize,
}
