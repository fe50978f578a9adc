use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two fractional digits and a comma: 1234,50
pub fn money(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}").replace('.', ",")
}
