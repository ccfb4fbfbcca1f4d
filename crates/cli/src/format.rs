//! Terminal formatting helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount as dollars with two decimals.
pub(crate) fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("${rounded:.2}")
}
