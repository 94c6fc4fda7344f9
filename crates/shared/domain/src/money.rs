//! Money bounds and arithmetic.
//!
//! Prices, totals and payment amounts live in `numeric(12,2)` columns.
//! Aggregations over stored rows saturate rather than overflow.

use rust_decimal::Decimal;

use crate::constants::MAX_AMOUNT_CENTS;

/// Largest amount the store can persist.
pub fn max_amount() -> Decimal {
    Decimal::new(MAX_AMOUNT_CENTS, 2)
}

/// Whether an amount fits the money columns.
pub fn fits_money_column(amount: Decimal) -> bool {
    amount.abs() <= max_amount()
}

/// Saturating sum.
pub fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
