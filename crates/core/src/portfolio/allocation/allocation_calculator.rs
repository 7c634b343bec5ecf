use rust_decimal::{Decimal, RoundingStrategy};

use super::allocation_model::AllocationSlice;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::net_worth::CategoryTotals;

/// One slice per category, in reporting order.
///
/// The denominator is the gross total of all six categories, liabilities
/// included. When it is not positive every share is zero.
pub fn calculate_allocation(totals: &CategoryTotals) -> Vec<AllocationSlice> {
    let gross = totals.gross_total();

    totals
        .iter()
        .map(|(category, value)| {
            let share = if gross > Decimal::ZERO {
                value / gross * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            let whole = share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            AllocationSlice {
                category,
                name: category.display_name().to_string(),
                value,
                percentage: share.round_dp_with_strategy(
                    DISPLAY_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
                percentage_label: format!("{}%", whole.normalize()),
            }
        })
        .collect()
}
