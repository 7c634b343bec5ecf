use log::debug;
use rust_decimal::Decimal;

use super::net_worth_model::{CategoryTotals, GrowthMetrics};
use crate::assets::AssetItem;
use crate::fx::RateTable;

/// Sums every item's amount, converted to the reference currency, into its
/// category total. Item order does not affect the result.
pub fn calculate_category_totals<'a, I>(items: I, rates: &RateTable) -> CategoryTotals
where
    I: IntoIterator<Item = &'a AssetItem>,
{
    let mut totals = CategoryTotals::default();
    let mut count = 0usize;
    for item in items {
        totals.add(item.category, rates.to_reference(item.amount, &item.currency));
        count += 1;
    }
    debug!(
        "Aggregated {} items into category totals (net worth {} {})",
        count,
        totals.net_worth(),
        rates.base_currency()
    );
    totals
}

/// Compares `net_worth` with `baseline`.
///
/// The baseline is validated positive when settings are loaded; a
/// non-positive one yields a zero percentage instead of dividing by it.
/// Results that do not fit a `Decimal` saturate.
pub fn calculate_growth(net_worth: Decimal, baseline: Decimal) -> GrowthMetrics {
    let amount = net_worth.saturating_sub(baseline);
    let percent = if baseline > Decimal::ZERO {
        amount
            .checked_div(baseline)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    } else {
        Decimal::ZERO
    };
    GrowthMetrics {
        amount,
        percent,
        is_positive: amount >= Decimal::ZERO,
        prev_net_worth: baseline,
    }
}
