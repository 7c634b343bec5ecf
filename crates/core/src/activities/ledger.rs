//! Double-entry deduction of an expense from its funding asset.

use log::{info, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::assets::AssetItemStore;
use crate::fx::RateTable;

/// What happened to the source item when an activity was recorded.
///
/// Reporting only: the balance is always clamped at zero, and a missing
/// source never fails the activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionOutcome {
    pub source_asset_id: Option<i64>,
    pub source_found: bool,
    /// Requested deduction in the source item's currency.
    pub deduction: Decimal,
    /// Amount actually removed from the source item.
    pub applied: Decimal,
    /// Part of the deduction lost to the zero clamp.
    pub shortfall: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Decimal>,
}

impl DeductionOutcome {
    /// Outcome for an activity recorded without a source.
    pub fn unlinked() -> Self {
        Self::not_applied(None)
    }

    fn not_applied(source_asset_id: Option<i64>) -> Self {
        Self {
            source_asset_id,
            source_found: false,
            deduction: Decimal::ZERO,
            applied: Decimal::ZERO,
            shortfall: Decimal::ZERO,
            balance_after: None,
        }
    }

    pub fn is_clamped(&self) -> bool {
        self.shortfall > Decimal::ZERO
    }
}

/// Deducts `amount` (in `expense_currency`) from the item `source_asset_id`.
///
/// The amount goes to the reference currency and then into the item's
/// currency: `deduction = amount * rate(expense) / rate(item)`. The new
/// balance is `max(0, balance - deduction)`. No rounding is applied, and a
/// deduction too large for a `Decimal` drains the balance.
pub fn apply_deduction(
    store: &mut AssetItemStore,
    rates: &RateTable,
    source_asset_id: Option<i64>,
    amount: Decimal,
    expense_currency: &str,
) -> DeductionOutcome {
    let Some(source_id) = source_asset_id else {
        return DeductionOutcome::unlinked();
    };

    let Some(item) = store.get_mut(source_id) else {
        warn!(
            "Source asset {} not found, activity recorded without deduction",
            source_id
        );
        return DeductionOutcome::not_applied(Some(source_id));
    };

    let deduction = rates
        .checked_to_reference(amount, expense_currency)
        .and_then(|value| rates.checked_from_reference(value, &item.currency))
        .unwrap_or_else(|| {
            warn!(
                "Deduction of {} {} does not fit in {}, draining asset {}",
                amount, expense_currency, item.currency, source_id
            );
            if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        });
    let before = item.amount;
    let after = before.saturating_sub(deduction).max(Decimal::ZERO);
    item.amount = after;

    let applied = before.saturating_sub(after);
    let shortfall = deduction.saturating_sub(applied).max(Decimal::ZERO);
    if shortfall > Decimal::ZERO {
        warn!(
            "Deduction of {} {} exceeds balance {} of asset {}, clamped at zero (shortfall {})",
            deduction, item.currency, before, source_id, shortfall
        );
    }
    info!(
        "Deducted {} {} from asset {} ({} -> {})",
        applied, item.currency, source_id, before, after
    );

    DeductionOutcome {
        source_asset_id: Some(source_id),
        source_found: true,
        deduction,
        applied,
        shortfall,
        balance_after: Some(after),
    }
}
