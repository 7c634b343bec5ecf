use log::debug;
use rust_decimal::Decimal;

use super::assets_model::{AssetItem, NewAssetItem};
use crate::constants::MAX_AMOUNT;
use crate::errors::{Result, ValidationError};
use crate::fx::RateTable;
use crate::utils::format_utils::parse_leading_decimal;

/// Name given to an entry submitted without one.
pub const DEFAULT_ASSET_NAME: &str = "New Entry";

/// Institution given to an entry submitted without one.
pub const DEFAULT_INSTITUTION: &str = "General";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Turns a submitted entry form into an [`AssetItem`] with the given id.
///
/// Amount coercion follows the form: unparsable or negative input becomes 0,
/// and an equities entry with both price and quantity uses their product.
/// Amounts above [`MAX_AMOUNT`] are rejected.
/// Details are rendered to attributes first, then the caller's extra
/// attributes are merged on top.
pub fn prepare_asset_item(new_item: NewAssetItem, id: i64, rates: &RateTable) -> Result<AssetItem> {
    if let Some(details) = &new_item.details {
        if details.category() != new_item.category {
            return Err(ValidationError::InvalidInput(format!(
                "details for '{}' submitted with category '{}'",
                details.category(),
                new_item.category
            ))
            .into());
        }
    }

    let derived = new_item.details.as_ref().and_then(|d| d.derived_amount());
    let amount = derived
        .or_else(|| new_item.amount.as_deref().and_then(parse_leading_decimal))
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    if amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidInput(format!(
            "amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        ))
        .into());
    }

    let mut attributes = new_item
        .details
        .as_ref()
        .map(|d| d.to_attributes(amount, &new_item.currency, rates))
        .unwrap_or_default();
    attributes.extend(new_item.attributes);

    debug!(
        "Prepared {} item {} with amount {} {}",
        new_item.category, id, amount, new_item.currency
    );

    Ok(AssetItem {
        id,
        category: new_item.category,
        name: non_blank(new_item.name).unwrap_or_else(|| DEFAULT_ASSET_NAME.to_string()),
        institution: non_blank(new_item.institution)
            .unwrap_or_else(|| DEFAULT_INSTITUTION.to_string()),
        amount,
        currency: new_item.currency,
        date: new_item.date,
        remarks: non_blank(new_item.remarks),
        attributes,
    })
}
