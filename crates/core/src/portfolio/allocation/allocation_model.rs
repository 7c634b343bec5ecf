//! Allocation models for the category breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;

/// Share of one category in the sum of all category totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub category: AssetCategory,
    /// Display name for legends
    pub name: String,
    /// Category total in the reference currency
    pub value: Decimal,
    /// Percentage of the gross total (0-100), two decimals
    pub percentage: Decimal,
    /// Whole-number label such as "37%"
    pub percentage_label: String,
}
