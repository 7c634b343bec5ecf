//! Net worth domain models.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;

/// Per-category totals in the reference currency.
///
/// Every category is always present; an empty category totals zero.
/// Liabilities are held as a positive magnitude. Sums saturate at the
/// `Decimal` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub cash: Decimal,
    pub equities: Decimal,
    pub fixed_income: Decimal,
    pub fx: Decimal,
    pub insurance: Decimal,
    pub liabilities: Decimal,
}

impl CategoryTotals {
    pub fn get(&self, category: AssetCategory) -> Decimal {
        match category {
            AssetCategory::Cash => self.cash,
            AssetCategory::Equities => self.equities,
            AssetCategory::FixedIncome => self.fixed_income,
            AssetCategory::Fx => self.fx,
            AssetCategory::Insurance => self.insurance,
            AssetCategory::Liabilities => self.liabilities,
        }
    }

    /// Adds `value` to the total of `category`.
    pub fn add(&mut self, category: AssetCategory, value: Decimal) {
        let slot = match category {
            AssetCategory::Cash => &mut self.cash,
            AssetCategory::Equities => &mut self.equities,
            AssetCategory::FixedIncome => &mut self.fixed_income,
            AssetCategory::Fx => &mut self.fx,
            AssetCategory::Insurance => &mut self.insurance,
            AssetCategory::Liabilities => &mut self.liabilities,
        };
        let current = *slot;
        *slot = match current.checked_add(value) {
            Some(total) => total,
            None => {
                warn!("{} total overflowed adding {}, saturating", category, value);
                current.saturating_add(value)
            }
        };
    }

    /// Sum of every non-liability category.
    pub fn total_assets(&self) -> Decimal {
        [self.equities, self.fixed_income, self.fx, self.insurance]
            .into_iter()
            .fold(self.cash, Decimal::saturating_add)
    }

    /// Total assets minus liabilities.
    pub fn net_worth(&self) -> Decimal {
        self.total_assets().saturating_sub(self.liabilities)
    }

    /// Sum of all six totals, liabilities included.
    pub fn gross_total(&self) -> Decimal {
        self.total_assets().saturating_add(self.liabilities)
    }

    /// Cash plus foreign currency holdings.
    pub fn liquidity(&self) -> Decimal {
        self.cash.saturating_add(self.fx)
    }

    /// `(category, total)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, Decimal)> + '_ {
        AssetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Net worth compared against the baseline (previous period) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMetrics {
    /// Net worth minus baseline
    pub amount: Decimal,
    /// Change as a percentage of the baseline
    pub percent: Decimal,
    pub is_positive: bool,
    /// The baseline net worth
    pub prev_net_worth: Decimal,
}
