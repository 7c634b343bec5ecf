//! Activity domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::activities_constants::DEFAULT_EXPENSE_CATEGORIES;
use crate::utils::format_utils::parse_leading_decimal;

/// One expense or income event.
///
/// `amount` keeps the text the user typed and is interpreted in the expense
/// currency given when the activity was recorded. Activities are never
/// mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub time: String,
    pub amount: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_asset_id: Option<i64>,
}

impl Activity {
    /// Numeric amount, or `None` when the text has no leading number.
    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_leading_decimal(&self.amount)
    }
}

/// Input model for the expense form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(default)]
    pub title: Option<String>,
    pub category: String,
    pub amount: String,
    /// Time-of-day label; the current local time when absent.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub source_asset_id: Option<i64>,
    /// Expense currency; the reference currency when absent.
    #[serde(default)]
    pub currency: Option<String>,
}

/// User-extensible list of expense category labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseCategories(Vec<String>);

impl Default for ExpenseCategories {
    fn default() -> Self {
        Self(
            DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        )
    }
}

impl ExpenseCategories {
    /// Appends `name` unless it is blank or already present (ignoring case).
    /// Returns whether the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c.eq_ignore_ascii_case(name.trim()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
