//! Asset item domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::assets::AssetDetails;
use crate::errors::ValidationError;

/// Fixed asset/liability classes used for aggregation and grouping.
///
/// `Liabilities` is the only class subtracted from net worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    Cash,
    Equities,
    FixedIncome,
    Fx,
    Insurance,
    Liabilities,
}

impl AssetCategory {
    /// Every category, in the order totals are reported.
    pub const ALL: [AssetCategory; 6] = [
        AssetCategory::Cash,
        AssetCategory::Equities,
        AssetCategory::FixedIncome,
        AssetCategory::Fx,
        AssetCategory::Insurance,
        AssetCategory::Liabilities,
    ];

    /// Category key as used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "cash",
            AssetCategory::Equities => "equities",
            AssetCategory::FixedIncome => "fixedIncome",
            AssetCategory::Fx => "fx",
            AssetCategory::Insurance => "insurance",
            AssetCategory::Liabilities => "liabilities",
        }
    }

    /// Short label for charts and legends.
    pub const fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash",
            AssetCategory::Equities => "Equities",
            AssetCategory::FixedIncome => "Fixed Inc.",
            AssetCategory::Fx => "FX Holdings",
            AssetCategory::Insurance => "Insurance",
            AssetCategory::Liabilities => "Liabilities",
        }
    }

    /// Heading of the per-category detail view.
    pub const fn detail_title(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash Assets",
            AssetCategory::Equities => "Equities",
            AssetCategory::FixedIncome => "Fixed Income",
            AssetCategory::Fx => "FX Holdings",
            AssetCategory::Insurance => "Insurance Policies",
            AssetCategory::Liabilities => "Liabilities",
        }
    }

    pub const fn is_liability(&self) -> bool {
        matches!(self, AssetCategory::Liabilities)
    }

    /// Only cash accounts and credit lines can fund an expense.
    pub const fn is_payment_source(&self) -> bool {
        matches!(self, AssetCategory::Cash | AssetCategory::Liabilities)
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Display value of a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

/// Category-specific labels shown next to an item, in insertion order.
///
/// Purely informational: nothing in the aggregation path reads it.
/// Serialized as a JSON object whose key order follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetAttributes(Vec<(String, AttributeValue)>);

impl AssetAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `label`, replacing an existing value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<AttributeValue>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&AttributeValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value)
    }

    /// Merges `other` on top of `self`.
    pub fn extend(&mut self, other: AssetAttributes) {
        for (label, value) in other.0 {
            self.insert(label, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AssetAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = AssetAttributes::new();
        for (label, value) in iter {
            attributes.insert(label, value);
        }
        attributes
    }
}

impl Serialize for AssetAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AssetAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = AssetAttributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute labels to strings or numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attributes = AssetAttributes::new();
                while let Some((label, value)) = access.next_entry::<String, AttributeValue>()? {
                    attributes.insert(label, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// One holding or liability entry.
///
/// `amount` is in `currency` and never negative. After creation only the
/// double-entry ledger changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetItem {
    pub id: i64,
    pub category: AssetCategory,
    pub name: String,
    pub institution: String,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default)]
    pub attributes: AssetAttributes,
}

/// Input model for the asset entry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetItem {
    pub category: AssetCategory,
    pub name: Option<String>,
    pub institution: Option<String>,
    /// Free-form amount as typed; ignored for equities when price and
    /// quantity are both given.
    #[serde(default)]
    pub amount: Option<String>,
    pub currency: String,
    pub date: NaiveDate,
    pub remarks: Option<String>,
    #[serde(default)]
    pub details: Option<AssetDetails>,
    /// Extra labels merged after the rendered details.
    #[serde(default)]
    pub attributes: AssetAttributes,
}

/// Items and total of one category, as shown on its detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub category: AssetCategory,
    pub title: String,
    pub total: Decimal,
    pub currency: String,
    pub items: Vec<AssetItem>,
}
