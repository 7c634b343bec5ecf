use crate::assets::{AssetCategory, AssetItem};

/// Ordered collection of asset items, most recent first.
///
/// Items are never removed. Outside the crate the store is read-only; the
/// double-entry ledger is the only writer of an existing item.
#[derive(Debug, Clone, Default)]
pub struct AssetItemStore {
    items: Vec<AssetItem>,
}

impl AssetItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from items already in display order.
    pub fn from_items(items: Vec<AssetItem>) -> Self {
        Self { items }
    }

    /// Inserts `item` at the front.
    pub fn insert(&mut self, item: AssetItem) {
        self.items.insert(0, item);
    }

    pub fn get(&self, id: i64) -> Option<&AssetItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: i64) -> Option<&mut AssetItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[AssetItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetItem> {
        self.items.iter()
    }

    /// Items of `category`, in store order.
    pub fn by_category(&self, category: AssetCategory) -> impl Iterator<Item = &AssetItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items eligible as the funding source of an expense.
    pub fn payment_sources(&self) -> impl Iterator<Item = &AssetItem> {
        self.items
            .iter()
            .filter(|item| item.category.is_payment_source())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
