//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;

/// Domain events emitted by the application state after successful mutations.
///
/// These events represent facts about state changes. Runtime adapters
/// translate them into platform-specific actions (logging, push updates).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A new asset item was inserted into the store.
    AssetItemAdded {
        asset_id: i64,
        category: AssetCategory,
    },

    /// An activity was appended to the log.
    ActivityRecorded {
        activity_id: i64,
        source_asset_id: Option<i64>,
    },

    /// A source item's balance was reduced by a linked activity.
    AssetBalanceDeducted {
        asset_id: i64,
        activity_id: i64,
        applied: Decimal,
        shortfall: Decimal,
    },

    /// The user's display name or avatar changed.
    ProfileUpdated,
}

impl DomainEvent {
    /// Creates an AssetItemAdded event.
    pub fn asset_item_added(asset_id: i64, category: AssetCategory) -> Self {
        Self::AssetItemAdded { asset_id, category }
    }

    /// Creates an ActivityRecorded event.
    pub fn activity_recorded(activity_id: i64, source_asset_id: Option<i64>) -> Self {
        Self::ActivityRecorded {
            activity_id,
            source_asset_id,
        }
    }

    /// Creates an AssetBalanceDeducted event.
    pub fn asset_balance_deducted(
        asset_id: i64,
        activity_id: i64,
        applied: Decimal,
        shortfall: Decimal,
    ) -> Self {
        Self::AssetBalanceDeducted {
            asset_id,
            activity_id,
            applied,
            shortfall,
        }
    }

    /// Creates a ProfileUpdated event.
    pub fn profile_updated() -> Self {
        Self::ProfileUpdated
    }
}
