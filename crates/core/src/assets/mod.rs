//! Assets module - asset item models, the in-memory store, and form handling.

mod asset_details;
mod asset_store;
mod assets_model;
mod assets_service;

#[cfg(test)]
mod assets_model_tests;

#[cfg(test)]
mod assets_service_tests;

pub use asset_details::AssetDetails;
pub use asset_store::AssetItemStore;
pub use assets_model::{
    AssetAttributes, AssetCategory, AssetItem, AttributeValue, CategoryDetail, NewAssetItem,
};
pub use assets_service::{prepare_asset_item, DEFAULT_ASSET_NAME, DEFAULT_INSTITUTION};
