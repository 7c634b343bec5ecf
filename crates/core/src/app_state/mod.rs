//! Application state - the explicit owner of profile, assets, activities and
//! rates, with the dashboard's read and write operations.

mod dashboard_model;
mod demo_seed;
mod state;

#[cfg(test)]
mod state_tests;

pub use dashboard_model::DashboardSnapshot;
pub use demo_seed::{demo_activities, demo_asset_items};
pub use state::AppState;
