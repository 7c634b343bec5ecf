//! Wealthdeck Core - Domain entities and aggregation logic.
//!
//! This crate holds the dashboard's financial state and the pure
//! computations over it: currency conversion, category totals, net worth,
//! growth against a baseline, the financial health score and the
//! double-entry deduction of expenses. It performs no I/O.

pub mod activities;
pub mod app_state;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod events;
pub mod fx;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

pub use app_state::AppState;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
