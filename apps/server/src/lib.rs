pub mod api;
pub mod config;
pub mod domain_events;
pub mod error;
pub mod main_lib;
pub mod models;

pub use main_lib::{build_state, build_state_with_provider, init_tracing, AppState};
