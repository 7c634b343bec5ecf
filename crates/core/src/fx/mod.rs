//! FX (Foreign Exchange) module - static rate table and conversions.

mod fx_model;
mod rate_table;

pub use fx_model::{default_exchange_rates, ExchangeRate};
pub use rate_table::{RateTable, DEFAULT_RATE};
