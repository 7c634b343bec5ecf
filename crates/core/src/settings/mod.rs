//! Dashboard settings: reference currency, baseline and exchange rates.

mod settings_model;


pub use settings_model::*;
