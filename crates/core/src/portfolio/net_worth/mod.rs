//! Net worth calculation module.
//!
//! Rolls asset items up into per-category totals in the reference currency,
//! derives total net worth from them, and compares it against the baseline.

mod net_worth_calculator;
mod net_worth_model;

pub use net_worth_calculator::*;
pub use net_worth_model::*;
