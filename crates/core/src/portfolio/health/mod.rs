//! Financial health score.
//!
//! A bounded heuristic over solvency and liquidity, with a small penalty for
//! a busy activity log.

mod health_calculator;
mod health_model;

pub use health_calculator::*;
pub use health_model::*;
