//! Portfolio aggregation - category totals, net worth, growth, health score
//! and allocation.

pub mod allocation;
pub mod health;
pub mod net_worth;

pub use allocation::{calculate_allocation, AllocationSlice};
pub use health::{calculate_financial_health, FinancialHealth};
pub use net_worth::{calculate_category_totals, calculate_growth, CategoryTotals, GrowthMetrics};
