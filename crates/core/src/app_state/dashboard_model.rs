use rust_decimal::Decimal;
use serde::Serialize;

use crate::portfolio::{AllocationSlice, CategoryTotals, FinancialHealth, GrowthMetrics};

/// Everything the dashboard screen shows, computed in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub username: String,
    pub user_avatar: String,
    pub base_currency: String,
    pub total_net_worth: Decimal,
    pub category_totals: CategoryTotals,
    pub growth: GrowthMetrics,
    pub financial_score: u8,
    pub financial_health: FinancialHealth,
    pub allocation: Vec<AllocationSlice>,
    pub spending_total: Decimal,
    pub activity_count: usize,
}
