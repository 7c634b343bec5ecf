use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The financial score together with the inputs it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealth {
    /// Score in `[MIN_SCORE, MAX_SCORE]`
    pub score: u8,
    /// Total assets over liabilities (liabilities floored at 1)
    pub solvency_ratio: Decimal,
    /// Cash plus FX holdings in the reference currency
    pub liquidity: Decimal,
    pub activity_count: usize,
}
