use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::health_model::FinancialHealth;
use crate::portfolio::net_worth::CategoryTotals;

pub const BASE_SCORE: i32 = 75;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 99;

const STRONG_SOLVENCY_RATIO: Decimal = dec!(5);
const HEALTHY_SOLVENCY_RATIO: Decimal = dec!(2);
const LIQUIDITY_TIER_ONE: Decimal = dec!(500000);
const LIQUIDITY_TIER_TWO: Decimal = dec!(1000000);
const BUSY_LOG_THRESHOLD: usize = 10;

/// Scores financial health from category totals and the activity count.
///
/// | Condition                         | Points |
/// |-----------------------------------|--------|
/// | solvency ratio > 5                | +10    |
/// | otherwise solvency ratio > 2      | +5     |
/// | liquidity > 500,000               | +5     |
/// | liquidity > 1,000,000             | +3     |
/// | more than 10 activities           | -2     |
///
/// Starting from 75, the result is clamped to `[1, 99]`.
pub fn calculate_financial_health(totals: &CategoryTotals, activity_count: usize) -> FinancialHealth {
    let liabilities = totals.liabilities;
    let solvency_ratio = totals.total_assets() / liabilities.max(Decimal::ONE);
    let liquidity = totals.liquidity();

    let mut score = BASE_SCORE;
    if solvency_ratio > STRONG_SOLVENCY_RATIO {
        score += 10;
    } else if solvency_ratio > HEALTHY_SOLVENCY_RATIO {
        score += 5;
    }
    if liquidity > LIQUIDITY_TIER_ONE {
        score += 5;
    }
    if liquidity > LIQUIDITY_TIER_TWO {
        score += 3;
    }
    if activity_count > BUSY_LOG_THRESHOLD {
        score -= 2;
    }

    let score = score.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8;
    debug!(
        "Financial score {} (ratio {}, liquidity {}, {} activities)",
        score, solvency_ratio, liquidity, activity_count
    );

    FinancialHealth {
        score,
        solvency_ratio,
        liquidity,
        activity_count,
    }
}
