//! Typed per-category form details and their rendering into display attributes.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::assets::{AssetAttributes, AssetCategory};
use crate::fx::RateTable;
use crate::utils::format_utils::{format_grouped, parse_leading_decimal};

/// Category-specific fields captured by the entry form.
///
/// All values are kept as typed text; numeric ones are coerced only when a
/// derived label needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum AssetDetails {
    #[serde(rename_all = "camelCase")]
    Cash {
        account_type: Option<String>,
        interest_rate: Option<String>,
        maturity_date: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Equities {
        equity_type: Option<String>,
        ticker: Option<String>,
        share_price: Option<String>,
        share_quantity: Option<String>,
        avg_cost: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    FixedIncome {
        interest_rate: Option<String>,
        maturity_date: Option<String>,
        payment_frequency: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Fx { cost_basis: Option<String> },
    #[serde(rename_all = "camelCase")]
    Insurance {
        policy_type: Option<String>,
        policy_number: Option<String>,
        coverage_amount: Option<String>,
        interest_rate: Option<String>,
        policy_term: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Liabilities {
        loan_type: Option<String>,
        interest_rate: Option<String>,
        monthly_payment: Option<String>,
        maturity_date: Option<String>,
    },
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn positive(value: &Option<String>) -> Option<Decimal> {
    filled(value)
        .and_then(parse_leading_decimal)
        .filter(|v| *v > Decimal::ZERO)
}

fn signed_prefix(value: Decimal) -> &'static str {
    if value >= Decimal::ZERO {
        "+"
    } else {
        ""
    }
}

impl AssetDetails {
    pub fn category(&self) -> AssetCategory {
        match self {
            AssetDetails::Cash { .. } => AssetCategory::Cash,
            AssetDetails::Equities { .. } => AssetCategory::Equities,
            AssetDetails::FixedIncome { .. } => AssetCategory::FixedIncome,
            AssetDetails::Fx { .. } => AssetCategory::Fx,
            AssetDetails::Insurance { .. } => AssetCategory::Insurance,
            AssetDetails::Liabilities { .. } => AssetCategory::Liabilities,
        }
    }

    /// Position value for equities entered as price times quantity, rounded to cents.
    ///
    /// A product too large for a `Decimal` comes back as `Decimal::MAX`.
    pub fn derived_amount(&self) -> Option<Decimal> {
        match self {
            AssetDetails::Equities {
                share_price,
                share_quantity,
                ..
            } => {
                let price = positive(share_price)?;
                let quantity = positive(share_quantity)?;
                Some(
                    price
                        .checked_mul(quantity)
                        .unwrap_or(Decimal::MAX)
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                )
            }
            _ => None,
        }
    }

    /// Renders the display labels for an item of `amount` in `currency`.
    pub fn to_attributes(&self, amount: Decimal, currency: &str, rates: &RateTable) -> AssetAttributes {
        let mut attrs = AssetAttributes::new();

        match self {
            AssetDetails::Cash {
                account_type,
                interest_rate,
                maturity_date,
            } => {
                let account_type = filled(account_type).unwrap_or("Savings");
                attrs.insert("Type", account_type);
                if let Some(rate) = filled(interest_rate) {
                    attrs.insert("APY", format!("{}%", rate));
                }
                if account_type == "CD" {
                    if let Some(maturity) = filled(maturity_date) {
                        attrs.insert("Maturity", maturity);
                    }
                }
            }
            AssetDetails::Equities {
                equity_type,
                ticker,
                share_price,
                share_quantity,
                avg_cost,
            } => {
                attrs.insert("Type", filled(equity_type).unwrap_or("Stock"));
                if let Some(ticker) = filled(ticker) {
                    attrs.insert("Ticker", ticker.to_uppercase());
                }
                if let Some(price) = filled(share_price) {
                    attrs.insert("Current Price", format!("{} {}", currency, price));
                }
                if let Some(cost) = filled(avg_cost) {
                    attrs.insert("Avg Cost", format!("{} {}", currency, cost));
                }
                if let Some(quantity) = filled(share_quantity) {
                    attrs.insert("Shares", quantity);
                }
                if let (Some(price), Some(cost), Some(quantity)) = (
                    positive(share_price),
                    positive(avg_cost),
                    positive(share_quantity),
                ) {
                    let change = price - cost;
                    if let Some(gain) = change.checked_mul(quantity) {
                        attrs.insert(
                            "Total Gain",
                            format!(
                                "{}{} {}",
                                signed_prefix(gain),
                                currency,
                                format_grouped(gain, 0)
                            ),
                        );
                    }
                    if let Some(return_pct) = change
                        .checked_div(cost)
                        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    {
                        let return_pct = return_pct
                            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                        attrs.insert(
                            "Return",
                            format!("{}{:.2}%", signed_prefix(return_pct), return_pct),
                        );
                    }
                }
            }
            AssetDetails::FixedIncome {
                interest_rate,
                maturity_date,
                payment_frequency,
            } => {
                if let Some(rate) = filled(interest_rate) {
                    attrs.insert("Coupon", format!("{}%", rate));
                }
                if let Some(maturity) = filled(maturity_date) {
                    attrs.insert("Maturity", maturity);
                }
                attrs.insert("Frequency", filled(payment_frequency).unwrap_or("Annually"));
                if let Some(rate) = positive(interest_rate) {
                    let yearly = amount.checked_mul(rate).filter(|_| amount > Decimal::ZERO);
                    if let Some(yearly) = yearly {
                        let income = yearly / Decimal::ONE_HUNDRED;
                        attrs.insert(
                            "Est. Income",
                            format!("{} {}", currency, format_grouped(income, 0)),
                        );
                    }
                }
            }
            AssetDetails::Fx { cost_basis } => {
                attrs.insert("Currency", currency);
                if let Some(basis) = filled(cost_basis) {
                    attrs.insert("Cost Basis", basis);
                }
                let base = rates.base_currency();
                let value = format_grouped(rates.to_reference(amount, currency), 0);
                let rendered = if base == "USD" {
                    format!("${}", value)
                } else {
                    format!("{} {}", base, value)
                };
                attrs.insert(format!("{} Value", base), rendered);
            }
            AssetDetails::Insurance {
                policy_type,
                policy_number,
                coverage_amount,
                interest_rate,
                policy_term,
            } => {
                attrs.insert("Type", filled(policy_type).unwrap_or("Whole Life"));
                if let Some(number) = filled(policy_number) {
                    attrs.insert("Policy #", number);
                }
                if let Some(coverage) = filled(coverage_amount).and_then(parse_leading_decimal) {
                    attrs.insert(
                        "Death Benefit",
                        format!("{} {}", currency, format_grouped(coverage, 3)),
                    );
                }
                if let Some(rate) = filled(interest_rate) {
                    attrs.insert("Crediting Rate", format!("{}%", rate));
                }
                if let Some(term) = filled(policy_term) {
                    attrs.insert("Term", format!("{} Yrs", term));
                }
            }
            AssetDetails::Liabilities {
                loan_type,
                interest_rate,
                monthly_payment,
                maturity_date,
            } => {
                attrs.insert("Type", filled(loan_type).unwrap_or("Mortgage"));
                if let Some(rate) = filled(interest_rate) {
                    attrs.insert("APR", format!("{}%", rate));
                }
                if let Some(payment) = filled(monthly_payment).and_then(parse_leading_decimal) {
                    attrs.insert(
                        "Monthly Pmt",
                        format!("{} {}", currency, format_grouped(payment, 3)),
                    );
                }
                if let Some(payoff) = filled(maturity_date) {
                    attrs.insert("Payoff Date", payoff);
                }
            }
        }

        attrs
    }
}
