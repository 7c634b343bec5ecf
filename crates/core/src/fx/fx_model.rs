use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PRECISION;

/// Value of one unit of `currency` expressed in the reference currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: String,
    #[serde(serialize_with = "serialize_rate")]
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(currency: impl Into<String>, rate: Decimal) -> Self {
        Self {
            currency: currency.into(),
            rate,
        }
    }

    /// Parses a `CODE=RATE` pair, e.g. `"GBP=1.27"`.
    pub fn parse_pair(pair: &str) -> Option<Self> {
        let (code, rate) = pair.split_once('=')?;
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let rate = rate.trim().parse::<Decimal>().ok()?;
        Some(Self::new(code, rate))
    }
}

fn serialize_rate<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = decimal.round_dp(DECIMAL_PRECISION);
    serializer.serialize_str(&rounded.to_string())
}

/// Static rates shipped with the dashboard, quoted against USD.
pub fn default_exchange_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate::new("USD", dec!(1)),
        ExchangeRate::new("EUR", dec!(1.09)),
        ExchangeRate::new("GBP", dec!(1.27)),
        ExchangeRate::new("HKD", dec!(0.128)),
        ExchangeRate::new("CNY", dec!(0.138)),
        ExchangeRate::new("JPY", dec!(0.0068)),
    ]
}
