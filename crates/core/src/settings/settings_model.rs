//! Settings model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASELINE_NET_WORTH, DEFAULT_BASE_CURRENCY};
use crate::errors::{Error, Result};
use crate::fx::{default_exchange_rates, ExchangeRate, RateTable};

/// Configuration the application state is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Reference currency every total is reported in
    pub base_currency: String,
    /// Previous-period net worth that growth is measured against
    pub baseline_net_worth: Decimal,
    pub exchange_rates: Vec<ExchangeRate>,
    /// Load the sample portfolio on startup
    pub seed_demo_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            baseline_net_worth: DEFAULT_BASELINE_NET_WORTH,
            exchange_rates: default_exchange_rates(),
            seed_demo_data: true,
        }
    }
}

impl Settings {
    /// Replaces or adds `rate`, keeping the existing order.
    pub fn upsert_exchange_rate(&mut self, rate: ExchangeRate) {
        match self
            .exchange_rates
            .iter_mut()
            .find(|existing| existing.currency == rate.currency)
        {
            Some(existing) => existing.rate = rate.rate,
            None => self.exchange_rates.push(rate),
        }
    }

    /// Checks the invariants the aggregation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.base_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "base currency must not be empty".to_string(),
            ));
        }
        if self.baseline_net_worth <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "baseline net worth must be positive, got {}",
                self.baseline_net_worth
            )));
        }
        if !self
            .exchange_rates
            .iter()
            .any(|rate| rate.currency == self.base_currency)
        {
            return Err(Error::InvalidExchangeRate(format!(
                "no rate listed for reference currency {}",
                self.base_currency
            )));
        }
        self.rate_table().map(|_| ())
    }

    /// Builds the rate table described by these settings.
    pub fn rate_table(&self) -> Result<RateTable> {
        RateTable::new(self.base_currency.clone(), self.exchange_rates.iter().cloned())
    }
}
