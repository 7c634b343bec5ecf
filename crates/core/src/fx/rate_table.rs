use std::collections::BTreeMap;

use log::warn;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{Error, Result};
use crate::fx::fx_model::{default_exchange_rates, ExchangeRate};

/// Rate used for any currency code the table does not know.
///
/// Unknown codes are treated as the reference currency. This is a policy, not
/// an error path.
pub const DEFAULT_RATE: Decimal = Decimal::ONE;

/// Static mapping from currency code to its value in the reference currency.
///
/// Every stored rate is strictly positive, so converting back out of the
/// reference currency never divides by zero.
#[derive(Debug, Clone)]
pub struct RateTable {
    base_currency: String,
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table quoted against `base_currency`.
    ///
    /// The base currency is always present with a rate of 1, even when the
    /// provided rates omit it.
    pub fn new(
        base_currency: impl Into<String>,
        exchange_rates: impl IntoIterator<Item = ExchangeRate>,
    ) -> Result<Self> {
        let base_currency = base_currency.into();
        let mut rates = BTreeMap::new();

        for rate in exchange_rates {
            if rate.rate <= Decimal::ZERO {
                return Err(Error::InvalidExchangeRate(format!(
                    "{} must be positive, got {}",
                    rate.currency, rate.rate
                )));
            }
            if rate.currency == base_currency && rate.rate != Decimal::ONE {
                return Err(Error::InvalidExchangeRate(format!(
                    "reference currency {} must have a rate of 1, got {}",
                    base_currency, rate.rate
                )));
            }
            rates.insert(rate.currency, rate.rate);
        }
        rates.entry(base_currency.clone()).or_insert(Decimal::ONE);

        Ok(Self {
            base_currency,
            rates,
        })
    }

    /// Reference currency all conversions land in.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Rate for `currency`, falling back to [`DEFAULT_RATE`] for unknown codes.
    pub fn rate(&self, currency: &str) -> Decimal {
        match self.rates.get(currency) {
            Some(rate) => *rate,
            None => {
                warn!(
                    "No rate for currency '{}', treating it as {}",
                    currency, self.base_currency
                );
                DEFAULT_RATE
            }
        }
    }

    /// True if the table carries an explicit rate for `currency`.
    pub fn contains(&self, currency: &str) -> bool {
        self.rates.contains_key(currency)
    }

    /// Converts `amount` of `currency` into the reference currency. No rounding.
    ///
    /// Saturates at the `Decimal` bounds on overflow.
    pub fn to_reference(&self, amount: Decimal, currency: &str) -> Decimal {
        self.checked_to_reference(amount, currency)
            .unwrap_or_else(|| saturated(amount, "to", currency))
    }

    /// Converts a reference-currency `value` back into `currency`. No rounding.
    ///
    /// Saturates at the `Decimal` bounds on overflow.
    pub fn from_reference(&self, value: Decimal, currency: &str) -> Decimal {
        self.checked_from_reference(value, currency)
            .unwrap_or_else(|| saturated(value, "from", currency))
    }

    /// [`to_reference`](Self::to_reference), or `None` on overflow.
    pub fn checked_to_reference(&self, amount: Decimal, currency: &str) -> Option<Decimal> {
        amount.checked_mul(self.rate(currency))
    }

    /// [`from_reference`](Self::from_reference), or `None` on overflow.
    pub fn checked_from_reference(&self, value: Decimal, currency: &str) -> Option<Decimal> {
        value.checked_div(self.rate(currency))
    }

    /// Currency codes with an explicit rate, sorted.
    pub fn currencies(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    /// All rates as DTOs, sorted by currency code.
    pub fn exchange_rates(&self) -> Vec<ExchangeRate> {
        self.rates
            .iter()
            .map(|(currency, rate)| ExchangeRate::new(currency.clone(), *rate))
            .collect()
    }
}

fn saturated(value: Decimal, direction: &str, currency: &str) -> Decimal {
    warn!(
        "Converting {} {} the reference currency via {} overflowed, saturating",
        value, direction, currency
    );
    if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        for rate in default_exchange_rates() {
            rates.insert(rate.currency, rate.rate);
        }
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            rates,
        }
    }
}
