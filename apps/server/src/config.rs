use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;
use wealthdeck_ai::DEFAULT_CONCIERGE_MODEL;
use wealthdeck_core::{fx::ExchangeRate, settings::Settings};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8088";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow_origins: Vec<String>,
    pub request_timeout: Duration,
    pub settings: Settings,
    pub gemini_api_key: Option<String>,
    pub concierge_model: String,
}

impl Config {
    /// Reads `WD_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let listen_addr = var("WD_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("WD_LISTEN_ADDR must be a socket address such as 0.0.0.0:8088")?;

        let cors_allow_origins = var("WD_CORS_ALLOW_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let timeout_ms = match var("WD_REQUEST_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .context("WD_REQUEST_TIMEOUT_MS must be a whole number of milliseconds")?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let mut settings = Settings::default();
        if let Some(currency) = var("WD_BASE_CURRENCY") {
            settings.base_currency = currency.to_uppercase();
        }
        if let Some(baseline) = var("WD_BASELINE_NET_WORTH") {
            settings.baseline_net_worth = baseline
                .parse::<Decimal>()
                .context("WD_BASELINE_NET_WORTH must be a decimal number")?;
        }
        if let Some(rates) = var("WD_FX_RATES") {
            for pair in rates.split(',').filter(|p| !p.trim().is_empty()) {
                let rate = ExchangeRate::parse_pair(pair)
                    .ok_or_else(|| anyhow!("WD_FX_RATES entry '{}' is not CODE=RATE", pair))?;
                settings.upsert_exchange_rate(rate);
            }
        }
        if let Some(seed) = var("WD_SEED_DEMO") {
            settings.seed_demo_data = parse_flag(&seed)
                .ok_or_else(|| anyhow!("WD_SEED_DEMO must be true or false, got '{}'", seed))?;
        }
        settings.validate()?;

        Ok(Self {
            listen_addr,
            cors_allow_origins,
            request_timeout: Duration::from_millis(timeout_ms),
            settings,
            gemini_api_key: var("WD_GEMINI_API_KEY"),
            concierge_model: var("WD_CONCIERGE_MODEL")
                .unwrap_or_else(|| DEFAULT_CONCIERGE_MODEL.to_string()),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
