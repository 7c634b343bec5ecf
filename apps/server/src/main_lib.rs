use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{config::Config, domain_events::TracingDomainEventSink};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthdeck_ai::{ConciergeConfig, ConciergeProvider, ConciergeService, GeminiConciergeProvider};
use wealthdeck_core::app_state::AppState as DashboardState;

pub struct AppState {
    dashboard: RwLock<DashboardState>,
    pub concierge_service: Arc<ConciergeService>,
}

impl AppState {
    /// Shared access for one read-only request.
    pub fn dashboard(&self) -> RwLockReadGuard<'_, DashboardState> {
        self.dashboard.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for one mutating request.
    pub fn dashboard_mut(&self) -> RwLockWriteGuard<'_, DashboardState> {
        self.dashboard.write().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("WD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = GeminiConciergeProvider::new(
        config.gemini_api_key.clone(),
        config.concierge_model.clone(),
    );
    if !provider.has_api_key() {
        tracing::warn!("WD_GEMINI_API_KEY is not set; the concierge will answer with apologies");
    }
    build_state_with_provider(config, Arc::new(provider))
}

/// Builds the state around an explicit concierge provider.
pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn ConciergeProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let dashboard = DashboardState::from_settings(config.settings.clone())?
        .with_event_sink(Arc::new(TracingDomainEventSink::new()));
    tracing::info!(
        "Dashboard ready: {} items, {} activities, reference currency {}",
        dashboard.asset_items().len(),
        dashboard.activities().len(),
        dashboard.base_currency()
    );

    let concierge_service = Arc::new(ConciergeService::new(
        provider,
        ConciergeConfig::default(),
    ));

    Ok(Arc::new(AppState {
        dashboard: RwLock::new(dashboard),
        concierge_service,
    }))
}
