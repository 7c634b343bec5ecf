use std::sync::Arc;

use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::dashboard_model::DashboardSnapshot;
use super::demo_seed::{demo_activities, demo_asset_items};
use crate::activities::{
    apply_deduction, icon_for_category, Activity, ActivityLog, DeductionOutcome,
    ExpenseCategories, NewActivity, DEFAULT_ACTIVITY_TITLE,
};
use crate::assets::{
    prepare_asset_item, AssetCategory, AssetItem, AssetItemStore, CategoryDetail, NewAssetItem,
};
use crate::constants::{DEFAULT_AVATAR_URL, DEFAULT_USERNAME, MAX_AMOUNT};
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::fx::RateTable;
use crate::portfolio::{
    calculate_allocation, calculate_category_totals, calculate_financial_health,
    calculate_growth, AllocationSlice, CategoryTotals, FinancialHealth, GrowthMetrics,
};
use crate::settings::Settings;
use crate::utils::format_utils::parse_leading_decimal;
use crate::utils::id_utils::IdGenerator;
use crate::utils::time_utils::current_time_of_day;

/// The single owner of dashboard state.
///
/// Reads take `&self` and recompute every aggregate from the store; nothing
/// derived is cached. Writes take `&mut self` and go through the named
/// operations below, each emitting a [`DomainEvent`] once it has completed.
pub struct AppState {
    settings: Settings,
    rates: RateTable,
    username: String,
    user_avatar: String,
    assets: AssetItemStore,
    activities: ActivityLog,
    expense_categories: ExpenseCategories,
    ids: IdGenerator,
    event_sink: Arc<dyn DomainEventSink>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_currency", &self.rates.base_currency())
            .field("username", &self.username)
            .field("assets", &self.assets.len())
            .field("activities", &self.activities.len())
            .finish()
    }
}

impl AppState {
    /// Empty state built from validated `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let rates = settings.rate_table()?;
        Ok(Self {
            settings,
            rates,
            username: DEFAULT_USERNAME.to_string(),
            user_avatar: DEFAULT_AVATAR_URL.to_string(),
            assets: AssetItemStore::new(),
            activities: ActivityLog::new(),
            expense_categories: ExpenseCategories::default(),
            ids: IdGenerator::new(),
            event_sink: Arc::new(NoOpDomainEventSink),
        })
    }

    /// State preloaded with the sample portfolio.
    pub fn with_demo_data(settings: Settings) -> Result<Self> {
        let mut state = Self::new(settings)?;
        let items = demo_asset_items();
        let activities = demo_activities();
        for id in items.iter().map(|i| i.id).chain(activities.iter().map(|a| a.id)) {
            state.ids.observe(id);
        }
        info!(
            "Loaded demo data: {} asset items, {} activities",
            items.len(),
            activities.len()
        );
        state.assets = AssetItemStore::from_items(items);
        state.activities = ActivityLog::from_activities(activities);
        Ok(state)
    }

    /// Seeds demo data when `settings.seed_demo_data` is set.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        if settings.seed_demo_data {
            Self::with_demo_data(settings)
        } else {
            Self::new(settings)
        }
    }

    /// Replaces the sink that receives domain events.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn base_currency(&self) -> &str {
        self.rates.base_currency()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_avatar(&self) -> &str {
        &self.user_avatar
    }

    /// Activity log, most recent first.
    pub fn activities(&self) -> &[Activity] {
        self.activities.activities()
    }

    /// Asset items, most recent first.
    pub fn asset_items(&self) -> &[AssetItem] {
        self.assets.items()
    }

    pub fn asset_item(&self, id: i64) -> Option<&AssetItem> {
        self.assets.get(id)
    }

    pub fn expense_categories(&self) -> &[String] {
        self.expense_categories.as_slice()
    }

    pub fn category_totals(&self) -> CategoryTotals {
        calculate_category_totals(self.assets.iter(), &self.rates)
    }

    pub fn total_net_worth(&self) -> Decimal {
        self.category_totals().net_worth()
    }

    pub fn growth_metrics(&self) -> GrowthMetrics {
        calculate_growth(self.total_net_worth(), self.settings.baseline_net_worth)
    }

    pub fn financial_health(&self) -> FinancialHealth {
        calculate_financial_health(&self.category_totals(), self.activities.len())
    }

    pub fn financial_score(&self) -> u8 {
        self.financial_health().score
    }

    pub fn allocation(&self) -> Vec<AllocationSlice> {
        calculate_allocation(&self.category_totals())
    }

    /// Sum of activity amounts as typed. Unparsable amounts count as zero.
    pub fn spending_total(&self) -> Decimal {
        self.activities.spending_total()
    }

    /// Items and reference-currency total of one category.
    pub fn category_detail(&self, category: AssetCategory) -> CategoryDetail {
        let items: Vec<AssetItem> = self.assets.by_category(category).cloned().collect();
        let total = calculate_category_totals(&items, &self.rates).get(category);
        CategoryDetail {
            category,
            title: category.detail_title().to_string(),
            total,
            currency: self.rates.base_currency().to_string(),
            items,
        }
    }

    /// Items an expense may be funded from: cash accounts and liabilities.
    pub fn payment_sources(&self) -> Vec<AssetItem> {
        self.assets.payment_sources().cloned().collect()
    }

    pub fn dashboard(&self) -> DashboardSnapshot {
        let category_totals = self.category_totals();
        let total_net_worth = category_totals.net_worth();
        let financial_health =
            calculate_financial_health(&category_totals, self.activities.len());
        debug!("Building dashboard snapshot for {}", self.username);

        DashboardSnapshot {
            username: self.username.clone(),
            user_avatar: self.user_avatar.clone(),
            base_currency: self.rates.base_currency().to_string(),
            total_net_worth,
            category_totals,
            growth: calculate_growth(total_net_worth, self.settings.baseline_net_worth),
            financial_score: financial_health.score,
            financial_health,
            allocation: calculate_allocation(&category_totals),
            spending_total: self.activities.spending_total(),
            activity_count: self.activities.len(),
        }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
        info!("Username set to '{}'", self.username);
        self.event_sink.emit(DomainEvent::profile_updated());
    }

    pub fn set_user_avatar(&mut self, avatar_url: impl Into<String>) {
        self.user_avatar = avatar_url.into();
        info!("User avatar updated");
        self.event_sink.emit(DomainEvent::profile_updated());
    }

    /// Records `activity` and deducts it from `source_asset_id` if that item
    /// exists.
    ///
    /// The activity is always inserted, linked to `source_asset_id`. Its
    /// amount is read in `expense_currency` (the reference currency when
    /// absent); an unparsable amount deducts nothing.
    pub fn add_activity(
        &mut self,
        mut activity: Activity,
        source_asset_id: Option<i64>,
        expense_currency: Option<&str>,
    ) -> DeductionOutcome {
        activity.source_asset_id = source_asset_id;
        let activity_id = activity.id;
        let amount = match activity.parsed_amount() {
            Some(amount) => amount,
            None => {
                if source_asset_id.is_some() {
                    warn!(
                        "Activity {} has unparsable amount '{}', deducting 0",
                        activity_id, activity.amount
                    );
                }
                Decimal::ZERO
            }
        };

        self.ids.observe(activity_id);
        info!(
            "Recording activity {} '{}' ({})",
            activity_id, activity.title, activity.amount
        );
        self.activities.record(activity);

        let currency = expense_currency.unwrap_or_else(|| self.rates.base_currency()).to_string();
        let outcome = apply_deduction(
            &mut self.assets,
            &self.rates,
            source_asset_id,
            amount,
            &currency,
        );

        let mut events = vec![DomainEvent::activity_recorded(activity_id, source_asset_id)];
        if let (true, Some(asset_id)) = (outcome.source_found, outcome.source_asset_id) {
            events.push(DomainEvent::asset_balance_deducted(
                asset_id,
                activity_id,
                outcome.applied,
                outcome.shortfall,
            ));
        }
        self.event_sink.emit_batch(events);

        outcome
    }

    /// Inserts `item` at the front of the store as given.
    pub fn add_asset_item(&mut self, item: AssetItem) {
        let (asset_id, category) = (item.id, item.category);
        self.ids.observe(asset_id);
        info!(
            "Adding {} item {} '{}' ({} {})",
            category, asset_id, item.name, item.amount, item.currency
        );
        self.assets.insert(item);
        self.event_sink
            .emit(DomainEvent::asset_item_added(asset_id, category));
    }

    /// Builds an item from the entry form, assigns its id and inserts it.
    pub fn create_asset_item(&mut self, new_item: NewAssetItem) -> Result<AssetItem> {
        let id = self.ids.next_id();
        let item = prepare_asset_item(new_item, id, &self.rates)?;
        self.add_asset_item(item.clone());
        Ok(item)
    }

    /// Builds an activity from the expense form and records it.
    ///
    /// Amounts above [`MAX_AMOUNT`] are rejected before anything is recorded.
    pub fn create_activity(
        &mut self,
        new_activity: NewActivity,
    ) -> Result<(Activity, DeductionOutcome)> {
        if let Some(amount) = parse_leading_decimal(&new_activity.amount) {
            if amount.abs() > MAX_AMOUNT {
                return Err(ValidationError::InvalidInput(format!(
                    "amount {} exceeds the maximum of {}",
                    amount, MAX_AMOUNT
                ))
                .into());
            }
        }
        let title = new_activity
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACTIVITY_TITLE.to_string());
        let time = new_activity
            .time
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(current_time_of_day);

        let activity = Activity {
            id: self.ids.next_id(),
            title,
            icon: icon_for_category(&new_activity.category).to_string(),
            category: new_activity.category,
            time,
            amount: new_activity.amount,
            source_asset_id: new_activity.source_asset_id,
        };

        let outcome = self.add_activity(
            activity.clone(),
            new_activity.source_asset_id,
            new_activity.currency.as_deref(),
        );
        Ok((activity, outcome))
    }

    /// Adds a custom expense category. Returns false for blanks and
    /// case-insensitive duplicates.
    pub fn add_expense_category(&mut self, name: &str) -> bool {
        let added = self.expense_categories.add(name);
        if added {
            info!("Added expense category '{}'", name.trim());
        }
        added
    }
}
