//! Tests for the application state.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::activities::{Activity, NewActivity};
    use crate::app_state::AppState;
    use crate::assets::{AssetAttributes, AssetCategory, AssetItem, NewAssetItem};
    use crate::errors::{Error, ValidationError};
    use crate::events::{DomainEvent, RecordingEventSink};
    use crate::fx::ExchangeRate;
    use crate::settings::Settings;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn settings() -> Settings {
        Settings {
            base_currency: "USD".to_string(),
            baseline_net_worth: dec!(1000),
            exchange_rates: vec![
                ExchangeRate::new("USD", dec!(1)),
                ExchangeRate::new("GBP", dec!(1.27)),
            ],
            seed_demo_data: false,
        }
    }

    fn item(id: i64, category: AssetCategory, amount: Decimal, currency: &str) -> AssetItem {
        AssetItem {
            id,
            category,
            name: format!("Item {}", id),
            institution: "Bank".to_string(),
            amount,
            currency: currency.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            remarks: None,
            attributes: AssetAttributes::new(),
        }
    }

    fn expense(id: i64, amount: &str) -> Activity {
        Activity {
            id,
            title: "Lunch".to_string(),
            category: "Dining".to_string(),
            time: "12:00 PM".to_string(),
            amount: amount.to_string(),
            icon: "restaurant".to_string(),
            source_asset_id: None,
        }
    }

    // ============================================================================
    // Construction
    // ============================================================================

    #[test]
    fn test_empty_state() {
        let state = AppState::new(settings()).unwrap();
        assert_eq!(state.username(), "Julian");
        assert_eq!(state.user_avatar(), "https://picsum.photos/200/200");
        assert!(state.asset_items().is_empty());
        assert!(state.activities().is_empty());
        assert_eq!(state.total_net_worth(), dec!(0));
        assert_eq!(state.financial_score(), 75);
        assert_eq!(state.expense_categories().len(), 6);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let invalid = Settings {
            baseline_net_worth: dec!(0),
            ..settings()
        };
        assert!(AppState::new(invalid).is_err());
    }

    #[test]
    fn test_demo_data_matches_sample_portfolio() {
        let state = AppState::with_demo_data(Settings::default()).unwrap();
        assert_eq!(state.asset_items().len(), 8);
        assert_eq!(state.activities().len(), 2);
        assert_eq!(state.activities()[0].title, "Uber Trip");

        let totals = state.category_totals();
        assert_eq!(totals.cash, dec!(1240000));
        assert_eq!(totals.equities, dec!(6850000));
        assert_eq!(totals.fixed_income, dec!(2100000));
        assert_eq!(totals.fx, dec!(533400));
        assert_eq!(totals.insurance, dec!(2500000));
        assert_eq!(totals.liabilities, dec!(660000));
        assert_eq!(state.total_net_worth(), dec!(12563400));

        let growth = state.growth_metrics();
        assert_eq!(growth.amount, dec!(363400));
        assert!(growth.is_positive);
        assert_eq!(state.financial_score(), 93);
        assert_eq!(state.spending_total(), dec!(17.90));
    }

    #[test]
    fn test_from_settings_honors_seed_flag() {
        let empty = AppState::from_settings(settings()).unwrap();
        assert!(empty.asset_items().is_empty());

        let seeded = AppState::from_settings(Settings::default()).unwrap();
        assert_eq!(seeded.asset_items().len(), 8);
    }

    // ============================================================================
    // Double entry
    // ============================================================================

    #[test]
    fn test_add_activity_deducts_from_source() {
        let mut state = AppState::new(settings()).unwrap();
        state.add_asset_item(item(1, AssetCategory::Cash, dec!(1000), "USD"));

        state.add_activity(expense(10, "100"), Some(1), Some("USD"));
        assert_eq!(state.asset_item(1).unwrap().amount, dec!(900));

        let outcome = state.add_activity(expense(11, "50"), Some(1), Some("GBP"));
        assert_eq!(state.asset_item(1).unwrap().amount, dec!(836.5));
        assert!(outcome.source_found);

        let ids: Vec<_> = state.activities().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![11, 10]);
        assert_eq!(state.activities()[0].source_asset_id, Some(1));
    }

    #[test]
    fn test_add_activity_without_source_only_records() {
        let mut state = AppState::new(settings()).unwrap();
        state.add_asset_item(item(1, AssetCategory::Cash, dec!(1000), "USD"));
        let before = state.category_totals();

        let outcome = state.add_activity(expense(10, "100"), None, None);
        assert!(!outcome.source_found);
        assert_eq!(state.category_totals(), before);
        assert_eq!(state.activities().len(), 1);
    }

    #[test]
    fn test_add_activity_defaults_to_reference_currency() {
        let mut state = AppState::new(settings()).unwrap();
        state.add_asset_item(item(1, AssetCategory::Liabilities, dec!(127), "GBP"));

        state.add_activity(expense(10, "127"), Some(1), None);
        assert_eq!(state.asset_item(1).unwrap().amount, dec!(27));
    }

    #[test]
    fn test_unparsable_amount_deducts_nothing() {
        let mut state = AppState::new(settings()).unwrap();
        state.add_asset_item(item(1, AssetCategory::Cash, dec!(1000), "USD"));

        let outcome = state.add_activity(expense(10, "lots"), Some(1), None);
        assert!(outcome.source_found);
        assert_eq!(outcome.applied, dec!(0));
        assert_eq!(state.asset_item(1).unwrap().amount, dec!(1000));
        assert_eq!(state.activities().len(), 1);
    }

    #[test]
    fn test_over_deduction_clamps_at_zero() {
        let mut state = AppState::new(settings()).unwrap();
        state.add_asset_item(item(1, AssetCategory::Cash, dec!(10), "USD"));

        let outcome = state.add_activity(expense(10, "25"), Some(1), None);
        assert_eq!(state.asset_item(1).unwrap().amount, dec!(0));
        assert_eq!(outcome.shortfall, dec!(15));
    }

    // ============================================================================
    // Form paths and projections
    // ============================================================================

    #[test]
    fn test_create_asset_item_assigns_increasing_ids() {
        let mut state = AppState::with_demo_data(Settings::default()).unwrap();
        let form = NewAssetItem {
            category: AssetCategory::Cash,
            name: Some("Brokerage Cash".to_string()),
            institution: None,
            amount: Some("5000".to_string()),
            currency: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            remarks: None,
            details: None,
            attributes: AssetAttributes::new(),
        };

        let first = state.create_asset_item(form.clone()).unwrap();
        let second = state.create_asset_item(form).unwrap();
        assert!(first.id > 601);
        assert!(second.id > first.id);
        assert_eq!(state.asset_items()[0].id, second.id);
        assert_eq!(first.institution, "General");
        assert_eq!(state.category_totals().cash, dec!(1250000));
    }

    #[test]
    fn test_create_activity_fills_defaults() {
        let mut state = AppState::with_demo_data(Settings::default()).unwrap();
        let (activity, outcome) = state.create_activity(NewActivity {
            title: None,
            category: "Food & Drinks".to_string(),
            amount: "40".to_string(),
            time: None,
            source_asset_id: Some(101),
            currency: Some("USD".to_string()),
        })
        .unwrap();

        assert_eq!(activity.title, "Expense");
        assert_eq!(activity.icon, "restaurant");
        assert!(activity.time.ends_with("AM") || activity.time.ends_with("PM"));
        assert!(activity.id > 2);
        assert_eq!(outcome.applied, dec!(40));
        assert_eq!(state.asset_item(101).unwrap().amount, dec!(239960));
        assert_eq!(state.activities()[0], activity);
    }

    #[test]
    fn test_create_activity_rejects_amount_above_maximum() {
        let mut state = AppState::with_demo_data(Settings::default()).unwrap();
        let err = state
            .create_activity(NewActivity {
                title: Some("Yacht".to_string()),
                category: "Shopping".to_string(),
                amount: "1000000000000000000000000000".to_string(),
                time: None,
                source_asset_id: Some(101),
                currency: Some("USD".to_string()),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
        assert_eq!(state.activities().len(), 2);
        assert_eq!(state.asset_item(101).unwrap().amount, dec!(240000));
    }

    #[test]
    fn test_oversized_holdings_keep_reads_working() {
        let mut state = AppState::new(settings()).unwrap();
        let huge = dec!(50_000_000_000_000_000_000_000_000_000);
        state.add_asset_item(item(1, AssetCategory::Cash, huge, "USD"));
        state.add_asset_item(item(2, AssetCategory::Cash, huge, "USD"));
        state.add_activity(expense(10, "79228162514264337593543950335"), None, None);
        state.add_activity(expense(11, "79228162514264337593543950335"), None, None);

        assert_eq!(state.total_net_worth(), Decimal::MAX);
        assert_eq!(state.category_detail(AssetCategory::Cash).total, Decimal::MAX);
        assert_eq!(state.spending_total(), Decimal::MAX);
        let dashboard = state.dashboard();
        assert_eq!(dashboard.total_net_worth, Decimal::MAX);
        assert!(dashboard.growth.is_positive);
    }

    #[test]
    fn test_category_detail_and_payment_sources() {
        let state = AppState::with_demo_data(Settings::default()).unwrap();

        let detail = state.category_detail(AssetCategory::Fx);
        assert_eq!(detail.title, "FX Holdings");
        assert_eq!(detail.total, dec!(533400));
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.currency, "USD");

        let sources: Vec<_> = state.payment_sources().iter().map(|i| i.id).collect();
        assert_eq!(sources, vec![101, 102, 601]);
    }

    #[test]
    fn test_dashboard_snapshot_is_consistent() {
        let state = AppState::with_demo_data(Settings::default()).unwrap();
        let dashboard = state.dashboard();

        assert_eq!(dashboard.total_net_worth, state.total_net_worth());
        assert_eq!(dashboard.financial_score, dashboard.financial_health.score);
        assert_eq!(dashboard.growth, state.growth_metrics());
        assert_eq!(dashboard.allocation.len(), 6);
        assert_eq!(dashboard.activity_count, 2);
        assert_eq!(dashboard.base_currency, "USD");
    }

    #[test]
    fn test_expense_categories_are_extensible() {
        let mut state = AppState::new(settings()).unwrap();
        assert!(state.add_expense_category("Health"));
        assert!(!state.add_expense_category("health"));
        assert_eq!(state.expense_categories().last().unwrap(), "Health");
    }

    // ============================================================================
    // Events
    // ============================================================================

    #[test]
    fn test_mutations_emit_domain_events() {
        let sink = RecordingEventSink::default();
        let mut state = AppState::new(settings())
            .unwrap()
            .with_event_sink(Arc::new(sink.clone()));

        state.add_asset_item(item(1, AssetCategory::Cash, dec!(100), "USD"));
        state.add_activity(expense(10, "30"), Some(1), None);
        state.add_activity(expense(11, "5"), Some(99), None);
        state.set_username("Ada");

        let events = sink.events();
        assert_eq!(
            events,
            vec![
                DomainEvent::asset_item_added(1, AssetCategory::Cash),
                DomainEvent::activity_recorded(10, Some(1)),
                DomainEvent::asset_balance_deducted(1, 10, dec!(30), dec!(0)),
                DomainEvent::activity_recorded(11, Some(99)),
                DomainEvent::profile_updated(),
            ]
        );
        assert_eq!(state.username(), "Ada");
    }
}
