//! Tests for asset form handling and attribute rendering.

#[cfg(test)]
mod tests {
    use crate::assets::{
        prepare_asset_item, AssetAttributes, AssetCategory, AssetDetails, AttributeValue,
        NewAssetItem, DEFAULT_ASSET_NAME, DEFAULT_INSTITUTION,
    };
    use crate::errors::{Error, ValidationError};
    use crate::fx::{ExchangeRate, RateTable};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn form(category: AssetCategory, amount: Option<&str>) -> NewAssetItem {
        NewAssetItem {
            category,
            name: None,
            institution: None,
            amount: amount.map(str::to_string),
            currency: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            remarks: None,
            details: None,
            attributes: AssetAttributes::new(),
        }
    }

    fn text(value: &str) -> Option<AttributeValue> {
        Some(AttributeValue::Text(value.to_string()))
    }

    #[test]
    fn test_blank_fields_get_defaults() {
        let mut new_item = form(AssetCategory::Cash, Some("2500"));
        new_item.name = Some("   ".to_string());
        new_item.remarks = Some(String::new());

        let item = prepare_asset_item(new_item, 7, &RateTable::default()).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, DEFAULT_ASSET_NAME);
        assert_eq!(item.institution, DEFAULT_INSTITUTION);
        assert_eq!(item.remarks, None);
        assert_eq!(item.amount, dec!(2500));
    }

    #[test]
    fn test_amount_coercion() {
        let rates = RateTable::default();
        let cases = [
            (None, dec!(0)),
            (Some("abc"), dec!(0)),
            (Some("-300"), dec!(0)),
            (Some("12.40 USD"), dec!(12.40)),
        ];
        for (input, expected) in cases {
            let item = prepare_asset_item(form(AssetCategory::Cash, input), 1, &rates).unwrap();
            assert_eq!(item.amount, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_equities_amount_is_price_times_quantity() {
        let mut new_item = form(AssetCategory::Equities, Some("1"));
        new_item.details = Some(AssetDetails::Equities {
            equity_type: None,
            ticker: Some("nvda".to_string()),
            share_price: Some("150".to_string()),
            share_quantity: Some("10".to_string()),
            avg_cost: Some("120".to_string()),
        });

        let item = prepare_asset_item(new_item, 1, &RateTable::default()).unwrap();
        assert_eq!(item.amount, dec!(1500));
        assert_eq!(item.attributes.get("Type"), text("Stock").as_ref());
        assert_eq!(item.attributes.get("Ticker"), text("NVDA").as_ref());
        assert_eq!(item.attributes.get("Current Price"), text("USD 150").as_ref());
        assert_eq!(item.attributes.get("Total Gain"), text("+USD 300").as_ref());
        assert_eq!(item.attributes.get("Return"), text("+25.00%").as_ref());
    }

    #[test]
    fn test_equities_without_quantity_keep_typed_amount() {
        let mut new_item = form(AssetCategory::Equities, Some("900"));
        new_item.details = Some(AssetDetails::Equities {
            equity_type: Some("ETF".to_string()),
            ticker: None,
            share_price: Some("45".to_string()),
            share_quantity: None,
            avg_cost: None,
        });

        let item = prepare_asset_item(new_item, 1, &RateTable::default()).unwrap();
        assert_eq!(item.amount, dec!(900));
        assert_eq!(item.attributes.get("Type"), text("ETF").as_ref());
        assert!(item.attributes.get("Total Gain").is_none());
    }

    #[test]
    fn test_fixed_income_estimates_income() {
        let mut new_item = form(AssetCategory::FixedIncome, Some("10000"));
        new_item.details = Some(AssetDetails::FixedIncome {
            interest_rate: Some("4".to_string()),
            maturity_date: Some("2030-01-01".to_string()),
            payment_frequency: None,
        });

        let item = prepare_asset_item(new_item, 1, &RateTable::default()).unwrap();
        let labels: Vec<_> = item.attributes.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Coupon", "Maturity", "Frequency", "Est. Income"]);
        assert_eq!(item.attributes.get("Frequency"), text("Annually").as_ref());
        assert_eq!(item.attributes.get("Est. Income"), text("USD 400").as_ref());
    }

    #[test]
    fn test_fx_value_uses_reference_currency() {
        let mut new_item = form(AssetCategory::Fx, Some("1000"));
        new_item.currency = "GBP".to_string();
        new_item.details = Some(AssetDetails::Fx { cost_basis: None });

        let item = prepare_asset_item(new_item.clone(), 1, &RateTable::default()).unwrap();
        assert_eq!(item.attributes.get("Currency"), text("GBP").as_ref());
        assert_eq!(item.attributes.get("USD Value"), text("$1,270").as_ref());

        let eur_table = RateTable::new(
            "EUR",
            vec![ExchangeRate::new("EUR", dec!(1)), ExchangeRate::new("GBP", dec!(1.2))],
        )
        .unwrap();
        let item = prepare_asset_item(new_item, 1, &eur_table).unwrap();
        assert_eq!(item.attributes.get("EUR Value"), text("EUR 1,200").as_ref());
    }

    #[test]
    fn test_insurance_and_liability_labels() {
        let mut policy = form(AssetCategory::Insurance, Some("2500000"));
        policy.details = Some(AssetDetails::Insurance {
            policy_type: None,
            policy_number: Some("NW-8892".to_string()),
            coverage_amount: Some("5000000".to_string()),
            interest_rate: Some("6.2".to_string()),
            policy_term: Some("20".to_string()),
        });
        let item = prepare_asset_item(policy, 1, &RateTable::default()).unwrap();
        assert_eq!(item.attributes.get("Type"), text("Whole Life").as_ref());
        assert_eq!(item.attributes.get("Death Benefit"), text("USD 5,000,000").as_ref());
        assert_eq!(item.attributes.get("Crediting Rate"), text("6.2%").as_ref());
        assert_eq!(item.attributes.get("Term"), text("20 Yrs").as_ref());

        let mut loan = form(AssetCategory::Liabilities, Some("660000"));
        loan.details = Some(AssetDetails::Liabilities {
            loan_type: None,
            interest_rate: Some("3.1".to_string()),
            monthly_payment: Some("3200.5".to_string()),
            maturity_date: None,
        });
        let item = prepare_asset_item(loan, 2, &RateTable::default()).unwrap();
        assert_eq!(item.attributes.get("Type"), text("Mortgage").as_ref());
        assert_eq!(item.attributes.get("APR"), text("3.1%").as_ref());
        assert_eq!(item.attributes.get("Monthly Pmt"), text("USD 3,200.5").as_ref());
        assert!(item.attributes.get("Payoff Date").is_none());
    }

    #[test]
    fn test_cd_maturity_only_for_cd_accounts() {
        let details = |account_type: &str| AssetDetails::Cash {
            account_type: Some(account_type.to_string()),
            interest_rate: Some("5.1".to_string()),
            maturity_date: Some("2025-01-01".to_string()),
        };
        let rates = RateTable::default();

        let cd = details("CD").to_attributes(dec!(1000), "USD", &rates);
        assert_eq!(cd.get("Maturity"), text("2025-01-01").as_ref());
        assert_eq!(cd.get("APY"), text("5.1%").as_ref());

        let checking = details("Checking").to_attributes(dec!(1000), "USD", &rates);
        assert!(checking.get("Maturity").is_none());
    }

    #[test]
    fn test_extra_attributes_override_rendered_ones() {
        let mut new_item = form(AssetCategory::Cash, Some("100"));
        new_item.details = Some(AssetDetails::Cash {
            account_type: None,
            interest_rate: Some("4.5".to_string()),
            maturity_date: None,
        });
        new_item.attributes.insert("APY", "4.75%");
        new_item.attributes.insert("Note", "promo");

        let item = prepare_asset_item(new_item, 1, &RateTable::default()).unwrap();
        let labels: Vec<_> = item.attributes.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Type", "APY", "Note"]);
        assert_eq!(item.attributes.get("APY"), text("4.75%").as_ref());
    }

    #[test]
    fn test_mismatched_details_are_rejected() {
        let mut new_item = form(AssetCategory::Cash, Some("100"));
        new_item.details = Some(AssetDetails::Fx { cost_basis: None });

        let result = prepare_asset_item(new_item, 1, &RateTable::default());
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_amount_above_maximum_is_rejected() {
        let rates = RateTable::default();
        let new_item = form(AssetCategory::Cash, Some("50000000000000000000000000000"));
        let err = prepare_asset_item(new_item, 1, &rates).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));

        let at_cap = form(AssetCategory::Cash, Some("1000000000000000"));
        assert_eq!(
            prepare_asset_item(at_cap, 2, &rates).unwrap().amount,
            dec!(1000000000000000)
        );
    }

    #[test]
    fn test_overflowing_share_position_is_rejected() {
        let mut new_item = form(AssetCategory::Equities, None);
        new_item.details = Some(AssetDetails::Equities {
            equity_type: None,
            ticker: None,
            share_price: Some("1000000000000000".to_string()),
            share_quantity: Some("1000000000000000".to_string()),
            avg_cost: Some("1".to_string()),
        });
        let err = prepare_asset_item(new_item, 1, &RateTable::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_labels_skip_figures_that_do_not_fit() {
        let details = AssetDetails::Equities {
            equity_type: None,
            ticker: None,
            share_price: Some("1000000000000000".to_string()),
            share_quantity: Some("1000000000000000".to_string()),
            avg_cost: Some("0.000000000000001".to_string()),
        };
        let attrs = details.to_attributes(dec!(1), "USD", &RateTable::default());
        assert_eq!(attrs.get("Shares"), text("1000000000000000").as_ref());
        assert!(attrs.get("Total Gain").is_none());
        assert!(attrs.get("Return").is_none());
    }
}
