//! Tests for asset domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{
        AssetAttributes, AssetCategory, AssetItem, AssetItemStore, AttributeValue, NewAssetItem,
    };
    use crate::errors::ValidationError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn item(id: i64, category: AssetCategory) -> AssetItem {
        AssetItem {
            id,
            category,
            name: format!("Item {}", id),
            institution: "Bank".to_string(),
            amount: dec!(100),
            currency: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            remarks: None,
            attributes: AssetAttributes::new(),
        }
    }

    #[test]
    fn test_category_serialization_uses_camel_case_keys() {
        assert_eq!(
            serde_json::to_string(&AssetCategory::FixedIncome).unwrap(),
            "\"fixedIncome\""
        );
        assert_eq!(serde_json::to_string(&AssetCategory::Fx).unwrap(), "\"fx\"");
        for category in AssetCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed: Result<AssetCategory, _> = "realEstate".parse();
        assert!(matches!(parsed, Err(ValidationError::UnknownCategory(key)) if key == "realEstate"));

        let from_json: Result<AssetCategory, _> = serde_json::from_str("\"realEstate\"");
        assert!(from_json.is_err());
    }

    #[test]
    fn test_category_round_trips_through_from_str() {
        for category in AssetCategory::ALL {
            assert_eq!(category.as_str().parse::<AssetCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_payment_sources_are_cash_and_liabilities() {
        let sources: Vec<_> = AssetCategory::ALL
            .into_iter()
            .filter(|c| c.is_payment_source())
            .collect();
        assert_eq!(sources, vec![AssetCategory::Cash, AssetCategory::Liabilities]);
        assert!(AssetCategory::Liabilities.is_liability());
        assert!(!AssetCategory::Cash.is_liability());
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut attrs = AssetAttributes::new();
        attrs.insert("Ticker", "VGT");
        attrs.insert("Return YTD", "+24%");
        attrs.insert("Shares", 5000.0);
        attrs.insert("Ticker", "NVDA");

        let labels: Vec<_> = attrs.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Ticker", "Return YTD", "Shares"]);
        assert_eq!(attrs.get("Ticker"), Some(&AttributeValue::Text("NVDA".into())));

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"Ticker":"NVDA","Return YTD":"+24%","Shares":5000.0}"#);
    }

    #[test]
    fn test_attributes_deserialize_strings_and_numbers() {
        let attrs: AssetAttributes =
            serde_json::from_value(json!({ "APY": "4.5%", "Term": 12 })).unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("APY"), Some(&AttributeValue::Text("4.5%".into())));
        assert_eq!(attrs.get("Term"), Some(&AttributeValue::Number(12.0)));
    }

    #[test]
    fn test_new_asset_item_deserializes_with_details() {
        let new_item: NewAssetItem = serde_json::from_value(json!({
            "category": "cash",
            "name": "Rainy Day",
            "amount": "2500",
            "currency": "USD",
            "date": "2024-03-01",
            "details": { "category": "cash", "accountType": "CD", "interestRate": "5.1" }
        }))
        .unwrap();

        assert_eq!(new_item.category, AssetCategory::Cash);
        assert!(new_item.details.is_some());
        assert!(new_item.attributes.is_empty());
        assert_eq!(new_item.institution, None);
    }

    #[test]
    fn test_store_inserts_at_front() {
        let mut store = AssetItemStore::new();
        store.insert(item(1, AssetCategory::Cash));
        store.insert(item(2, AssetCategory::Equities));
        store.insert(item(3, AssetCategory::Liabilities));

        let ids: Vec<_> = store.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().category, AssetCategory::Equities);
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_store_projections() {
        let store = AssetItemStore::from_items(vec![
            item(1, AssetCategory::Cash),
            item(2, AssetCategory::Equities),
            item(3, AssetCategory::Liabilities),
            item(4, AssetCategory::Cash),
        ]);

        let cash: Vec<_> = store.by_category(AssetCategory::Cash).map(|i| i.id).collect();
        assert_eq!(cash, vec![1, 4]);

        let sources: Vec<_> = store.payment_sources().map(|i| i.id).collect();
        assert_eq!(sources, vec![1, 3, 4]);
    }
}
