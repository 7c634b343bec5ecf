//! Sample portfolio loaded by `AppState::with_demo_data`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::activities::Activity;
use crate::assets::{AssetAttributes, AssetCategory, AssetItem};

struct SeedItem {
    id: i64,
    category: AssetCategory,
    name: &'static str,
    institution: &'static str,
    amount: Decimal,
    currency: &'static str,
    date: (i32, u32, u32),
    remarks: &'static str,
    attributes: &'static [(&'static str, &'static str)],
}

const SEED_ITEMS: [SeedItem; 8] = [
    SeedItem {
        id: 101,
        category: AssetCategory::Cash,
        name: "Primary Savings",
        institution: "Chase",
        amount: dec!(240000),
        currency: "USD",
        date: (2023, 11, 1),
        remarks: "Emergency fund",
        attributes: &[("APY", "4.5%")],
    },
    SeedItem {
        id: 102,
        category: AssetCategory::Cash,
        name: "High Yield Deposit",
        institution: "Marcus",
        amount: dec!(1000000),
        currency: "USD",
        date: (2023, 10, 15),
        remarks: "Locked until Q4 2024",
        attributes: &[("APY", "5.1%"), ("Term", "12 Months")],
    },
    SeedItem {
        id: 201,
        category: AssetCategory::Equities,
        name: "Tech Growth Fund",
        institution: "Vanguard",
        amount: dec!(4500000),
        currency: "USD",
        date: (2023, 9, 20),
        remarks: "Main portfolio",
        attributes: &[("Ticker", "VGT"), ("Return YTD", "+24%")],
    },
    SeedItem {
        id: 202,
        category: AssetCategory::Equities,
        name: "NVDA Position",
        institution: "E*Trade",
        amount: dec!(2350000),
        currency: "USD",
        date: (2023, 8, 12),
        remarks: "Direct stock holding",
        attributes: &[("Ticker", "NVDA"), ("Shares", "5,000")],
    },
    SeedItem {
        id: 301,
        category: AssetCategory::FixedIncome,
        name: "Treasury Bonds",
        institution: "TreasuryDirect",
        amount: dec!(2100000),
        currency: "USD",
        date: (2023, 1, 10),
        remarks: "10-year yield",
        attributes: &[("Yield", "3.8%"), ("Maturity", "2033-01-10")],
    },
    SeedItem {
        id: 401,
        category: AssetCategory::Fx,
        name: "GBP Holdings",
        institution: "Wise",
        amount: dec!(420000),
        currency: "GBP",
        date: (2023, 12, 1),
        remarks: "London travel fund",
        attributes: &[("Base Rate", "1.27")],
    },
    SeedItem {
        id: 501,
        category: AssetCategory::Insurance,
        name: "Whole Life Policy",
        institution: "Northwestern",
        amount: dec!(2500000),
        currency: "USD",
        date: (2020, 5, 15),
        remarks: "Family protection",
        attributes: &[
            ("Crediting Rate", "6.2%"),
            ("Policy #", "NW-8892"),
            ("Death Benefit", "$5,000,000"),
        ],
    },
    SeedItem {
        id: 601,
        category: AssetCategory::Liabilities,
        name: "Mortgage",
        institution: "Wells Fargo",
        amount: dec!(660000),
        currency: "USD",
        date: (2019, 3, 1),
        remarks: "Primary residence",
        attributes: &[("APR", "3.1%"), ("Monthly Pmt", "$3,200")],
    },
];

/// Sample holdings and liabilities, in display order.
pub fn demo_asset_items() -> Vec<AssetItem> {
    SEED_ITEMS
        .iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.date;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(AssetItem {
                id: seed.id,
                category: seed.category,
                name: seed.name.to_string(),
                institution: seed.institution.to_string(),
                amount: seed.amount,
                currency: seed.currency.to_string(),
                date,
                remarks: Some(seed.remarks.to_string()),
                attributes: seed.attributes.iter().copied().collect::<AssetAttributes>(),
            })
        })
        .collect()
}

/// Sample activity log, most recent first.
pub fn demo_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            title: "Uber Trip".to_string(),
            category: "Business".to_string(),
            time: "2:30 PM".to_string(),
            amount: "12.40".to_string(),
            icon: "directions_car".to_string(),
            source_asset_id: None,
        },
        Activity {
            id: 2,
            title: "Starbucks Coffee".to_string(),
            category: "Personal".to_string(),
            time: "11:15 AM".to_string(),
            amount: "5.50".to_string(),
            icon: "restaurant".to_string(),
            source_asset_id: None,
        },
    ]
}
