use serde::{Deserialize, Serialize};
use wealthdeck_core::{
    activities::{Activity, DeductionOutcome},
    fx::ExchangeRate,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub avatar_url: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A recorded activity and what it did to its source item.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreated {
    pub activity: Activity,
    pub deduction: DeductionOutcome,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseCategory {
    pub name: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategoryList {
    /// False when the submitted name was blank or already listed.
    pub added: bool,
    pub categories: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FxRates {
    pub base_currency: String,
    pub rates: Vec<ExchangeRate>,
}
