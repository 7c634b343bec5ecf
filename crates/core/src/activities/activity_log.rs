use log::warn;
use rust_decimal::Decimal;

use super::activities_model::Activity;

/// Ordered activity history, most recent first. Append-only.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    activities: Vec<Activity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from activities already in display order.
    pub fn from_activities(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Inserts `activity` at the front.
    pub fn record(&mut self, activity: Activity) {
        self.activities.insert(0, activity);
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Sum of all amounts as typed, regardless of currency. Unparsable
    /// amounts count as zero and the sum saturates at the `Decimal` bounds.
    pub fn spending_total(&self) -> Decimal {
        self.activities
            .iter()
            .map(|activity| match activity.parsed_amount() {
                Some(amount) => amount,
                None => {
                    warn!(
                        "Activity {} has unparsable amount '{}', counting as 0",
                        activity.id, activity.amount
                    );
                    Decimal::ZERO
                }
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
