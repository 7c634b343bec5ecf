/// Title given to an expense submitted without one.
pub const DEFAULT_ACTIVITY_TITLE: &str = "Expense";

/// Icon used when no category keyword matches.
pub const DEFAULT_ACTIVITY_ICON: &str = "payments";

/// Time-of-day format stamped on new activities (e.g. "02:30 PM").
pub const ACTIVITY_TIME_FORMAT: &str = "%I:%M %p";

/// Expense categories offered before the user adds their own.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 6] =
    ["Dining", "Transport", "Shopping", "Bills", "Travel", "Business"];

/// Keyword groups and the icon each one maps to, checked in order.
const CATEGORY_ICON_RULES: [(&[&str], &str); 6] = [
    (&["din", "food"], "restaurant"),
    (&["car", "transport", "uber"], "directions_car"),
    (&["shop", "store"], "shopping_bag"),
    (&["bill", "util"], "receipt"),
    (&["travel", "flight"], "flight"),
    (&["work", "business"], "work"),
];

/// Picks an icon for a free-form category label.
///
/// Matching is a case-insensitive substring test and the first rule wins,
/// so "Food Delivery" is a restaurant and "Car Rental for Work" is a car.
pub fn icon_for_category(category: &str) -> &'static str {
    let lowered = category.to_lowercase();
    CATEGORY_ICON_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ACTIVITY_ICON)
}
