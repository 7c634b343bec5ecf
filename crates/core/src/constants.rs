use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reference currency every aggregate is expressed in.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Net worth captured at the previous month close. Growth is measured against it.
pub const DEFAULT_BASELINE_NET_WORTH: Decimal = dec!(12200000);

/// Decimal precision for derived percentages
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default display name for a fresh session.
pub const DEFAULT_USERNAME: &str = "Julian";

/// Default avatar for a fresh session.
pub const DEFAULT_AVATAR_URL: &str = "https://picsum.photos/200/200";

/// Largest amount accepted from the entry forms, in the entered currency.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000);
