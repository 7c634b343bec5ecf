//! Activities module - expense models, the activity log, and the double-entry ledger.

mod activities_constants;
mod activities_model;
mod activity_log;
pub mod ledger;



pub use activities_constants::*;
pub use activities_model::{Activity, ExpenseCategories, NewActivity};
pub use activity_log::ActivityLog;
pub use ledger::{apply_deduction, DeductionOutcome};
