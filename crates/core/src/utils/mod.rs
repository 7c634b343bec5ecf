pub mod format_utils;
pub mod id_utils;
pub mod time_utils;
