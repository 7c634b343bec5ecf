use chrono::{Local, NaiveTime};

use crate::activities::ACTIVITY_TIME_FORMAT;

/// Formats a time of day the way the activity log displays it, e.g. `"02:30 PM"`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(ACTIVITY_TIME_FORMAT).to_string()
}

/// Current local time of day, formatted for the activity log.
pub fn current_time_of_day() -> String {
    format_time_of_day(Local::now().time())
}
