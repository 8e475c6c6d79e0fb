use chrono::{DateTime, Local, TimeZone};

/// `YYYYMMDDHHMM`, zero padded, no separators.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Local wall-clock time, minute precision.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}
