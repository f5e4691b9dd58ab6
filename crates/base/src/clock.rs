use chrono::{DateTime, Local, TimeZone};

/// Diagnostic timestamp, `YYYY-MM-DDTHH:MM:SS` in local time.
pub fn format_timestamp() -> String {
    format_timestamp_of(&Local::now())
}

/// Run-log timestamp, `HH:MM:SS.nnnnnnnnn` in local time.
///
/// Nanoseconds are zero-padded to nine digits, matching `date +%H:%M:%S.%N`.
pub fn format_time_of_day() -> String {
    format_time_of_day_of(&Local::now())
}

pub fn format_timestamp_of<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn format_time_of_day_of<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M:%S%.9f").to_string()
}
