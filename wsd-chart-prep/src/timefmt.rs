//! Helpers over the fixed "DD-MM-YYYY HH:MM:SS" display stamp.
//!
//! Stations report display stamps zero-padded on a 24-hour clock. These
//! helpers extract stamp fields and produce the axis label formats the
//! tick strategies emit. None of them panic: a stamp that fails to parse
//! degrades to the raw input (or `None` for the numeric extractors).

use chrono::NaiveDate;

/// Display stamp format: "DD-MM-YYYY HH:MM:SS".
pub const FULL_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Date half of a display stamp: "DD-MM-YYYY".
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// The "DD-MM-YYYY" half of a display stamp.
pub fn date_part(full_time: &str) -> &str {
    full_time.split(' ').next().unwrap_or("")
}

/// The "HH:MM:SS" half of a display stamp, or "" when there is none.
pub fn time_part(full_time: &str) -> &str {
    full_time.split_once(' ').map(|(_, time)| time).unwrap_or("")
}

/// Hour parsed from an "HH:MM:SS" string.
pub fn hour_of(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}

/// Minute parsed from an "HH:MM:SS" string.
pub fn minute_of(time: &str) -> Option<u32> {
    time.split(':').nth(1)?.trim().parse().ok()
}

/// Parse the "DD-MM-YYYY" half into a calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Weekday abbreviation ("Sun".."Sat") for a "DD-MM-YYYY" date, or ""
/// when the date does not parse.
pub fn day_name(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%a").to_string())
        .unwrap_or_default()
}

/// "DD Www" day-boundary label, e.g. "14 Thu".
pub fn day_with_weekday(date: &str) -> String {
    format_or_raw(date, "%d %a")
}

/// "DD Mon" label, e.g. "14 Mar".
pub fn day_month(date: &str) -> String {
    format_or_raw(date, "%d %b")
}

/// "DD Mon YYYY" label, e.g. "14 Mar 2024".
pub fn day_month_year(date: &str) -> String {
    format_or_raw(date, "%d %b %Y")
}

/// "Mon YYYY" label, e.g. "Mar 2024".
pub fn month_year(date: &str) -> String {
    format_or_raw(date, "%b %Y")
}

fn format_or_raw(date: &str, fmt: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format(fmt).to_string(),
        None => date.to_string(),
    }
}
