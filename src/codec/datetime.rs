use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use super::Parsed;
use crate::types::{timestamp_is_unset, Timestamp};

/// Parses `YYYYMMDD` as midnight UTC.
pub fn parse_date(text: &str) -> Parsed<Option<Timestamp>> {
    if text.is_empty() {
        return Parsed::ok(None);
    }
    match naive_date(text) {
        Some(date) => Parsed::ok(Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))),
        None => {
            debug!(value = text, "unparsable date");
            Parsed::fallback(None)
        }
    }
}

/// Combines a `YYYYMMDD` date with a `HHMM` or `HHMMSS` time.
///
/// No date means no timestamp. A date without a time is midnight.
pub fn parse_date_time(date: &str, time: &str) -> Parsed<Option<Timestamp>> {
    if date.is_empty() {
        return Parsed::ok(None);
    }
    let parsed = naive_date(date).zip(naive_time(time));
    match parsed {
        Some((date, time)) => Parsed::ok(Some(Utc.from_utc_datetime(&date.and_time(time)))),
        None => {
            debug!(date, time, "unparsable date/time");
            Parsed::fallback(None)
        }
    }
}

/// `YYYYMMDD`, or `None` when unset.
pub fn format_date(value: Option<&Timestamp>) -> Option<String> {
    if timestamp_is_unset(value) {
        return None;
    }
    value.map(|ts| ts.format("%Y%m%d").to_string())
}

/// `HHMMSS`, or `None` when unset.
pub fn format_time(value: Option<&Timestamp>) -> Option<String> {
    if timestamp_is_unset(value) {
        return None;
    }
    value.map(|ts| ts.format("%H%M%S").to_string())
}

fn naive_date(text: &str) -> Option<NaiveDate> {
    let [y, m, d] = split_digits(text, [4, 2, 2])?;
    NaiveDate::from_ymd_opt(y as i32, m, d)
}

fn naive_time(text: &str) -> Option<NaiveTime> {
    match text.len() {
        0 => Some(NaiveTime::MIN),
        4 => {
            let [h, m] = split_digits(text, [2, 2])?;
            NaiveTime::from_hms_opt(h, m, 0)
        }
        6 => {
            let [h, m, s] = split_digits(text, [2, 2, 2])?;
            NaiveTime::from_hms_opt(h, m, s)
        }
        _ => None,
    }
}

/// Splits an all-digit string into fixed-width numbers.
fn split_digits<const N: usize>(text: &str, widths: [usize; N]) -> Option<[u32; N]> {
    if text.len() != widths.iter().sum::<usize>() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut out = [0u32; N];
    let mut start = 0;
    for (slot, width) in out.iter_mut().zip(widths) {
        *slot = text[start..start + width].parse().ok()?;
        start += width;
    }
    Some(out)
}
