//! Id generation and date helpers shared by the services.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::fmt;
use uuid::Uuid;

/// Length of the random suffix appended to the timestamp part of an id
const ID_SUFFIX_LEN: usize = 9;

/// Generate a record id: the current epoch millis followed by a random suffix.
///
/// Ids sort roughly by creation time, but `created_at` stays the
/// authoritative ordering key.
pub fn generate_id() -> String {
    generate_id_at(Utc::now().timestamp_millis())
}

pub fn generate_id_at(epoch_millis: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", epoch_millis, &suffix[..ID_SUFFIX_LEN])
}

/// Current time as an RFC 3339 string with millisecond precision, e.g.
/// `2024-05-01T10:00:00.000Z`
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format an ISO timestamp as `M/D/YYYY` in the local time zone.
///
/// Returns `"Invalid Date"` when the input cannot be parsed.
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, &Local)
}

/// Same as [`format_date`] but in an explicit time zone
pub fn format_date_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let iso = iso.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(iso) {
        return datetime.with_timezone(tz).format("%-m/%-d/%Y").to_string();
    }

    // Date-only strings mean midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Utc
                .from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format("%-m/%-d/%Y")
                .to_string();
        }
    }

    "Invalid Date".to_string()
}

/// Epoch millis of an RFC 3339 timestamp, if it parses
pub fn timestamp_millis(iso: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(iso.trim())
        .ok()
        .map(|dt| dt.timestamp_millis())
}
