//! Date formatting for customer and order tables.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a timestamp as "05 Mar 2024, 14:02" in the browser's local zone.
pub fn format_order_date(created_at: &DateTime<Utc>) -> String {
    format_order_date_in(created_at, &Local)
}

/// Same as [`format_order_date`] for an explicit time zone.
pub fn format_order_date_in<Tz>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(tz)
        .format("%d %b %Y, %H:%M")
        .to_string()
}

/// Format a timestamp as "05 Mar 2024" in the browser's local zone.
pub fn format_date(created_at: &DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%d %b %Y").to_string()
}
