use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Render a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2025-01-01T09:30:00.123Z`
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch
///
/// Two calls within the same millisecond return the same value.
pub fn epoch_millis(at: &DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// `serialize_with` adapter for [`iso_timestamp`]
pub fn serialize_iso<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_timestamp(at))
}
