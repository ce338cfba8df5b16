//! Request DTOs
//!
//! Wire shapes of untrusted input. Reservation and room-update payloads use a
//! closed schema: any field outside the declared set is rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Create reservation request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservationCreateRequest {
    #[serde(deserialize_with = "iso_datetime")]
    pub from_reserve: DateTime<Utc>,
    #[serde(deserialize_with = "iso_datetime")]
    pub to_reserve: DateTime<Utc>,
    pub meetingroom_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl ReservationCreateRequest {
    pub const FIELDS: &'static [&'static str] =
        &["from_reserve", "to_reserve", "meetingroom_id", "user_id"];
}

/// Update reservation request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservationUpdateRequest {
    #[serde(deserialize_with = "iso_datetime")]
    pub from_reserve: DateTime<Utc>,
    #[serde(deserialize_with = "iso_datetime")]
    pub to_reserve: DateTime<Utc>,
}

impl ReservationUpdateRequest {
    pub const FIELDS: &'static [&'static str] = &["from_reserve", "to_reserve"];
}

/// Partial room update request
///
/// Outer `None` means the field was absent; `Some(None)` means an explicit null.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeetingRoomUpdateRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

impl MeetingRoomUpdateRequest {
    pub const FIELDS: &'static [&'static str] = &["name", "description"];
}

/// ISO-8601 forms accepted besides RFC 3339. All of them require an offset.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%#z"];

/// Parse an ISO-8601 timestamp that carries a UTC offset.
///
/// Minute precision (`2030-06-02T10:00Z`) and hour-only offsets (`+03`) are
/// accepted. Values without an offset are rejected.
pub fn parse_iso_datetime(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = raw.parse::<DateTime<Utc>>() {
        return Ok(parsed);
    }

    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok_or_else(|| format!("expected an ISO-8601 datetime with offset, got '{}'", raw))
}

fn iso_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
