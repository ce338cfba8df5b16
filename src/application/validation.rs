//! Validation Layer
//!
//! Pure functions turning untrusted input into validated domain shapes.
//! Checks run in a fixed order and stop at the first failure: closed-schema
//! and type checks, then the start-in-the-future rule, then the range rule.
//! "Now" is always passed in by the caller.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::ValidateLength;

use crate::application::dto::{
    MeetingRoomUpdateRequest, ReservationCreateRequest, ReservationUpdateRequest,
};
use crate::domain::{MeetingRoomCreate, MeetingRoomUpdate, ReservationCreate, ReservationUpdate};
use crate::shared::error::ValidationError;

/// Maximum room name length, in characters.
pub const ROOM_NAME_MAX_LENGTH: usize = 100;

/// Validate a new room.
pub fn validate_room_create(
    name: &str,
    description: Option<&str>,
) -> Result<MeetingRoomCreate, ValidationError> {
    let name = validate_room_name(name)?;
    Ok(MeetingRoomCreate::new(name, description.map(str::to_string)))
}

/// Validate a partial room update payload.
///
/// A present `name` must satisfy the same rules as on creation; `null` is
/// treated as an empty name. `description: null` clears the description.
pub fn validate_room_update(payload: &Value) -> Result<MeetingRoomUpdate, ValidationError> {
    let request: MeetingRoomUpdateRequest =
        parse_closed(payload, MeetingRoomUpdateRequest::FIELDS)?;

    let name = match request.name {
        None => None,
        Some(None) => return Err(ValidationError::EmptyName),
        Some(Some(name)) => Some(validate_room_name(&name)?),
    };

    Ok(MeetingRoomUpdate::new(name, request.description))
}

/// Validate a reservation creation payload against `now`.
pub fn validate_reservation_create(
    payload: &Value,
    now: DateTime<Utc>,
) -> Result<ReservationCreate, ValidationError> {
    let request: ReservationCreateRequest =
        parse_closed(payload, ReservationCreateRequest::FIELDS)?;

    check_reservation_window(request.from_reserve, request.to_reserve, now)?;

    Ok(ReservationCreate::new(
        request.from_reserve,
        request.to_reserve,
        request.meetingroom_id,
        request.user_id,
    ))
}

/// Validate a reservation update payload against `now`.
///
/// Room and user cannot be changed; sending them is an unknown-field error.
pub fn validate_reservation_update(
    payload: &Value,
    now: DateTime<Utc>,
) -> Result<ReservationUpdate, ValidationError> {
    let request: ReservationUpdateRequest =
        parse_closed(payload, ReservationUpdateRequest::FIELDS)?;

    check_reservation_window(request.from_reserve, request.to_reserve, now)?;

    Ok(ReservationUpdate::new(request.from_reserve, request.to_reserve))
}

/// Temporal rules shared by creation and update.
pub fn check_reservation_window(
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if from_reserve <= now {
        return Err(ValidationError::PastStartTime);
    }
    if from_reserve >= to_reserve {
        return Err(ValidationError::InvertedRange);
    }
    Ok(())
}

fn validate_room_name(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let name = name.to_string();
    if !name.validate_length(Some(1), Some(ROOM_NAME_MAX_LENGTH as u64), None) {
        return Err(ValidationError::Length {
            max: ROOM_NAME_MAX_LENGTH,
            actual: name.chars().count(),
        });
    }

    Ok(name)
}

/// Deserialize a JSON object, rejecting any key outside `recognized` first.
fn parse_closed<T: DeserializeOwned>(
    payload: &Value,
    recognized: &[&str],
) -> Result<T, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::TypeCoercion("expected a JSON object".into()))?;

    if let Some(unknown) = object.keys().find(|key| !recognized.contains(&key.as_str())) {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    serde_json::from_value(payload.clone()).map_err(|e| ValidationError::TypeCoercion(e.to_string()))
}
