//! Application Error Types
//!
//! Centralized error taxonomy for the booking core. Errors fall into
//! malformed input, business-rule violations, transient storage failures and
//! internal storage faults. Only transient storage failures are eligible for
//! retry.

use serde::Serialize;

/// Rejection raised by the validation layer before anything touches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid input: {0}")]
    TypeCoercion(String),

    #[error("Room name must not be empty")]
    EmptyName,

    #[error("Room name must be 1-{max} characters, got {actual}")]
    Length { max: usize, actual: usize },

    #[error("Reservation start must be later than the current time")]
    PastStartTime,

    #[error("Reservation start must be earlier than its end")]
    InvertedRange,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Meeting room with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Meeting room {0} not found")]
    RoomNotFound(i64),

    #[error("Reservation {0} not found")]
    ReservationNotFound(i64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    #[error("Internal storage error: {0}")]
    Internal(#[source] sqlx::Error),
}

/// SQLSTATE classes worth retrying: connection exception, transaction
/// rollback (serialization failure, deadlock), insufficient resources,
/// operator intervention.
const TRANSIENT_SQLSTATE_CLASSES: &[&str] = &["08", "40", "53", "57"];

/// Whether a sqlx failure comes from the connection or the transaction
/// rather than from the query or the mapping of its result.
fn is_transient(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| {
            TRANSIENT_SQLSTATE_CLASSES
                .iter()
                .any(|class| code.starts_with(class))
        }),
        _ => false,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if is_transient(&error) {
            AppError::StorageUnavailable(error)
        } else {
            AppError::Internal(error)
        }
    }
}

/// Broad class of an [`AppError`], used by callers to decide between
/// surfacing and retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed request: unknown fields, values of the wrong type.
    InputShape,
    /// Business invariant violation.
    DomainRule,
    /// Transient infrastructure failure.
    Storage,
    /// Non-transient infrastructure failure: decoding, configuration, bad SQL.
    Internal,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(ValidationError::UnknownField(_))
            | AppError::Validation(ValidationError::TypeCoercion(_)) => ErrorCategory::InputShape,
            AppError::Validation(_)
            | AppError::DuplicateName(_)
            | AppError::RoomNotFound(_)
            | AppError::ReservationNotFound(_) => ErrorCategory::DomainRule,
            AppError::StorageUnavailable(_) => ErrorCategory::Storage,
            AppError::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Whether the caller may retry the same operation unchanged.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Storage
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(e) => match e {
                ValidationError::UnknownField(_) => "unknown_field",
                ValidationError::TypeCoercion(_) => "invalid_input",
                ValidationError::EmptyName => "empty_name",
                ValidationError::Length { .. } => "invalid_length",
                ValidationError::PastStartTime => "past_start_time",
                ValidationError::InvertedRange => "inverted_range",
            },
            AppError::DuplicateName(_) => "duplicate_name",
            AppError::RoomNotFound(_) => "room_not_found",
            AppError::ReservationNotFound(_) => "reservation_not_found",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// Error body handed to the response layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let message = match error {
            AppError::StorageUnavailable(e) => {
                tracing::error!("Storage error: {}", e);
                "Storage is temporarily unavailable".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        Self {
            code: error.code(),
            message,
            retryable: error.is_retryable(),
        }
    }
}
