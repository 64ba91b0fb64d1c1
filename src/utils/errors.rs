//! Error handling for evently
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Conditions are grouped
//! into a small taxonomy of stable outcome codes; raw store errors are
//! wrapped and never surfaced to callers verbatim.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Main error type for evently operations
#[derive(Error, Debug)]
pub enum EventlyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("No user with email: {email}")]
    EmailNotFound { email: String },

    #[error("Club not found: {club_id}")]
    ClubNotFound { club_id: i64 },

    #[error("Venue not found: {venue_id}")]
    VenueNotFound { venue_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Booking not found: {booking_id}")]
    BookingNotFound { booking_id: i64 },

    #[error("Booking {booking_id} already decided: {status}")]
    BookingAlreadyDecided { booking_id: i64, status: String },

    #[error("Event {event_id} already has an active booking")]
    ActiveBookingExists { event_id: i64 },

    #[error("User {user_id} is already registered for event {event_id}")]
    AlreadyRegistered { user_id: i64, event_id: i64 },

    #[error("Invalid time window: end {end} is not after start {start}")]
    InvalidTimeWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evently operations
pub type Result<T> = std::result::Result<T, EventlyError>;

impl EventlyError {
    /// Check whether the error is a transient store failure eligible for
    /// caller-side retry (lock timeout, deadlock, serialization failure).
    pub fn is_transient(&self) -> bool {
        match self {
            EventlyError::Database(sqlx::Error::PoolTimedOut) => true,
            EventlyError::Database(sqlx::Error::Io(_)) => true,
            EventlyError::Database(sqlx::Error::Database(db)) => matches!(
                db.code().as_deref(),
                Some("40001") | Some("40P01") | Some("55P03")
            ),
            _ => false,
        }
    }

    /// Stable outcome code surfaced to the transport layer.
    pub fn outcome_code(&self) -> &'static str {
        match self {
            EventlyError::UserNotFound { .. }
            | EventlyError::EmailNotFound { .. }
            | EventlyError::ClubNotFound { .. }
            | EventlyError::VenueNotFound { .. }
            | EventlyError::EventNotFound { .. }
            | EventlyError::BookingNotFound { .. } => "not_found",
            EventlyError::PermissionDenied(_) => "unauthorized",
            EventlyError::BookingAlreadyDecided { .. }
            | EventlyError::ActiveBookingExists { .. }
            | EventlyError::AlreadyRegistered { .. } => "conflict",
            EventlyError::InvalidTimeWindow { .. } | EventlyError::InvalidInput(_) => {
                "validation_failure"
            }
            _ => {
                if self.is_transient() {
                    "transient_store_failure"
                } else {
                    "internal"
                }
            }
        }
    }

    /// Human-readable message safe to show to callers. Store and I/O errors
    /// are reported generically so raw driver text never leaks.
    pub fn user_message(&self) -> String {
        match self {
            EventlyError::Database(_) | EventlyError::Migration(_) | EventlyError::Io(_) => {
                if self.is_transient() {
                    "temporary storage failure, please retry".to_string()
                } else {
                    "internal storage error".to_string()
                }
            }
            EventlyError::Serialization(_) => "internal serialization error".to_string(),
            other => other.to_string(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventlyError::Migration(_) | EventlyError::Config(_) => ErrorSeverity::Critical,
            EventlyError::Database(_) if !self.is_transient() => ErrorSeverity::Critical,
            EventlyError::PermissionDenied(_) => ErrorSeverity::Warning,
            EventlyError::BookingAlreadyDecided { .. }
            | EventlyError::ActiveBookingExists { .. }
            | EventlyError::AlreadyRegistered { .. }
            | EventlyError::InvalidTimeWindow { .. }
            | EventlyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
