//! Booking model and approval outcomes

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Booking lifecycle state. `Pending` is the only non-terminal state;
/// a booking transitions to `Approved` or `Rejected` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub event_id: i64,
    pub venue_id: i64,
    pub requested_by: i64,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub event_id: i64,
    pub venue_id: i64,
    pub requested_by: i64,
}

/// Outcome of an approval-engine decision. An approval attempt that lands
/// on a conflicting slot is auto-rejected: a defined outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDecision {
    pub booking_id: i64,
    pub status: BookingStatus,
    pub message: String,
}

/// Pending booking row for the admin review queue.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingBooking {
    pub booking_id: i64,
    pub event_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub venue_name: String,
    pub capacity: i32,
    pub club_name: String,
    pub requested_by_name: String,
    pub requested_at: DateTime<Utc>,
    pub is_available: bool,
}
