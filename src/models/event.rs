//! Event model and the time-window value object

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::models::booking::BookingStatus;
use crate::utils::errors::{EventlyError, Result};

/// Half-open time interval `[start, end)`.
///
/// Touching endpoints do not count as overlap: `[10:00, 11:00)` and
/// `[11:00, 12:00)` are compatible on the same venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(EventlyError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub club_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// The event's time window. The store enforces `end_time > start_time`.
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Confirmed registration link between a student and an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Row shape for a club's event listing, joined with its active booking
/// and attendance count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClubEventSummary {
    pub event_id: i64,
    pub event_name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub venue_name: Option<String>,
    pub booking_status: Option<BookingStatus>,
    pub attendee_count: i64,
}

/// Minimal listing used when choosing an event to book a venue for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UnbookedEvent {
    pub event_id: i64,
    pub event_name: String,
}
