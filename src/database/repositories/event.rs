//! Event repository implementation
//!
//! Owns events and their attendee registrations.

use sqlx::{PgConnection, PgPool};
use chrono::Utc;
use crate::models::event::{Event, Attendee, CreateEventRequest, ClubEventSummary, UnbookedEvent};
use crate::utils::errors::EventlyError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event for a club
    pub async fn create(&self, club_id: i64, request: CreateEventRequest) -> Result<Event, EventlyError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (club_id, name, description, start_time, end_time, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, club_id, name, description, start_time, end_time, created_at, updated_at
            "#
        )
        .bind(club_id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventlyError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, club_id, name, description, start_time, end_time, created_at, updated_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find and lock an event row inside the caller's transaction
    pub async fn find_for_update(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Event>, EventlyError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, club_id, name, description, start_time, end_time, created_at, updated_at FROM events WHERE id = $1 FOR UPDATE"
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(event)
    }

    /// All events for a club with their active booking and attendance count,
    /// newest first
    pub async fn list_for_club(&self, club_id: i64) -> Result<Vec<ClubEventSummary>, EventlyError> {
        let events = sqlx::query_as::<_, ClubEventSummary>(
            r#"
            SELECT e.id AS event_id, e.name AS event_name, e.description,
                   e.start_time, e.end_time,
                   v.name AS venue_name, b.status AS booking_status,
                   (SELECT COUNT(*) FROM attendees a WHERE a.event_id = e.id) AS attendee_count
            FROM events e
            LEFT JOIN bookings b ON b.event_id = e.id AND b.status <> 'rejected'
            LEFT JOIN venues v ON v.id = b.venue_id
            WHERE e.club_id = $1
            ORDER BY e.start_time DESC
            "#
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Events for a club that have no booking, or only a rejected one
    pub async fn list_unbooked(&self, club_id: i64) -> Result<Vec<UnbookedEvent>, EventlyError> {
        let events = sqlx::query_as::<_, UnbookedEvent>(
            r#"
            SELECT e.id AS event_id, e.name AS event_name
            FROM events e
            LEFT JOIN bookings b ON b.event_id = e.id AND b.status <> 'rejected'
            WHERE e.club_id = $1 AND b.id IS NULL
            ORDER BY e.start_time DESC
            "#
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Register an attendee for an event.
    ///
    /// The unique constraint on (event_id, user_id) is the source of truth
    /// for duplicate registration; its violation is translated into
    /// `AlreadyRegistered` rather than surfaced as a raw store error.
    pub async fn register_attendee(&self, event_id: i64, user_id: i64) -> Result<Attendee, EventlyError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            r#"
            INSERT INTO attendees (event_id, user_id, registered_at)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, user_id, registered_at
            "#
        )
        .bind(event_id)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.code().as_deref() == Some("23505") {
                    return EventlyError::AlreadyRegistered { user_id, event_id };
                }
            }
            EventlyError::from(e)
        })?;

        Ok(attendee)
    }

    /// Check if a user is registered for an event
    pub async fn is_registered(&self, event_id: i64, user_id: i64) -> Result<bool, EventlyError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendees WHERE event_id = $1 AND user_id = $2"
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Get attendee count for an event
    pub async fn attendee_count(&self, event_id: i64) -> Result<i64, EventlyError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendees WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
