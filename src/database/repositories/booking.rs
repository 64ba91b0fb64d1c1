//! Booking repository implementation
//!
//! State transitions run inside the approval engine's transaction, so the
//! mutating methods here take a `&mut PgConnection` rather than the pool.

use sqlx::{PgConnection, PgPool};
use chrono::Utc;
use crate::models::booking::{Booking, BookingStatus, CreateBookingRequest, PendingBooking};
use crate::models::event::TimeWindow;
use crate::utils::errors::EventlyError;

const BOOKING_COLUMNS: &str = "id, event_id, venue_id, requested_by, status, requested_at, decided_at";

#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find booking by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, EventlyError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Find and lock a booking row inside the caller's transaction.
    /// Concurrent decisions on the same booking serialize on this lock.
    pub async fn find_for_update(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Booking>, EventlyError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(booking)
    }

    /// Insert a new pending booking inside the caller's transaction
    pub async fn insert(&self, conn: &mut PgConnection, request: CreateBookingRequest) -> Result<Booking, EventlyError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (event_id, venue_id, requested_by, status, requested_at)
            VALUES ($1, $2, $3, 'pending', $4)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(request.event_id)
        .bind(request.venue_id)
        .bind(request.requested_by)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(booking)
    }

    /// The event's pending or approved booking, if one exists
    pub async fn find_active_for_event(&self, conn: &mut PgConnection, event_id: i64) -> Result<Option<Booking>, EventlyError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE event_id = $1 AND status <> 'rejected'"
        ))
        .bind(event_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(booking)
    }

    /// Move a booking into a terminal state inside the caller's transaction
    pub async fn set_status(&self, conn: &mut PgConnection, id: i64, status: BookingStatus) -> Result<Booking, EventlyError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = $2, decided_at = $3
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(booking)
    }

    /// Whether an approved booking on the venue overlaps the half-open
    /// window, excluding `exclude_booking` (the booking under decision).
    ///
    /// Generic over the executor so the approval engine can evaluate it
    /// inside its open transaction while the availability surface uses the
    /// pool directly.
    pub async fn has_conflicting_approval<'e, E>(
        &self,
        executor: E,
        venue_id: i64,
        window: &TimeWindow,
        exclude_booking: Option<i64>,
    ) -> Result<bool, EventlyError>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let conflict: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM bookings b
                JOIN events e ON e.id = b.event_id
                WHERE b.venue_id = $1
                  AND b.status = 'approved'
                  AND e.start_time < $3
                  AND e.end_time > $2
                  AND ($4::BIGINT IS NULL OR b.id <> $4)
            )
            "#
        )
        .bind(venue_id)
        .bind(window.start)
        .bind(window.end)
        .bind(exclude_booking)
        .fetch_one(executor)
        .await?;

        Ok(conflict)
    }

    /// Pending bookings for admin review, oldest request first, each row
    /// carrying a live availability flag for its venue and window
    pub async fn list_pending(&self) -> Result<Vec<PendingBooking>, EventlyError> {
        let pending = sqlx::query_as::<_, PendingBooking>(
            r#"
            SELECT b.id AS booking_id,
                   e.name AS event_name, e.start_time, e.end_time,
                   v.name AS venue_name, v.capacity,
                   c.name AS club_name,
                   u.first_name AS requested_by_name,
                   b.requested_at,
                   NOT EXISTS (
                       SELECT 1
                       FROM bookings ob
                       JOIN events oe ON oe.id = ob.event_id
                       WHERE ob.venue_id = b.venue_id
                         AND ob.status = 'approved'
                         AND ob.id <> b.id
                         AND oe.start_time < e.end_time
                         AND oe.end_time > e.start_time
                   ) AS is_available
            FROM bookings b
            JOIN events e ON e.id = b.event_id
            JOIN venues v ON v.id = b.venue_id
            JOIN clubs c ON c.id = e.club_id
            JOIN users u ON u.id = b.requested_by
            WHERE b.status = 'pending'
            ORDER BY b.requested_at ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pending)
    }
}
