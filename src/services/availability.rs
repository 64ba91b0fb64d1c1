//! Venue availability checking
//!
//! A venue is available for a window iff no approved booking on it has an
//! overlapping event window. Pending and rejected bookings never block a
//! slot. The same predicate runs inside the approval engine's transaction;
//! this service is the read-only surface over the pool.

use tracing::debug;
use crate::database::{BookingRepository, DatabasePool, VenueRepository};
use crate::models::event::TimeWindow;
use crate::utils::errors::{EventlyError, Result};

#[derive(Clone)]
pub struct AvailabilityService {
    pool: DatabasePool,
    venues: VenueRepository,
    bookings: BookingRepository,
}

impl AvailabilityService {
    pub fn new(pool: DatabasePool, venues: VenueRepository, bookings: BookingRepository) -> Self {
        Self {
            pool,
            venues,
            bookings,
        }
    }

    /// Whether the venue is free for the half-open window `[start, end)`.
    pub async fn check(&self, venue_id: i64, window: TimeWindow) -> Result<bool> {
        self.venues
            .find_by_id(venue_id)
            .await?
            .ok_or(EventlyError::VenueNotFound { venue_id })?;

        let conflict = self
            .bookings
            .has_conflicting_approval(&self.pool, venue_id, &window, None)
            .await?;

        debug!(venue_id = venue_id, available = !conflict, "Availability checked");

        Ok(!conflict)
    }
}
