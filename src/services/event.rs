//! Event management service
//!
//! Club-facing operations: creating events and listing them together with
//! their booking state, plus the venue catalogue used by the booking form.

use tracing::info;
use crate::database::{ClubRepository, EventRepository, VenueRepository};
use crate::models::event::{ClubEventSummary, CreateEventRequest, Event, TimeWindow, UnbookedEvent};
use crate::models::venue::Venue;
use crate::services::auth::AuthContext;
use crate::utils::errors::{EventlyError, Result};

#[derive(Clone)]
pub struct EventService {
    events: EventRepository,
    clubs: ClubRepository,
    venues: VenueRepository,
}

impl EventService {
    pub fn new(events: EventRepository, clubs: ClubRepository, venues: VenueRepository) -> Self {
        Self {
            events,
            clubs,
            venues,
        }
    }

    /// Create a new event for a club.
    ///
    /// The time window is validated here; whether the club matches the
    /// member's own club is deliberately not checked (see DESIGN.md).
    pub async fn create_event(
        &self,
        ctx: &AuthContext,
        club_id: i64,
        request: CreateEventRequest,
    ) -> Result<Event> {
        if !ctx.can_create_events() {
            return Err(EventlyError::PermissionDenied(
                "only club members can create events".to_string(),
            ));
        }

        if request.name.trim().is_empty() {
            return Err(EventlyError::InvalidInput(
                "event name must not be empty".to_string(),
            ));
        }

        // Reject inverted windows before the store's CHECK constraint does.
        TimeWindow::new(request.start_time, request.end_time)?;

        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or(EventlyError::ClubNotFound { club_id })?;

        let event = self.events.create(club_id, request).await?;

        info!(
            event_id = event.id,
            club_id = club_id,
            user_id = ctx.user_id,
            "Event created"
        );

        Ok(event)
    }

    /// All events for a club with booking state and attendance, newest first
    pub async fn list_club_events(&self, club_id: i64) -> Result<Vec<ClubEventSummary>> {
        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or(EventlyError::ClubNotFound { club_id })?;

        self.events.list_for_club(club_id).await
    }

    /// Events of a club still eligible for a booking request
    pub async fn list_unbooked_events(&self, club_id: i64) -> Result<Vec<UnbookedEvent>> {
        self.clubs
            .find_by_id(club_id)
            .await?
            .ok_or(EventlyError::ClubNotFound { club_id })?;

        self.events.list_unbooked(club_id).await
    }

    /// All venues for the booking form, ordered by name
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.venues.list().await
    }
}
