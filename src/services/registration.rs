//! Event registration engine
//!
//! Registration is idempotent in effect: the first attempt creates exactly
//! one attendee record, a repeat attempt surfaces as `AlreadyRegistered`.
//! The store's unique constraint on (event, user) is the source of truth;
//! no capacity limit is enforced (see DESIGN.md).

use tracing::info;
use crate::database::EventRepository;
use crate::models::event::Attendee;
use crate::services::auth::AuthContext;
use crate::utils::errors::{EventlyError, Result};

#[derive(Clone)]
pub struct RegistrationService {
    events: EventRepository,
}

impl RegistrationService {
    pub fn new(events: EventRepository) -> Self {
        Self { events }
    }

    /// Register the calling student for an event.
    pub async fn register(&self, ctx: &AuthContext, event_id: i64) -> Result<Attendee> {
        if !ctx.can_register() {
            return Err(EventlyError::PermissionDenied(
                "only students can register for events".to_string(),
            ));
        }

        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(EventlyError::EventNotFound { event_id })?;

        let attendee = self.events.register_attendee(event_id, ctx.user_id).await?;

        info!(
            event_id = event_id,
            user_id = ctx.user_id,
            attendee_id = attendee.id,
            "Student registered for event"
        );

        Ok(attendee)
    }

    /// Attendee count for display next to the venue capacity
    pub async fn attendee_count(&self, event_id: i64) -> Result<i64> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(EventlyError::EventNotFound { event_id })?;

        self.events.attendee_count(event_id).await
    }
}
