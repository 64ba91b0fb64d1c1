//! Booking approval engine
//!
//! Governs the booking lifecycle: club members request a venue for an event,
//! admins approve or reject the request. A booking is `pending` until it is
//! decided exactly once; approval re-checks venue availability under row
//! locks inside a single transaction and auto-rejects on conflict. The audit
//! entry is written in the same transaction, so a failed audit write rolls
//! the decision back.

use tracing::info;
use crate::database::{
    AuditRepository, BookingRepository, DatabasePool, EventRepository, VenueRepository,
};
use crate::models::audit::{actions, NewAuditEntry};
use crate::models::booking::{Booking, BookingDecision, BookingStatus, CreateBookingRequest, PendingBooking};
use crate::services::auth::AuthContext;
use crate::utils::errors::{EventlyError, Result};
use crate::utils::helpers::{format_timestamp, truncate_text};
use crate::utils::logging::log_admin_action;

const AUDIT_OUTCOME_MAX_LEN: usize = 500;

/// Booking approval engine and request intake
#[derive(Clone)]
pub struct BookingService {
    pool: DatabasePool,
    bookings: BookingRepository,
    events: EventRepository,
    venues: VenueRepository,
    audit: AuditRepository,
}

impl BookingService {
    pub fn new(
        pool: DatabasePool,
        bookings: BookingRepository,
        events: EventRepository,
        venues: VenueRepository,
        audit: AuditRepository,
    ) -> Self {
        Self {
            pool,
            bookings,
            events,
            venues,
            audit,
        }
    }

    /// Request a venue booking for an event. The booking starts out pending
    /// and awaits an admin decision.
    ///
    /// An event carries at most one active booking: a second request is
    /// refused while a pending or approved one exists, but a rejected
    /// booking does not block a new attempt.
    pub async fn request(&self, ctx: &AuthContext, event_id: i64, venue_id: i64) -> Result<Booking> {
        if !ctx.can_request_bookings() {
            return Err(EventlyError::PermissionDenied(
                "only club members can request venue bookings".to_string(),
            ));
        }

        self.venues
            .find_by_id(venue_id)
            .await?
            .ok_or(EventlyError::VenueNotFound { venue_id })?;

        let mut tx = self.pool.begin().await?;

        // Lock the event row so two concurrent requests for the same event
        // cannot both pass the active-booking check.
        self.events
            .find_for_update(&mut tx, event_id)
            .await?
            .ok_or(EventlyError::EventNotFound { event_id })?;

        if self
            .bookings
            .find_active_for_event(&mut tx, event_id)
            .await?
            .is_some()
        {
            return Err(EventlyError::ActiveBookingExists { event_id });
        }

        let booking = self
            .bookings
            .insert(
                &mut tx,
                CreateBookingRequest {
                    event_id,
                    venue_id,
                    requested_by: ctx.user_id,
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            booking_id = booking.id,
            event_id = event_id,
            venue_id = venue_id,
            user_id = ctx.user_id,
            "Venue booking requested"
        );

        Ok(booking)
    }

    /// Approve a pending booking.
    ///
    /// Availability is re-checked against all other approved bookings on the
    /// venue while the booking and venue rows are locked; if the window is
    /// taken, the booking is rejected instead. Either way the decision is
    /// terminal and audited atomically with the status change.
    pub async fn approve(&self, ctx: &AuthContext, booking_id: i64) -> Result<BookingDecision> {
        if !ctx.can_manage_bookings() {
            return Err(EventlyError::PermissionDenied(
                "only admins can decide venue bookings".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let booking = self
            .bookings
            .find_for_update(&mut tx, booking_id)
            .await?
            .ok_or(EventlyError::BookingNotFound { booking_id })?;

        if booking.status.is_terminal() {
            return Err(EventlyError::BookingAlreadyDecided {
                booking_id,
                status: booking.status.to_string(),
            });
        }

        let event = self
            .events
            .find_for_update(&mut tx, booking.event_id)
            .await?
            .ok_or(EventlyError::EventNotFound {
                event_id: booking.event_id,
            })?;

        // Lock order is always booking, then event, then venue. Approvals
        // on the same venue serialize on the venue lock, so the conflict
        // check below sees every committed decision.
        let venue = self
            .venues
            .find_for_update(&mut tx, booking.venue_id)
            .await?
            .ok_or(EventlyError::VenueNotFound {
                venue_id: booking.venue_id,
            })?;

        let window = event.window();
        let conflict = self
            .bookings
            .has_conflicting_approval(&mut *tx, booking.venue_id, &window, Some(booking_id))
            .await?;

        let (status, message) = if conflict {
            (
                BookingStatus::Rejected,
                format!(
                    "Booking rejected: {} is already booked between {} and {}",
                    venue.name,
                    format_timestamp(window.start),
                    format_timestamp(window.end)
                ),
            )
        } else {
            (
                BookingStatus::Approved,
                format!("Booking approved for {}", venue.name),
            )
        };

        self.bookings.set_status(&mut tx, booking_id, status).await?;
        self.audit
            .append(
                &mut tx,
                NewAuditEntry::new(
                    ctx.user_id,
                    actions::APPROVE_BOOKING,
                    format!("booking:{booking_id}"),
                    truncate_text(&message, AUDIT_OUTCOME_MAX_LEN),
                ),
            )
            .await?;

        tx.commit().await?;

        log_admin_action(ctx.user_id, actions::APPROVE_BOOKING, &format!("booking:{booking_id}"), Some(&message));
        info!(booking_id = booking_id, status = %status, "Booking decision committed");

        Ok(BookingDecision {
            booking_id,
            status,
            message,
        })
    }

    /// Manually reject a pending booking.
    pub async fn reject(&self, ctx: &AuthContext, booking_id: i64) -> Result<BookingDecision> {
        if !ctx.can_manage_bookings() {
            return Err(EventlyError::PermissionDenied(
                "only admins can decide venue bookings".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let booking = self
            .bookings
            .find_for_update(&mut tx, booking_id)
            .await?
            .ok_or(EventlyError::BookingNotFound { booking_id })?;

        if booking.status.is_terminal() {
            return Err(EventlyError::BookingAlreadyDecided {
                booking_id,
                status: booking.status.to_string(),
            });
        }

        let message = "Booking rejected manually".to_string();

        self.bookings
            .set_status(&mut tx, booking_id, BookingStatus::Rejected)
            .await?;
        self.audit
            .append(
                &mut tx,
                NewAuditEntry::new(
                    ctx.user_id,
                    actions::REJECT_BOOKING,
                    format!("booking:{booking_id}"),
                    message.clone(),
                ),
            )
            .await?;

        tx.commit().await?;

        log_admin_action(ctx.user_id, actions::REJECT_BOOKING, &format!("booking:{booking_id}"), None);

        Ok(BookingDecision {
            booking_id,
            status: BookingStatus::Rejected,
            message,
        })
    }

    /// Pending bookings for admin review, oldest request first
    pub async fn list_pending(&self) -> Result<Vec<PendingBooking>> {
        self.bookings.list_pending().await
    }

    /// Look up a booking by id
    pub async fn find(&self, booking_id: i64) -> Result<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(EventlyError::BookingNotFound { booking_id })
    }
}
