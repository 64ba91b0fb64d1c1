//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod availability;
pub mod booking;
pub mod event;
pub mod registration;
pub mod audit;

// Re-export commonly used services
pub use auth::{AuthService, AuthContext};
pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use event::EventService;
pub use registration::RegistrationService;
pub use audit::AuditService;

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub availability_service: AvailabilityService,
    pub booking_service: BookingService,
    pub event_service: EventService,
    pub registration_service: RegistrationService,
    pub audit_service: AuditService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(pool: DatabasePool, settings: Settings) -> Self {
        let db = DatabaseService::new(pool.clone());

        let auth_service = AuthService::new(db.users.clone(), db.clubs.clone());
        let availability_service =
            AvailabilityService::new(pool.clone(), db.venues.clone(), db.bookings.clone());
        let booking_service = BookingService::new(
            pool,
            db.bookings.clone(),
            db.events.clone(),
            db.venues.clone(),
            db.audit.clone(),
        );
        let event_service =
            EventService::new(db.events.clone(), db.clubs.clone(), db.venues.clone());
        let registration_service = RegistrationService::new(db.events.clone());
        let audit_service = AuditService::new(db.audit, settings);

        Self {
            auth_service,
            availability_service,
            booking_service,
            event_service,
            registration_service,
            audit_service,
        }
    }
}
