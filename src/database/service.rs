//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    DatabasePool, UserRepository, ClubRepository, VenueRepository, EventRepository,
    BookingRepository, AuditRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub clubs: ClubRepository,
    pub venues: VenueRepository,
    pub events: EventRepository,
    pub bookings: BookingRepository,
    pub audit: AuditRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            clubs: ClubRepository::new(pool.clone()),
            venues: VenueRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            audit: AuditRepository::new(pool),
        }
    }
}
