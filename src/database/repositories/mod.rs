//! Repository implementations
//!
//! One repository per aggregate; methods that must participate in a caller's
//! transaction take a `&mut PgConnection` instead of using the pool.

pub mod user;
pub mod club;
pub mod venue;
pub mod event;
pub mod booking;
pub mod audit;

pub use user::UserRepository;
pub use club::ClubRepository;
pub use venue::VenueRepository;
pub use event::EventRepository;
pub use booking::BookingRepository;
pub use audit::AuditRepository;
