//! evently backend core
//!
//! University event management backend: students register for events, club
//! members create events and request venue bookings, admins approve or reject
//! bookings against a venue's shared time slots. This library provides the
//! booking approval engine, registration engine, availability checking and the
//! audit trail. The HTTP transport layer lives outside this crate and calls in
//! through the service types re-exported here.

pub mod config;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventlyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
