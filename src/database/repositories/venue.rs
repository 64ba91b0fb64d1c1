//! Venue repository implementation

use sqlx::{PgConnection, PgPool};
use chrono::Utc;
use crate::models::venue::{Venue, CreateVenueRequest};
use crate::utils::errors::EventlyError;

#[derive(Debug, Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new venue
    pub async fn create(&self, request: CreateVenueRequest) -> Result<Venue, EventlyError> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, location, capacity, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, location, capacity, created_at
            "#
        )
        .bind(request.name)
        .bind(request.location)
        .bind(request.capacity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(venue)
    }

    /// Find venue by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, EventlyError> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT id, name, location, capacity, created_at FROM venues WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    /// Find and lock a venue row inside the caller's transaction.
    /// Approval decisions on the same venue serialize on this lock.
    pub async fn find_for_update(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Venue>, EventlyError> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT id, name, location, capacity, created_at FROM venues WHERE id = $1 FOR UPDATE"
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(venue)
    }

    /// List all venues, ordered by name
    pub async fn list(&self) -> Result<Vec<Venue>, EventlyError> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT id, name, location, capacity, created_at FROM venues ORDER BY name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }
}
