//! Club repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::club::{Club, ClubMembership, CreateClubRequest, AddMemberRequest};
use crate::utils::errors::EventlyError;

#[derive(Debug, Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new club
    pub async fn create(&self, request: CreateClubRequest) -> Result<Club, EventlyError> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (name, description, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_at
            "#
        )
        .bind(request.name)
        .bind(request.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(club)
    }

    /// Find club by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Club>, EventlyError> {
        let club = sqlx::query_as::<_, Club>(
            "SELECT id, name, description, created_at FROM clubs WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(club)
    }

    /// Add a user to a club. The store enforces at most one membership per user.
    pub async fn add_member(&self, request: AddMemberRequest) -> Result<ClubMembership, EventlyError> {
        let membership = sqlx::query_as::<_, ClubMembership>(
            r#"
            INSERT INTO club_memberships (club_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            RETURNING id, club_id, user_id, joined_at
            "#
        )
        .bind(request.club_id)
        .bind(request.user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(membership)
    }

    /// Find the club membership for a user, if any
    pub async fn find_membership_for_user(&self, user_id: i64) -> Result<Option<ClubMembership>, EventlyError> {
        let membership = sqlx::query_as::<_, ClubMembership>(
            "SELECT id, club_id, user_id, joined_at FROM club_memberships WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(membership)
    }
}
