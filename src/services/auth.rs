//! Authentication context resolution and authorization
//!
//! The core never verifies credentials; the transport layer authenticates a
//! caller and hands over a user id. This service turns that id into a
//! role-tagged context, with capability predicates used by each operation
//! instead of role checks scattered through handlers.

use tracing::{debug, warn};
use crate::database::{ClubRepository, UserRepository};
use crate::models::user::Role;
use crate::utils::errors::{EventlyError, Result};

/// Resolved identity for a single request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub role: Role,
    /// Club the user belongs to, when the role is `ClubMember`.
    pub club_id: Option<i64>,
}

impl AuthContext {
    /// Admins decide venue bookings and read the audit trail.
    pub fn can_manage_bookings(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn can_view_audit_log(&self) -> bool {
        self.role == Role::Admin
    }

    /// Club members create events and request venue bookings.
    pub fn can_create_events(&self) -> bool {
        self.role == Role::ClubMember
    }

    pub fn can_request_bookings(&self) -> bool {
        self.role == Role::ClubMember
    }

    /// Students register as attendees.
    pub fn can_register(&self) -> bool {
        self.role == Role::Student
    }
}

/// Authentication service resolving users into authorization contexts
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    clubs: ClubRepository,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(users: UserRepository, clubs: ClubRepository) -> Self {
        Self { users, clubs }
    }

    /// Resolve a user id into an authorization context.
    pub async fn resolve(&self, user_id: i64) -> Result<AuthContext> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(EventlyError::UserNotFound { user_id })?;

        self.context_for(user).await
    }

    /// Resolve an authenticated email into an authorization context. The
    /// transport verifies the credential; only the identity arrives here.
    pub async fn resolve_by_email(&self, email: &str) -> Result<AuthContext> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| EventlyError::EmailNotFound {
                email: email.to_string(),
            })?;

        self.context_for(user).await
    }

    async fn context_for(&self, user: crate::models::User) -> Result<AuthContext> {
        let user_id = user.id;
        let club_id = match user.role {
            Role::ClubMember => {
                let membership = self.clubs.find_membership_for_user(user_id).await?;
                if membership.is_none() {
                    warn!(user_id = user_id, "Club member has no club membership");
                }
                membership.map(|m| m.club_id)
            }
            _ => None,
        };

        debug!(user_id = user_id, role = %user.role, club_id = ?club_id, "Authentication context resolved");

        Ok(AuthContext {
            user_id,
            role: user.role,
            club_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role) -> AuthContext {
        AuthContext {
            user_id: 1,
            role,
            club_id: None,
        }
    }

    #[test]
    fn admin_capabilities() {
        let admin = ctx(Role::Admin);
        assert!(admin.can_manage_bookings());
        assert!(admin.can_view_audit_log());
        assert!(!admin.can_create_events());
        assert!(!admin.can_register());
    }

    #[test]
    fn club_member_capabilities() {
        let member = ctx(Role::ClubMember);
        assert!(member.can_create_events());
        assert!(member.can_request_bookings());
        assert!(!member.can_manage_bookings());
        assert!(!member.can_register());
    }

    #[test]
    fn student_capabilities() {
        let student = ctx(Role::Student);
        assert!(student.can_register());
        assert!(!student.can_create_events());
        assert!(!student.can_manage_bookings());
    }
}
