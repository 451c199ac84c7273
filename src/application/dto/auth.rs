use crate::domain::user::{Login, Role, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth2-style bearer token response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub access_token: String,
    pub token_type: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Claim embedded in issued tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub login: String,
}

impl TokenSubject {
    pub fn for_user(user: &User) -> Self {
        Self {
            login: user.login.to_string(),
        }
    }
}

/// Result of a successful signature and expiry check.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Identity resolved from a bearer token against the user store.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub login: Login,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            role: user.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
