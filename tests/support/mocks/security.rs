// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use crm_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};

use super::time::fixed_now;

const TOKEN_PREFIX: &str = "token-for-";

pub const ADMIN_TOKEN: &str = "token-for-admin";
pub const USER_TOKEN: &str = "token-for-user";
/// Well-formed token whose subject has no account.
pub const GHOST_TOKEN: &str = "token-for-ghost";

/* -------------------------------- TokenManager -------------------------------- */

/// Tokens are `token-for-<login>`; anything else fails verification.
#[derive(Clone, Debug, Default)]
pub struct StubTokenManager;

#[async_trait]
impl TokenManager for StubTokenManager {
    async fn issue(&self, subject: &TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        Ok(AuthTokenDto {
            access_token: format!("{TOKEN_PREFIX}{}", subject.login),
            token_type: "bearer".into(),
            issued_at,
            expires_at: issued_at + Duration::minutes(30),
            expires_in: 1800,
        })
    }

    async fn verify(&self, token: &str) -> Option<VerifiedToken> {
        let subject = token.strip_prefix(TOKEN_PREFIX)?;
        if subject.is_empty() {
            return None;
        }
        Some(VerifiedToken {
            subject: subject.to_string(),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::minutes(30),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Stores `hashed:<password>` so tests can seed users without Argon2.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

impl DummyPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthenticated("password mismatch"))
        }
    }
}
