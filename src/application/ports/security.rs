// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `Unauthenticated` on mismatch.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: &TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Returns `None` for malformed, expired or forged tokens alike.
    async fn verify(&self, token: &str) -> Option<VerifiedToken>;
}
