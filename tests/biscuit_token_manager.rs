// tests/biscuit_token_manager.rs
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use crm_core::application::{
    dto::TokenSubject,
    ports::{security::TokenManager, time::Clock},
};
use crm_core::infrastructure::{security::token::BiscuitTokenManager, time::SystemClock};
use std::{sync::Arc, time::Duration};

const ROOT_KEY: &str = "1f3c2d4e5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d";
const OTHER_KEY: &str = "aa3c2d4e5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1cff";

struct PastClock;

impl Clock for PastClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now() - ChronoDuration::hours(2)
    }
}

fn manager(key: &str, clock: Arc<dyn Clock>) -> BiscuitTokenManager {
    BiscuitTokenManager::new(key, Duration::from_secs(1800), clock).expect("token manager")
}

fn subject(login: &str) -> TokenSubject {
    TokenSubject {
        login: login.to_string(),
    }
}

#[tokio::test]
async fn issued_token_verifies_to_its_subject() {
    let tokens = manager(ROOT_KEY, Arc::new(SystemClock));

    let issued = tokens.issue(&subject("admin")).await.unwrap();
    assert_eq!(issued.token_type, "bearer");
    assert_eq!(issued.expires_in, 1800);
    assert_eq!(issued.expires_at - issued.issued_at, ChronoDuration::seconds(1800));

    let verified = tokens.verify(&issued.access_token).await.expect("valid token");
    assert_eq!(verified.subject, "admin");
    assert_eq!(verified.issued_at.timestamp(), issued.issued_at.timestamp());
    assert_eq!(verified.expires_at.timestamp(), issued.expires_at.timestamp());
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let tokens = manager(ROOT_KEY, Arc::new(PastClock));

    let issued = tokens.issue(&subject("admin")).await.unwrap();
    assert!(issued.expires_at < Utc::now());
    assert!(tokens.verify(&issued.access_token).await.is_none());
}

#[tokio::test]
async fn tampered_or_foreign_tokens_are_rejected() {
    let tokens = manager(ROOT_KEY, Arc::new(SystemClock));
    let foreign = manager(OTHER_KEY, Arc::new(SystemClock));

    let issued = foreign.issue(&subject("admin")).await.unwrap();
    assert!(tokens.verify(&issued.access_token).await.is_none());

    let own = tokens.issue(&subject("admin")).await.unwrap();
    let mut chars: Vec<char> = own.access_token.chars().collect();
    let middle = chars.len() / 2;
    chars[middle] = if chars[middle] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();
    assert!(tokens.verify(&tampered).await.is_none());

    assert!(tokens.verify("").await.is_none());
    assert!(tokens.verify("not-a-biscuit").await.is_none());
}

#[test]
fn malformed_signing_key_is_rejected() {
    assert!(BiscuitTokenManager::new("zz", Duration::from_secs(60), Arc::new(SystemClock)).is_err());
}
