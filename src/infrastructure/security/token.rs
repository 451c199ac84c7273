// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::infrastructure::security::claims::AccessClaims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const ACCESS_TOKEN_CODE: &str = r#"
    user({login});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
    token_type("access");
"#;

/// Ed25519-signed biscuit tokens carrying the user's login.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::internal(format!("invalid signing key: {err}")))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
            clock,
        })
    }
}

fn build_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("login".to_string(), subject.login.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::internal(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::internal(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::internal(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::internal(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

impl BiscuitTokenManager {
    fn check(&self, token: &str) -> Result<AccessClaims, biscuit_auth::error::Token> {
        let biscuit = Biscuit::from_base64(token, self.public)?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true;")?
            .build(&biscuit)?;
        authorizer.authorize()?;

        let (facts, _, _, _) = authorizer.dump();
        Ok(AccessClaims::from_facts(facts))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: &TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::from(self.clock.now());
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::internal("token expiration overflow"))?;

        let access_token =
            build_and_serialize_biscuit(build_params(subject, issued_at, expires_at), &self.root)?;

        Ok(AuthTokenDto {
            access_token,
            token_type: "bearer".to_string(),
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn verify(&self, token: &str) -> Option<VerifiedToken> {
        let claims = match self.check(token) {
            Ok(claims) => claims,
            Err(err) => {
                tracing::debug!(error = %err, "rejected access token");
                return None;
            }
        };

        if !claims.is_access_token() {
            return None;
        }

        Some(VerifiedToken {
            subject: claims.login?,
            issued_at: DateTime::<Utc>::from(claims.issued_at?),
            expires_at: DateTime::<Utc>::from(claims.expires_at?),
        })
    }
}
