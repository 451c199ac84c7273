// src/infrastructure/security/claims.rs
use biscuit_auth::builder::{Fact, Predicate, Term};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Facts read back from a verified access token.
#[derive(Debug, Default)]
pub struct AccessClaims {
    pub login: Option<String>,
    pub issued_at: Option<SystemTime>,
    pub expires_at: Option<SystemTime>,
    pub token_type: Option<String>,
}

impl AccessClaims {
    pub fn from_facts(facts: Vec<Fact>) -> Self {
        let mut claims = AccessClaims::default();
        for fact in facts {
            claims.apply_predicate(&fact.predicate);
        }
        claims
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.login = first_string(predicate),
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            "token_type" => self.token_type = first_string(predicate),
            _ => {}
        }
    }

    pub fn is_access_token(&self) -> bool {
        self.token_type.as_deref() == Some("access")
    }
}

fn first_string(predicate: &Predicate) -> Option<String> {
    match predicate.terms.first() {
        Some(Term::Str(value)) => Some(value.clone()),
        _ => None,
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
