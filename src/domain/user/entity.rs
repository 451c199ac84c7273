// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Login, PasswordHash, Role, UserId};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            login: self.login.clone(),
            role: self.role,
        }
    }
}

/// Public projection of a user: everything except credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub login: Login,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl NewUser {
    pub fn new(login: Login, password_hash: PasswordHash, role: Role) -> Self {
        Self {
            login,
            password_hash,
            role,
        }
    }
}
