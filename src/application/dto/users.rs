use crate::domain::user::{Role, User, UserSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::AuthenticatedUser;

/// Public projection of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub login: String,
    pub role: Role,
}

impl From<UserSummary> for UserDto {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id.into(),
            login: user.login.into(),
            role: user.role,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        user.summary().into()
    }
}

impl From<&AuthenticatedUser> for UserDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.into(),
            login: user.login.to_string(),
            role: user.role,
        }
    }
}
