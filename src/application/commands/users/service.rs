use std::sync::Arc;

use crate::application::ports::security::PasswordHasher;
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }
}
