use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Login, NewUser, PasswordHash, Role},
    },
};

/// Bootstrap account; created only when the login is not taken yet.
pub struct EnsureUserCommand {
    pub login: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug)]
pub struct EnsureUserOutcome {
    pub user: UserDto,
    pub created: bool,
}

impl UserCommandService {
    pub async fn ensure_user(
        &self,
        command: EnsureUserCommand,
    ) -> ApplicationResult<EnsureUserOutcome> {
        let login = Login::new(command.login)?;

        if let Some(existing) = self.user_repo.find_by_login(&login).await? {
            return Ok(EnsureUserOutcome {
                user: existing.into(),
                created: false,
            });
        }

        validate_password(&command.password)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        match self
            .user_repo
            .insert(NewUser::new(login.clone(), password_hash, command.role))
            .await
        {
            Ok(user) => {
                tracing::info!(login = %user.login, role = %user.role, "created bootstrap user");
                Ok(EnsureUserOutcome {
                    user: user.into(),
                    created: true,
                })
            }
            // Another instance seeded the same login concurrently.
            Err(DomainError::Conflict(_)) => {
                let existing = self
                    .user_repo
                    .find_by_login(&login)
                    .await?
                    .ok_or_else(|| ApplicationError::internal("seeded user vanished"))?;
                Ok(EnsureUserOutcome {
                    user: existing.into(),
                    created: false,
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
