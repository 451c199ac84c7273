use super::AuthCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Login, User},
};

const INVALID_CREDENTIALS: &str = "incorrect username or password";

pub struct LoginCommand {
    pub login: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        let user = self.authenticate(&command.login, &command.password).await?;
        let token = self.issue_token(&user).await?;
        tracing::info!(login = %user.login, "issued access token");
        Ok(token)
    }

    /// Unknown logins and wrong passwords produce the same error. The login
    /// must match exactly, surrounding whitespace included.
    pub async fn authenticate(&self, login: &str, password: &str) -> ApplicationResult<User> {
        let login = Login::new(login)
            .ok()
            .filter(|normalized| normalized.as_str() == login)
            .ok_or_else(|| ApplicationError::unauthenticated(INVALID_CREDENTIALS))?;

        let user = self
            .user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| ApplicationError::unauthenticated(INVALID_CREDENTIALS))?;

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(()) => Ok(user),
            Err(ApplicationError::Unauthenticated(_)) => {
                Err(ApplicationError::unauthenticated(INVALID_CREDENTIALS))
            }
            Err(other) => Err(other),
        }
    }

    pub async fn issue_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        self.token_manager.issue(&TokenSubject::for_user(user)).await
    }

    /// Subject (login) of a valid token, or `None` for any kind of failure.
    pub async fn verify_token(&self, token: &str) -> Option<String> {
        self.token_manager
            .verify(token)
            .await
            .map(|verified| verified.subject)
    }
}
