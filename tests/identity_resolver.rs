// tests/identity_resolver.rs
mod support;

use crm_core::application::{
    commands::auth::LoginCommand, error::ApplicationError, services::require_admin,
};
use crm_core::domain::user::Role;
use support::{ADMIN_TOKEN, GHOST_TOKEN, TestApp, USER_TOKEN};

#[tokio::test]
async fn token_resolves_to_stored_user() {
    let app = TestApp::new().await;

    let admin = app.services.authenticate(ADMIN_TOKEN).await.unwrap();
    assert_eq!(admin.id, app.admin.id);
    assert_eq!(admin.role, Role::Admin);
    assert!(require_admin(&admin).is_ok());

    let user = app.services.authenticate(USER_TOKEN).await.unwrap();
    assert_eq!(user.login.as_str(), "user");
    assert!(matches!(
        require_admin(&user),
        Err(ApplicationError::Forbidden(_))
    ));
}

#[tokio::test]
async fn unknown_subject_and_garbage_are_unauthenticated() {
    let app = TestApp::new().await;

    for token in [GHOST_TOKEN, "garbage", "token-for-"] {
        let err = app.services.authenticate(token).await.unwrap_err();
        match err {
            ApplicationError::Unauthenticated(msg) => {
                assert_eq!(msg, "could not validate credentials")
            }
            other => panic!("unexpected error for {token}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn login_issues_token_for_valid_credentials() {
    let app = TestApp::new().await;

    let token = app
        .services
        .auth_commands
        .login(LoginCommand {
            login: "admin".into(),
            password: support::ADMIN_PASSWORD.into(),
        })
        .await
        .unwrap();

    assert_eq!(token.token_type, "bearer");
    let resolved = app
        .services
        .authenticate(&token.access_token)
        .await
        .unwrap();
    assert_eq!(resolved.id, app.admin.id);
}

#[tokio::test]
async fn wrong_password_and_unknown_login_look_the_same() {
    let app = TestApp::new().await;

    let wrong_password = app
        .services
        .auth_commands
        .login(LoginCommand {
            login: "admin".into(),
            password: "not-the-password".into(),
        })
        .await
        .unwrap_err();
    let unknown_login = app
        .services
        .auth_commands
        .login(LoginCommand {
            login: "nobody".into(),
            password: "whatever".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_login.to_string());
    assert!(matches!(wrong_password, ApplicationError::Unauthenticated(_)));
}

#[tokio::test]
async fn verify_token_returns_subject_only_for_valid_tokens() {
    let app = TestApp::new().await;

    assert_eq!(
        app.services.auth_commands.verify_token(USER_TOKEN).await.as_deref(),
        Some("user")
    );
    assert!(app.services.auth_commands.verify_token("nope").await.is_none());
}

#[tokio::test]
async fn login_is_matched_exactly() {
    let app = TestApp::new().await;

    for login in [" admin", "admin ", "\tadmin\n"] {
        let err = app
            .services
            .auth_commands
            .login(LoginCommand {
                login: login.into(),
                password: support::ADMIN_PASSWORD.into(),
            })
            .await
            .unwrap_err();
        match err {
            ApplicationError::Unauthenticated(msg) => {
                assert_eq!(msg, "incorrect username or password")
            }
            other => panic!("unexpected error for {login:?}: {other:?}"),
        }
    }
}
