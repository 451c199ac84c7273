// tests/user_bootstrap.rs
mod support;

use crm_core::application::{commands::users::EnsureUserCommand, error::ApplicationError};
use crm_core::domain::user::{Login, Role, UserRepository};
use support::TestApp;

#[tokio::test]
async fn missing_account_is_created_with_hashed_password() {
    let app = TestApp::new().await;

    let outcome = app
        .services
        .user_commands
        .ensure_user(EnsureUserCommand {
            login: "manager".into(),
            password: "managerpass".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();

    assert!(outcome.created);
    assert_eq!(outcome.user.role, Role::Admin);

    let stored = UserRepository::find_by_login(app.store.as_ref(), &Login::new("manager").unwrap())
        .await
        .unwrap()
        .expect("stored user");
    assert_eq!(stored.password_hash.as_str(), "hashed:managerpass");
}

#[tokio::test]
async fn existing_account_is_left_untouched() {
    let app = TestApp::new().await;

    let outcome = app
        .services
        .user_commands
        .ensure_user(EnsureUserCommand {
            login: "admin".into(),
            password: "a-different-password".into(),
            role: Role::User,
        })
        .await
        .unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.user.role, Role::Admin);
    let stored = UserRepository::find_by_login(app.store.as_ref(), &Login::new("admin").unwrap())
        .await
        .unwrap()
        .expect("seeded admin");
    assert_eq!(stored.password_hash.as_str(), "hashed:adminpass");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let app = TestApp::new().await;

    let err = app
        .services
        .user_commands
        .ensure_user(EnsureUserCommand {
            login: "tiny".into(),
            password: "short".into(),
            role: Role::User,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}
