// tests/audit_trail.rs
mod support;

use crm_core::application::{
    commands::clients::{CreateClientCommand, UpdateClientCommand},
    error::ApplicationError,
    queries::audit::ListAuditLogsQuery,
};
use crm_core::domain::{
    audit::AuditAction,
    client::{ClientSex, FullName, NewClient, PhoneNumber},
    unit_of_work::UnitOfWorkFactory,
};
use std::sync::Arc;
use support::{SteppingClock, TestApp};

#[tokio::test]
async fn failed_audit_write_rolls_back_the_mutation() {
    let app = TestApp::with_failing_audit().await;

    let err = app
        .services
        .client_commands
        .create_client(
            &app.admin,
            CreateClientCommand {
                full_name: "Never Stored".into(),
                phone: "+1".into(),
                sex: ClientSex::Other,
                is_active: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Internal(_)));
    assert_eq!(app.store.client_count().await, 0);
    assert_eq!(app.store.audit_count().await, 0);
}

#[tokio::test]
async fn failed_audit_write_leaves_update_invisible() {
    let app = TestApp::with_failing_audit().await;
    let client_id = {
        let mut uow = app.store.begin().await.unwrap();
        let client = uow
            .insert_client(NewClient::new(
                FullName::new("Original").unwrap(),
                PhoneNumber::new("+1").unwrap(),
                ClientSex::Female,
                support::fixed_now(),
                app.admin.id,
            ))
            .await
            .unwrap();
        uow.commit().await.unwrap();
        client.id
    };

    let err = app
        .services
        .client_commands
        .update_client(
            &app.admin,
            UpdateClientCommand {
                id: client_id.into(),
                full_name: Some("Changed".into()),
                phone: None,
                sex: None,
                is_active: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Internal(_)));
    let stored = app
        .services
        .client_queries
        .get_client(client_id.into())
        .await
        .unwrap();
    assert_eq!(stored.full_name, "Original");
    assert_eq!(app.store.audit_count().await, 0);
}

#[tokio::test]
async fn entries_are_listed_newest_first() {
    let app = TestApp::with_clock(Arc::new(SteppingClock::default())).await;
    let first = app.create_client("First", "+1").await;
    let second = app.create_client("Second", "+2").await;

    let trail = app.audit_trail().await;
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].target_id, second.id);
    assert_eq!(trail[1].target_id, first.id);
    assert!(trail[0].timestamp > trail[1].timestamp);
}

#[tokio::test]
async fn equal_timestamps_fall_back_to_id_order() {
    let app = TestApp::new().await;
    for phone in ["+1", "+2", "+3"] {
        app.create_client("Same Instant", phone).await;
    }

    let ids: Vec<i64> = app.audit_trail().await.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn listing_pages_with_skip_and_limit() {
    let app = TestApp::new().await;
    for phone in ["+1", "+2", "+3", "+4"] {
        app.create_client("Paged", phone).await;
    }

    let page = app
        .services
        .audit_queries
        .list_audit_logs(&app.admin, ListAuditLogsQuery { skip: 1, limit: 2 })
        .await
        .unwrap();
    let ids: Vec<i64> = page.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[tokio::test]
async fn actor_is_attached_and_null_once_removed() {
    let app = TestApp::new().await;
    app.services
        .client_commands
        .create_client(
            &app.user,
            CreateClientCommand {
                full_name: "By User".into(),
                phone: "+1".into(),
                sex: ClientSex::Male,
                is_active: Some(false),
            },
        )
        .await
        .unwrap();

    let trail = app.audit_trail().await;
    let actor = trail[0].user.as_ref().expect("actor present");
    assert_eq!(actor.login, "user");

    assert!(app.store.remove_user(app.user.id).await);
    let trail = app.audit_trail().await;
    assert!(trail[0].user.is_none());
    assert_eq!(trail[0].user_id, i64::from(app.user.id));
    assert_eq!(trail[0].action, AuditAction::Create);
}

#[tokio::test]
async fn listing_requires_admin() {
    let app = TestApp::new().await;

    let err = app
        .services
        .audit_queries
        .list_audit_logs(&app.user, ListAuditLogsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
