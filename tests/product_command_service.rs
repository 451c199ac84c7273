// tests/product_command_service.rs
mod support;

use crm_core::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    error::ApplicationError,
    queries::products::ListProductsQuery,
};
use crm_core::domain::{audit::AuditAction, product::ProductStatus};
use serde_json::json;
use support::TestApp;

#[tokio::test]
async fn create_defaults_status_and_audits() {
    let app = TestApp::new().await;
    let client = app.create_client("Owner", "+1").await;

    let product = app
        .services
        .product_commands
        .create_product(
            &app.user,
            CreateProductCommand {
                name: "Laptop".into(),
                status: None,
                client_id: client.id,
            },
        )
        .await
        .unwrap();

    assert_eq!(product.status, ProductStatus::InStock);
    assert_eq!(product.client_id, client.id);

    let trail = app.audit_trail().await;
    assert_eq!(trail[0].action, AuditAction::Create);
    assert_eq!(trail[0].target_model, "Product");
    assert_eq!(trail[0].changes["new_data"]["status"], json!("in_stock"));
}

#[tokio::test]
async fn create_for_missing_client_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .services
        .product_commands
        .create_product(
            &app.user,
            CreateProductCommand {
                name: "Orphan".into(),
                status: Some(ProductStatus::OnOrder),
                client_id: 42,
            },
        )
        .await
        .unwrap_err();

    match err {
        ApplicationError::NotFound(msg) => assert_eq!(msg, "client with id 42 not found"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app.store.audit_count().await, 0);
}

#[tokio::test]
async fn update_changes_status_and_audits_both_states() {
    let app = TestApp::new().await;
    let client = app.create_client("Owner", "+2").await;
    let product = app
        .services
        .product_commands
        .create_product(
            &app.user,
            CreateProductCommand {
                name: "Phone".into(),
                status: None,
                client_id: client.id,
            },
        )
        .await
        .unwrap();

    let updated = app
        .services
        .product_commands
        .update_product(
            &app.user,
            UpdateProductCommand {
                id: product.id,
                name: None,
                status: Some(ProductStatus::OutOfStock),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ProductStatus::OutOfStock);
    assert_eq!(updated.name, "Phone");

    let trail = app.audit_trail().await;
    assert_eq!(trail[0].action, AuditAction::Update);
    assert_eq!(trail[0].changes["old_data"]["status"], json!("in_stock"));
    assert_eq!(trail[0].changes["new_data"]["status"], json!("out_of_stock"));
}

#[tokio::test]
async fn delete_is_admin_only() {
    let app = TestApp::new().await;
    let client = app.create_client("Owner", "+3").await;
    let product = app
        .services
        .product_commands
        .create_product(
            &app.user,
            CreateProductCommand {
                name: "Desk".into(),
                status: None,
                client_id: client.id,
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .product_commands
        .delete_product(&app.user, DeleteProductCommand { id: product.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    app.services
        .product_commands
        .delete_product(&app.admin, DeleteProductCommand { id: product.id })
        .await
        .unwrap();

    let trail = app.audit_trail().await;
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[0].action, AuditAction::Delete);
    assert_eq!(trail[0].changes["deleted_data"]["name"], json!("Desk"));

    let err = app
        .services
        .product_queries
        .get_product(product.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_filters_by_client_and_name() {
    let app = TestApp::new().await;
    let first = app.create_client("First", "+10").await;
    let second = app.create_client("Second", "+11").await;
    for (name, client_id) in [("Red Chair", first.id), ("Blue Chair", second.id), ("Red Lamp", second.id)] {
        app.services
            .product_commands
            .create_product(
                &app.user,
                CreateProductCommand {
                    name: name.into(),
                    status: None,
                    client_id,
                },
            )
            .await
            .unwrap();
    }

    let red = app
        .services
        .product_queries
        .list_products(ListProductsQuery {
            name: Some("red".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(red.len(), 2);

    let owned = app
        .services
        .product_queries
        .list_products(ListProductsQuery {
            client_id: Some(second.id),
            limit: 1,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "Blue Chair");
}
