// tests/support/helpers.rs
use super::mocks::{DummyPasswordHasher, FailingAuditUnitOfWorkFactory, FixedClock, StubTokenManager};
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use crm_core::{
    application::{
        dto::{AuditLogDto, AuthenticatedUser, ClientDto},
        commands::clients::CreateClientCommand,
        ports::time::Clock,
        queries::audit::ListAuditLogsQuery,
        services::{ApplicationServices, Repositories},
    },
    domain::{
        client::ClientSex,
        unit_of_work::UnitOfWorkFactory,
        user::{Login, NewUser, PasswordHash, Role, UserRepository},
    },
    infrastructure::repositories::InMemoryCrmStore,
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;

pub const ADMIN_PASSWORD: &str = "adminpass";
pub const USER_PASSWORD: &str = "userpass";

/// Application wired to an in-memory store with an admin (`admin`) and a
/// regular user (`user`) already registered.
pub struct TestApp {
    pub store: Arc<InMemoryCrmStore>,
    pub services: Arc<ApplicationServices>,
    pub admin: AuthenticatedUser,
    pub user: AuthenticatedUser,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::build(false, Arc::new(FixedClock)).await
    }

    pub async fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::build(false, clock).await
    }

    /// Every audit append fails; entity writes go to the real store.
    pub async fn with_failing_audit() -> Self {
        Self::build(true, Arc::new(FixedClock)).await
    }

    async fn build(failing_audit: bool, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryCrmStore::new());
        let admin = seed_user(&store, "admin", ADMIN_PASSWORD, Role::Admin).await;
        let user = seed_user(&store, "user", USER_PASSWORD, Role::User).await;

        let unit_of_work: Arc<dyn UnitOfWorkFactory> = if failing_audit {
            Arc::new(FailingAuditUnitOfWorkFactory::new(store.clone()))
        } else {
            store.clone()
        };

        let services = Arc::new(ApplicationServices::new(
            Repositories {
                users: store.clone(),
                clients: store.clone(),
                products: store.clone(),
                audit_logs: store.clone(),
                unit_of_work,
            },
            Arc::new(DummyPasswordHasher),
            Arc::new(StubTokenManager),
            clock,
        ));

        Self {
            store,
            services,
            admin,
            user,
        }
    }

    pub fn router(&self) -> Router {
        build_router(
            HttpState::new(Arc::clone(&self.services)),
            &["http://localhost:3000".to_string()],
        )
    }

    pub async fn create_client(&self, full_name: &str, phone: &str) -> ClientDto {
        self.services
            .client_commands
            .create_client(
                &self.admin,
                CreateClientCommand {
                    full_name: full_name.into(),
                    phone: phone.into(),
                    sex: ClientSex::Female,
                    is_active: None,
                },
            )
            .await
            .expect("create client")
    }

    /// Whole audit trail, newest first.
    pub async fn audit_trail(&self) -> Vec<AuditLogDto> {
        self.services
            .audit_queries
            .list_audit_logs(&self.admin, ListAuditLogsQuery { skip: 0, limit: 100 })
            .await
            .expect("list audit")
    }
}

async fn seed_user(
    store: &InMemoryCrmStore,
    login: &str,
    password: &str,
    role: Role,
) -> AuthenticatedUser {
    let user = UserRepository::insert(
        store,
        NewUser::new(
            Login::new(login).expect("login"),
            PasswordHash::new(DummyPasswordHasher::hash_of(password)).expect("hash"),
            role,
        ),
    )
    .await
    .expect("seed user");
    AuthenticatedUser::from_user(user)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts status and the `kind` field of an error body.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_kind: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["kind"], expected_kind, "unexpected body: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message: {json}"
    );
    json
}
