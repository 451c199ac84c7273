use anyhow::Result;
use crm_core::application::{
    commands::users::EnsureUserCommand,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::{ApplicationServices, Repositories},
};
use crm_core::config::{AppConfig, SeedAccount};
use crm_core::domain::user::Role;
use crm_core::infrastructure::{
    database,
    repositories::{
        InMemoryCrmStore, PostgresAuditLogRepository, PostgresClientReadRepository,
        PostgresProductReadRepository, PostgresUnitOfWorkFactory, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use crm_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repos = build_repositories(&config).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        clock,
    ));

    seed_users(&services, &config).await?;

    let app = build_router(HttpState::new(Arc::clone(&services)), config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(config: &AppConfig) -> Result<Repositories> {
    if config.uses_memory_store() {
        tracing::warn!("using the in-memory store; data is lost on exit");
        let store = Arc::new(InMemoryCrmStore::new());
        return Ok(Repositories {
            users: store.clone(),
            clients: store.clone(),
            products: store.clone(),
            audit_logs: store.clone(),
            unit_of_work: store,
        });
    }

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    Ok(Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        clients: Arc::new(PostgresClientReadRepository::new(pool.clone())),
        products: Arc::new(PostgresProductReadRepository::new(pool.clone())),
        audit_logs: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
        unit_of_work: Arc::new(PostgresUnitOfWorkFactory::new(pool)),
    })
}

async fn seed_users(services: &ApplicationServices, config: &AppConfig) -> Result<()> {
    let seeds: [(Option<&SeedAccount>, Role); 2] = [
        (config.seed_admin(), Role::Admin),
        (config.seed_user(), Role::User),
    ];

    for (account, role) in seeds {
        let Some(account) = account else { continue };
        let outcome = services
            .user_commands
            .ensure_user(EnsureUserCommand {
                login: account.login.clone(),
                password: account.password.clone(),
                role,
            })
            .await?;
        if !outcome.created {
            tracing::info!(login = %outcome.user.login, "bootstrap user already present");
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
