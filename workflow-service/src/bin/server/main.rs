use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workflow_service::config::Config;
use workflow_service::domain::account::service::AccountService;
use workflow_service::domain::reference::service::ReferenceService;
use workflow_service::domain::request::service::RequestService;
use workflow_service::domain::role::service::RoleService;
use workflow_service::inbound::http::router::create_router;
use workflow_service::inbound::http::router::AppState;
use workflow_service::outbound::repositories::PostgresAccountRepository;
use workflow_service::outbound::repositories::PostgresPriorityRepository;
use workflow_service::outbound::repositories::PostgresRequestRepository;
use workflow_service::outbound::repositories::PostgresRoleRepository;
use workflow_service::outbound::repositories::PostgresStatusRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workflow_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "workflow-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // A secret below the minimum length is a deployment fault; refuse to start
    let authenticator = Arc::new(Authenticator::new(&config.jwt.signing())?);

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let request_repository = Arc::new(PostgresRequestRepository::new(pg_pool.clone()));
    let role_repository = Arc::new(PostgresRoleRepository::new(pg_pool.clone()));
    let priority_repository = Arc::new(PostgresPriorityRepository::new(pg_pool.clone()));
    let status_repository = Arc::new(PostgresStatusRepository::new(pg_pool));

    let role_service = Arc::new(RoleService::new(role_repository));
    let account_service = Arc::new(AccountService::new(
        account_repository,
        Arc::clone(&role_service),
        Arc::clone(&authenticator),
    ));
    let request_service = Arc::new(RequestService::new(
        request_repository,
        Arc::clone(&status_repository),
    ));
    let reference_service = Arc::new(ReferenceService::new(
        priority_repository,
        status_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(AppState {
        account_service,
        request_service,
        role_service,
        reference_service,
        authenticator,
    });

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
