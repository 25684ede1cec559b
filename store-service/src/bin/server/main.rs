use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use store_service::account::service::AccountService;
use store_service::cart::service::CartService;
use store_service::catalog::service::CatalogService;
use store_service::config::Config;
use store_service::inbound::http::router::create_router;
use store_service::inbound::http::router::AppState;
use store_service::order::service::OrderService;
use store_service::outbound::repositories::PostgresAccountRepository;
use store_service::outbound::repositories::PostgresCartRepository;
use store_service::outbound::repositories::PostgresOrderRepository;
use store_service::outbound::repositories::PostgresProductRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "store-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        exempt_prefixes = ?config.auth.exempt_path_prefixes,
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

    // The signing key is process-wide configuration: loaded once here,
    // shared by issuance and validation.
    let token_codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes()));
    let authenticator = Arc::new(Authenticator::new(Arc::clone(&token_codec)));

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool.clone()));
    let cart_repository = Arc::new(PostgresCartRepository::new(pg_pool.clone()));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool));

    let state = AppState {
        account_service: Arc::new(AccountService::new(account_repository, authenticator)),
        catalog_service: Arc::new(CatalogService::new(Arc::clone(&product_repository))),
        cart_service: Arc::new(CartService::new(
            Arc::clone(&cart_repository),
            Arc::clone(&product_repository),
        )),
        order_service: Arc::new(OrderService::new(
            order_repository,
            cart_repository,
            product_repository,
        )),
        token_codec,
        exempt_prefixes: Arc::new(config.auth.exempt_path_prefixes),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
