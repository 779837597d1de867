//! Freddit Backend API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use freddit_backend::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig, ServerConfig};
use freddit_backend::infrastructure::driven_adapters::database;
use freddit_backend::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(&config.logging);
    tracing::info!(run_mode = %std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into()), "Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Rate limiting per client IP
    let period_ms = (1000 / config.rate_limit.requests_per_second.max(1)).max(1);
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(period_ms)
            .burst_size(config.rate_limit.burst_size)
            .finish()
            .context("invalid rate limit configuration")?,
    );
    let governor_limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            governor_limiter.retain_recent();
        }
    });

    let cors = cors_layer(&config.server)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Build router
    let app_state = AppState::new(Arc::new(config), pool);
    let app = api_rest::router(app_state)
        .layer(GovernorLayer {
            config: governor_config,
        })
        .layer(cors);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "freddit_backend=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> anyhow::Result<CorsLayer> {
    let origins = server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid allowed origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::HeaderName::from_static("x-request-id")]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
