//! Quill Server — a small authenticated blogging service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use quill_core::config::AppConfig;
use quill_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("QUILL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Quill v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    tracing::info!("Connecting to database...");
    let db_pool = quill_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    quill_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Repositories ──────────────────────────────────────────────
    let user_repo = Arc::new(quill_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let post_repo = Arc::new(quill_database::repositories::PostRepository::new(
        db_pool.clone(),
    ));

    // ── Auth system ───────────────────────────────────────────────
    let password_hasher = Arc::new(quill_auth::password::hasher::PasswordHasher::new());
    let session_encoder = Arc::new(quill_auth::token::encoder::SessionEncoder::new(&config.auth));
    let session_decoder = Arc::new(quill_auth::token::decoder::SessionDecoder::new(&config.auth));

    // ── Services ──────────────────────────────────────────────────
    let auth_service = Arc::new(quill_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&session_encoder),
        config.auth.clone(),
    ));
    let post_service = Arc::new(quill_service::post::PostService::new(Arc::clone(&post_repo)));

    // ── HTTP server ───────────────────────────────────────────────
    let app_state = quill_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        session_decoder: Arc::clone(&session_decoder),
        auth_service: Arc::clone(&auth_service),
        post_service: Arc::clone(&post_service),
    };

    let app = quill_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Quill server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Quill server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
