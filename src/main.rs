use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use neurolink::adapters::ai::{OpenAICompatConfig, OpenAICompatProvider};
use neurolink::adapters::auth::JwtAuthenticator;
use neurolink::adapters::http::{api_router, AppState};
use neurolink::adapters::password::Argon2Hasher;
use neurolink::adapters::postgres::{
    PostgresCourseRepository, PostgresDecisionRepository, PostgresEmotionRepository,
    PostgresUserRepository,
};
use neurolink::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let pool = config.database.connect().await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrations applied");
    }

    let jwt = Arc::new(JwtAuthenticator::from_config(&config.auth));
    let ai = OpenAICompatProvider::new(OpenAICompatConfig::from(&config.ai))?;

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        courses: Arc::new(PostgresCourseRepository::new(pool.clone())),
        emotions: Arc::new(PostgresEmotionRepository::new(pool.clone())),
        decisions: Arc::new(PostgresDecisionRepository::new(pool)),
        ai: Arc::new(ai),
        hasher: Arc::new(Argon2Hasher::default()),
        tokens: jwt.clone(),
        sessions: jwt,
        ai_timeout: config.ai.timeout(),
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "neurolink listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.as_str()));

    if server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
