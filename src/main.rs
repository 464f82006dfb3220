use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod db;
mod groq_client;
mod handlers;
mod middleware;
mod models;
mod resume;
mod sessions;

// Shared state: the session store pool plus the (optional) completion client.
pub struct AppState {
    pub db_pool: sqlx::PgPool,
    pub groq_client: Option<groq_client::GroqClient>,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Create the database connection pool
    let db_pool = db::create_pool()
        .await
        .expect("Failed to create database pool.");

    // Initialize the Groq client if a credential is provided. Absence is
    // detected here, once, so no request ever reaches the provider without it.
    let groq_client = match std::env::var("GROQ_API_KEY").ok() {
        Some(api_key) if !api_key.is_empty() => {
            tracing::info!("Initializing Groq completion client...");
            Some(groq_client::GroqClient::new(api_key))
        }
        _ => {
            tracing::warn!("GROQ_API_KEY not found. AI chat will report a configuration error.");
            None
        }
    };

    let shared_state = Arc::new(AppState {
        db_pool,
        groq_client,
    });

    let app = Router::new()
        .merge(handlers::auth::auth_routes())
        .merge(handlers::chat::chat_routes())
        .route("/api/status", axum::routing::get(api_status))
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(shared_state));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,portfolio_backend=trace,sqlx=info,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,portfolio_backend=info,sqlx=warn,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // JSON logging for aggregation in production, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Portfolio backend starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let db_configured = std::env::var("DATABASE_URL").is_ok();
    let groq_configured = std::env::var("GROQ_API_KEY").is_ok();
    tracing::info!(
        "Configuration - Database: {}, Groq AI: {}",
        if db_configured { "✅" } else { "❌" },
        if groq_configured { "✅" } else { "❌" }
    );

    Ok(())
}

// API health endpoint
async fn api_status(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Json<serde_json::Value> {
    use serde_json::json;

    let db_status = match sqlx::query("SELECT 1").fetch_one(&state.db_pool).await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };
    let groq_status = if state.groq_client.is_some() {
        "configured"
    } else {
        "not_configured"
    };

    axum::response::Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
            "groq_ai": groq_status
        }
    }))
}
