use std::sync::Arc;

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use colloquy_api::{config::Config, routes, state::AppState};
use colloquy_persist::{ConversationService, PersistClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Colloquy API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Initialize persistence client
    tracing::info!("Connecting to MongoDB");
    let persist_client = PersistClient::builder()
        .mongodb_uri(&config.mongodb_uri)
        .database(&config.mongodb.database)
        .collection(&config.mongodb.collection)
        .build()
        .await?;

    tracing::info!("MongoDB connected");

    // Composition root: store -> service -> HTTP layer, lifetimes explicit.
    // The store connection lives for the process; the service is stateless.
    let repository = Arc::new(persist_client.conversations().clone());
    let service = ConversationService::new(repository);

    if config.auth.enabled {
        tracing::info!("API-key gate enabled");
        if config.auth.api_key.is_none() {
            tracing::warn!("API-key gate enabled but no key configured; key check is skipped");
        }
    }

    // Create application state
    let state = Arc::new(AppState::new(config.clone(), service));

    // Build router
    let app = build_app(state.clone());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(state: Arc<AppState>) -> Router {
    routes::router(state.clone())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(30)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            for origin in &config.cors.origins {
                if let Ok(parsed_origin) = origin.parse::<axum::http::HeaderValue>() {
                    cors = cors.allow_origin(parsed_origin);
                }
            }
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
