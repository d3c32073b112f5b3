//! NutriKids Backend
//!
//! Serves the static food catalog, nutrition quizzes and meal summaries to the mobile app.

mod api;
mod catalog;
mod config;
mod errors;
mod models;
mod nutrition;
mod quiz;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::FoodCatalog;
use config::{Config, LogFormat};
use errors::AppError;
use quiz::QuizBank;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FoodCatalog>,
    pub quizzes: Arc<QuizBank>,
    pub config: Arc<Config>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Load the food document and build the catalog and quiz bank once.
    pub async fn load(config: Config) -> Result<Self, AppError> {
        let source = catalog::load_source(config.catalog_path.as_deref()).await?;

        let catalog = FoodCatalog::from_source(&source)?;
        if catalog.is_empty() {
            tracing::warn!("Food catalog is empty");
        }
        let quizzes = QuizBank::from_source(&source);

        tracing::info!(
            foods = catalog.len(),
            questions = quizzes.all().len(),
            "Catalog loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            quizzes: Arc::new(quizzes),
            config: Arc::new(config),
            loaded_at: Utc::now(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Starting NutriKids Backend");
    match &config.catalog_path {
        Some(path) => tracing::info!("Catalog path: {:?}", path),
        None => tracing::info!("Using bundled catalog"),
    }
    tracing::info!("Bind address: {}", config.bind_addr);

    let bind_addr = config.bind_addr;
    let state = AppState::load(config).await?;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Catalog
        .route("/catalog", get(api::get_catalog))
        // Foods
        .route("/foods", get(api::list_foods))
        .route("/foods/{id}", get(api::get_food))
        .route("/categories/{category}/foods", get(api::list_category_foods))
        // Search
        .route("/search", get(api::search_foods))
        // Quiz
        .route("/quiz/answers", post(api::grade_quiz))
        .route("/quiz/{bucket}", get(api::get_quiz_bucket))
        // Meals
        .route("/meals/summary", post(api::summarize_meal_draft));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
