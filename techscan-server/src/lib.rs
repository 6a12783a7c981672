//! # Techscan Server
//!
//! REST backend and static front end for codebase technology scanning.
//!
//! ## Overview
//!
//! The server exposes a single domain operation: walk a directory tree and
//! classify marker filenames (`*.csproj`, `package.json`, `Dockerfile`) into
//! technology kinds. Everything else is request/response plumbing:
//!
//! - **Scan API**: `POST /api/scan` validates a path and delegates to the
//!   scanning service in `techscan-core`
//! - **Liveness**: `GET /health` for probes
//! - **Front end**: a static single page served from the configured UI
//!   directory; scan results live in the browser's session storage
//!
//! ## Architecture
//!
//! The server is built on Axum. There is no persistence layer: each scan is
//! computed fresh, returned, and discarded.

pub mod handlers;
pub mod infra;
pub mod routes;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};

/// Assemble the full application router: API routes, health endpoint,
/// static front end, and middleware layers.
pub fn create_app(state: AppState) -> Router {
    let api = routes::create_api_router();

    // Permissive CORS in dev, allow-list from config otherwise
    let cors_layer = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        let allow_origin = if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let ui = ServeDir::new(&state.config.ui.dist_dir)
        .append_index_html_on_directories(true);

    Router::new()
        .route("/health", axum::routing::get(handlers::health::health_handler))
        .nest("/api", api)
        .fallback_service(ui)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
