use axum::{Router, routing::post};

use crate::handlers::scan::scan_handler;
use crate::infra::app_state::AppState;

/// Create the `/api` routes.
pub fn create_api_router() -> Router<AppState> {
    Router::new().route("/scan", post(scan_handler))
}
