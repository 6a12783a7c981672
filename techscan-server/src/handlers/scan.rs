use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use techscan_core::{ScanRequest, ScanResult};

use crate::infra::app_state::AppState;
use crate::infra::errors::{AppError, AppResult};

/// `POST /api/scan` — validate the requested path and delegate to the
/// scanning service.
///
/// The body is taken as a `Result` so a missing or malformed payload maps to
/// the contract's `"Invalid Request"` response instead of axum's default
/// rejection body.
pub async fn scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> AppResult<Json<ScanResult>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "scan request body rejected");
        AppError::bad_request(
            "Invalid Request",
            "Request body cannot be empty.",
        )
    })?;

    if request.path.trim().is_empty() {
        warn!("scan request has empty or whitespace path");
        return Err(AppError::bad_request(
            "Invalid Path",
            "The path parameter is required and cannot be empty.",
        ));
    }

    info!(path = %request.path, "scan request received");

    let result = state.scanner.scan(&request.path).await?;

    info!(
        files_scanned = result.files_scanned,
        items = result.items.len(),
        "scan completed"
    );

    Ok(Json(result))
}
