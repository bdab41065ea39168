use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use quotes_storage::Storage;

use crate::state::AppState;

/// Health response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
	pub status: String,
	pub timestamp: DateTime<Utc>,
	/// Seconds since the process started serving
	pub uptime: f64,
}

/// GET /health - Liveness probe backed by a storage check
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Storage unavailable", body = HealthResponse)
    ),
    tag = "health"
))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
	let storage_ok = state.storage.health_check().await.unwrap_or(false);
	let (code, status) = if storage_ok {
		(StatusCode::OK, "healthy")
	} else {
		(StatusCode::SERVICE_UNAVAILABLE, "degraded")
	};

	(
		code,
		Json(HealthResponse {
			status: status.to_string(),
			timestamp: Utc::now(),
			uptime: state.started_at.elapsed().as_secs_f64(),
		}),
	)
}
