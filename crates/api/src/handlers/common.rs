use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use tracing::error;

use quotes_service::QuoteServiceError;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
	pub error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub available_categories: Option<Vec<String>>,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			available_categories: None,
		}
	}
}

/// Error response for rejected submissions; lists every violated
/// constraint plus the valid category list.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
	pub error: String,
	pub details: Vec<String>,
	pub valid_categories: Vec<String>,
}

/// Convert a service error into the boundary JSON shapes.
///
/// `fault_message` is the generic message used for unexpected faults;
/// internals are logged, never sent to the caller.
pub(crate) fn error_response(err: QuoteServiceError, fault_message: &str) -> Response {
	match err {
		QuoteServiceError::Validation(errors) => (
			StatusCode::BAD_REQUEST,
			Json(ValidationErrorResponse {
				error: "Validation failed".to_string(),
				details: errors.details,
				valid_categories: errors.valid_categories,
			}),
		)
			.into_response(),
		QuoteServiceError::NoQuotes => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new("No quotes available")),
		)
			.into_response(),
		QuoteServiceError::CategoryNotFound {
			category,
			available,
		} => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse {
				error: format!("No quotes found for category: {}", category),
				available_categories: Some(available),
			}),
		)
			.into_response(),
		QuoteServiceError::Storage(message) => {
			error!("storage fault: {}", message);
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new(fault_message)),
			)
				.into_response()
		},
	}
}
