//! Quotes handlers

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::Response,
	Json,
};
use tracing::debug;

use crate::handlers::common::error_response;
#[cfg(feature = "openapi")]
use crate::handlers::common::{ErrorResponse, ValidationErrorResponse};
use crate::pagination::PaginationQuery;
use crate::state::AppState;
use quotes_types::{CategoryQuotes, CreatedQuote, PaginatedQuotes, QuoteStats, QuoteSubmission, RandomQuote};

/// GET /quotes - List quotes with pagination
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/quotes",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-based)", example = 1),
        ("limit" = Option<u32>, Query, description = "Quotes per page", example = 20)
    ),
    responses((status = 200, description = "Paginated quotes", body = PaginatedQuotes)),
    tag = "quotes"
))]
pub async fn get_quotes(
	State(state): State<AppState>,
	Query(pq): Query<PaginationQuery>,
) -> Result<Json<PaginatedQuotes>, Response> {
	debug!("listing quotes, page={:?} limit={:?}", pq.page, pq.limit);
	let page = state
		.quote_service
		.list_paginated(pq.page, pq.limit)
		.await
		.map_err(|e| error_response(e, "Failed to retrieve quotes"))?;

	Ok(Json(page))
}

/// GET /quotes/random - Get a random quote
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/quotes/random",
    responses(
        (status = 200, description = "A random quote", body = RandomQuote),
        (status = 404, description = "Collection is empty", body = ErrorResponse)
    ),
    tag = "quotes"
))]
pub async fn get_random_quote(
	State(state): State<AppState>,
) -> Result<Json<RandomQuote>, Response> {
	let random = state
		.quote_service
		.random_quote()
		.await
		.map_err(|e| error_response(e, "Failed to retrieve random quote"))?;

	Ok(Json(random))
}

/// GET /quotes/stats - Collection statistics
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/quotes/stats",
    responses((status = 200, description = "Collection statistics", body = QuoteStats)),
    tag = "quotes"
))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<QuoteStats>, Response> {
	let stats = state
		.quote_service
		.stats()
		.await
		.map_err(|e| error_response(e, "Failed to retrieve statistics"))?;

	Ok(Json(stats))
}

/// GET /quotes/category/{category} - Quotes in a category
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/quotes/category/{category}",
    params(("category" = String, Path, description = "Category name, case-insensitive")),
    responses(
        (status = 200, description = "Quotes in the category", body = CategoryQuotes),
        (status = 404, description = "No quotes in that category", body = ErrorResponse)
    ),
    tag = "quotes"
))]
pub async fn get_quotes_by_category(
	State(state): State<AppState>,
	Path(category): Path<String>,
) -> Result<Json<CategoryQuotes>, Response> {
	debug!("listing quotes for category {}", category);
	let quotes = state
		.quote_service
		.by_category(&category)
		.await
		.map_err(|e| error_response(e, "Failed to retrieve quotes by category"))?;

	Ok(Json(quotes))
}

/// POST /quotes - Submit a new quote
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/quotes",
    request_body = QuoteSubmission,
    responses(
        (status = 201, description = "Quote created", body = CreatedQuote),
        (status = 400, description = "Submission failed validation", body = ValidationErrorResponse)
    ),
    tag = "quotes"
))]
pub async fn post_quote(
	State(state): State<AppState>,
	Json(submission): Json<QuoteSubmission>,
) -> Result<(StatusCode, Json<CreatedQuote>), Response> {
	let quote = state
		.quote_service
		.create(submission)
		.await
		.map_err(|e| error_response(e, "Failed to create quote"))?;

	Ok((
		StatusCode::CREATED,
		Json(CreatedQuote {
			message: "Quote successfully added! 🎉".to_string(),
			quote,
		}),
	))
}
