//! OpenAPI documentation (behind the `openapi` feature)

use utoipa::OpenApi;

use crate::handlers;
use crate::handlers::common::{ErrorResponse, ValidationErrorResponse};
use crate::handlers::health::HealthResponse;
use quotes_types::{
	CategoryQuotes, CreatedQuote, PaginatedQuotes, Pagination, Quote, QuoteStats,
	QuoteSubmission, RandomQuote,
};

#[derive(OpenApi)]
#[openapi(
	paths(
		handlers::docs::api_docs,
		handlers::health::health,
		handlers::quotes::get_quotes,
		handlers::quotes::get_random_quote,
		handlers::quotes::get_stats,
		handlers::quotes::get_quotes_by_category,
		handlers::quotes::post_quote,
	),
	components(schemas(
		CategoryQuotes,
		CreatedQuote,
		ErrorResponse,
		HealthResponse,
		PaginatedQuotes,
		Pagination,
		Quote,
		QuoteStats,
		QuoteSubmission,
		RandomQuote,
		ValidationErrorResponse,
	)),
	info(
		title = "Dev Quotes API",
		description = "REST API serving a collection of developer quotes"
	)
)]
pub struct ApiDoc;
