use axum::Json;
use serde_json::{json, Value};

use quotes_types::valid_categories;

/// GET / - API description document
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "API description document")),
    tag = "docs"
))]
pub async fn api_docs() -> Json<Value> {
	Json(json!({
		"message": "🚀 Dev Quotes API - Inspiring developers one quote at a time!",
		"version": env!("CARGO_PKG_VERSION"),
		"documentation": {
			"endpoints": {
				"GET /quotes": "Get all quotes",
				"GET /quotes/random": "Get a random quote",
				"GET /quotes/category/{category}": "Get quotes by category",
				"POST /quotes": "Submit a new quote",
				"GET /quotes/stats": "Get API statistics"
			},
			"categories": valid_categories(),
		},
		"author": "Built with ❤️ for developers"
	}))
}
