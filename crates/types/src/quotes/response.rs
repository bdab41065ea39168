//! Wire response shapes for the quotes API

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quotes::Quote;

/// Pagination summary derived from collection size and the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub current_page: u32,
	pub total_pages: u32,
	pub total_quotes: usize,
	pub has_next: bool,
	pub has_prev: bool,
}

/// Response for `GET /quotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedQuotes {
	pub quotes: Vec<Quote>,
	pub pagination: Pagination,
}

/// Response for `GET /quotes/random`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RandomQuote {
	pub quote: Quote,
	pub total_quotes: usize,
}

/// Response for `GET /quotes/category/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryQuotes {
	pub category: String,
	pub count: usize,
	pub quotes: Vec<Quote>,
}

/// Response for `GET /quotes/stats`.
///
/// `last_updated` marks when the statistics were computed, not when the
/// collection last changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteStats {
	pub total_quotes: usize,
	pub user_submitted_quotes: usize,
	pub original_quotes: usize,
	pub categories: BTreeMap<String, usize>,
	pub available_categories: Vec<String>,
	pub last_updated: DateTime<Utc>,
}

/// Response for `POST /quotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatedQuote {
	pub message: String,
	pub quote: Quote,
}
