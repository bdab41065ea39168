//! Quote service
//!
//! Pagination, random selection, category lookup, statistics, and the
//! validated create workflow.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use quotes_storage::traits::StorageError;
use quotes_storage::Storage;
use quotes_types::{
	CategoryQuotes, PaginatedQuotes, Pagination, Quote, QuoteStats, QuoteSubmission,
	QuoteValidationErrors, RandomQuote,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Error)]
pub enum QuoteServiceError {
	#[error("{0}")]
	Validation(QuoteValidationErrors),
	#[error("no quotes available")]
	NoQuotes,
	#[error("no quotes found for category: {category}")]
	CategoryNotFound {
		category: String,
		available: Vec<String>,
	},
	#[error("storage error: {0}")]
	Storage(String),
}

impl From<StorageError> for QuoteServiceError {
	fn from(e: StorageError) -> Self {
		QuoteServiceError::Storage(e.to_string())
	}
}

#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
	async fn list_paginated(
		&self,
		page: Option<u32>,
		limit: Option<u32>,
	) -> Result<PaginatedQuotes, QuoteServiceError>;

	async fn random_quote(&self) -> Result<RandomQuote, QuoteServiceError>;

	async fn by_category(&self, category: &str) -> Result<CategoryQuotes, QuoteServiceError>;

	async fn stats(&self) -> Result<QuoteStats, QuoteServiceError>;

	async fn create(&self, submission: QuoteSubmission) -> Result<Quote, QuoteServiceError>;
}

#[derive(Clone)]
pub struct QuoteService {
	storage: Arc<dyn Storage>,
}

impl QuoteService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
	async fn list_paginated(
		&self,
		page: Option<u32>,
		limit: Option<u32>,
	) -> Result<PaginatedQuotes, QuoteServiceError> {
		// Absent or non-numeric values fall back to the defaults; zero
		// is clamped to 1 so a degenerate window cannot be requested.
		let page = page.unwrap_or(1).max(1);
		let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

		let quotes = self.storage.all_quotes().await?;
		let total = quotes.len();

		let start = (page as usize - 1).saturating_mul(limit as usize);
		let end = (page as usize).saturating_mul(limit as usize);

		let page_quotes: Vec<Quote> = quotes
			.into_iter()
			.skip(start)
			.take(limit as usize)
			.collect();

		let total_pages = total.div_ceil(limit as usize) as u32;

		Ok(PaginatedQuotes {
			quotes: page_quotes,
			pagination: Pagination {
				current_page: page,
				total_pages,
				total_quotes: total,
				has_next: end < total,
				has_prev: start > 0,
			},
		})
	}

	async fn random_quote(&self) -> Result<RandomQuote, QuoteServiceError> {
		let quotes = self.storage.all_quotes().await?;
		if quotes.is_empty() {
			return Err(QuoteServiceError::NoQuotes);
		}

		let total_quotes = quotes.len();
		let index = rand::thread_rng().gen_range(0..total_quotes);
		let quote = quotes
			.into_iter()
			.nth(index)
			.ok_or(QuoteServiceError::NoQuotes)?;

		Ok(RandomQuote { quote, total_quotes })
	}

	async fn by_category(&self, category: &str) -> Result<CategoryQuotes, QuoteServiceError> {
		let quotes = self.storage.quotes_by_category(category).await?;
		if quotes.is_empty() {
			// Discovery aid: return the categories that do exist.
			let available = self.storage.categories().await?;
			return Err(QuoteServiceError::CategoryNotFound {
				category: category.to_string(),
				available,
			});
		}

		Ok(CategoryQuotes {
			category: category.to_lowercase(),
			count: quotes.len(),
			quotes,
		})
	}

	async fn stats(&self) -> Result<QuoteStats, QuoteServiceError> {
		let quotes = self.storage.all_quotes().await?;
		let available_categories = self.storage.categories().await?;

		// One filter pass per category; fine at this collection size.
		let mut categories = BTreeMap::new();
		for category in &available_categories {
			let count = self.storage.quotes_by_category(category).await?.len();
			categories.insert(category.clone(), count);
		}

		let user_submitted_quotes = quotes.iter().filter(|q| q.user_submitted).count();

		Ok(QuoteStats {
			total_quotes: quotes.len(),
			user_submitted_quotes,
			original_quotes: quotes.len() - user_submitted_quotes,
			categories,
			available_categories,
			last_updated: Utc::now(),
		})
	}

	async fn create(&self, submission: QuoteSubmission) -> Result<Quote, QuoteServiceError> {
		let valid = submission
			.validate()
			.map_err(QuoteServiceError::Validation)?;

		let quote = Quote::from_submission(valid);
		let outcome = self.storage.append_quote(quote.clone()).await?;
		if !outcome.persisted {
			// Availability over durability: the create still succeeds.
			debug!("quote {} accepted without durable flush", quote.id);
		}

		info!("added quote {} in category {}", quote.id, quote.category);
		Ok(quote)
	}
}
