//! In-memory storage implementation
//!
//! Keeps the quote collection in insertion order behind a `RwLock` so
//! pagination never re-sorts. No durability; useful for tests and demos.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::seed;
use crate::traits::{PersistOutcome, QuoteStorage, Storage, StorageError, StorageResult};
use quotes_types::Quote;

/// In-memory quote store with no durable mirror
#[derive(Clone, Default)]
pub struct MemoryStore {
	quotes: Arc<RwLock<Vec<Quote>>>,
}

impl MemoryStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-populated with the default seed list
	pub fn seeded() -> Self {
		Self::with_quotes(seed::default_quotes())
	}

	/// Create a store holding the given quotes, in order
	pub fn with_quotes(quotes: Vec<Quote>) -> Self {
		Self {
			quotes: Arc::new(RwLock::new(quotes)),
		}
	}
}

fn lock_poisoned() -> StorageError {
	StorageError::Operation {
		message: "quote collection lock poisoned".to_string(),
	}
}

/// Case-insensitive category filter shared by the storage backends.
pub(crate) fn filter_by_category(quotes: &[Quote], category: &str) -> Vec<Quote> {
	let wanted = category.to_lowercase();
	quotes
		.iter()
		.filter(|q| q.category.to_lowercase() == wanted)
		.cloned()
		.collect()
}

/// Sorted distinct categories present in the collection.
pub(crate) fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
	let mut categories: Vec<String> = quotes.iter().map(|q| q.category.clone()).collect();
	categories.sort();
	categories.dedup();
	categories
}

#[async_trait]
impl QuoteStorage for MemoryStore {
	async fn all_quotes(&self) -> StorageResult<Vec<Quote>> {
		Ok(self.quotes.read().map_err(|_| lock_poisoned())?.clone())
	}

	async fn quotes_by_category(&self, category: &str) -> StorageResult<Vec<Quote>> {
		let quotes = self.quotes.read().map_err(|_| lock_poisoned())?;
		Ok(filter_by_category(&quotes, category))
	}

	async fn categories(&self) -> StorageResult<Vec<String>> {
		let quotes = self.quotes.read().map_err(|_| lock_poisoned())?;
		Ok(distinct_categories(&quotes))
	}

	async fn append_quote(&self, quote: Quote) -> StorageResult<PersistOutcome> {
		self.quotes.write().map_err(|_| lock_poisoned())?.push(quote);
		// Nothing durable to flush here.
		Ok(PersistOutcome { persisted: true })
	}

	async fn quote_count(&self) -> StorageResult<usize> {
		Ok(self.quotes.read().map_err(|_| lock_poisoned())?.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(self.quotes.read().is_ok())
	}
}
