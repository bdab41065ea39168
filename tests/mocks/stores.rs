//! Storage doubles for failure-path tests

use async_trait::async_trait;

use dev_quotes::storage::traits::{PersistOutcome, QuoteStorage, Storage, StorageResult};
use dev_quotes::storage::MemoryStore;
use dev_quotes::Quote;

/// Store that serves reads and writes normally but reports itself
/// unhealthy, so the health endpoint's degraded path can be exercised
#[derive(Clone)]
#[allow(dead_code)]
pub struct UnhealthyStore {
	inner: MemoryStore,
}

impl UnhealthyStore {
	#[allow(dead_code)]
	pub fn seeded() -> Self {
		Self {
			inner: MemoryStore::seeded(),
		}
	}
}

#[async_trait]
impl QuoteStorage for UnhealthyStore {
	async fn all_quotes(&self) -> StorageResult<Vec<Quote>> {
		self.inner.all_quotes().await
	}

	async fn quotes_by_category(&self, category: &str) -> StorageResult<Vec<Quote>> {
		self.inner.quotes_by_category(category).await
	}

	async fn categories(&self) -> StorageResult<Vec<String>> {
		self.inner.categories().await
	}

	async fn append_quote(&self, quote: Quote) -> StorageResult<PersistOutcome> {
		self.inner.append_quote(quote).await
	}

	async fn quote_count(&self) -> StorageResult<usize> {
		self.inner.quote_count().await
	}
}

#[async_trait]
impl Storage for UnhealthyStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(false)
	}
}
