//! Storage traits for pluggable storage implementations

use async_trait::async_trait;
use thiserror::Error;

use crate::Quote;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("storage operation failed: {message}")]
	Operation { message: String },
	#[error("serialization error: {message}")]
	Serialization { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of an append.
///
/// The in-memory insert succeeded whenever the call returns `Ok`;
/// `persisted` records whether the durable flush also went through.
/// Callers may ignore it — durability is best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistOutcome {
	pub persisted: bool,
}

/// Trait for quote storage operations
#[async_trait]
pub trait QuoteStorageTrait: Send + Sync {
	/// Get the full ordered sequence of quotes
	async fn all_quotes(&self) -> StorageResult<Vec<Quote>>;

	/// Get quotes whose category matches case-insensitively
	async fn quotes_by_category(&self, category: &str) -> StorageResult<Vec<Quote>>;

	/// Get the sorted set of distinct categories present in the collection
	async fn categories(&self) -> StorageResult<Vec<String>>;

	/// Append a quote at the end of the sequence and flush the collection
	/// to the durable mirror, if any
	async fn append_quote(&self, quote: Quote) -> StorageResult<PersistOutcome>;

	/// Get quote count
	async fn quote_count(&self) -> StorageResult<usize>;
}

/// Main storage trait combining quote operations with liveness checks
#[async_trait]
pub trait StorageTrait: QuoteStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;
}
