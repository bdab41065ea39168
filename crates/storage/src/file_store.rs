//! JSON-file-backed storage implementation
//!
//! Loads the collection once at construction and rewrites the whole
//! file on every append. An absent or unparsable file silently falls
//! back to the seed list; a failed flush is logged and reported through
//! `PersistOutcome` without failing the append.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::memory_store::{distinct_categories, filter_by_category};
use crate::seed;
use crate::traits::{PersistOutcome, QuoteStorage, Storage, StorageError, StorageResult};
use quotes_types::Quote;

/// Quote store mirrored to a JSON file
#[derive(Clone)]
pub struct FileStore {
	path: PathBuf,
	quotes: Arc<RwLock<Vec<Quote>>>,
}

impl FileStore {
	/// Open a store backed by the file at `path`.
	///
	/// Fails soft: a missing or corrupt file never errors, it loads the
	/// seed list instead.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let quotes = load_or_seed(&path);
		Self {
			path,
			quotes: Arc::new(RwLock::new(quotes)),
		}
	}

	/// Path of the durable mirror
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self, quotes: &[Quote]) -> StorageResult<()> {
		let json =
			serde_json::to_string_pretty(quotes).map_err(|e| StorageError::Serialization {
				message: e.to_string(),
			})?;
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent).map_err(|e| StorageError::Operation {
					message: e.to_string(),
				})?;
			}
		}
		fs::write(&self.path, json).map_err(|e| StorageError::Operation {
			message: e.to_string(),
		})
	}
}

fn load_or_seed(path: &Path) -> Vec<Quote> {
	match fs::read_to_string(path) {
		Ok(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
			Ok(quotes) => {
				debug!("loaded {} quotes from {}", quotes.len(), path.display());
				quotes
			},
			Err(e) => {
				warn!(
					"unparsable quotes file at {}, loading default quotes: {}",
					path.display(),
					e
				);
				seed::default_quotes()
			},
		},
		Err(_) => {
			debug!("no quotes file at {}, loading default quotes", path.display());
			seed::default_quotes()
		},
	}
}

fn lock_poisoned() -> StorageError {
	StorageError::Operation {
		message: "quote collection lock poisoned".to_string(),
	}
}

#[async_trait]
impl QuoteStorage for FileStore {
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
		let snapshot = {
			let mut quotes = self.quotes.write().map_err(|_| lock_poisoned())?;
			quotes.push(quote);
			quotes.clone()
		};

		// Full-file rewrite per append. A failed flush is best-effort:
		// the in-memory append stands and the caller sees Ok.
		match self.flush(&snapshot) {
			Ok(()) => Ok(PersistOutcome { persisted: true }),
			Err(e) => {
				warn!("failed to persist quotes to {}: {}", self.path.display(), e);
				Ok(PersistOutcome { persisted: false })
			},
		}
	}

	async fn quote_count(&self) -> StorageResult<usize> {
		Ok(self.quotes.read().map_err(|_| lock_poisoned())?.len())
	}
}

#[async_trait]
impl Storage for FileStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(self.quotes.read().is_ok())
	}
}
