//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use quotes_types::storage::{
	PersistOutcome, QuoteStorageTrait as QuoteStorage, StorageError, StorageResult,
	StorageTrait as Storage,
};
