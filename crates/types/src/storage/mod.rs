//! Storage traits for pluggable storage implementations

pub mod traits;

pub use traits::{PersistOutcome, QuoteStorageTrait, StorageError, StorageResult, StorageTrait};
