//! Quotes Types
//!
//! Shared models and traits for the Dev Quotes service.
//! This crate contains the quote domain model, validation, wire
//! response shapes, and the pluggable storage traits.

pub mod quotes;
pub mod storage;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use quotes::{
	valid_categories, CategoryQuotes, CreatedQuote, PaginatedQuotes, Pagination, Quote,
	QuoteStats, QuoteSubmission, QuoteValidationErrors, RandomQuote, ValidSubmission,
	VALID_CATEGORIES,
};

pub use storage::{PersistOutcome, QuoteStorageTrait, StorageError, StorageResult, StorageTrait};
