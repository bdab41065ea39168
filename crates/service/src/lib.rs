//! Quotes Service
//!
//! Read-side aggregation and the create workflow over the quote store.

pub mod quotes;

pub use quotes::{QuoteService, QuoteServiceError, QuoteServiceTrait, DEFAULT_PAGE_LIMIT};
