use std::sync::Arc;
use std::time::Instant;

use quotes_service::QuoteServiceTrait;
use quotes_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<dyn QuoteServiceTrait>,
	pub storage: Arc<dyn Storage>,
	/// Process start marker for the health endpoint's uptime field
	pub started_at: Instant,
}
