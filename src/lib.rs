//! Dev Quotes Server
//!
//! A small REST service serving a collection of developer quotes with
//! pagination, random selection, category lookup, statistics, and
//! validated submissions.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use quotes_service::{QuoteService, QuoteServiceTrait};

// Core domain types - the most commonly used types
pub use quotes_types::{
	// External dependencies for convenience
	chrono,
	serde_json,
	valid_categories,
	// Error types
	QuoteValidationErrors,
	// Primary domain entities
	Quote,
	QuoteSubmission,
	VALID_CATEGORIES,
};

// Service layer
pub use quotes_service::{QuoteServiceError, DEFAULT_PAGE_LIMIT};

// Storage layer
pub use quotes_storage::{
	traits::{PersistOutcome, QuoteStorage, StorageError, StorageResult},
	FileStore, MemoryStore, Storage,
};

// Config
pub use quotes_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

// API layer
pub use quotes_api::{create_router, AppState};

// Module aliases for direct access to the member crates
pub mod types {
	pub use quotes_types::*;
}

pub mod storage {
	pub use quotes_storage::*;
}

pub mod config {
	pub use quotes_config::*;
}

pub mod service {
	pub use quotes_service::*;
}

pub mod api {
	pub use quotes_api::*;
	pub mod routes {
		pub use quotes_api::{create_router, AppState};
	}
}

/// Builder pattern for configuring the quotes server
pub struct QuotesBuilder<S = MemoryStore>
where
	S: Storage + Clone + 'static,
{
	settings: Option<Settings>,
	storage: S,
}

impl Default for QuotesBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl QuotesBuilder<MemoryStore> {
	/// Create a builder over a seeded in-memory store
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::seeded())
	}
}

impl QuotesBuilder<FileStore> {
	/// Create a builder from the given settings, backed by the durable
	/// quotes file the settings point at
	pub fn from_settings(settings: Settings) -> Self {
		let storage = FileStore::open(&settings.storage.data_file);
		Self {
			settings: Some(settings),
			storage,
		}
	}

	/// Load `.env` and the config file, then build a file-backed server
	pub fn from_config() -> Self {
		dotenvy::dotenv().ok();
		let settings = load_config().unwrap_or_default();
		Self::from_settings(settings)
	}
}

impl<S> QuotesBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Create a builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use quotes_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Wire up the service and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let storage_arc: Arc<dyn Storage> = Arc::new(self.storage.clone());

		let count = storage_arc
			.quote_count()
			.await
			.map_err(|e| format!("Failed to read quote store: {}", e))?;
		info!("Quote store ready with {} quote(s)", count);

		let quote_service =
			Arc::new(QuoteService::new(Arc::clone(&storage_arc))) as Arc<dyn QuoteServiceTrait>;

		let app_state = AppState {
			quote_service,
			storage: storage_arc,
			started_at: Instant::now(),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.clone().ok_or("settings vanished")?
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /");
		info!("  GET  /health");
		info!("  GET  /quotes");
		info!("  GET  /quotes/random");
		info!("  GET  /quotes/stats");
		info!("  GET  /quotes/category/{{category}}");
		info!("  POST /quotes");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		// Apply global rate limiting based on settings at the make_service level
		let rate_cfg = &settings.rate_limiting;
		if rate_cfg.enabled {
			use std::time::Duration;
			use tower::limit::RateLimitLayer;
			use tower::ServiceBuilder;
			let make_svc = ServiceBuilder::new()
				.layer(RateLimitLayer::new(
					rate_cfg.max_requests as u64,
					Duration::from_secs(rate_cfg.window_secs),
				))
				.service(app.into_make_service());
			axum::serve(listener, make_svc)
				.with_graceful_shutdown(shutdown_signal())
				.await?;
		} else {
			axum::serve(listener, app)
				.with_graceful_shutdown(shutdown_signal())
				.await?;
		}

		log_service_shutdown();

		Ok(())
	}
}

/// Resolves on Ctrl+C, letting in-flight requests drain before exit
async fn shutdown_signal() {
	tokio::signal::ctrl_c().await.ok();
}
