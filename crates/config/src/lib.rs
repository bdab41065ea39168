//! Quotes Configuration
//!
//! Configuration management and startup utilities for the Dev Quotes service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	LogFormat, LoggingSettings, RateLimitSettings, ServerSettings, Settings, StorageSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
