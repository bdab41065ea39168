//! Configuration settings structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub storage: StorageSettings,
	pub logging: LoggingSettings,
	pub rate_limiting: RateLimitSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Storage configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageSettings {
	/// Path of the durable quotes file
	pub data_file: PathBuf,
}

impl Default for StorageSettings {
	fn default() -> Self {
		Self {
			data_file: PathBuf::from("data/quotes.json"),
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	#[default]
	Pretty,
	Compact,
}

/// Rate limiting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitSettings {
	pub enabled: bool,
	/// Requests allowed per window per client
	pub max_requests: u32,
	/// Window length in seconds
	pub window_secs: u64,
}

impl Default for RateLimitSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			max_requests: 100,
			window_secs: 15 * 60,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_documented_service() {
		let settings = Settings::default();
		assert_eq!(settings.bind_address(), "0.0.0.0:3000");
		assert_eq!(settings.storage.data_file, PathBuf::from("data/quotes.json"));
		assert!(settings.rate_limiting.enabled);
		assert_eq!(settings.rate_limiting.max_requests, 100);
		assert_eq!(settings.rate_limiting.window_secs, 900);
	}

	#[test]
	fn partial_config_keeps_defaults_for_missing_fields() {
		let settings: Settings = serde_json::from_value(serde_json::json!({
			"server": { "port": 8080 }
		}))
		.unwrap();

		assert_eq!(settings.server.port, 8080);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.storage.data_file, PathBuf::from("data/quotes.json"));
		assert_eq!(settings.logging.level, "info");
		assert!(settings.rate_limiting.enabled);
	}
}
