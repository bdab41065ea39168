//! Configuration loading
//!
//! Settings come from the optional `config/config.*` file with
//! `QUOTES_*` environment variables layered on top (nested keys use a
//! double underscore, e.g. `QUOTES_SERVER__PORT=8080`). Anything left
//! unset falls back to the per-section defaults.

use config::{Config, ConfigError, Environment, File};

use crate::Settings;

/// Load settings from the config file and environment overrides
pub fn load_config() -> Result<Settings, ConfigError> {
	let source = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(
			Environment::with_prefix("QUOTES")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	source.try_deserialize()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn environment_overrides_win_and_the_rest_defaults() {
		std::env::set_var("QUOTES_SERVER__PORT", "4123");
		let settings = load_config().expect("config should load");
		std::env::remove_var("QUOTES_SERVER__PORT");

		assert_eq!(settings.server.port, 4123);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert!(settings.rate_limiting.enabled);
	}
}
