//! Dev Quotes Server
//!
//! Main entry point for the quotes server

use dev_quotes::QuotesBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// File-backed store at the configured path, seeded on first run
	QuotesBuilder::from_config().start_server().await
}
