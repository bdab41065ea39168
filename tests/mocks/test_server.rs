//! Test server for integration tests
//!
//! Spawns the real router on an ephemeral port so tests can drive it
//! over HTTP. Each server gets its own isolated store instance.

use tokio::task::JoinHandle;

use dev_quotes::storage::{MemoryStore, Storage};
use dev_quotes::QuotesBuilder;

/// Test server instance bound to an ephemeral local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server over a seeded in-memory store
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_storage(MemoryStore::seeded()).await
	}

	/// Spawn a test server over an empty store
	#[allow(dead_code)]
	pub async fn spawn_empty() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_storage(MemoryStore::new()).await
	}

	/// Spawn a test server over the given storage backend
	pub async fn spawn_with_storage<S>(storage: S) -> Result<Self, Box<dyn std::error::Error>>
	where
		S: Storage + Clone + 'static,
	{
		let (app, _state) = QuotesBuilder::with_storage(storage).start().await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.ok();
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	/// Stop the server task
	pub fn abort(&self) {
		self.handle.abort();
	}
}
