//! Quotes Storage
//!
//! Storage implementations for the Dev Quotes service.
//! Supports an in-memory backend and a JSON-file-backed backend.

pub mod file_store;
pub mod memory_store;
pub mod seed;
pub mod traits;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::Storage;
