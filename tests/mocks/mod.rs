//! Shared test infrastructure

pub mod fixtures;
pub mod stores;
pub mod test_server;

#[allow(unused_imports)]
pub use test_server::TestServer;
