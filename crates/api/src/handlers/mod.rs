pub mod common;
pub mod docs;
pub mod health;
pub mod quotes;

pub use docs::api_docs;
pub use health::health;
pub use quotes::{get_quotes, get_quotes_by_category, get_random_quote, get_stats, post_quote};
