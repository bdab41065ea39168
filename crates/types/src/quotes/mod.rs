//! Core Quote domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::QuoteValidationErrors;
pub use request::{QuoteSubmission, ValidSubmission};
pub use response::{
	CategoryQuotes, CreatedQuote, PaginatedQuotes, Pagination, QuoteStats, RandomQuote,
};

/// The five categories accepted on the create path.
///
/// Loaded data is exempt: quotes read back from a durable file keep
/// whatever category they were stored with.
pub const VALID_CATEGORIES: [&str; 5] = ["tech", "funny", "inspiration", "productivity", "debugging"];

/// The canonical category list as owned strings, in canonical order.
pub fn valid_categories() -> Vec<String> {
	VALID_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// A single quote record.
///
/// Seed and durable-file data may carry integer ids; deserialization
/// normalizes them to strings. Quotes created at runtime get a UUID v4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	#[serde(deserialize_with = "id_from_string_or_number")]
	pub id: String,
	pub author: String,
	pub text: String,
	pub category: String,
	/// Present only on user-submitted quotes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<DateTime<Utc>>,
	/// Distinguishes runtime submissions from seeded quotes.
	#[serde(default, skip_serializing_if = "is_false")]
	pub user_submitted: bool,
}

impl Quote {
	/// Build a quote from a submission that passed the validation gate.
	///
	/// Normalization happens here, not in the gate: author and text are
	/// trimmed, the category is lower-cased, and the quote is stamped
	/// with a fresh UUID and the current time.
	pub fn from_submission(submission: ValidSubmission) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			author: submission.author.trim().to_string(),
			text: submission.text.trim().to_string(),
			category: submission.category.to_lowercase(),
			submitted_at: Some(Utc::now()),
			user_submitted: true,
		}
	}
}

fn is_false(value: &bool) -> bool {
	!*value
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Number(i64),
		Text(String),
	}

	Ok(match RawId::deserialize(deserializer)? {
		RawId::Number(n) => n.to_string(),
		RawId::Text(s) => s,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn id_accepts_numbers_and_strings() {
		let numeric: Quote = serde_json::from_value(json!({
			"id": 7,
			"author": "Grace Hopper",
			"text": "A ship in port is safe.",
			"category": "inspiration"
		}))
		.unwrap();
		assert_eq!(numeric.id, "7");

		let textual: Quote = serde_json::from_value(json!({
			"id": "7",
			"author": "Grace Hopper",
			"text": "A ship in port is safe.",
			"category": "inspiration"
		}))
		.unwrap();
		assert_eq!(textual.id, "7");
	}

	#[test]
	fn seed_style_quote_serializes_without_submission_fields() {
		let quote = Quote {
			id: "1".to_string(),
			author: "Linus Torvalds".to_string(),
			text: "Talk is cheap. Show me the code.".to_string(),
			category: "tech".to_string(),
			submitted_at: None,
			user_submitted: false,
		};

		let value = serde_json::to_value(&quote).unwrap();
		assert!(value.get("submittedAt").is_none());
		assert!(value.get("userSubmitted").is_none());
	}

	#[test]
	fn from_submission_normalizes_fields() {
		let valid = ValidSubmission {
			author: "  Ada Lovelace  ".to_string(),
			text: "Programs must be seen to be believed and must be tried on the machine."
				.to_string(),
			category: "TECH".to_string(),
		};

		let quote = Quote::from_submission(valid);
		assert_eq!(quote.author, "Ada Lovelace");
		assert_eq!(quote.category, "tech");
		assert!(quote.user_submitted);
		assert!(quote.submitted_at.is_some());
		assert!(!quote.id.is_empty());
	}
}
