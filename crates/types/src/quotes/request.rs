//! Quote submission payload and validation gate

use serde::{Deserialize, Serialize};

use crate::quotes::errors::QuoteValidationErrors;
use crate::quotes::VALID_CATEGORIES;

pub const AUTHOR_MIN_LEN: usize = 2;
pub const AUTHOR_MAX_LEN: usize = 100;
pub const TEXT_MIN_LEN: usize = 10;
pub const TEXT_MAX_LEN: usize = 500;

/// Raw quote submission as received over the wire.
///
/// All fields are optional at the serde level so that missing fields
/// surface as validation messages alongside the length and category
/// checks instead of failing deserialization one field at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QuoteSubmission {
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub text: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
}

/// A submission that has passed the validation gate.
///
/// Fields hold the original, untrimmed values; normalization happens
/// when the quote is built, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
	pub author: String,
	pub text: String,
	pub category: String,
}

impl QuoteSubmission {
	/// Check the submission against the field constraints, collecting
	/// every violation.
	///
	/// Lengths are measured on the trimmed value; the category check is
	/// case-insensitive against the canonical lower-case set.
	pub fn validate(&self) -> Result<ValidSubmission, QuoteValidationErrors> {
		let mut details = Vec::new();

		match &self.author {
			None => details.push("Author is required".to_string()),
			Some(author) => {
				let len = author.trim().chars().count();
				if len < AUTHOR_MIN_LEN {
					details.push(format!(
						"Author name must be at least {} characters long",
						AUTHOR_MIN_LEN
					));
				} else if len > AUTHOR_MAX_LEN {
					details.push(format!(
						"Author name cannot exceed {} characters",
						AUTHOR_MAX_LEN
					));
				}
			},
		}

		match &self.text {
			None => details.push("Quote text is required".to_string()),
			Some(text) => {
				let len = text.trim().chars().count();
				if len < TEXT_MIN_LEN {
					details.push(format!(
						"Quote text must be at least {} characters long",
						TEXT_MIN_LEN
					));
				} else if len > TEXT_MAX_LEN {
					details.push(format!("Quote text cannot exceed {} characters", TEXT_MAX_LEN));
				}
			},
		}

		match &self.category {
			None => details.push("Category is required".to_string()),
			Some(category) => {
				let lowered = category.to_lowercase();
				if !VALID_CATEGORIES.contains(&lowered.as_str()) {
					details.push(format!(
						"Category must be one of: {}",
						VALID_CATEGORIES.join(", ")
					));
				}
			},
		}

		if !details.is_empty() {
			return Err(QuoteValidationErrors::new(details));
		}

		// Presence was checked above; pass the payload through unchanged.
		Ok(ValidSubmission {
			author: self.author.clone().unwrap_or_default(),
			text: self.text.clone().unwrap_or_default(),
			category: self.category.clone().unwrap_or_default(),
		})
	}
}
