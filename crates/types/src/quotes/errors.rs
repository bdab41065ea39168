//! Error types for quote validation

use thiserror::Error;

/// Aggregated validation failures for a quote submission.
///
/// Carries every violated constraint, not just the first, plus the
/// full list of valid categories so a caller can fix all issues in
/// one round trip.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("quote validation failed: {}", details.join("; "))]
pub struct QuoteValidationErrors {
	pub details: Vec<String>,
	pub valid_categories: Vec<String>,
}

impl QuoteValidationErrors {
	pub fn new(details: Vec<String>) -> Self {
		Self {
			details,
			valid_categories: crate::quotes::valid_categories(),
		}
	}
}
