//! Request fixtures shared across the API tests

use serde_json::{json, Value};

/// A submission that passes every validation rule
#[allow(dead_code)]
pub fn valid_submission() -> Value {
	json!({
		"author": "  Ada Lovelace  ",
		"text": "Programs must be seen to be believed and must be tried on the machine.",
		"category": "TECH"
	})
}

/// A submission that violates the author, text, and category rules at once
#[allow(dead_code)]
pub fn invalid_submission() -> Value {
	json!({
		"author": "A",
		"text": "short",
		"category": "bogus"
	})
}
