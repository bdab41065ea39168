use serde::{Deserialize, Deserializer};

/// Pagination query parameters for `GET /quotes`.
///
/// Parsing is deliberately permissive: a non-numeric or negative value
/// behaves like an absent one, so the service falls back to its
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
	#[serde(default, deserialize_with = "lenient_u32")]
	pub page: Option<u32>,
	#[serde(default, deserialize_with = "lenient_u32")]
	pub limit: Option<u32>,
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw: Option<String> = Option::deserialize(deserializer)?;
	Ok(raw.and_then(|s| s.parse().ok()))
}
