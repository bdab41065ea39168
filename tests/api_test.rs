//! Tests for REST API endpoints
//!
//! In-process tests driving the router directly with `oneshot`.

use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use serde_json::Value;
use tower::ServiceExt;

use dev_quotes::storage::MemoryStore;
use dev_quotes::QuotesBuilder;

async fn test_router() -> Router {
	let (router, _state) = QuotesBuilder::with_storage(MemoryStore::seeded())
		.start()
		.await
		.expect("failed to build test router");
	router
}

async fn empty_router() -> Router {
	let (router, _state) = QuotesBuilder::with_storage(MemoryStore::new())
		.start()
		.await
		.expect("failed to build test router");
	router
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_quotes_returns_quotes_and_pagination() {
	let app = test_router().await;

	let response = app
		.oneshot(Request::builder().uri("/quotes").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert!(body["quotes"].is_array());
	assert_eq!(body["quotes"].as_array().unwrap().len(), 20);
	assert_eq!(body["pagination"]["currentPage"], 1);
	assert_eq!(body["pagination"]["totalQuotes"], 20);
	assert_eq!(body["pagination"]["hasNext"], false);
	assert_eq!(body["pagination"]["hasPrev"], false);
}

#[tokio::test]
async fn get_quotes_respects_page_and_limit() {
	let app = test_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.uri("/quotes?page=2&limit=5")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	let quotes = body["quotes"].as_array().unwrap();
	assert_eq!(quotes.len(), 5);
	// Insertion order is preserved, so page 2 starts at the sixth seed quote.
	assert_eq!(quotes[0]["id"], "6");
	assert_eq!(body["pagination"]["totalPages"], 4);
	assert_eq!(body["pagination"]["hasNext"], true);
	assert_eq!(body["pagination"]["hasPrev"], true);
}

#[tokio::test]
async fn get_quotes_tolerates_non_numeric_pagination() {
	let app = test_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.uri("/quotes?page=abc&limit=bogus")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["pagination"]["currentPage"], 1);
	assert_eq!(body["quotes"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn get_random_quote_404_on_empty_collection() {
	let app = empty_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.uri("/quotes/random")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert_eq!(body["error"], "No quotes available");
}

#[tokio::test]
async fn get_unknown_category_404_with_available_categories() {
	let app = test_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.uri("/quotes/category/unknown-category")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert!(body["error"]
		.as_str()
		.unwrap()
		.contains("No quotes found for category: unknown-category"));
	let available: Vec<&str> = body["availableCategories"]
		.as_array()
		.unwrap()
		.iter()
		.map(|v| v.as_str().unwrap())
		.collect();
	assert_eq!(
		available,
		vec!["debugging", "funny", "inspiration", "productivity", "tech"]
	);
}

#[tokio::test]
async fn post_invalid_quote_returns_all_validation_details() {
	let app = test_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/quotes")
				.header("content-type", "application/json")
				.body(Body::from(
					r#"{"author": "A", "text": "short", "category": "bogus"}"#,
				))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = body_json(response).await;
	assert_eq!(body["error"], "Validation failed");
	assert!(body["details"].as_array().unwrap().len() >= 3);
	assert_eq!(body["validCategories"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn post_valid_quote_returns_201_with_message() {
	let app = test_router().await;

	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/quotes")
				.header("content-type", "application/json")
				.body(Body::from(
					r#"{"author": "Test Author", "text": "This is a test quote for our API testing.", "category": "tech"}"#,
				))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::CREATED);

	let body = body_json(response).await;
	assert!(body["message"].as_str().unwrap().contains("successfully added"));
	assert_eq!(body["quote"]["userSubmitted"], true);
	assert!(body["quote"]["submittedAt"].is_string());
}

#[tokio::test]
async fn root_document_describes_the_api() {
	let app = test_router().await;

	let response = app
		.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert!(body["message"].as_str().unwrap().contains("Dev Quotes API"));
	let endpoints = body["documentation"]["endpoints"].as_object().unwrap();
	for endpoint in [
		"GET /quotes",
		"GET /quotes/random",
		"GET /quotes/category/{category}",
		"POST /quotes",
		"GET /quotes/stats",
	] {
		assert!(endpoints.contains_key(endpoint), "missing {}", endpoint);
	}
	assert_eq!(body["documentation"]["categories"].as_array().unwrap().len(), 5);
}
