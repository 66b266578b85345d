use std::sync::Arc;

use axum::{
	Router,
	body::Body,
	http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::util::ServiceExt;

use robo_api::{routes, state::AppState};
use robo_service::{BankerService, Providers};
use robo_testkit::{
	FailingExtractor, StaticExtractor, StaticScorer, StaticWriter, investor_score,
	sample_profile, seed_pool, test_config,
};

fn test_router(providers: Providers) -> Router {
	let service = BankerService::with_providers(test_config(), seed_pool(), providers);

	routes::router(AppState::with_service(service))
}

fn happy_providers() -> Providers {
	Providers::new(
		Arc::new(StaticExtractor::new(sample_profile())),
		Arc::new(StaticScorer::new(vec![
			investor_score("4", 95, "Fintech thesis."),
			investor_score("1", 72, "AI exposure."),
		])),
		Arc::new(StaticWriter::new("Quick intro", "Hello Rebecca.")),
	)
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).expect("request must build")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header(CONTENT_TYPE, "application/json")
		.body(Body::from(payload.to_string()))
		.expect("request must build")
}

fn post_empty(uri: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.body(Body::empty())
		.expect("request must build")
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("body must be readable");

	serde_json::from_slice(&bytes).expect("body must be JSON")
}

#[tokio::test]
async fn health_is_ok() {
	let router = test_router(happy_providers());
	let response = router.oneshot(get("/health")).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn sample_pitch_is_served() {
	let router = test_router(happy_providers());
	let response = router.oneshot(get("/v1/pitch/sample")).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);

	let json = body_json(response).await;

	assert!(json["text"].as_str().expect("text must be a string").contains("NexusAI"));
}

#[tokio::test]
async fn full_pipeline_over_http() {
	let router = test_router(happy_providers());

	let analyze = router
		.clone()
		.oneshot(post_json(
			"/v1/pitch/analyze",
			serde_json::json!({ "text": "A pitch deck with plenty of detail." }),
		))
		.await
		.expect("analyze request failed");

	assert_eq!(analyze.status(), StatusCode::OK);

	let analyze_json = body_json(analyze).await;

	assert_eq!(analyze_json["profile"]["companyName"], "NexusAI");

	let matched = router
		.clone()
		.oneshot(post_empty("/v1/investors/match"))
		.await
		.expect("match request failed");

	assert_eq!(matched.status(), StatusCode::OK);

	let matched_json = body_json(matched).await;
	let investors = matched_json["investors"].as_array().expect("investors must be an array");

	assert_eq!(investors.len(), 6);
	assert_eq!(investors[0]["id"], "4");
	assert_eq!(investors[0]["matchScore"], 95);
	assert_eq!(investors[1]["id"], "1");

	let listed = router.clone().oneshot(get("/v1/investors")).await.expect("list request failed");
	let listed_json = body_json(listed).await;

	assert_eq!(listed_json["investors"][0]["id"], "4");

	let overview =
		router.clone().oneshot(get("/v1/overview")).await.expect("overview request failed");
	let overview_json = body_json(overview).await;

	assert_eq!(overview_json["analyzed"], true);
	assert_eq!(overview_json["investors_matched"], 6);

	let draft = router
		.clone()
		.oneshot(post_json("/v1/outreach/draft", serde_json::json!({ "investor_id": "4" })))
		.await
		.expect("draft request failed");

	assert_eq!(draft.status(), StatusCode::OK);

	let draft_json = body_json(draft).await;

	assert_eq!(draft_json["draft"]["recipientId"], "4");
	assert_eq!(draft_json["draft"]["subject"], "Quick intro");

	let live = router
		.oneshot(get("/v1/outreach/draft"))
		.await
		.expect("current draft request failed");

	assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn matching_before_analysis_is_bad_request() {
	let router = test_router(happy_providers());
	let response = router
		.oneshot(post_empty("/v1/investors/match"))
		.await
		.expect("match request failed");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = body_json(response).await;

	assert_eq!(json["error_code"], "invalid_request");
}

#[tokio::test]
async fn extraction_failure_is_bad_gateway() {
	let providers = Providers::new(
		Arc::new(FailingExtractor::new("upstream 500")),
		Arc::new(StaticScorer::new(Vec::new())),
		Arc::new(StaticWriter::new("s", "b")),
	);
	let router = test_router(providers);
	let response = router
		.oneshot(post_json(
			"/v1/pitch/analyze",
			serde_json::json!({ "text": "A pitch deck with plenty of detail." }),
		))
		.await
		.expect("analyze request failed");

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

	let json = body_json(response).await;

	assert_eq!(json["error_code"], "extraction_failed");
}

#[tokio::test]
async fn missing_draft_is_not_found() {
	let router = test_router(happy_providers());
	let response =
		router.oneshot(get("/v1/outreach/draft")).await.expect("draft request failed");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
