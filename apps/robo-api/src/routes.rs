use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use robo_domain::seed;
use robo_service::{
	AnalyzeRequest, AnalyzeResponse, DraftRequest, DraftResponse, Error as ServiceError,
	ListResponse, MatchResponse, OverviewResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/overview", get(overview))
		.route("/v1/pitch/sample", get(sample_pitch))
		.route("/v1/pitch/analyze", post(analyze))
		.route("/v1/investors", get(list_investors))
		.route("/v1/investors/match", post(match_investors))
		.route("/v1/outreach/draft", get(current_draft).post(draft_outreach))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn overview(State(state): State<AppState>) -> Json<OverviewResponse> {
	Json(state.service.overview().await)
}

#[derive(Debug, Serialize)]
struct SamplePitch {
	text: &'static str,
}

async fn sample_pitch() -> Json<SamplePitch> {
	Json(SamplePitch { text: seed::SAMPLE_PITCH })
}

async fn analyze(
	State(state): State<AppState>,
	Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
	let response = state.service.analyze(payload).await?;

	Ok(Json(response))
}

async fn list_investors(State(state): State<AppState>) -> Json<ListResponse> {
	Json(state.service.list_investors().await)
}

async fn match_investors(State(state): State<AppState>) -> Result<Json<MatchResponse>, ApiError> {
	let response = state.service.match_investors().await?;

	Ok(Json(response))
}

async fn current_draft(State(state): State<AppState>) -> Result<Json<DraftResponse>, ApiError> {
	match state.service.current_draft().await {
		Some(draft) => Ok(Json(DraftResponse { draft })),
		None => Err(ApiError::new(
			StatusCode::NOT_FOUND,
			"not_found",
			"No outreach draft has been generated yet.",
		)),
	}
}

async fn draft_outreach(
	State(state): State<AppState>,
	Json(payload): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, ApiError> {
	let response = state.service.draft_outreach(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let message = err.to_string();

		match err {
			ServiceError::InvalidRequest { .. } => {
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message)
			},
			ServiceError::NotFound { .. } => {
				Self::new(StatusCode::NOT_FOUND, "not_found", message)
			},
			ServiceError::Conflict { .. } => Self::new(StatusCode::CONFLICT, "conflict", message),
			ServiceError::Extraction { .. } => {
				Self::new(StatusCode::BAD_GATEWAY, "extraction_failed", message)
			},
			ServiceError::Scoring { .. } => {
				Self::new(StatusCode::BAD_GATEWAY, "scoring_failed", message)
			},
			ServiceError::Generation { .. } => {
				Self::new(StatusCode::BAD_GATEWAY, "generation_failed", message)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
