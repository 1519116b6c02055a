use axum::{
	Json, Router,
	body::Bytes,
	extract::{Query, State},
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;
use serde_json::{Map, Value};

use implify_service::{Error as ServiceError, SearchRequest, SearchResponse};

use crate::{openapi, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/search", get(search_query).post(search_body))
		.route("/api/openapi", get(openapi_document))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_query(
	State(state): State<AppState>,
	Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
	let request =
		SearchRequest::from_pairs(params.iter().map(|(key, value)| (key.as_str(), value.as_str())));

	search(&state, request).await
}

async fn search_body(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
	let request = SearchRequest::from_json(&parse_body(&body)?)?;

	search(&state, request).await
}

async fn openapi_document(headers: HeaderMap) -> Json<Value> {
	Json(openapi::document(&headers))
}

async fn search(state: &AppState, request: SearchRequest) -> Result<Json<SearchResponse>, ApiError> {
	let service = state.service().await?;

	Ok(Json(service.search(&request)))
}

// An empty body is an empty query.
fn parse_body(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(Map::new());
	}

	match serde_json::from_slice::<Value>(body) {
		Ok(Value::Object(map)) => Ok(map),
		Ok(_) => Err(json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			"Request body must be a JSON object.",
			None,
		)),
		Err(err) => Err(json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			format!("Request body is not valid JSON: {err}"),
			None,
		)),
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "invalid_request", message, None),
			ServiceError::CatalogUnavailable { message } => json_error(
				StatusCode::INTERNAL_SERVER_ERROR,
				"catalog_unavailable",
				message,
				None,
			),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}
