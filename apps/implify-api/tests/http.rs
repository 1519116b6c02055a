use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
};

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use implify_api::{routes, state::AppState};
use implify_catalog::Catalog;
use implify_config::Config;

const CATALOG_JSON: &str = r#"[
	{
		"Produktkategorie": "Gingivaformer",
		"Untergruppe Produktkategorie": "Gingivaformer",
		"Produktname": "Gingivaformer Tapered 4.1 x 3",
		"Hersteller": "Zimmer Biomet",
		"attributes": { "diameter_mm": 4.12, "gingival_height_mm": 3 }
	},
	{
		"Produktkategorie": "Abformung",
		"Untergruppe Produktkategorie": "Abformpfosten",
		"Produktname": "Abformpfosten offen 4.1",
		"Hersteller": "ZimVie",
		"attributes": { "diameter_mm": 4.1, "gingival_height_mm": 3, "abformung_type": "Offene Abformung" }
	}
]"#;

fn test_config(catalog_path: &str) -> Config {
	let payload = format!(
		r#"
[service]
http_bind = "127.0.0.1:0"
log_level = "info"

[catalog]
path = "{catalog_path}"
"#
	);

	toml::from_str(&payload).expect("Failed to parse test config.")
}

fn write_temp_catalog(payload: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("implify_http_test_{pid}_{ordinal}.json"));

	fs::write(&path, payload).expect("Failed to write test catalog.");

	path
}

fn app() -> Router {
	let catalog = Catalog::from_slice(CATALOG_JSON.as_bytes()).expect("Failed to parse catalog.");

	routes::router(AppState::with_catalog(test_config("unused.json"), catalog))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
	let response = app.oneshot(request).await.expect("Failed to call router.");
	let status = response.status();
	let bytes =
		body::to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response must be JSON.")
	};

	(status, json)
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request.")
}

fn post(uri: &str, body: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("Failed to build request.")
}

#[tokio::test]
async fn health_ok() {
	let (status, _) = send(app(), get("/health")).await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn get_search_scores_tolerant_match() {
	let (status, body) =
		send(app(), get("/api/search?category=Gingivaformer&diameter_mm=4.1")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
	assert_eq!(body["results"][0]["_match_score"], 3);
	assert_eq!(body["results"][0]["Produktname"], "Gingivaformer Tapered 4.1 x 3");
	assert_eq!(body["relaxed_by"], serde_json::json!([]));
}

#[tokio::test]
async fn get_and_post_agree() {
	let (_, from_query) =
		send(app(), get("/api/search?subcat=Abformpfosten&gingival_height_mm=9.9")).await;
	let (status, from_body) = send(
		app(),
		post("/api/search", r#"{ "subcat": "Abformpfosten", "gingival_height_mm": 9.9 }"#),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(from_query, from_body);
	assert_eq!(from_body["relaxed_by"], serde_json::json!(["gingival_height_mm"]));
	assert_eq!(from_body["missing_fields"], serde_json::json!(["abformung_type"]));
}

#[tokio::test]
async fn empty_post_body_returns_whole_catalog() {
	let (status, body) = send(app(), post("/api/search", "")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["results"].as_array().map(Vec::len), Some(2));
	assert_eq!(body["alternatives"]["conditioned_on_gingival_height"]["3"], serde_json::json!([
		4.1, 4.12
	]));
}

#[tokio::test]
async fn non_object_body_is_rejected() {
	let (status, body) = send(app(), post("/api/search", "[1, 2]")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], "invalid_request");
}

#[tokio::test]
async fn nested_filter_value_is_rejected() {
	let (status, body) = send(app(), post("/api/search", r#"{ "collar": { "eq": "x" } }"#)).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], "invalid_request");
}

#[tokio::test]
async fn missing_catalog_is_a_server_error() {
	let mut path = env::temp_dir();

	path.push("implify_http_test_missing_catalog.json");

	let state = AppState::new(test_config(&path.display().to_string()));
	let (status, body) = send(routes::router(state), get("/api/search")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(body["error_code"], "catalog_unavailable");
}

#[tokio::test]
async fn catalog_is_loaded_lazily_and_cached() {
	let path = write_temp_catalog(CATALOG_JSON);
	let state = AppState::new(test_config(&path.display().to_string()));
	let (first_status, first) = send(routes::router(state.clone()), get("/api/search")).await;

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	let (second_status, second) = send(routes::router(state), get("/api/search")).await;

	assert_eq!(first_status, StatusCode::OK);
	assert_eq!(second_status, StatusCode::OK);
	assert_eq!(first, second);
	assert_eq!(first["results"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn failed_catalog_load_is_retried() {
	let mut path = env::temp_dir();

	path.push(format!("implify_http_test_{}_retry.json", std::process::id()));

	let _ = fs::remove_file(&path);
	let state = AppState::new(test_config(&path.display().to_string()));
	let (first_status, first) = send(routes::router(state.clone()), get("/api/search")).await;

	fs::write(&path, CATALOG_JSON).expect("Failed to write test catalog.");

	let (second_status, second) = send(routes::router(state), get("/api/search")).await;

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	assert_eq!(first_status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(first["error_code"], "catalog_unavailable");
	assert_eq!(second_status, StatusCode::OK);
	assert_eq!(second["results"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn openapi_uses_request_host() {
	let request = Request::builder()
		.uri("/api/openapi")
		.header(header::HOST, "catalog.example.com")
		.body(Body::empty())
		.expect("Failed to build request.");
	let (status, body) = send(app(), request).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["openapi"], "3.1.0");
	assert_eq!(body["servers"][0]["url"], "https://catalog.example.com");
}
