//! Machine-readable description of the search API for tool discovery.

use axum::http::HeaderMap;
use serde_json::{Value, json};

const FORWARDED_HOST_HEADER: &str = "x-forwarded-host";

/// Builds the OpenAPI document. The server URL follows the host the request was addressed to.
pub fn document(headers: &HeaderMap) -> Value {
	let base = format!("https://{}", request_host(headers));

	json!({
		"openapi": "3.1.0",
		"info": {
			"title": "Implify Catalog API",
			"version": implify_cli::VERSION,
			"description": "Search implant components by category, subcategory, and parsed attributes.",
		},
		"servers": [{ "url": base }],
		"paths": {
			"/api/search": {
				"get": {
					"operationId": "searchProducts",
					"summary": "Search products",
					"parameters": parameters(),
					"responses": { "200": search_response() },
				},
				"post": {
					"operationId": "searchProductsBody",
					"summary": "Search products with a JSON body",
					"requestBody": {
						"content": {
							"application/json": {
								"schema": { "type": "object", "properties": body_properties() },
							},
						},
					},
					"responses": { "200": search_response() },
				},
			},
		},
	})
}

fn request_host(headers: &HeaderMap) -> &str {
	[FORWARDED_HOST_HEADER, "host"]
		.into_iter()
		.find_map(|name| {
			headers
				.get(name)
				.and_then(|value| value.to_str().ok())
				.filter(|host| !host.is_empty())
		})
		.unwrap_or("localhost")
}

fn parameter_specs() -> [(&'static str, &'static str, Option<&'static str>); 16] {
	[
		("q", "string", Some("Text search in Produktname")),
		("category", "string", Some("Produktkategorie")),
		("subcat", "string", Some("Untergruppe Produktkategorie")),
		("manufacturer", "string", Some("Hersteller; 'zimvie' and 'zimmer' are aliases")),
		("diameter_mm", "number", Some("Matched within 0.05")),
		("length_mm", "number", Some("Matched within 0.05")),
		("gingival_height_mm", "number", Some("Matched within 0.05")),
		("angle_deg", "number", Some("Matched within 0.05")),
		("retention_g", "number", Some("Matched within 0.05")),
		("pack_size", "number", Some("Exact match")),
		("collar", "string", Some("e.g. 'ohne Kragen' or 'mit X mm Kragen'")),
		("abformung_type", "string", Some("Geschlossene/Offene Abformung")),
		("rotation_protection", "string", None),
		("variant", "string", None),
		("type", "string", None),
		("limit", "integer", None),
	]
}

fn parameters() -> Vec<Value> {
	parameter_specs()
		.into_iter()
		.map(|(name, kind, description)| {
			let mut parameter = json!({ "name": name, "in": "query", "schema": schema(name, kind) });

			if let Some(description) = description {
				parameter["description"] = json!(description);
			}

			parameter
		})
		.collect()
}

fn body_properties() -> Value {
	parameter_specs()
		.into_iter()
		.map(|(name, kind, _)| (name.to_string(), schema(name, kind)))
		.collect::<serde_json::Map<_, _>>()
		.into()
}

fn schema(name: &str, kind: &str) -> Value {
	if name == "limit" { json!({ "type": kind, "default": 25 }) } else { json!({ "type": kind }) }
}

fn search_response() -> Value {
	let number_table = json!({
		"type": "object",
		"additionalProperties": { "type": "array", "items": { "type": "number" } },
	});

	json!({
		"description": "Results, alternatives, relaxation, and guidance",
		"content": {
			"application/json": {
				"schema": {
					"type": "object",
					"properties": {
						"results": { "type": "array", "items": { "type": "object" } },
						"alternatives": {
							"type": "object",
							"properties": {
								"conditioned_on_diameter": number_table,
								"conditioned_on_gingival_height": number_table,
							},
						},
						"relaxed_by": { "type": "array", "items": { "type": "string" } },
						"missing_fields": { "type": "array", "items": { "type": "string" } },
					},
				},
			},
		},
	})
}
