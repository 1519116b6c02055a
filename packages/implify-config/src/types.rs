use std::{collections::BTreeMap, path::PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: CatalogSource,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub guidance: Guidance,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogSource {
	/// JSON array of product records.
	pub path: PathBuf,
	/// Load the catalog before binding the listener instead of on the first request.
	#[serde(default)]
	pub preload: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	pub default_limit: u32,
	pub max_limit: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self { default_limit: 25, max_limit: 100 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Guidance {
	/// Subcategory label to the query fields a caller should supply for it.
	pub required_fields: BTreeMap<String, Vec<String>>,
}
impl Default for Guidance {
	fn default() -> Self {
		let required_fields = BTreeMap::from([
			("Abformpfosten".to_string(), vec!["abformung_type".to_string()]),
			("Abutment".to_string(), Vec::new()),
			("Gingivaformer".to_string(), vec!["diameter_mm".to_string()]),
		]);

		Self { required_fields }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
