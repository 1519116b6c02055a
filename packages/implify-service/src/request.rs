use serde_json::{Map, Value};

use implify_domain::{QueryField, SearchQuery, query::SUBCATEGORY_FALLBACK_KEY};

use crate::{Error, Result};

const LIMIT_KEY: &str = "limit";

/// A search request after flattening the query string or JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
	pub query: SearchQuery,
	/// Unparsed `limit`; resolved against the service's limit policy.
	pub limit: Option<String>,
}
impl SearchRequest {
	pub fn new(query: SearchQuery) -> Self {
		Self { query, limit: None }
	}

	pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
		self.limit = Some(limit.into());

		self
	}

	/// Builds a request from key-value pairs. Later duplicates win.
	pub fn from_pairs<'a, I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut limit = None;
		let query = SearchQuery::from_params(pairs.into_iter().filter(|(key, value)| {
			if *key == LIMIT_KEY {
				limit = Some(value.to_string());

				return false;
			}

			true
		}));

		Self { query, limit }
	}

	/// Builds a request from a JSON object body.
	///
	/// Scalars are rendered as text and `null` counts as absent. Recognized keys holding arrays
	/// or objects are rejected; unknown keys are ignored whatever their type.
	pub fn from_json(body: &Map<String, Value>) -> Result<Self> {
		let mut pairs = Vec::with_capacity(body.len());

		for (key, value) in body {
			if !is_recognized(key) {
				continue;
			}

			let text = match value {
				Value::Null => continue,
				Value::String(text) => text.clone(),
				Value::Number(number) => number.to_string(),
				Value::Bool(flag) => flag.to_string(),
				Value::Array(_) | Value::Object(_) => {
					return Err(Error::InvalidRequest {
						message: format!("{key} must be a string, number, or boolean."),
					});
				},
			};

			pairs.push((key.as_str(), text));
		}

		Ok(Self::from_pairs(pairs.iter().map(|(key, text)| (*key, text.as_str()))))
	}
}

fn is_recognized(key: &str) -> bool {
	key == LIMIT_KEY || key == SUBCATEGORY_FALLBACK_KEY || QueryField::parse(key).is_some()
}
