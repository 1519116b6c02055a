use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::normalize;

const CATEGORY_KEYS: &[&str] = &["Produktkategorie", "category"];
const SUBCATEGORY_KEYS: &[&str] = &["Untergruppe Produktkategorie", "subcategory"];
const NAME_KEYS: &[&str] = &["Produktname", "name"];
const MANUFACTURER_KEYS: &[&str] = &["Hersteller", "Hersteller-name", "manufacturer", "brand"];
const ATTRIBUTES_KEY: &str = "attributes";

/// One catalog record.
///
/// The labels used for matching are extracted once when the record is read. The record itself
/// is kept verbatim so responses echo every original field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Product {
	category: Option<String>,
	subcategory: Option<String>,
	name: Option<String>,
	manufacturer: Option<String>,
	record: Map<String, Value>,
}
impl Product {
	pub fn category(&self) -> Option<&str> {
		self.category.as_deref()
	}

	pub fn subcategory(&self) -> Option<&str> {
		self.subcategory.as_deref()
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn manufacturer(&self) -> Option<&str> {
		self.manufacturer.as_deref()
	}

	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.record.get(ATTRIBUTES_KEY)?.as_object()?.get(key)
	}

	pub fn attribute_number(&self, key: &str) -> Option<f64> {
		self.attribute(key).and_then(normalize::value_number)
	}

	pub fn attribute_text(&self, key: &str) -> Option<String> {
		self.attribute(key).and_then(normalize::value_text)
	}

	pub fn record(&self) -> &Map<String, Value> {
		&self.record
	}
}
impl From<Map<String, Value>> for Product {
	fn from(record: Map<String, Value>) -> Self {
		Self {
			category: first_text(&record, CATEGORY_KEYS),
			subcategory: first_text(&record, SUBCATEGORY_KEYS),
			name: first_text(&record, NAME_KEYS),
			manufacturer: first_text(&record, MANUFACTURER_KEYS),
			record,
		}
	}
}
impl Serialize for Product {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.record.serialize(serializer)
	}
}

// First non-empty label wins, so an empty `Hersteller` falls through to `Hersteller-name`.
fn first_text(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
	keys.iter()
		.filter_map(|key| record.get(*key).and_then(normalize::value_text))
		.find(|text| !text.is_empty())
}
