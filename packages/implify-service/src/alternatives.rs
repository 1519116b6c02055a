use serde::{Serialize, Serializer};

use implify_catalog::Catalog;
use implify_domain::{QueryField, SearchQuery, matcher, normalize};

/// Diameter and gingival-height combinations available within the query's scope.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Alternatives {
	pub conditioned_on_diameter: AlternativeTable,
	pub conditioned_on_gingival_height: AlternativeTable,
}

/// Rows of `key -> co-occurring values`. Keys and values are ascending and distinct.
///
/// Serialized as a JSON object whose keys are the rendered numbers, in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlternativeTable {
	rows: Vec<(f64, Vec<f64>)>,
}
impl AlternativeTable {
	fn from_pairs(pairs: impl Iterator<Item = (f64, Option<f64>)>) -> Self {
		let mut pairs: Vec<_> = pairs.collect();

		pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

		let mut rows: Vec<(f64, Vec<f64>)> = Vec::new();

		for (key, value) in pairs {
			match rows.last_mut() {
				Some((last, values)) if *last == key => values.extend(value),
				_ => rows.push((key, value.into_iter().collect())),
			}
		}
		for (_, values) in &mut rows {
			values.sort_by(f64::total_cmp);
			values.dedup();
		}

		Self { rows }
	}

	pub fn get(&self, key: f64) -> Option<&[f64]> {
		self.rows.iter().find(|(row_key, _)| *row_key == key).map(|(_, values)| values.as_slice())
	}

	pub fn keys(&self) -> impl Iterator<Item = f64> {
		self.rows.iter().map(|(key, _)| *key)
	}

	pub fn rows(&self) -> &[(f64, Vec<f64>)] {
		&self.rows
	}
}
impl Serialize for AlternativeTable {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer
			.collect_map(self.rows.iter().map(|(key, values)| (normalize::format_number(*key), values)))
	}
}

/// Cross-tabulates diameter and gingival height over the products sharing the query's category,
/// subcategory and manufacturer. Every other filter is ignored, so values hidden by a narrow
/// query still show up.
pub fn alternatives(catalog: &Catalog, query: &SearchQuery) -> Alternatives {
	let scope = query.scope();
	let dimensions: Vec<(Option<f64>, Option<f64>)> = catalog
		.products()
		.iter()
		.filter(|product| matcher::matches(product, &scope))
		.map(|product| {
			(
				product.attribute_number(QueryField::DiameterMm.as_str()),
				product.attribute_number(QueryField::GingivalHeightMm.as_str()),
			)
		})
		.collect();

	Alternatives {
		conditioned_on_diameter: AlternativeTable::from_pairs(
			dimensions.iter().filter_map(|(diameter, height)| diameter.map(|d| (d, *height))),
		),
		conditioned_on_gingival_height: AlternativeTable::from_pairs(
			dimensions.iter().filter_map(|(diameter, height)| height.map(|h| (h, *diameter))),
		),
	}
}
