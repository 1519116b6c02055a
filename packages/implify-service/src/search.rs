use serde::{Serialize, Serializer, ser::SerializeMap};

use implify_catalog::Catalog;
use implify_domain::{Product, SearchQuery, matcher, normalize, scorer};

const MATCH_SCORE_KEY: &str = "_match_score";

/// A matching product annotated with its relevance score.
///
/// Serializes as the product record with `_match_score` set, replacing any score the record
/// already carries.
#[derive(Debug, Clone)]
pub struct SearchHit {
	pub product: Product,
	pub match_score: u32,
}
impl Serialize for SearchHit {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let record = self.product.record();
		let mut map = serializer.serialize_map(None)?;

		for (key, value) in record.iter().filter(|(key, _)| key.as_str() != MATCH_SCORE_KEY) {
			map.serialize_entry(key, value)?;
		}

		map.serialize_entry(MATCH_SCORE_KEY, &self.match_score)?;
		map.end()
	}
}

/// Result-count bounds applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct LimitPolicy {
	pub default_limit: usize,
	pub max_limit: usize,
}
impl LimitPolicy {
	/// Missing, unparseable, and non-positive limits fall back to the default. Fractions are
	/// truncated and oversized limits are clamped to the maximum.
	pub fn resolve(&self, raw: Option<&str>) -> usize {
		match raw.and_then(normalize::parse_number) {
			Some(limit) if limit >= 1.0 => (limit.trunc() as usize).min(self.max_limit),
			_ => self.default_limit,
		}
	}
}

/// Filters the catalog with the strict query, ranks by score and keeps the top `limit` hits.
///
/// The sort is stable, so equal scores stay in catalog order.
pub fn filter_rank(catalog: &Catalog, query: &SearchQuery, limit: usize) -> Vec<SearchHit> {
	let mut scored: Vec<(&Product, u32)> = catalog
		.products()
		.iter()
		.filter(|product| matcher::matches(product, query))
		.map(|product| (product, scorer::score(product, query)))
		.collect();

	scored.sort_by(|a, b| b.1.cmp(&a.1));
	scored.truncate(limit);

	scored
		.into_iter()
		.map(|(product, match_score)| SearchHit { product: product.clone(), match_score })
		.collect()
}
