use implify_catalog::Catalog;
use implify_domain::{QueryField, SearchQuery};

use crate::search::{SearchHit, filter_rank};

/// Fields cleared, one at a time, when the strict query finds nothing. Least essential first.
///
/// Category, subcategory and manufacturer are never relaxed.
pub const RELAXATION_ORDER: [QueryField; 9] = [
	QueryField::GingivalHeightMm,
	QueryField::DiameterMm,
	QueryField::LengthMm,
	QueryField::Collar,
	QueryField::AbformungType,
	QueryField::RotationProtection,
	QueryField::Variant,
	QueryField::Type,
	QueryField::Q,
];

#[derive(Debug, Clone)]
pub struct Relaxation {
	pub field: QueryField,
	pub hits: Vec<SearchHit>,
}

/// Retries the query with a single active field cleared, in [`RELAXATION_ORDER`].
///
/// Returns the first attempt that finds anything. Fields are never cleared cumulatively.
pub fn relax(catalog: &Catalog, query: &SearchQuery, limit: usize) -> Option<Relaxation> {
	RELAXATION_ORDER.into_iter().filter(|field| query.is_active(*field)).find_map(|field| {
		let hits = filter_rank(catalog, &query.without(field), limit);

		tracing::debug!(field = %field, hits = hits.len(), "Relaxation attempt.");

		(!hits.is_empty()).then_some(Relaxation { field, hits })
	})
}
