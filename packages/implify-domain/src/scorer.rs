use crate::{
	Product,
	matcher::field_matches,
	query::{QueryField, SearchQuery},
};

/// Per-field relevance weights. Fields not listed never contribute.
pub const WEIGHTS: [(QueryField, u32); 9] = [
	(QueryField::Category, 1),
	(QueryField::Subcat, 2),
	(QueryField::DiameterMm, 2),
	(QueryField::GingivalHeightMm, 2),
	(QueryField::LengthMm, 1),
	(QueryField::Collar, 1),
	(QueryField::AbformungType, 1),
	(QueryField::Variant, 1),
	(QueryField::Q, 1),
];

pub fn score(product: &Product, query: &SearchQuery) -> u32 {
	WEIGHTS
		.iter()
		.filter(|(field, _)| {
			query.get(*field).is_some_and(|value| field_matches(product, *field, value))
		})
		.map(|(_, weight)| weight)
		.sum()
}
