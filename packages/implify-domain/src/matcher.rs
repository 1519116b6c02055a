use crate::{
	Product,
	normalize::{approx_eq, contains_ignore_case, eq_ignore_case, exact_eq},
	query::{QueryField, SearchQuery},
};

const ZIMMER_ALIASES: &[&str] = &["zimvie", "zimmer"];

/// True when the product satisfies every active field of the query.
pub fn matches(product: &Product, query: &SearchQuery) -> bool {
	query.active().all(|(field, value)| field_matches(product, field, value))
}

/// Applies the rule for a single field. Shared by the matcher and the scorer.
pub fn field_matches(product: &Product, field: QueryField, value: &str) -> bool {
	match field {
		QueryField::Manufacturer => manufacturer_matches(product, value),
		QueryField::Category => eq_ignore_case(product.category(), value),
		QueryField::Subcat => eq_ignore_case(product.subcategory(), value),
		QueryField::Q => contains_ignore_case(product.name(), value),
		QueryField::DiameterMm
		| QueryField::LengthMm
		| QueryField::GingivalHeightMm
		| QueryField::AngleDeg
		| QueryField::RetentionG => approx_eq(product.attribute_number(field.as_str()), value),
		QueryField::PackSize => exact_eq(product.attribute_number(field.as_str()), value),
		QueryField::Collar | QueryField::RotationProtection | QueryField::AbformungType =>
			eq_ignore_case(product.attribute_text(field.as_str()).as_deref(), value),
		QueryField::Variant | QueryField::Type =>
			contains_ignore_case(product.attribute_text(field.as_str()).as_deref(), value),
	}
}

// Zimmer Biomet products are listed under either brand name, so both tokens match both.
fn manufacturer_matches(product: &Product, value: &str) -> bool {
	let wanted = value.to_lowercase();
	let brand = product.manufacturer().unwrap_or_default().to_lowercase();
	let name = product.name().unwrap_or_default().to_lowercase();

	if ZIMMER_ALIASES.contains(&wanted.as_str()) {
		let is_zimmer = |text: &str| ZIMMER_ALIASES.iter().any(|alias| text.contains(*alias));

		return is_zimmer(&brand) || is_zimmer(&name);
	}

	brand.contains(&wanted) || name.contains(&wanted)
}
