use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Raw parameter name accepted in place of `subcat`.
pub const SUBCATEGORY_FALLBACK_KEY: &str = "Untergruppe Produktkategorie";

/// Every filter a caller can supply, in request-schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
	Q,
	Category,
	Subcat,
	Manufacturer,
	DiameterMm,
	LengthMm,
	GingivalHeightMm,
	AngleDeg,
	RetentionG,
	PackSize,
	Collar,
	RotationProtection,
	AbformungType,
	Variant,
	Type,
}
impl QueryField {
	pub const ALL: [Self; 15] = [
		Self::Q,
		Self::Category,
		Self::Subcat,
		Self::Manufacturer,
		Self::DiameterMm,
		Self::LengthMm,
		Self::GingivalHeightMm,
		Self::AngleDeg,
		Self::RetentionG,
		Self::PackSize,
		Self::Collar,
		Self::RotationProtection,
		Self::AbformungType,
		Self::Variant,
		Self::Type,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Q => "q",
			Self::Category => "category",
			Self::Subcat => "subcat",
			Self::Manufacturer => "manufacturer",
			Self::DiameterMm => "diameter_mm",
			Self::LengthMm => "length_mm",
			Self::GingivalHeightMm => "gingival_height_mm",
			Self::AngleDeg => "angle_deg",
			Self::RetentionG => "retention_g",
			Self::PackSize => "pack_size",
			Self::Collar => "collar",
			Self::RotationProtection => "rotation_protection",
			Self::AbformungType => "abformung_type",
			Self::Variant => "variant",
			Self::Type => "type",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|field| field.as_str() == raw)
	}

	/// Fields that narrow the candidate pool rather than describe the product itself.
	pub fn is_scope(self) -> bool {
		matches!(self, Self::Category | Self::Subcat | Self::Manufacturer)
	}

	fn index(self) -> usize {
		self as usize
	}
}
impl Display for QueryField {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
impl Serialize for QueryField {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

/// A normalized search query.
///
/// Each field is either supplied or absent. An empty string is stored as absent; every other
/// value, including `"0"`, is an active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
	values: [Option<String>; QueryField::ALL.len()],
}
impl SearchQuery {
	/// Builds a query from flat request parameters. Unknown keys are ignored.
	///
	/// `subcat` takes precedence over [`SUBCATEGORY_FALLBACK_KEY`] whenever it is present, even
	/// when empty.
	pub fn from_params<'a, I>(params: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut query = Self::default();
		let mut subcat = None;
		let mut subcat_fallback = None;

		for (key, value) in params {
			if key == SUBCATEGORY_FALLBACK_KEY {
				subcat_fallback = Some(value);

				continue;
			}

			match QueryField::parse(key) {
				Some(QueryField::Subcat) => subcat = Some(value),
				Some(field) => query.set(field, value),
				None => {},
			}
		}

		if let Some(value) = subcat.or(subcat_fallback) {
			query.set(QueryField::Subcat, value);
		}

		query
	}

	pub fn with(mut self, field: QueryField, value: impl Into<String>) -> Self {
		self.set(field, value);

		self
	}

	pub fn get(&self, field: QueryField) -> Option<&str> {
		self.values[field.index()].as_deref()
	}

	pub fn is_active(&self, field: QueryField) -> bool {
		self.values[field.index()].is_some()
	}

	pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
		let value = value.into();

		self.values[field.index()] = if value.is_empty() { None } else { Some(value) };
	}

	pub fn clear(&mut self, field: QueryField) {
		self.values[field.index()] = None;
	}

	/// Returns a copy with exactly `field` cleared.
	pub fn without(&self, field: QueryField) -> Self {
		let mut query = self.clone();

		query.clear(field);

		query
	}

	/// Returns a copy that keeps only category, subcategory and manufacturer.
	pub fn scope(&self) -> Self {
		let mut query = Self::default();

		for field in QueryField::ALL.into_iter().filter(|field| field.is_scope()) {
			query.values[field.index()] = self.values[field.index()].clone();
		}

		query
	}

	/// Active fields paired with their values, in [`QueryField::ALL`] order.
	pub fn active(&self) -> impl Iterator<Item = (QueryField, &str)> {
		QueryField::ALL.into_iter().filter_map(|field| self.get(field).map(|value| (field, value)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn field_names_round_trip() {
		for field in QueryField::ALL {
			assert_eq!(QueryField::parse(field.as_str()), Some(field));
		}

		assert_eq!(QueryField::parse("limit"), None);
		assert_eq!(QueryField::parse("Diameter_mm"), None);
	}

	#[test]
	fn empty_values_are_inactive() {
		let query = SearchQuery::from_params([("q", ""), ("category", "Prothetik")]);

		assert!(!query.is_active(QueryField::Q));
		assert_eq!(query.get(QueryField::Category), Some("Prothetik"));
	}

	#[test]
	fn zero_is_an_active_value() {
		let query = SearchQuery::from_params([("angle_deg", "0")]);

		assert_eq!(query.get(QueryField::AngleDeg), Some("0"));
	}

	#[test]
	fn subcategory_fallback_key_applies_only_without_subcat() {
		let fallback = SearchQuery::from_params([(SUBCATEGORY_FALLBACK_KEY, "Gingivaformer")]);

		assert_eq!(fallback.get(QueryField::Subcat), Some("Gingivaformer"));

		let both = SearchQuery::from_params([
			(SUBCATEGORY_FALLBACK_KEY, "Gingivaformer"),
			("subcat", "Abformpfosten"),
		]);

		assert_eq!(both.get(QueryField::Subcat), Some("Abformpfosten"));

		let empty_primary =
			SearchQuery::from_params([("subcat", ""), (SUBCATEGORY_FALLBACK_KEY, "Gingivaformer")]);

		assert!(!empty_primary.is_active(QueryField::Subcat));
	}

	#[test]
	fn without_clears_exactly_one_field() {
		let query = SearchQuery::default()
			.with(QueryField::Subcat, "Abformpfosten")
			.with(QueryField::DiameterMm, "4.1")
			.with(QueryField::GingivalHeightMm, "3");
		let relaxed = query.without(QueryField::GingivalHeightMm);

		assert!(!relaxed.is_active(QueryField::GingivalHeightMm));
		assert_eq!(relaxed.get(QueryField::DiameterMm), Some("4.1"));
		assert_eq!(relaxed.get(QueryField::Subcat), Some("Abformpfosten"));
		assert_eq!(query.get(QueryField::GingivalHeightMm), Some("3"));
	}

	#[test]
	fn scope_keeps_pool_fields_only() {
		let query = SearchQuery::default()
			.with(QueryField::Category, "Prothetik")
			.with(QueryField::Manufacturer, "zimvie")
			.with(QueryField::DiameterMm, "4.1")
			.with(QueryField::Q, "former");
		let scope = query.scope();
		let active: Vec<_> = scope.active().map(|(field, _)| field).collect();

		assert_eq!(active, vec![QueryField::Category, QueryField::Manufacturer]);
	}
}
