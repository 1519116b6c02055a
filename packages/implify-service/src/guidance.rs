use implify_config::Guidance;
use implify_domain::{QueryField, SearchQuery};

/// Suggests query fields worth supplying for the requested subcategory.
///
/// Advisory only; it never filters results.
#[derive(Debug, Clone, Default)]
pub struct GuidanceAdvisor {
	required: Vec<(String, Vec<QueryField>)>,
}
impl GuidanceAdvisor {
	pub fn new(cfg: &Guidance) -> Self {
		let required = cfg
			.required_fields
			.iter()
			.map(|(subcategory, fields)| {
				(
					subcategory.to_lowercase(),
					fields.iter().filter_map(|field| QueryField::parse(field)).collect(),
				)
			})
			.collect();

		Self { required }
	}

	/// Required fields for the query's subcategory that the query leaves inactive.
	///
	/// Nothing is suggested without a subcategory or for one without requirements.
	pub fn missing_fields(&self, query: &SearchQuery) -> Vec<QueryField> {
		let Some(subcategory) = query.get(QueryField::Subcat) else {
			return Vec::new();
		};
		let subcategory = subcategory.to_lowercase();

		self.required
			.iter()
			.find(|(label, _)| *label == subcategory)
			.map(|(_, fields)| {
				fields.iter().copied().filter(|field| !query.is_active(*field)).collect()
			})
			.unwrap_or_default()
	}
}
