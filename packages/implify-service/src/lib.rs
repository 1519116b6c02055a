pub mod alternatives;
pub mod guidance;
pub mod relax;
pub mod request;
pub mod search;

mod error;

pub use alternatives::{AlternativeTable, Alternatives};
pub use error::{Error, Result};
pub use guidance::GuidanceAdvisor;
pub use request::SearchRequest;
pub use search::{LimitPolicy, SearchHit};

use std::sync::Arc;

use serde::Serialize;

use implify_catalog::Catalog;
use implify_config::Config;
use implify_domain::QueryField;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
	pub results: Vec<SearchHit>,
	pub alternatives: Alternatives,
	pub relaxed_by: Vec<QueryField>,
	pub missing_fields: Vec<QueryField>,
}

/// Answers search requests against one loaded catalog.
pub struct SearchService {
	pub catalog: Arc<Catalog>,
	pub limits: LimitPolicy,
	pub guidance: GuidanceAdvisor,
}
impl SearchService {
	pub fn new(cfg: &Config, catalog: Arc<Catalog>) -> Self {
		let limits = LimitPolicy {
			default_limit: cfg.search.default_limit as usize,
			max_limit: cfg.search.max_limit as usize,
		};

		Self { catalog, limits, guidance: GuidanceAdvisor::new(&cfg.guidance) }
	}

	/// Runs the strict query, relaxing one field if it finds nothing, and attaches alternatives
	/// and guidance computed from the original query.
	pub fn search(&self, request: &SearchRequest) -> SearchResponse {
		let catalog = self.catalog.as_ref();
		let query = &request.query;
		let limit = self.limits.resolve(request.limit.as_deref());
		let mut results = search::filter_rank(catalog, query, limit);
		let mut relaxed_by = Vec::new();

		if results.is_empty()
			&& let Some(relaxation) = relax::relax(catalog, query, limit)
		{
			tracing::debug!(field = %relaxation.field, "Strict query was empty; relaxed one field.");

			relaxed_by.push(relaxation.field);
			results = relaxation.hits;
		}

		let alternatives = alternatives::alternatives(catalog, query);
		let missing_fields = self.guidance.missing_fields(query);

		tracing::debug!(
			results = results.len(),
			limit,
			relaxed = !relaxed_by.is_empty(),
			"Search completed."
		);

		SearchResponse { results, alternatives, relaxed_by, missing_fields }
	}
}
