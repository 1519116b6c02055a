use std::sync::Arc;

use tokio::sync::OnceCell;

use implify_catalog::Catalog;
use implify_config::Config;
use implify_service::{Error as ServiceError, SearchService};

#[derive(Clone)]
pub struct AppState {
	pub config: Arc<Config>,
	service: Arc<OnceCell<Arc<SearchService>>>,
}
impl AppState {
	/// The catalog is read on the first call to [`AppState::service`].
	pub fn new(config: Config) -> Self {
		Self { config: Arc::new(config), service: Arc::new(OnceCell::new()) }
	}

	pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
		let service = SearchService::new(&config, Arc::new(catalog));

		Self {
			config: Arc::new(config),
			service: Arc::new(OnceCell::new_with(Some(Arc::new(service)))),
		}
	}

	/// Returns the search service, loading the catalog once per process.
	///
	/// A failed load is not cached, so the next request tries again.
	pub async fn service(&self) -> implify_service::Result<Arc<SearchService>> {
		let service = self.service.get_or_try_init(|| self.load()).await?;

		Ok(service.clone())
	}

	async fn load(&self) -> implify_service::Result<Arc<SearchService>> {
		let path = self.config.catalog.path.clone();
		let catalog = tokio::task::spawn_blocking({
			let path = path.clone();

			move || Catalog::load(&path)
		})
		.await
		.map_err(|err| ServiceError::CatalogUnavailable {
			message: format!("Catalog load task failed: {err}"),
		})?
		.inspect_err(|err| {
			tracing::error!(path = %path.display(), error = %err, "Failed to load catalog.");
		})?;

		tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded.");

		Ok(Arc::new(SearchService::new(&self.config, Arc::new(catalog))))
	}
}
