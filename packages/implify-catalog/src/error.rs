#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalog file at {path:?}.")]
	ReadCatalog { path: std::path::PathBuf, source: std::io::Error },
	#[error("Catalog must be a JSON array of product objects: {0}")]
	ParseCatalog(#[from] serde_json::Error),
}
