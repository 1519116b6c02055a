pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Catalog unavailable: {message}")]
	CatalogUnavailable { message: String },
}
impl From<implify_catalog::Error> for Error {
	fn from(err: implify_catalog::Error) -> Self {
		Self::CatalogUnavailable { message: err.to_string() }
	}
}
