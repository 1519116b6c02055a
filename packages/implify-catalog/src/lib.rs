mod error;

pub use error::Error;

use std::{fs, path::Path};

use implify_domain::Product;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The read-only product catalog. Order is catalog order and breaks ranking ties.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	products: Vec<Product>,
}
impl Catalog {
	pub fn new(products: Vec<Product>) -> Self {
		Self { products }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read(path)
			.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;

		Self::from_slice(&raw)
	}

	pub fn from_slice(raw: &[u8]) -> Result<Self> {
		let products: Vec<Product> = serde_json::from_slice(raw)?;

		Ok(Self::new(products))
	}

	pub fn products(&self) -> &[Product] {
		&self.products
	}

	pub fn len(&self) -> usize {
		self.products.len()
	}

	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}
}
