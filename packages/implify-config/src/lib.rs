mod error;
mod types;

pub use error::{Error, Result};
pub use types::{CatalogSource, Config, Guidance, Search, Service};

use std::{fs, path::Path};

use implify_domain::QueryField;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "catalog.path must be non-empty.".to_string() });
	}
	if cfg.search.default_limit == 0 {
		return Err(Error::Validation {
			message: "search.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_limit < cfg.search.default_limit {
		return Err(Error::Validation {
			message: "search.max_limit must be greater than or equal to search.default_limit."
				.to_string(),
		});
	}

	for (subcategory, fields) in &cfg.guidance.required_fields {
		if subcategory.trim().is_empty() {
			return Err(Error::Validation {
				message: "guidance.required_fields keys must be non-empty.".to_string(),
			});
		}

		for field in fields {
			if QueryField::parse(field).is_none() {
				return Err(Error::Validation {
					message: format!(
						"guidance.required_fields.{subcategory} names unknown query field '{field}'."
					),
				});
			}
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let log_level = cfg.service.log_level.trim();

	cfg.service.log_level =
		if log_level.is_empty() { "info".to_string() } else { log_level.to_string() };

	if let Some(path) = cfg.catalog.path.to_str() {
		let trimmed = path.trim();

		if trimmed.len() != path.len() {
			cfg.catalog.path = trimmed.into();
		}
	}
}
