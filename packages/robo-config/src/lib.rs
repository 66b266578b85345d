mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Analysis, Config, OracleConfig, Providers, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	// The credential gates every external operation; reject its absence here,
	// before any network call is attempted.
	if cfg.providers.oracle.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.oracle.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.providers.oracle.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.oracle.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.providers.oracle.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.oracle.model must be non-empty.".to_string(),
		});
	}
	if cfg.providers.oracle.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.oracle.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if !cfg.providers.oracle.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.oracle.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&cfg.providers.oracle.temperature) {
		return Err(Error::Validation {
			message: "providers.oracle.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}

	if cfg.analysis.min_pitch_chars == 0 {
		return Err(Error::Validation {
			message: "analysis.min_pitch_chars must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
