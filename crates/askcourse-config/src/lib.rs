//! askcourse configuration.
//!
//! TOML-based configuration with validation. All sections use serde
//! defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::AskCourseConfig;

use askcourse_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Environment variable that overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "ASKCOURSE_BASE_URL";

/// Load config from `path`, or from the platform default when `None`.
///
/// Applies environment overrides, then validates the result.
pub fn load_config(path: Option<&Path>) -> Result<AskCourseConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validation::validate(&config)?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut AskCourseConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        info!("{BASE_URL_ENV} overrides api.base_url");
        config.api.base_url = url.trim().to_string();
    }
}
