//! Renderer configuration loading.
//!
//! Dialect configs are plain serde structs with `#[serde(default)]`; any
//! key left out of a TOML document keeps its documented default.

use crate::error::ConfigError;
use serde::de::DeserializeOwned;

/// Parse a renderer config from a TOML document.
pub(crate) fn from_toml_str<T: DeserializeOwned>(src: &str) -> Result<T, ConfigError> {
    let config = toml::from_str(src)?;
    tracing::debug!(config = std::any::type_name::<T>(), "loaded renderer config");

    Ok(config)
}
