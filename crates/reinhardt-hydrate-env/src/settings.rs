//! Environment settings.
//!
//! Settings are read from TOML, either at the top level or under a
//! `[hydrate]` table, and can be overridden from environment variables:
//!
//! ```toml
//! [hydrate]
//! default_container_tag = "section"
//! container_id_prefix = "island-"
//! mount_function = "App.hydrate"
//! ```

use reinhardt_hydrate_core::is_valid_element_name;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the optional TOML table holding the settings.
const SETTINGS_TABLE: &str = "hydrate";

/// Errors raised while loading settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("invalid setting: {0}")]
	Invalid(String),
}

/// Settings of the default rendering environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateSettings {
	/// Tag wrapping components that don't override it.
	pub default_container_tag: String,
	/// Prefix of generated container ids.
	pub container_id_prefix: String,
	/// Client function called by the initialization script as
	/// `mount(name, props, containerId)`.
	pub mount_function: String,
}

impl Default for HydrateSettings {
	fn default() -> Self {
		Self {
			default_container_tag: "div".to_string(),
			container_id_prefix: "rh-".to_string(),
			mount_function: "ReinhardtHydrate.mount".to_string(),
		}
	}
}

impl HydrateSettings {
	/// Parses settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_hydrate_env::HydrateSettings;
	///
	/// let settings = HydrateSettings::from_toml_str(
	///     "[hydrate]\ndefault_container_tag = \"section\"",
	/// ).unwrap();
	/// assert_eq!(settings.default_container_tag, "section");
	/// assert_eq!(settings.container_id_prefix, "rh-");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let mut document: toml::Table = toml::from_str(source)?;
		let table = match document.remove(SETTINGS_TABLE) {
			Some(toml::Value::Table(table)) => table,
			Some(_) => {
				return Err(SettingsError::Invalid(format!(
					"`{SETTINGS_TABLE}` must be a table"
				)));
			}
			None => document,
		};
		let settings: Self = toml::Value::Table(table).try_into()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Applies overrides from `{prefix}DEFAULT_CONTAINER_TAG`,
	/// `{prefix}CONTAINER_ID_PREFIX` and `{prefix}MOUNT_FUNCTION`.
	pub fn with_env_overrides(mut self, prefix: &str) -> Result<Self, SettingsError> {
		if let Some(tag) = env_var(prefix, "DEFAULT_CONTAINER_TAG") {
			self.default_container_tag = tag;
		}
		if let Some(id_prefix) = env_var(prefix, "CONTAINER_ID_PREFIX") {
			self.container_id_prefix = id_prefix;
		}
		if let Some(mount) = env_var(prefix, "MOUNT_FUNCTION") {
			self.mount_function = mount;
		}
		self.validate()?;
		Ok(self)
	}

	/// Checks that the settings can produce valid markup.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let tag = &self.default_container_tag;
		if !is_valid_element_name(tag) {
			return Err(SettingsError::Invalid(format!(
				"default_container_tag `{tag}` is not a valid element name"
			)));
		}
		if self.mount_function.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"mount_function must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

fn env_var(prefix: &str, key: &str) -> Option<String> {
	std::env::var(format!("{prefix}{key}")).ok()
}
