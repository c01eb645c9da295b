//! Structured manifest parsing.
//!
//! Manifest support is a capability: the configured [`ManifestFormat`] picks a
//! [`ManifestParser`] once, when the build is configured, and discovery uses
//! that parser for every module. [`NullManifestParser`] is the absent
//! capability and reports every field as empty.

use std::fmt::Debug;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::CatalogError;
use crate::CatalogResult;

/// Manifest file expected at the root of every module directory.
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

/// Entry-point group whose first key names the module.
pub const ENTRY_POINT_GROUP: &str = "amplifier.modules";

/// Fields read from a module manifest. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestFields {
	pub description: String,
	pub version: String,
	pub entry_point: String,
}

/// Parses manifest text into [`ManifestFields`].
pub trait ManifestParser: Debug {
	/// Parse `content`, read from `path`. `path` is only used for
	/// diagnostics.
	fn parse(&self, path: &Path, content: &str) -> CatalogResult<ManifestFields>;
}

/// Which manifest parser a build uses.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
	/// Parse `pyproject.toml` as TOML.
	#[default]
	Toml,
	/// Do not parse manifests. Modules are still discovered but carry no
	/// description, version, or entry point.
	None,
}

impl ManifestFormat {
	pub fn parser(self) -> Box<dyn ManifestParser> {
		match self {
			Self::Toml => Box::new(TomlManifestParser),
			Self::None => Box::new(NullManifestParser),
		}
	}
}

/// TOML manifest parser.
///
/// Tables keep document order, so the entry point is the first key declared
/// under `[project.entry-points."amplifier.modules"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlManifestParser;

impl ManifestParser for TomlManifestParser {
	fn parse(&self, path: &Path, content: &str) -> CatalogResult<ManifestFields> {
		let document: toml::Table =
			toml::from_str(content).map_err(|e| CatalogError::ManifestParse(e.to_string()))?;

		let Some(project) = document.get("project").and_then(toml::Value::as_table) else {
			return Ok(ManifestFields::default());
		};

		let entry_point = project
			.get("entry-points")
			.and_then(toml::Value::as_table)
			.and_then(|groups| groups.get(ENTRY_POINT_GROUP))
			.and_then(toml::Value::as_table)
			.and_then(|modules| modules.keys().next().cloned())
			.unwrap_or_default();

		Ok(ManifestFields {
			description: string_field(path, project, "description"),
			version: string_field(path, project, "version"),
			entry_point,
		})
	}
}

/// Parser used when manifest support is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullManifestParser;

impl ManifestParser for NullManifestParser {
	fn parse(&self, _path: &Path, _content: &str) -> CatalogResult<ManifestFields> {
		Ok(ManifestFields::default())
	}
}

/// Read a string-valued key from the `[project]` table. A value of any other
/// type is reported and treated as missing.
fn string_field(path: &Path, project: &toml::Table, key: &str) -> String {
	match project.get(key) {
		None => String::new(),
		Some(toml::Value::String(value)) => value.clone(),
		Some(other) => {
			tracing::warn!(
				path = %path.display(),
				key,
				found = other.type_str(),
				"expected a string in manifest, using an empty value"
			);
			String::new()
		}
	}
}
