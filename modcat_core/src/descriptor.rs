use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::manifest::MANIFEST_FILE_NAME;
use crate::manifest::ManifestFields;
use crate::manifest::ManifestParser;

/// Readme file read alongside the manifest.
pub const README_FILE_NAME: &str = "README.md";

/// Metadata describing one module directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
	/// Canonical name: the directory name.
	pub name: String,
	pub path: PathBuf,
	pub description: String,
	pub version: String,
	/// First key of the manifest's `amplifier.modules` entry-point group.
	pub entry_point: String,
	/// Full readme text, empty when there is no readme.
	#[serde(skip_serializing)]
	pub readme: String,
}

/// Read the descriptor of the module at `dir`.
///
/// Returns `None` when `dir` has no manifest: such a directory is not a
/// module. Manifest and readme failures are logged and leave the affected
/// fields empty; they never abort discovery.
pub fn read_module(dir: &Path, parser: &dyn ManifestParser) -> Option<ModuleDescriptor> {
	let manifest_path = dir.join(MANIFEST_FILE_NAME);
	let readme_path = dir.join(README_FILE_NAME);

	if !manifest_path.exists() {
		return None;
	}

	let fields = read_manifest(&manifest_path, parser);
	let readme = if readme_path.exists() {
		std::fs::read_to_string(&readme_path).unwrap_or_else(|e| {
			tracing::warn!(path = %readme_path.display(), error = %e, "failed to read readme");
			String::new()
		})
	} else {
		String::new()
	};

	Some(ModuleDescriptor {
		name: dir
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default(),
		path: dir.to_path_buf(),
		description: fields.description,
		version: fields.version,
		entry_point: fields.entry_point,
		readme,
	})
}

fn read_manifest(path: &Path, parser: &dyn ManifestParser) -> ManifestFields {
	let parsed = std::fs::read_to_string(path)
		.map_err(crate::CatalogError::from)
		.and_then(|content| parser.parse(path, &content));

	parsed.unwrap_or_else(|e| {
		tracing::warn!(path = %path.display(), error = %e, "failed to parse manifest");
		ManifestFields::default()
	})
}
