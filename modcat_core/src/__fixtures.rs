use std::path::Path;
use std::path::PathBuf;

use crate::ModuleCategory;
use crate::ModuleRecord;
use crate::descriptor::ModuleDescriptor;

/// Build a `pyproject.toml` declaring `entry_point` under the module
/// entry-point group.
pub fn manifest(description: &str, version: &str, entry_point: &str) -> String {
	format!(
		"[project]\nname = \"module\"\ndescription = \"{description}\"\nversion = \
		 \"{version}\"\n\n[project.entry-points.\"amplifier.modules\"]\n{entry_point} = \
		 \"module:mount\"\n"
	)
}

/// Create a module directory under `base` with an optional manifest and
/// readme.
pub fn write_module(
	base: &Path,
	name: &str,
	manifest: Option<&str>,
	readme: Option<&str>,
) -> PathBuf {
	let dir = base.join(name);
	std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	if let Some(manifest) = manifest {
		std::fs::write(dir.join("pyproject.toml"), manifest)
			.unwrap_or_else(|e| panic!("write manifest: {e}"));
	}
	if let Some(readme) = readme {
		std::fs::write(dir.join("README.md"), readme).unwrap_or_else(|e| panic!("write readme: {e}"));
	}
	dir
}

/// An in-memory record, for renderer tests that need no filesystem.
pub fn record(
	category: ModuleCategory,
	short_name: &str,
	description: &str,
	entry_point: &str,
) -> ModuleRecord {
	let name = format!("{}{short_name}", category.prefix());
	ModuleRecord {
		descriptor: ModuleDescriptor {
			path: PathBuf::from("/modules").join(&name),
			name,
			description: description.to_string(),
			version: "1.0.0".to_string(),
			entry_point: entry_point.to_string(),
			readme: String::new(),
		},
		category,
		short_name: short_name.to_string(),
	}
}
