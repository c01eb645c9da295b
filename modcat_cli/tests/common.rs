#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;

pub fn modcat_cmd() -> Command {
	let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("modcat"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// A module repository checkout next to a documentation project:
///
/// ```text
/// <tmp>/workspace/
/// ├── amplifier-docs/        (project root, docs in `docs/`)
/// └── amplifier-module-*/    (module repositories)
/// ```
pub struct Workspace {
	_tmp: tempfile::TempDir,
	pub base: PathBuf,
	pub root: PathBuf,
}

impl Workspace {
	pub fn new() -> Self {
		let tmp = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
		let base = tmp.path().join("workspace");
		let root = base.join("amplifier-docs");
		std::fs::create_dir_all(root.join("docs")).unwrap_or_else(|e| panic!("create docs: {e}"));

		Self {
			_tmp: tmp,
			base,
			root,
		}
	}

	pub fn docs(&self) -> PathBuf {
		self.root.join("docs")
	}

	/// Add a module with a manifest declaring `entry_point` and a readme.
	pub fn add_module(&self, name: &str, description: &str, entry_point: &str, readme: &str) {
		let dir = self.base.join(name);
		std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create module: {e}"));
		let manifest = format!(
			"[project]\nname = \"{name}\"\nversion = \"1.2.0\"\ndescription = \
			 \"{description}\"\n\n[project.entry-points.\"amplifier.modules\"]\n{entry_point} = \
			 \"module:mount\"\n"
		);
		std::fs::write(dir.join("pyproject.toml"), manifest)
			.unwrap_or_else(|e| panic!("write manifest: {e}"));
		std::fs::write(dir.join("README.md"), readme).unwrap_or_else(|e| panic!("write readme: {e}"));
	}

	pub fn write_page(&self, relative: &str, content: &str) {
		write_file(&self.docs().join(relative), content);
	}
}

pub fn write_file(path: &Path, content: &str) {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	}
	std::fs::write(path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}
