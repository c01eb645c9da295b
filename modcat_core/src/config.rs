use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::CatalogError;
use crate::CatalogResult;
use crate::manifest::ManifestFormat;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["modcat.toml", ".modcat.toml", ".config/modcat.toml"];

/// Default documentation directory, relative to the project root.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default host prefix for module repositories.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/microsoft";

/// Default git ref used in generated install snippets.
pub const DEFAULT_GIT_REF: &str = "main";

/// Configuration loaded from a `modcat.toml` file.
///
/// ```toml
/// docs_dir = "docs"
/// base_path = "../modules"
/// manifest = "toml"
///
/// [repository]
/// url = "https://github.com/microsoft"
/// git_ref = "main"
///
/// [exclude]
/// patterns = ["drafts/"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
	/// Documentation directory. Modules are looked for two levels above it
	/// unless `base_path` is set.
	#[serde(default = "default_docs_dir")]
	pub docs_dir: PathBuf,
	/// Directory whose immediate children are scanned for modules.
	#[serde(default)]
	pub base_path: Option<PathBuf>,
	/// Manifest parser to use. `none` disables manifest parsing.
	#[serde(default)]
	pub manifest: ManifestFormat,
	/// Where module repositories live.
	#[serde(default)]
	pub repository: RepositoryConfig,
	/// Documentation pages to leave out of rendering.
	#[serde(default)]
	pub exclude: ExcludeConfig,
}

/// Repository links used in generated module pages.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryConfig {
	/// Prefix joined with the module name to form its repository URL.
	#[serde(default = "default_repository_url")]
	pub url: String,
	#[serde(default = "default_git_ref")]
	pub git_ref: String,
}

impl Default for RepositoryConfig {
	fn default() -> Self {
		Self {
			url: default_repository_url(),
			git_ref: default_git_ref(),
		}
	}
}

impl RepositoryConfig {
	/// Repository URL of the module named `name`.
	pub fn module_url(&self, name: &str) -> String {
		format!("{}/{name}", self.url.trim_end_matches('/'))
	}

	/// The module URL without its scheme, used as link text.
	pub fn module_label(&self, name: &str) -> String {
		let url = self.module_url(name);
		url.split_once("://")
			.map_or_else(|| url.clone(), |(_, rest)| rest.to_string())
	}
}

/// Configuration for excluding documentation pages from rendering.
///
/// Patterns follow gitignore syntax and are relative to the docs directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

fn default_docs_dir() -> PathBuf {
	PathBuf::from(DEFAULT_DOCS_DIR)
}

fn default_repository_url() -> String {
	DEFAULT_REPOSITORY_URL.to_string()
}

fn default_git_ref() -> String {
	DEFAULT_GIT_REF.to_string()
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			docs_dir: default_docs_dir(),
			base_path: None,
			manifest: ManifestFormat::default(),
			repository: RepositoryConfig::default(),
			exclude: ExcludeConfig::default(),
		}
	}
}

impl CatalogConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists. Paths in the returned config
	/// are still relative; see [`CatalogConfig::resolve_paths`].
	pub fn load(root: &Path) -> CatalogResult<Option<CatalogConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: CatalogConfig =
			toml::from_str(&content).map_err(|e| CatalogError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults, with every path
	/// resolved against `root`.
	pub fn load_or_default(root: &Path) -> CatalogResult<CatalogConfig> {
		let config = Self::load(root)?.unwrap_or_default();
		Ok(config.resolve_paths(root))
	}

	/// Make `docs_dir` and `base_path` absolute by joining relative values
	/// onto `root`.
	#[must_use]
	pub fn resolve_paths(mut self, root: &Path) -> Self {
		self.docs_dir = resolve_against(root, &self.docs_dir);
		self.base_path = self.base_path.map(|path| resolve_against(root, &path));
		self
	}

	/// Directory whose children are scanned for modules: `base_path` when set,
	/// otherwise the docs directory ascended two levels.
	pub fn module_base_path(&self) -> CatalogResult<Option<PathBuf>> {
		if let Some(base_path) = &self.base_path {
			return Ok(Some(base_path.clone()));
		}

		let docs_dir = std::path::absolute(&self.docs_dir)?;
		Ok(docs_dir.ancestors().nth(2).map(Path::to_path_buf))
	}
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
	if path.is_absolute() {
		path.to_path_buf()
	} else {
		root.join(path)
	}
}
