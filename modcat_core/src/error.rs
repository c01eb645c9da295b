use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CatalogError {
	#[error(transparent)]
	#[diagnostic(code(modcat::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(modcat::config_parse),
		help("check that modcat.toml is valid TOML; every key is optional")
	)]
	ConfigParse(String),

	#[error("failed to parse manifest: {0}")]
	#[diagnostic(code(modcat::manifest_parse))]
	ManifestParse(String),

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(modcat::template_render))]
	TemplateRender(String),

	#[error("no module named `{0}` was discovered")]
	#[diagnostic(
		code(modcat::unknown_module),
		help("run `modcat scan` to list the modules visible from this project")
	)]
	UnknownModule(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(modcat::invalid_exclude_pattern),
		help("exclude patterns use gitignore syntax, e.g. `drafts/` or `*.tmp.md`")
	)]
	InvalidExcludePattern { pattern: String, reason: String },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(modcat::symlink_cycle),
		help("remove the circular symlink or add it to `[exclude] patterns`")
	)]
	SymlinkCycle { path: String },
}

impl From<minijinja::Error> for CatalogError {
	fn from(error: minijinja::Error) -> Self {
		Self::TemplateRender(error.to_string())
	}
}

pub type CatalogResult<T> = Result<T, CatalogError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
