//! Build-lifecycle callbacks.
//!
//! A documentation build calls these in order: [`on_config`] once, then
//! [`on_files`] once, then [`on_page_markdown`] for every page. The
//! [`BuildContext`] returned by [`on_config`] carries the discovery result
//! and must be handed to the later stages by the caller; it lives for one
//! build and is rebuilt from scratch on the next.

use std::path::PathBuf;

use crate::CatalogResult;
use crate::category::CATALOG_MARKER;
use crate::category::ModuleCategory;
use crate::config::CatalogConfig;
use crate::config::RepositoryConfig;
use crate::discover::ModuleCatalog;
use crate::discover::discover_modules;
use crate::discover::has_module_dirs;
use crate::render::render_catalog;
use crate::render::render_category_list;

/// Where a build found its modules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiscoveryMode {
	/// Modules were discovered under this directory.
	Local(PathBuf),
	/// No module directories were found; every category is empty.
	Standalone,
}

/// State shared between the lifecycle callbacks of one build.
#[derive(Debug, Clone)]
pub struct BuildContext {
	pub modules: ModuleCatalog,
	pub mode: DiscoveryMode,
	pub repository: RepositoryConfig,
}

impl BuildContext {
	/// A context with no modules.
	pub fn standalone(repository: RepositoryConfig) -> Self {
		Self {
			modules: ModuleCatalog::empty(),
			mode: DiscoveryMode::Standalone,
			repository,
		}
	}

	pub fn is_standalone(&self) -> bool {
		self.mode == DiscoveryMode::Standalone
	}
}

/// Configuration stage: locate the module base path and discover modules.
///
/// A missing base path, or one without any module-shaped directory, yields a
/// standalone context rather than an error.
pub fn on_config(config: &CatalogConfig) -> CatalogResult<BuildContext> {
	tracing::info!("module catalog: scanning for modules");

	let repository = config.repository.clone();
	let base_path = config
		.module_base_path()?
		.filter(|path| path.exists());
	let Some(base_path) = base_path else {
		tracing::info!("module base path does not exist (standalone mode)");
		return Ok(BuildContext::standalone(repository));
	};
	if !has_module_dirs(&base_path)? {
		tracing::info!(base_path = %base_path.display(), "no local modules found (standalone mode)");
		return Ok(BuildContext::standalone(repository));
	}

	let parser = config.manifest.parser();
	let modules = discover_modules(&base_path, parser.as_ref())?;

	for (category, records) in modules.iter() {
		if !records.is_empty() {
			tracing::info!(
				"found {} {}",
				records.len(),
				category.display_name().to_lowercase()
			);
		}
	}

	Ok(BuildContext {
		modules,
		mode: DiscoveryMode::Local(base_path),
		repository,
	})
}

/// File-collection stage. Files pass through untouched.
pub fn on_files<F>(files: F, _ctx: &BuildContext) -> F {
	files
}

/// Page stage: substitute every catalog and category list marker in
/// `markdown`. Markers that are not recognized are left alone, and a page
/// without markers comes back unchanged.
pub fn on_page_markdown(markdown: &str, ctx: &BuildContext) -> CatalogResult<String> {
	let mut markdown = markdown.to_string();

	if markdown.contains(CATALOG_MARKER) {
		let catalog = render_catalog(&ctx.modules);
		markdown = markdown.replace(CATALOG_MARKER, &catalog);
	}

	for category in ModuleCategory::ALL {
		let marker = category.list_marker();
		if markdown.contains(&marker) {
			let list = render_category_list(&ctx.modules, category)?;
			markdown = markdown.replace(&marker, &list);
		}
	}

	Ok(markdown)
}
