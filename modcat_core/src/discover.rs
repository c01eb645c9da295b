use std::collections::BTreeMap;
use std::path::Path;

use derive_more::Deref;
use serde::Serialize;

use crate::CatalogResult;
use crate::category::MODULE_DIR_MARKER;
use crate::category::ModuleCategory;
use crate::descriptor::ModuleDescriptor;
use crate::descriptor::read_module;
use crate::manifest::ManifestParser;

/// A discovered module: its descriptor plus the category that claimed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deref)]
pub struct ModuleRecord {
	#[deref]
	#[serde(flatten)]
	pub descriptor: ModuleDescriptor,
	pub category: ModuleCategory,
	/// Canonical name with the category prefix removed. Never empty.
	pub short_name: String,
}

/// Discovered modules grouped by category.
///
/// Every category is present, in declaration order, even when it holds no
/// modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deref)]
pub struct ModuleCatalog(BTreeMap<ModuleCategory, Vec<ModuleRecord>>);

impl Default for ModuleCatalog {
	fn default() -> Self {
		Self::empty()
	}
}

impl ModuleCatalog {
	/// A catalog with every category mapped to an empty list.
	pub fn empty() -> Self {
		Self(
			ModuleCategory::ALL
				.into_iter()
				.map(|category| (category, Vec::new()))
				.collect(),
		)
	}

	/// The modules of `category`, sorted by short name.
	pub fn modules(&self, category: ModuleCategory) -> &[ModuleRecord] {
		self.0.get(&category).map_or(&[], Vec::as_slice)
	}

	/// Total number of modules across all categories.
	pub fn module_count(&self) -> usize {
		self.0.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.module_count() == 0
	}

	/// Look up a module by canonical name or short name.
	pub fn find(&self, name: &str) -> Option<&ModuleRecord> {
		self.0
			.values()
			.flatten()
			.find(|record| record.name == name || record.short_name == name)
	}
}

impl FromIterator<ModuleRecord> for ModuleCatalog {
	/// Group records by category, each group sorted by short name.
	fn from_iter<I: IntoIterator<Item = ModuleRecord>>(records: I) -> Self {
		let mut catalog = Self::empty();
		for record in records {
			catalog.0.entry(record.category).or_default().push(record);
		}
		for records in catalog.0.values_mut() {
			records.sort_by(|a, b| a.short_name.cmp(&b.short_name));
		}

		catalog
	}
}

/// Whether any immediate child directory of `base` looks like a module.
pub fn has_module_dirs(base: &Path) -> CatalogResult<bool> {
	for entry in std::fs::read_dir(base)? {
		let path = entry?.path();
		let is_module_dir = path.is_dir()
			&& path
				.file_name()
				.is_some_and(|name| name.to_string_lossy().starts_with(MODULE_DIR_MARKER));

		if is_module_dir {
			return Ok(true);
		}
	}

	Ok(false)
}

/// Discover the modules living directly under `base`.
///
/// Only immediate child directories are considered. A directory joins the
/// first category whose prefix it carries, and only if it has a manifest.
pub fn discover_modules(base: &Path, parser: &dyn ManifestParser) -> CatalogResult<ModuleCatalog> {
	let mut records = Vec::new();

	for entry in std::fs::read_dir(base)? {
		let path = entry?.path();
		if !path.is_dir() {
			continue;
		}

		// Non UTF-8 names are decoded lossily, matching `ModuleDescriptor::name`.
		let Some(dir_name) = path.file_name().map(|name| name.to_string_lossy()) else {
			continue;
		};
		let Some((category, short_name)) = ModuleCategory::classify(&dir_name) else {
			continue;
		};
		let Some(descriptor) = read_module(&path, parser) else {
			tracing::debug!(path = %path.display(), "skipping directory without a manifest");
			continue;
		};

		records.push(ModuleRecord {
			descriptor,
			category,
			short_name: short_name.to_string(),
		});
	}

	Ok(records.into_iter().collect())
}
