use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::CatalogError;
use crate::CatalogResult;

/// A documentation page collected for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
	/// Absolute path of the source file.
	pub path: PathBuf,
	/// Path relative to the docs directory.
	pub relative_path: PathBuf,
}

/// Collect every markdown page under `docs_dir`, sorted by relative path.
///
/// `exclude_patterns` use gitignore syntax relative to `docs_dir`. Hidden
/// entries are skipped. A missing docs directory yields no pages.
pub fn collect_pages(docs_dir: &Path, exclude_patterns: &[String]) -> CatalogResult<Vec<DocPage>> {
	if !docs_dir.is_dir() {
		return Ok(Vec::new());
	}

	let exclude = build_exclude_matcher(docs_dir, exclude_patterns)?;
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();
	walk_dir(docs_dir, &exclude, &mut files, &mut visited_dirs)?;

	let mut pages: Vec<DocPage> = files
		.into_iter()
		.filter_map(|path| {
			let relative_path = path.strip_prefix(docs_dir).ok()?.to_path_buf();
			Some(DocPage {
				path,
				relative_path,
			})
		})
		.collect();
	pages.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

	Ok(pages)
}

fn build_exclude_matcher(docs_dir: &Path, patterns: &[String]) -> CatalogResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(docs_dir);
	for pattern in patterns {
		builder
			.add_line(None, pattern)
			.map_err(|e| CatalogError::InvalidExcludePattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			})?;
	}

	builder
		.build()
		.map_err(|e| CatalogError::InvalidExcludePattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		})
}

fn walk_dir(
	dir: &Path,
	exclude: &Gitignore,
	files: &mut Vec<PathBuf>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> CatalogResult<()> {
	// Canonical paths catch directory symlinks that lead back into the walk.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(CatalogError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();

		if path
			.file_name()
			.and_then(|name| name.to_str())
			.is_some_and(|name| name.starts_with('.'))
		{
			continue;
		}

		let is_dir = path.is_dir();
		if exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			walk_dir(&path, exclude, files, visited_dirs)?;
		} else if is_markdown_file(&path) {
			files.push(path);
		}
	}

	Ok(())
}

/// Check if a file is a markdown page.
pub fn is_markdown_file(path: &Path) -> bool {
	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		return false;
	};

	matches!(ext, "md" | "markdown")
}
