//! `modcat_core` builds a module catalog for a documentation site. It scans a
//! directory for module repositories named by convention
//! (`amplifier-module-<category>-<name>`), reads each module's
//! `pyproject.toml` and `README.md`, and fills placeholder markers in
//! markdown pages with generated tables, card lists, and module pages.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Base directory
//!   → Discoverer (immediate child directories, grouped by category prefix)
//!   → Descriptor reader (manifest fields + readme per module)
//!   → Build context (explicit value shared by the lifecycle callbacks)
//!   → Page callback (replaces catalog and list markers in each page)
//! ```
//!
//! ## Modules
//!
//! - [`category`]: The fixed module categories and their prefixes, paths, and
//!   markers.
//! - [`manifest`]: Manifest parsing capability (`toml`, or none).
//! - [`descriptor`]: Reads one module directory.
//! - [`discover`]: Discovers and groups modules under a base path.
//! - [`render`]: Catalog table, card list, and per-module page rendering.
//! - [`hooks`]: The configure, files, and page-markdown callbacks.
//! - [`config`]: Configuration loading from `modcat.toml`.
//! - [`pages`]: Collection of markdown pages under the docs directory.
//!
//! ## Placeholders
//!
//! - `<!-- MODULE_CATALOG -->`: one table per non-empty category.
//! - `<!-- MODULE_LIST_PROVIDER -->`, `<!-- MODULE_LIST_TOOL -->`,
//!   `<!-- MODULE_LIST_HOOKS -->`, `<!-- MODULE_LIST_LOOP -->`,
//!   `<!-- MODULE_LIST_CONTEXT -->`: the card list of one category.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modcat_core::CatalogConfig;
//! use modcat_core::hooks::on_config;
//! use modcat_core::hooks::on_page_markdown;
//! use std::path::Path;
//!
//! let config = CatalogConfig::load_or_default(Path::new(".")).unwrap();
//! let ctx = on_config(&config).unwrap();
//!
//! let page = on_page_markdown("# Modules\n\n<!-- MODULE_CATALOG -->\n", &ctx).unwrap();
//! println!("{page}");
//! ```

pub use category::*;
pub use config::*;
pub use discover::*;
pub use error::*;

pub mod category;
pub mod config;
pub mod descriptor;
pub mod discover;
#[allow(unused_assignments)]
mod error;
pub mod hooks;
pub mod manifest;
pub mod pages;
pub mod render;

#[cfg(test)]
mod __fixtures;
