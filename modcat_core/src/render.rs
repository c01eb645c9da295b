//! Markdown and HTML fragments generated from discovered modules.

use minijinja::Environment;
use minijinja::context;
use serde::Serialize;

use crate::CatalogResult;
use crate::category::ModuleCategory;
use crate::config::RepositoryConfig;
use crate::discover::ModuleCatalog;
use crate::discover::ModuleRecord;

/// Catalog descriptions longer than this many characters are truncated.
pub const CATALOG_DESCRIPTION_LIMIT: usize = 80;

/// Substituted for a category list marker when the category is empty.
pub const EMPTY_LIST_PLACEHOLDER: &str = "*No modules found.*";

const MODULE_PAGE_TEMPLATE_NAME: &str = "module_page.md";
const MODULE_LIST_TEMPLATE_NAME: &str = "module_list.html";

const MODULE_PAGE_TEMPLATE: &str = r#"# {{ title }}

{{ description }}

## Overview

| Property | Value |
|----------|-------|
| **Module ID** | `{{ entry_point }}` |
| **Package** | `{{ name }}` |
| **Type** | {{ display_name }} |
| **Repository** | [{{ repository_label }}]({{ repository_url }}) |

## Installation

This module is installed automatically when referenced in a profile or mount plan.

```yaml
{{ category }}s:
  - module: {{ entry_point }}
    source: git+{{ repository_url }}@{{ git_ref }}
```

## Documentation

The full documentation for this module is maintained in its repository:

**[View Full Documentation →]({{ repository_url }})**

---

"#;

// The `.html` template name turns on minijinja's HTML auto-escaping, so
// manifest text cannot inject markup into the cards.
const MODULE_LIST_TEMPLATE: &str = r#"{% for module in modules %}
<div class="module-card">
<div class="content">
<h4><a href="{{ module.href }}">{{ module.title }}</a></h4>
<p>{{ module.description }}</p>
<code>{{ module.entry_point }}</code>
</div>
</div>
{% endfor %}"#;

#[derive(Debug, Serialize)]
struct ModuleCard<'a> {
	href: String,
	title: String,
	description: &'a str,
	entry_point: &'a str,
}

fn template_env() -> CatalogResult<Environment<'static>> {
	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.add_template(MODULE_PAGE_TEMPLATE_NAME, MODULE_PAGE_TEMPLATE)?;
	env.add_template(MODULE_LIST_TEMPLATE_NAME, MODULE_LIST_TEMPLATE)?;

	Ok(env)
}

/// Title-case `text`: a cased character that follows another cased character
/// is lower-cased, every other cased character is upper-cased.
///
/// ```
/// assert_eq!(modcat_core::render::title_case("my tool"), "My Tool");
/// assert_eq!(modcat_core::render::title_case("gpt4o"), "Gpt4O");
/// ```
pub fn title_case(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut previous_cased = false;

	for ch in text.chars() {
		let cased = ch.is_lowercase() || ch.is_uppercase();
		if previous_cased {
			result.extend(ch.to_lowercase());
		} else {
			result.extend(ch.to_uppercase());
		}
		previous_cased = cased;
	}

	result
}

/// Human-readable module title: hyphens become spaces, then title-cased.
pub fn module_title(short_name: &str) -> String {
	title_case(&short_name.replace('-', " "))
}

/// File name of a module's page, relative to its category directory.
pub fn module_page_file_name(short_name: &str) -> String {
	format!("{}.md", short_name.replace('-', "_"))
}

/// Path of a module's page relative to the docs directory. Catalog links
/// point here.
pub fn module_page_path(record: &ModuleRecord) -> String {
	format!(
		"{}/{}",
		record.category.docs_path(),
		module_page_file_name(&record.short_name)
	)
}

/// Remove the first line starting with a top-level heading (`# `).
///
/// Only that one line goes. It need not be the first line of the document,
/// and any later top-level headings stay.
pub fn strip_first_heading(readme: &str) -> String {
	let mut stripped = false;
	let lines: Vec<&str> = readme
		.split('\n')
		.filter(|line| {
			if !stripped && line.starts_with("# ") {
				stripped = true;
				return false;
			}
			true
		})
		.collect();

	lines.join("\n")
}

/// Truncate `description` to [`CATALOG_DESCRIPTION_LIMIT`] characters,
/// appending `...` when anything was cut.
pub fn truncate_description(description: &str) -> String {
	if description.chars().count() > CATALOG_DESCRIPTION_LIMIT {
		let head: String = description
			.chars()
			.take(CATALOG_DESCRIPTION_LIMIT)
			.collect();
		format!("{head}...")
	} else {
		description.to_string()
	}
}

/// Render the documentation page of one module.
pub fn render_module_page(
	record: &ModuleRecord,
	repository: &RepositoryConfig,
) -> CatalogResult<String> {
	let env = template_env()?;
	let template = env.get_template(MODULE_PAGE_TEMPLATE_NAME)?;
	let mut content = template.render(context! {
		title => module_title(&record.short_name),
		description => &record.description,
		entry_point => &record.entry_point,
		name => &record.name,
		display_name => record.category.display_name(),
		category => record.category.id(),
		repository_label => repository.module_label(&record.name),
		repository_url => repository.module_url(&record.name),
		git_ref => &repository.git_ref,
	})?;

	if !record.readme.is_empty() {
		content.push_str(&strip_first_heading(&record.readme));
	}

	Ok(content)
}

/// Render one table per non-empty category, linking to each module's page.
pub fn render_catalog(catalog: &ModuleCatalog) -> String {
	let mut content = String::new();

	for (category, records) in catalog.iter() {
		if records.is_empty() {
			continue;
		}

		content.push_str(&format!("\n### {}\n\n", category.display_name()));
		content.push_str(&format!("{}\n\n", category.description()));
		content.push_str("| Module | Description |\n");
		content.push_str("|--------|-------------|\n");

		for record in records {
			content.push_str(&format!(
				"| [{}]({}) | {} |\n",
				record.short_name,
				module_page_path(record),
				truncate_description(&record.description)
			));
		}

		content.push('\n');
	}

	content
}

/// Render the HTML card list of one category's modules.
pub fn render_module_list(records: &[ModuleRecord]) -> CatalogResult<String> {
	if records.is_empty() {
		return Ok(EMPTY_LIST_PLACEHOLDER.to_string());
	}

	let cards: Vec<ModuleCard<'_>> = records
		.iter()
		.map(|record| ModuleCard {
			href: module_page_file_name(&record.short_name),
			title: module_title(&record.short_name),
			description: &record.description,
			entry_point: &record.entry_point,
		})
		.collect();

	let env = template_env()?;
	let template = env.get_template(MODULE_LIST_TEMPLATE_NAME)?;
	Ok(template.render(context! { modules => cards })?)
}

/// Render the card list of `category` from `catalog`.
pub fn render_category_list(
	catalog: &ModuleCatalog,
	category: ModuleCategory,
) -> CatalogResult<String> {
	render_module_list(catalog.modules(category))
}
