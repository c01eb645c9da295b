use std::fmt;

use serde::Serialize;

/// Directory-name marker shared by every module category prefix. A base path
/// is only scanned when at least one child directory starts with it.
pub const MODULE_DIR_MARKER: &str = "amplifier-module-";

/// Placeholder replaced with the full module catalog.
pub const CATALOG_MARKER: &str = "<!-- MODULE_CATALOG -->";

/// The fixed set of module kinds, recognized by directory-name prefix.
///
/// Declaration order is significant: grouped output (the catalog, the scan
/// listing) always follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
	Provider,
	Tool,
	Hooks,
	Loop,
	Context,
}

impl ModuleCategory {
	pub const ALL: [ModuleCategory; 5] = [
		Self::Provider,
		Self::Tool,
		Self::Hooks,
		Self::Loop,
		Self::Context,
	];

	/// Identifier used in install snippets and list markers.
	pub fn id(self) -> &'static str {
		match self {
			Self::Provider => "provider",
			Self::Tool => "tool",
			Self::Hooks => "hooks",
			Self::Loop => "loop",
			Self::Context => "context",
		}
	}

	/// Directory-name prefix that places a module in this category.
	pub fn prefix(self) -> &'static str {
		match self {
			Self::Provider => "amplifier-module-provider-",
			Self::Tool => "amplifier-module-tool-",
			Self::Hooks => "amplifier-module-hooks-",
			Self::Loop => "amplifier-module-loop-",
			Self::Context => "amplifier-module-context-",
		}
	}

	/// Documentation sub-path holding the per-module pages of this category.
	pub fn docs_path(self) -> &'static str {
		match self {
			Self::Provider => "modules/providers",
			Self::Tool => "modules/tools",
			Self::Hooks => "modules/hooks",
			Self::Loop => "modules/orchestrators",
			Self::Context => "modules/contexts",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::Provider => "Providers",
			Self::Tool => "Tools",
			Self::Hooks => "Hooks",
			Self::Loop => "Orchestrators",
			Self::Context => "Contexts",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Self::Provider => "LLM backend integrations",
			Self::Tool => "Agent capabilities",
			Self::Hooks => "Observability and control",
			Self::Loop => "Execution loop strategies",
			Self::Context => "Memory management",
		}
	}

	/// Placeholder replaced with this category's card list, e.g.
	/// `<!-- MODULE_LIST_TOOL -->`.
	pub fn list_marker(self) -> String {
		format!("<!-- MODULE_LIST_{} -->", self.id().to_uppercase())
	}

	/// Strip this category's prefix from a directory name. Returns `None` when
	/// the name does not carry the prefix or nothing follows it.
	pub fn short_name_of(self, dir_name: &str) -> Option<&str> {
		dir_name
			.strip_prefix(self.prefix())
			.filter(|short_name| !short_name.is_empty())
	}

	/// The first category (in declaration order) claiming `dir_name`, together
	/// with the derived short name.
	pub fn classify(dir_name: &str) -> Option<(ModuleCategory, &str)> {
		Self::ALL.into_iter().find_map(|category| {
			category
				.short_name_of(dir_name)
				.map(|short_name| (category, short_name))
		})
	}
}

impl fmt::Display for ModuleCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}
