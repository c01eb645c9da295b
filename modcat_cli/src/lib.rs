use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate module catalog content for a documentation site.",
	long_about = "modcat scans a directory of module repositories \
	              (amplifier-module-<category>-<name>), reads each module's pyproject.toml and \
	              README.md, and fills catalog placeholders in markdown pages.\n\nQuick start:\n  \
	              modcat init      Create a modcat.toml\n  modcat scan      List discovered \
	              modules\n  modcat render    Render docs pages with catalog content\n  modcat \
	              generate  Write one page per module into the docs directory"
)]
pub struct ModcatCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `modcat.toml` in the project root.
	///
	/// If a config file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Discover modules and list them by category.
	///
	/// Runs the same configuration step as a documentation build, so the
	/// output shows exactly which modules the catalog will contain.
	Scan {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the generated documentation page of one module.
	Page {
		/// Canonical directory name or short name of the module.
		name: String,
	},
	/// Render every markdown page of the docs directory with catalog
	/// placeholders filled in.
	///
	/// Pages are written under the output directory, mirroring their paths
	/// relative to the docs directory. Pages without placeholders are copied
	/// unchanged.
	Render {
		/// Output directory. Defaults to `site` under the project root.
		#[arg(long, short)]
		out: Option<PathBuf>,

		/// Report which pages contain placeholders without writing anything.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// With `--dry-run`, show a diff of each changed page.
		#[arg(long, default_value_t = false, requires = "dry_run")]
		diff: bool,
	},
	/// Write one page per discovered module into the docs directory, at the
	/// paths the catalog links to.
	Generate {
		/// List the pages that would be written without writing them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
