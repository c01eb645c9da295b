use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use modcat_cli::Commands;
use modcat_cli::ModcatCli;
use modcat_cli::OutputFormat;
use modcat_core::CatalogConfig;
use modcat_core::CatalogError;
use modcat_core::ModuleCatalog;
use modcat_core::ModuleCategory;
use modcat_core::hooks::BuildContext;
use modcat_core::hooks::DiscoveryMode;
use modcat_core::hooks::on_config;
use modcat_core::hooks::on_files;
use modcat_core::hooks::on_page_markdown;
use modcat_core::pages::collect_pages;
use modcat_core::render::module_page_path;
use modcat_core::render::render_module_page;
use owo_colors::OwoColorize;
use serde::Serialize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# modcat configuration\n# Every key is optional; the values below are \
                             the defaults.\n\n# Documentation directory. Modules are looked for \
                             two levels above it.\n# docs_dir = \"docs\"\n\n# Scan this directory \
                             for modules instead.\n# base_path = \"../modules\"\n\n# Manifest \
                             parser: \"toml\" or \"none\".\n# manifest = \"toml\"\n\n# \
                             [repository]\n# url = \"https://github.com/microsoft\"\n# git_ref = \
                             \"main\"\n\n# Pages skipped by `modcat render` (gitignore \
                             syntax).\n# [exclude]\n# patterns = [\"drafts/\"]\n";

fn main() {
	let args = ModcatCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Scan { format }) => run_scan(&args, *format),
		Some(Commands::Page { name }) => run_page(&args, name),
		Some(Commands::Render { out, dry_run, diff }) => {
			run_render(&args, out.as_deref(), *dry_run, *diff)
		}
		Some(Commands::Generate { dry_run }) => run_generate(&args, *dry_run),
		None => {
			eprintln!("No subcommand specified. Run `modcat --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<CatalogError>() {
			Ok(catalog_err) => {
				let report: miette::Report = (*catalog_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over the `--verbose` default.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn resolve_root(args: &ModcatCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load the config and run the configuration stage of a build.
fn configure(args: &ModcatCli) -> Result<(CatalogConfig, BuildContext), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = CatalogConfig::load_or_default(&root)?;
	let ctx = on_config(&config)?;

	// Stdout carries command output only; diagnostics go to stderr.
	match &ctx.mode {
		DiscoveryMode::Local(base_path) => {
			tracing::debug!(
				base_path = %base_path.display(),
				modules = ctx.modules.module_count(),
				"scanned module base path"
			);
		}
		_ => tracing::debug!("no module directories found (standalone mode)"),
	}

	Ok((config, ctx))
}

fn run_init(args: &ModcatCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = CatalogConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("modcat.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Add placeholders to your docs pages:");
	println!("     <!-- MODULE_CATALOG -->");
	println!("     <!-- MODULE_LIST_TOOL -->");
	println!("  2. Run `modcat scan` to check which modules are found");
	println!("  3. Run `modcat render` to produce the rendered pages");

	Ok(())
}

/// JSON shape of `modcat scan --format json`. Categories keep declaration
/// order.
#[derive(Serialize)]
struct ScanReport<'a> {
	standalone: bool,
	base_path: Option<&'a Path>,
	modules: &'a ModuleCatalog,
}

fn run_scan(args: &ModcatCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let (_, ctx) = configure(args)?;

	match format {
		OutputFormat::Json => {
			let base_path = match &ctx.mode {
				DiscoveryMode::Local(path) => Some(path.as_path()),
				_ => None,
			};
			let report = ScanReport {
				standalone: ctx.is_standalone(),
				base_path,
				modules: &ctx.modules,
			};
			println!("{}", serde_json::to_string(&report)?);
		}
		OutputFormat::Text => {
			if ctx.modules.is_empty() {
				println!("No modules found.");
				return Ok(());
			}

			for category in ModuleCategory::ALL {
				let records = ctx.modules.modules(category);
				if records.is_empty() {
					continue;
				}

				let heading = format!("{} ({})", category.display_name(), records.len());
				println!("{}", colored!(heading, bold));
				for record in records {
					println!(
						"  {:<24} {:<24} {}",
						record.short_name, record.entry_point, record.version
					);
				}
			}
		}
	}

	Ok(())
}

fn run_page(args: &ModcatCli, name: &str) -> Result<(), Box<dyn std::error::Error>> {
	let (_, ctx) = configure(args)?;
	let record = ctx
		.modules
		.find(name)
		.ok_or_else(|| CatalogError::UnknownModule(name.to_string()))?;

	print!("{}", render_module_page(record, &ctx.repository)?);

	Ok(())
}

fn run_render(
	args: &ModcatCli,
	out: Option<&Path>,
	dry_run: bool,
	show_diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let (config, ctx) = configure(args)?;
	let root = resolve_root(args);
	let out_dir = out.map_or_else(|| root.join("site"), |out| root.join(out));

	let pages = collect_pages(&config.docs_dir, &config.exclude.patterns)?;
	let pages = on_files(pages, &ctx);

	let mut changed = 0;
	for page in &pages {
		let content = std::fs::read_to_string(&page.path)?;
		let rendered = on_page_markdown(&content, &ctx)?;
		let is_changed = rendered != content;
		if is_changed {
			changed += 1;
		}

		if dry_run {
			if is_changed {
				println!(
					"{} {}",
					colored!("would update", yellow),
					page.relative_path.display()
				);
				if show_diff {
					print_diff(&content, &rendered);
				}
			}
			continue;
		}

		let target = out_dir.join(&page.relative_path);
		if let Some(parent) = target.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&target, rendered)?;
	}

	if dry_run {
		if changed == 0 {
			println!("No pages contain catalog placeholders.");
		}
	} else {
		println!(
			"Rendered {} page(s) into {} ({changed} with catalog content)",
			pages.len(),
			make_relative(&out_dir, &root)
		);
	}

	Ok(())
}

fn run_generate(args: &ModcatCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let (config, ctx) = configure(args)?;
	let root = resolve_root(args);

	if ctx.modules.is_empty() {
		println!("No modules found; nothing to generate.");
		return Ok(());
	}

	for record in ctx.modules.values().flatten() {
		let target = config.docs_dir.join(module_page_path(record));
		let display = make_relative(&target, &root);

		if dry_run {
			println!("{} {display}", colored!("would write", yellow));
			continue;
		}

		let content = render_module_page(record, &ctx.repository)?;
		if let Some(parent) = target.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&target, content)?;
		println!("{} {display}", colored!("Wrote", green));
	}

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
