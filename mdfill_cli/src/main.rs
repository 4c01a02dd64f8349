use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdfill_cli::Commands;
use mdfill_cli::MdfillCli;
use mdfill_cli::OutputFormat;
use mdfill_core::ExtractOptions;
use mdfill_core::Extraction;
use mdfill_core::MdfillConfig;
use mdfill_core::MdfillError;
use mdfill_core::MdfillResult;
use mdfill_core::Placeholders;
use mdfill_core::extract_outline_with_options;
use mdfill_core::fill_template;
use owo_colors::OwoColorize;
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

fn main() {
	let args = MdfillCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

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
		Some(Commands::Fill {
			markdown,
			template,
			output,
			dry_run,
		}) => run_fill(&args, markdown, template, output.as_deref(), *dry_run),
		Some(Commands::Extract { markdown, format }) => run_extract(&args, markdown, *format),
		None => {
			eprintln!("No subcommand specified. Run `mdfill --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<MdfillError>() {
			Ok(mdfill_err) => {
				let report: miette::Report = (*mdfill_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Send tracing output to stderr. `--verbose` shows the scan trace, otherwise
/// `RUST_LOG` decides and defaults to warnings only.
fn init_logging(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.with_target(false)
		.init();
}

fn resolve_root(args: &MdfillCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &MdfillCli) -> MdfillResult<MdfillConfig> {
	let root = resolve_root(args);
	let config = MdfillConfig::load_or_default(&root)?;

	match MdfillConfig::resolve_path(&root) {
		Some(path) => tracing::debug!(path = %path.display(), "resolved config"),
		None => tracing::debug!(root = %root.display(), "no config file found, using defaults"),
	}

	Ok(config)
}

fn read_text(path: &Path) -> MdfillResult<String> {
	std::fs::read_to_string(path).map_err(|e| {
		MdfillError::ReadInput {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

fn extract(
	args: &MdfillCli,
	config: &MdfillConfig,
	markdown: &Path,
) -> MdfillResult<Extraction> {
	let mut options = ExtractOptions::from(config);
	if args.strict {
		options.strict = true;
	}

	let content = read_text(markdown)?;
	let extraction = extract_outline_with_options(&content, &options)?;

	for diagnostic in &extraction.diagnostics {
		tracing::info!(
			line = diagnostic.line(),
			"outline issue in {}: {}",
			markdown.display(),
			diagnostic.message()
		);
	}

	Ok(extraction)
}

fn run_fill(
	args: &MdfillCli,
	markdown: &Path,
	template: &Path,
	output: Option<&Path>,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let extraction = extract(args, &config, markdown)?;
	let placeholders = Placeholders::from_outline(&extraction.map);

	let template_content = read_text(template)?;
	let result = fill_template(&template_content, &placeholders);

	for key in &result.unmatched {
		eprintln!(
			"{} placeholder `{{{key}}}` has no value in {}",
			colored!("warning:", yellow),
			markdown.display()
		);
	}

	let output_path = output.map_or_else(
		|| config.default_output_path(markdown, template),
		Path::to_path_buf,
	);

	if dry_run {
		println!(
			"Dry run: would write {} with {} placeholder(s) replaced",
			output_path.display(),
			result.replaced
		);
		print_diff(&template_content, &result.content);
		return Ok(());
	}

	std::fs::write(&output_path, &result.content).map_err(|e| {
		MdfillError::WriteOutput {
			path: output_path.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	println!(
		"{} {} placeholder(s) in {}",
		colored!("Filled", green),
		result.replaced,
		output_path.display()
	);

	Ok(())
}

fn run_extract(
	args: &MdfillCli,
	markdown: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let extraction = extract(args, &config, markdown)?;

	match format {
		OutputFormat::Text => {
			if extraction.map.is_empty() {
				println!("No placeholders found in {}", markdown.display());
				return Ok(());
			}

			for (key, value) in extraction.map.iter() {
				let value = value.replace('\n', "\n  ");
				println!("{}: {value}", colored!(key, bold));
			}
		}
		OutputFormat::Json => {
			let placeholders = Placeholders::from_outline(&extraction.map);
			println!("{}", placeholders.to_json_pretty()?);
		}
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
