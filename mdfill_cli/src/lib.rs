use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Fill document templates with values written as a markdown outline.",
	long_about = "mdfill reads a markdown outline and fills `{key}` placeholders in a template \
	              with its values.\n\nSection headings (`##`) set a key prefix, entry headings \
	              (`###`) start a multi-line value, and a `: value` line defines a one-line \
	              value labelled by the line above it.\n\nQuick start:\n  mdfill fill \
	              --markdown spec.md --template template.html\n  mdfill extract --markdown \
	              spec.md --format json"
)]
pub struct MdfillCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `mdfill.toml`. Defaults to the current
	/// directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output. Traces heading discovery, key sanitization,
	/// and the final placeholder map on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Fail on definition lines that would otherwise be skipped. Overrides
	/// `strict` from the config file.
	#[arg(long, global = true, default_value_t = false)]
	pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Fill a template with values extracted from a markdown outline.
	///
	/// Every `{key}` marker in the template whose key exists in the outline is
	/// replaced with the value's text. Emphasis delimiters are removed from
	/// the values. Unknown markers are left in place and reported.
	///
	/// When `--output` is omitted, the output is written next to the markdown
	/// file using the template's extension.
	Fill {
		/// Markdown outline that provides the values.
		#[arg(long, short)]
		markdown: PathBuf,

		/// Template containing `{key}` placeholders.
		#[arg(long, short)]
		template: PathBuf,

		/// Where to write the filled document.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// Show the changes as a diff without writing the output file.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Print the placeholder map extracted from a markdown outline.
	///
	/// Useful for checking which keys a template can reference.
	Extract {
		/// Markdown outline to read.
		#[arg(long, short)]
		markdown: PathBuf,

		/// Output format. Use `text` for `key: value` lines or `json` for a
		/// JSON object that also includes the guessed bold and italic styles.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable `key: value` lines.
	Text,
	/// JSON object keyed by placeholder.
	Json,
}
