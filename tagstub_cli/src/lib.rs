use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Turn CMS schema tags into C# element accessor stubs.",
	long_about = "tagstub scans an XML-like CMS schema snippet for top-level opening tags and \
	              prints one C# element accessor declaration per tag. Tags it cannot read become \
	              `Error on Element` lines in the same output, so one broken tag never hides the \
	              rest.\n\nQuick start:\n  pbpaste | tagstub | pbcopy    Transform the clipboard \
	              in place\n  tagstub generate -i schema.xml\n  tagstub list --format json\n  \
	              tagstub init                  Create a sample tagstub.toml"
)]
pub struct TagstubCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for a `tagstub.toml` config file.
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
	/// Generate accessor declarations from schema tags. [default]
	///
	/// Reads a schema snippet from stdin (or `--input`), scans it for
	/// top-level opening tags, and writes one C# declaration per tag to
	/// stdout (or `--output`). Unreadable tags become `Error on Element`
	/// lines at their position in the output and never fail the process.
	///
	/// Running `tagstub` with no subcommand behaves exactly like bare
	/// `generate`, so the binary works as a plain pipe filter.
	Generate {
		/// Read the schema snippet from a file instead of stdin.
		#[arg(long, short)]
		input: Option<PathBuf>,

		/// Write the generated lines to a file instead of stdout.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Show how each tag in the input resolves.
	///
	/// Prints a per-tag audit: the element name, the resolved target type
	/// and accessor method, the derived variable name, and any diagnostics
	/// with their character offsets. Useful for checking `tagstub.toml`
	/// bindings before generating.
	List {
		/// Read the schema snippet from a file instead of stdin.
		#[arg(long, short)]
		input: Option<PathBuf>,

		/// Output format for list results. Use `text` for human-readable
		/// output or `json` for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Create a sample `tagstub.toml` in the project root.
	///
	/// The sample documents the `[rename]` and `[elements]` tables with
	/// commented examples. If a config file already exists, this command is
	/// a no-op and exits successfully.
	Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each entry carries the
	/// structured line fields plus the rendered line text.
	Json,
}
