use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tagstub_cli::Commands;
use tagstub_cli::OutputFormat;
use tagstub_cli::TagstubCli;
use tagstub_core::GeneratedLine;
use tagstub_core::TagstubConfig;
use tagstub_core::TagstubError;
use tagstub_core::generate_lines;
use tagstub_core::render_lines;

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
	let args = TagstubCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

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

	init_tracing(args.verbose);

	let result = match &args.command {
		Some(Commands::Generate { input, output }) => {
			run_generate(&args, input.as_deref(), output.as_deref())
		}
		Some(Commands::List { input, format }) => run_list(&args, input.as_deref(), *format),
		Some(Commands::Init) => run_init(&args),
		None => run_generate(&args, None, None),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<TagstubError>() {
			Ok(tagstub_err) => {
				let report: miette::Report = (*tagstub_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	let directive = if verbose {
		"tagstub_core=debug"
	} else {
		"tagstub_core=warn"
	};
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn resolve_root(args: &TagstubCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &TagstubCli) -> Result<TagstubConfig, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = TagstubConfig::load(&root)?.unwrap_or_default();
	Ok(config)
}

/// Read the schema snippet from a file, or from stdin when no file is given.
fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
	match input {
		Some(path) => Ok(std::fs::read_to_string(path)?),
		None => {
			let mut buffer = String::new();
			std::io::stdin().read_to_string(&mut buffer)?;
			Ok(buffer)
		}
	}
}

fn run_generate(
	args: &TagstubCli,
	input: Option<&Path>,
	output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let text = read_input(input)?;

	let lines = generate_lines(&text, &config);
	if args.verbose {
		let diagnostics = lines
			.iter()
			.filter(|line| matches!(line, GeneratedLine::Diagnostic(_)))
			.count();
		eprintln!(
			"Scanned {} tag(s): {} declaration(s), {diagnostics} diagnostic(s).",
			lines.len(),
			lines.len() - diagnostics,
		);
	}

	let rendered = render_lines(&lines);
	match output {
		Some(path) => {
			let mut content = rendered;
			if !content.is_empty() {
				content.push('\n');
			}
			std::fs::write(path, content)?;
			if args.verbose {
				eprintln!("Wrote {}", path.display());
			}
		}
		None => {
			if !rendered.is_empty() {
				println!("{rendered}");
			}
		}
	}

	Ok(())
}

fn run_list(
	args: &TagstubCli,
	input: Option<&Path>,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let text = read_input(input)?;
	let lines = generate_lines(&text, &config);

	let diagnostics = lines
		.iter()
		.filter(|line| matches!(line, GeneratedLine::Diagnostic(_)))
		.count();
	let declarations = lines.len() - diagnostics;

	match format {
		OutputFormat::Json => {
			let mut entries = Vec::new();
			for line in &lines {
				let mut entry = serde_json::to_value(line)?;
				entry["line"] = serde_json::Value::String(line.to_string());
				entries.push(entry);
			}
			let output = serde_json::json!({
				"tags": entries,
				"declarations": declarations,
				"diagnostics": diagnostics,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if lines.is_empty() {
				println!("No opening tags found.");
				return Ok(());
			}

			println!("{}", colored!("Tags:", bold));
			for line in &lines {
				match line {
					GeneratedLine::Declaration(declaration) => {
						println!(
							"  {} -> {} {} via Model.{}",
							declaration.element_key,
							declaration.target_type,
							declaration.variable_name,
							declaration.accessor_method
						);
					}
					GeneratedLine::Diagnostic(diagnostic) => {
						println!(
							"  {} offset {}: {}",
							colored!("broken", yellow),
							diagnostic.offset,
							diagnostic.reason
						);
					}
				}
			}

			println!("\n{declarations} declaration(s), {diagnostics} diagnostic(s)");
		}
	}

	Ok(())
}

fn run_init(args: &TagstubCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("tagstub.toml");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
		return Ok(());
	}

	let sample_config = concat!(
		"# tagstub configuration\n",
		"\n",
		"# Rewrite generated variable names. Keys are matched against the\n",
		"# identifier after its first character is lowercased.\n",
		"# [rename]\n",
		"# class = \"cssClass\"\n",
		"\n",
		"# Bind additional generic elements. Bound elements take their variable\n",
		"# name from the tag's Name attribute.\n",
		"# [elements.Component]\n",
		"# target_type = \"ICMSComponent\"\n",
		"# accessor = \"GetComponent\"\n",
	);

	std::fs::write(&config_path, sample_config)?;
	println!("Created tagstub.toml");
	println!();
	println!("Next steps:");
	println!("  1. Uncomment and edit the tables you need");
	println!("  2. Pipe a schema snippet through `tagstub` to generate stubs");

	Ok(())
}
