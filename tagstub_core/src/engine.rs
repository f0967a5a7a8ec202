use serde::Deserialize;
use serde::Serialize;

use crate::config::TagstubConfig;
use crate::extractor::extract;
use crate::identifier::variable_name;
use crate::resolver::resolve;
use crate::scanner::RawTag;
use crate::scanner::scan_tags;

/// One line of generator output for one scanned tag.
///
/// Failures are values: a tag that cannot be processed becomes a
/// [`Diagnostic`](Self::Diagnostic) line in the output stream instead of an
/// error returned to the caller, so one broken tag never suppresses its
/// neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratedLine {
	/// A successfully composed accessor declaration.
	Declaration(Declaration),
	/// A per-tag failure, rendered in place of the declaration.
	Diagnostic(TagDiagnostic),
}

/// The pieces of one `{type} {name} = Model.{accessor}("{key}");` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
	/// Declared type of the generated variable.
	pub target_type: String,
	/// Local variable name after lowering and renaming.
	pub variable_name: String,
	/// Method invoked on the model to fetch the element.
	pub accessor_method: String,
	/// Key passed to the accessor. Always the original tag name, even when
	/// the variable is named after a `Name` attribute, because the runtime
	/// lookup addresses the schema element by its tag name.
	pub element_key: String,
}

/// A per-tag failure annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDiagnostic {
	/// The element name, when one was recovered before the failure.
	pub element_name: Option<String>,
	/// Character offset of the tag's `<` in the source text.
	pub offset: usize,
	/// Description of what went wrong, for audit output.
	pub reason: String,
}

impl std::fmt::Display for GeneratedLine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Declaration(declaration) => write!(f, "{declaration}"),
			Self::Diagnostic(diagnostic) => write!(f, "{diagnostic}"),
		}
	}
}

impl std::fmt::Display for Declaration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} {} = Model.{}(\"{}\");",
			self.target_type, self.variable_name, self.accessor_method, self.element_key
		)
	}
}

impl std::fmt::Display for TagDiagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.element_name.as_deref() {
			Some(name) if !name.is_empty() => write!(f, "Error on Element: {name}"),
			_ => write!(f, "Error on Element #: {}", self.offset),
		}
	}
}

/// Run the full pipeline over `text`, producing one line per scanned tag in
/// document order.
pub fn generate_lines(text: &str, config: &TagstubConfig) -> Vec<GeneratedLine> {
	let lines: Vec<GeneratedLine> = scan_tags(text)
		.map(|tag| process_tag(&tag, config))
		.collect();
	tracing::debug!(lines = lines.len(), "generated accessor lines");
	lines
}

/// Process a single scanned tag in isolation.
fn process_tag(tag: &RawTag<'_>, config: &TagstubConfig) -> GeneratedLine {
	let descriptor = match extract(tag) {
		Ok(descriptor) => descriptor,
		Err(error) => {
			tracing::trace!(offset = tag.offset, "tag failed extraction");
			return GeneratedLine::Diagnostic(TagDiagnostic {
				element_name: None,
				offset: tag.offset,
				reason: error.to_string(),
			});
		}
	};

	let resolution = resolve(
		&descriptor.element_name,
		descriptor.declared_type.as_deref(),
		config,
	);
	let variable = variable_name(
		&descriptor.element_name,
		descriptor.declared_name.as_deref(),
		resolution.generic,
		config,
	);

	GeneratedLine::Declaration(Declaration {
		target_type: resolution.target_type,
		variable_name: variable,
		accessor_method: resolution.accessor_method,
		element_key: descriptor.element_name,
	})
}

/// Render a batch of generated lines joined with newlines, without a
/// trailing newline. An empty batch renders as the empty string.
pub fn render_lines(lines: &[GeneratedLine]) -> String {
	lines
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Transform a schema snippet using an explicit config.
pub fn transform_with_config(text: &str, config: &TagstubConfig) -> String {
	render_lines(&generate_lines(text, config))
}

/// Transform a schema snippet into C# accessor declarations, one line per
/// opening tag.
pub fn transform(text: &str) -> String {
	transform_with_config(text, &TagstubConfig::default())
}
