use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TagstubError;
use crate::TagstubResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["tagstub.toml", ".tagstub.toml", ".config/tagstub.toml"];

/// A custom element binding for an `[elements]` entry.
///
/// Elements bound this way behave like the built-in generic containers: the
/// generated variable is named after the tag's `Name` attribute while the
/// accessor call keeps the tag name as its key.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct ElementBinding {
	/// Declared type of the generated variable.
	pub target_type: String,
	/// Method invoked on the model to fetch the element.
	pub accessor: String,
}

/// Configuration loaded from a `tagstub.toml` file.
///
/// ```toml
/// [rename]
/// class = "cssClass"
///
/// [elements.Component]
/// target_type = "ICMSComponent"
/// accessor = "GetComponent"
/// ```
///
/// Both tables are optional. An empty config reproduces the built-in
/// behavior exactly.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
pub struct TagstubConfig {
	/// Identifier rewrites applied after lowercasing, keyed by the lowered
	/// identifier. Entries shadow the built-in reserved-name table.
	#[serde(default)]
	pub rename: BTreeMap<String, String>,
	/// Additional generic element bindings, keyed by element name. Entries
	/// shadow the built-in generic set.
	#[serde(default)]
	pub elements: BTreeMap<String, ElementBinding>,
}

impl TagstubConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> TagstubResult<Option<TagstubConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: TagstubConfig =
			toml::from_str(&content).map_err(|e| TagstubError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}
