use crate::config::TagstubConfig;

/// Built-in rewrites for element names that collide with C# keywords. Checked
/// after lowercasing, so the keys are the already-lowered identifiers.
pub const RESERVED_RENAMES: &[(&str, &str)] = &[("abstract", "abstractText")];

/// Derive the C# variable name for one element.
///
/// Generic elements take their identifier from the `Name` attribute (empty
/// when the attribute is absent); everything else uses the element name
/// itself. The identifier is then lowered with [`lower_first`] and passed
/// through the rename table. An empty identifier survives each step
/// unchanged, so a generic tag without a `Name` attribute produces an empty
/// variable name rather than an error.
pub fn variable_name(
	element_name: &str,
	declared_name: Option<&str>,
	generic: bool,
	config: &TagstubConfig,
) -> String {
	let source = if generic {
		declared_name.unwrap_or_default()
	} else {
		element_name
	};
	let lowered = lower_first(source);
	apply_renames(lowered, config)
}

/// Lowercase the first character of an identifier, leaving the rest alone.
///
/// Later occurrences of the same character are untouched, so `TitleText`
/// becomes `titleText`, not `titletext`.
pub fn lower_first(ident: &str) -> String {
	let mut chars = ident.chars();
	match chars.next() {
		Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
		_ => ident.to_string(),
	}
}

/// Substitute a reserved identifier with its safe rewrite. The `[rename]`
/// table of the config wins over the built-ins.
fn apply_renames(ident: String, config: &TagstubConfig) -> String {
	if let Some(safe) = config.rename.get(&ident) {
		return safe.clone();
	}
	for (reserved, safe) in RESERVED_RENAMES {
		if ident == *reserved {
			return (*safe).to_string();
		}
	}
	ident
}
