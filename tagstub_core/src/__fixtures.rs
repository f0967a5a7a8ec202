use std::collections::BTreeMap;

use crate::config::ElementBinding;
use crate::config::TagstubConfig;
use crate::scanner::RawTag;

/// A snippet shaped like a real schema export: generic containers, plain
/// fields, a keyword-colliding name, and one broken tag in the middle.
pub const SCHEMA_EXPORT: &str = r#"<Page type="string" Name="HomeLink">
<Title type="string">
<abstract type="string">
<Navigation type="container" Name="MainNav">
<Broken>
<TaxonomyNavigation type="container" Name="SectionNav">"#;

/// Build a `RawTag` directly, bypassing the scanner.
pub fn raw_tag(text: &str, offset: usize) -> RawTag<'_> {
	RawTag { text, offset }
}

/// A config with a single `[rename]` entry.
pub fn rename_config(from: &str, to: &str) -> TagstubConfig {
	TagstubConfig {
		rename: BTreeMap::from([(from.to_string(), to.to_string())]),
		..TagstubConfig::default()
	}
}

/// A config binding `Component` as a custom generic element.
pub fn component_config() -> TagstubConfig {
	TagstubConfig {
		elements: BTreeMap::from([(
			"Component".to_string(),
			ElementBinding {
				target_type: "ICMSComponent".to_string(),
				accessor: "GetComponent".to_string(),
			},
		)]),
		..TagstubConfig::default()
	}
}
